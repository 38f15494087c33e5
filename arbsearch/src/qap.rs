//! Exact quadratic assignment
//!
//! Given a flow matrix `F` and a distance matrix `D` of expressions, the cost
//! of a permutation `p` is `Σ_i Σ_j F[i][j] * D[p[i]][p[j]]`. Products are
//! distributed and accumulated by concatenation, so the winning cost keeps one
//! term per contributing pair of entries.
use std::{cmp::Ordering, path::Path};

use arbnum::{config::ArithmeticConfig, expr::RationalExpression};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    config::SearchConfig,
    permutation::{Permutation, Permutations, factorial},
    utils::{
        error::{SearchError, SearchResult},
        parse_toml, read_toml,
    },
};

pub type Matrix = Vec<Vec<RationalExpression>>;

/// How two costs are ranked.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostOrdering {
    /// Exact rational comparison of the summed values.
    #[default]
    Exact,
    /// Comparison of `f64` sums; nearby costs may tie.
    Approximate,
}

impl CostOrdering {
    /// Creates a [`CostOrdering`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        CostOrdering::iter().find(|ordering| ordering.to_str() == s)
    }

    /// Returns the string representation of the [`CostOrdering`].
    pub fn to_str(&self) -> &'static str {
        match self {
            CostOrdering::Exact => "exact",
            CostOrdering::Approximate => "approximate",
        }
    }

    pub fn compare(&self, lhs: &RationalExpression, rhs: &RationalExpression) -> Ordering {
        match self {
            CostOrdering::Exact => lhs.value_cmp(rhs),
            CostOrdering::Approximate => lhs.approx_cmp(rhs),
        }
    }
}

#[derive(Deserialize)]
struct QapMatrices {
    flow: Matrix,
    distance: Matrix,
}

impl TryFrom<QapMatrices> for QapInstance {
    type Error = SearchError;

    fn try_from(matrices: QapMatrices) -> SearchResult<Self> {
        QapInstance::new(matrices.flow, matrices.distance)
    }
}

/// A square quadratic assignment instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "QapMatrices")]
pub struct QapInstance {
    flow: Matrix,
    distance: Matrix,
}

fn check_square(what: &'static str, matrix: &Matrix, size: usize) -> SearchResult<()> {
    if matrix.len() != size {
        return Err(SearchError::DimensionMismatch {
            what,
            expected: size,
            found: matrix.len(),
        });
    }

    match matrix.iter().find(|row| row.len() != size) {
        Some(row) => Err(SearchError::DimensionMismatch {
            what,
            expected: size,
            found: row.len(),
        }),
        None => Ok(()),
    }
}

impl QapInstance {
    /// Creates an instance, checking that both matrices are `n x n`.
    pub fn new(flow: Matrix, distance: Matrix) -> SearchResult<Self> {
        let size = flow.len();
        check_square("flow matrix", &flow, size)?;
        check_square("distance matrix", &distance, size)?;
        Ok(Self { flow, distance })
    }

    /// Builds an instance whose entries are the single terms `1*(num/den)`.
    pub fn from_fractions<const N: usize>(
        flow_num: [[i64; N]; N],
        flow_den: [[i64; N]; N],
        distance_num: [[i64; N]; N],
        distance_den: [[i64; N]; N],
    ) -> SearchResult<Self> {
        let build = |num: &[[i64; N]; N], den: &[[i64; N]; N]| -> SearchResult<Matrix> {
            let mut matrix = Matrix::with_capacity(N);
            for (num_row, den_row) in num.iter().zip(den) {
                let row = num_row
                    .iter()
                    .zip(den_row)
                    .map(|(&a, &b)| RationalExpression::from_term(1, a, b))
                    .collect::<Result<Vec<_>, _>>()?;
                matrix.push(row);
            }
            Ok(matrix)
        };

        Self::new(
            build(&flow_num, &flow_den)?,
            build(&distance_num, &distance_den)?,
        )
    }

    pub fn from_toml_str(source: &str) -> SearchResult<Self> {
        parse_toml(source, "<inline>")
    }

    pub fn from_path(path: impl AsRef<Path>) -> SearchResult<Self> {
        read_toml(path)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.flow.len()
    }

    #[inline]
    pub fn flow(&self) -> &Matrix {
        &self.flow
    }

    #[inline]
    pub fn distance(&self) -> &Matrix {
        &self.distance
    }

    /// Cost of assigning facility `i` to location `perm[i]`.
    pub fn cost(&self, perm: &[usize], arithmetic: &ArithmeticConfig) -> SearchResult<RationalExpression> {
        let size = self.size();
        if perm.len() != size {
            return Err(SearchError::DimensionMismatch {
                what: "permutation",
                expected: size,
                found: perm.len(),
            });
        }
        if let Some(&out_of_range) = perm.iter().find(|&&p| p >= size) {
            return Err(SearchError::DimensionMismatch {
                what: "permutation entry",
                expected: size,
                found: out_of_range,
            });
        }

        let mut total = arithmetic.new_expression()?;
        for i in 0..size {
            for j in 0..size {
                let product =
                    self.flow[i][j].multiply(&self.distance[perm[i]][perm[j]], arithmetic.overflow)?;
                total = total + product;
            }
        }
        Ok(total)
    }

    /// Evaluates every permutation and returns the cheapest one.
    ///
    /// Permutations are visited in lexicographic order and a candidate
    /// replaces the incumbent only when strictly cheaper, so ties keep the
    /// lexicographically first permutation.
    pub fn solve(&self, config: &SearchConfig) -> SearchResult<QapSolution> {
        let size = self.size();
        match factorial(size) {
            Some(count) => info!(
                "Solving {}x{} assignment over {} permutations ({} ordering)",
                size,
                size,
                count,
                config.ordering.to_str()
            ),
            None => info!("Solving {}x{} assignment", size, size),
        }

        let mut permutations = Permutations::new(size);
        let first = permutations.next().unwrap_or_default();
        let mut best = QapSolution {
            cost: self.cost(&first, &config.arithmetic)?,
            permutation: first,
            evaluated: 1,
        };

        for perm in permutations {
            let cost = self.cost(&perm, &config.arithmetic)?;
            best.evaluated += 1;

            if config.ordering.compare(&cost, &best.cost) == Ordering::Less {
                debug!("Improved assignment {:?} with cost `{}`", perm.as_slice(), cost);
                best.permutation = perm;
                best.cost = cost;
            }
        }

        info!(
            "Best assignment {:?} after {} evaluations, cost value {}",
            best.permutation.as_slice(),
            best.evaluated,
            best.cost.exact_value()
        );
        Ok(best)
    }
}

/// The cheapest assignment found by [`QapInstance::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QapSolution {
    pub permutation: Permutation,
    /// Symbolic cost, one term per `(i, j)` product in row-major order.
    pub cost: RationalExpression,
    /// Number of permutations evaluated.
    pub evaluated: u64,
}
