//! Brute-force subset search
//!
//! Enumerates every non-empty subset of a list of weight expressions and
//! reports those whose sum matches a target. Subset-sum and weighted feature
//! selection are both instances of this search.
use std::path::Path;

use arbnum::{config::ArithmeticConfig, expr::RationalExpression, value::ExactValue};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    config::SearchConfig,
    utils::{
        error::{SearchError, SearchResult},
        parse_toml, read_toml,
    },
};

/// Subsets are encoded as `u64` bit masks.
pub const MAX_SUBSET_ITEMS: usize = 63;

/// How a candidate sum is compared against the target.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Same terms in the same order. A sum of several terms never matches a
    /// single-term target, whatever their values.
    Structural,
    /// Same exact rational value.
    #[default]
    Value,
}

impl MatchMode {
    /// Creates a [`MatchMode`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        MatchMode::iter().find(|mode| mode.to_str() == s)
    }

    /// Returns the string representation of the [`MatchMode`].
    pub fn to_str(&self) -> &'static str {
        match self {
            MatchMode::Structural => "structural",
            MatchMode::Value => "value",
        }
    }
}

/// Weights and target of a subset search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetProblem {
    pub items: Vec<RationalExpression>,
    pub target: RationalExpression,
}

impl SubsetProblem {
    pub fn new(items: Vec<RationalExpression>, target: RationalExpression) -> Self {
        Self { items, target }
    }

    pub fn from_toml_str(source: &str) -> SearchResult<Self> {
        parse_toml(source, "<inline>")
    }

    pub fn from_path(path: impl AsRef<Path>) -> SearchResult<Self> {
        read_toml(path)
    }
}

/// A subset whose sum matched the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetMatch {
    /// Bit `i` is set when item `i` is selected.
    pub mask: u64,
    /// Selected item indices, ascending.
    pub indices: Vec<usize>,
    /// Concatenation of the selected items in index order.
    pub sum: RationalExpression,
}

enum Target {
    Structural(RationalExpression),
    Value(ExactValue),
}

impl Target {
    fn matches(&self, candidate: &RationalExpression) -> bool {
        match self {
            Target::Structural(target) => candidate == target,
            Target::Value(target) => &candidate.exact_value() == target,
        }
    }
}

pub struct SubsetSearch<'a> {
    problem: &'a SubsetProblem,
    mode: MatchMode,
    arithmetic: ArithmeticConfig,
}

impl<'a> SubsetSearch<'a> {
    pub fn new(problem: &'a SubsetProblem, mode: MatchMode) -> SearchResult<Self> {
        if problem.items.len() > MAX_SUBSET_ITEMS {
            return Err(SearchError::TooManyItems {
                count: problem.items.len(),
                max: MAX_SUBSET_ITEMS,
            });
        }

        Ok(Self {
            problem,
            mode,
            arithmetic: ArithmeticConfig::default(),
        })
    }

    pub fn with_config(problem: &'a SubsetProblem, config: &SearchConfig) -> SearchResult<Self> {
        let mut search = Self::new(problem, config.matching)?;
        search.arithmetic = config.arithmetic;
        Ok(search)
    }

    #[inline]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Number of non-empty subsets, `2^n - 1`.
    #[inline]
    pub fn subset_count(&self) -> u64 {
        (1u64 << self.problem.items.len()) - 1
    }

    /// Builds the sum of the subset encoded by `mask`, concatenating the
    /// selected items in index order.
    pub fn subset_sum(&self, mask: u64) -> SearchResult<RationalExpression> {
        let mut sum = self.arithmetic.new_expression()?;
        for (i, item) in self.problem.items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                sum = sum + item.clone();
            }
        }
        Ok(sum)
    }

    /// Visits every matching subset in increasing mask order and returns how
    /// many matched.
    pub fn for_each_match(&self, mut visit: impl FnMut(SubsetMatch)) -> SearchResult<usize> {
        let n = self.problem.items.len();
        info!(
            "Searching {} subsets of {} items for target `{}` ({} matching)",
            self.subset_count(),
            n,
            self.problem.target,
            self.mode.to_str()
        );

        let target = match self.mode {
            MatchMode::Structural => Target::Structural(self.problem.target.clone()),
            MatchMode::Value => Target::Value(self.problem.target.exact_value()),
        };

        let mut found = 0;
        for mask in 1..(1u64 << n) {
            let sum = self.subset_sum(mask)?;
            if !target.matches(&sum) {
                continue;
            }

            let indices = (0..n).filter(|&i| mask & (1 << i) != 0).collect::<Vec<_>>();
            debug!("Subset {:?} matches target with sum `{}`", indices, sum);
            found += 1;
            visit(SubsetMatch { mask, indices, sum });
        }

        info!("Subset search finished with {} match(es)", found);
        Ok(found)
    }

    /// Collects every matching subset in increasing mask order.
    pub fn solutions(&self) -> SearchResult<Vec<SubsetMatch>> {
        let mut matches = Vec::new();
        self.for_each_match(|m| matches.push(m))?;
        Ok(matches)
    }
}
