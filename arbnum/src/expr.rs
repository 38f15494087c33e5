//! Term-list expressions
//!
//! [`RationalExpression`] owns an ordered list of [`Term`]s and stands for
//! their sum. The list itself is the artifact of interest: addition
//! concatenates, multiplication distributes, and neither ever reduces or
//! reorders the terms of its operands.
use std::ops::Add;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::OverflowPolicy,
    term::Term,
    utils::{ArbResult, Error},
};

/// An ordered sequence of weighted fraction terms, valued as their sum.
///
/// Equality (`==`) is structural: two expressions are equal when they hold the
/// same terms in the same order. `x + y` and `y + x` therefore compare unequal
/// whenever both sides are non-empty, although their values agree. Use
/// [`RationalExpression::value_eq`] to compare values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Term>", into = "Vec<Term>"))]
pub struct RationalExpression {
    terms: Vec<Term>,
}

impl RationalExpression {
    /// Number of term slots reserved by [`RationalExpression::new`].
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Creates an empty expression.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty expression with room for `capacity` terms.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty expression with room for `capacity` terms, failing
    /// with [`Error::AllocationFailure`] instead of aborting when the storage
    /// cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> ArbResult<Self> {
        let mut expr = Self { terms: Vec::new() };
        expr.try_reserve(capacity)?;
        Ok(expr)
    }

    /// Creates an expression holding the single term `c*(a/b)`.
    pub fn from_term(coefficient: i64, numerator: i64, denominator: i64) -> ArbResult<Self> {
        let mut expr = Self::new();
        expr.push_term(coefficient, numerator, denominator)?;
        Ok(expr)
    }

    /// Appends the term `c*(a/b)` at the end of the expression.
    ///
    /// A zero denominator is rejected with [`Error::InvalidDenominator`] and
    /// reported on the log; the expression is left unchanged in that case, as
    /// it is when storage cannot be grown.
    pub fn push_term(&mut self, coefficient: i64, numerator: i64, denominator: i64) -> ArbResult<()> {
        let term = Term::new(coefficient, numerator, denominator).inspect_err(|err| warn!("{}", err))?;
        self.push(term)
    }

    /// Appends an already validated term.
    pub fn push(&mut self, term: Term) -> ArbResult<()> {
        self.try_reserve(1)?;
        self.terms.push(term);
        Ok(())
    }

    fn try_reserve(&mut self, additional: usize) -> ArbResult<()> {
        // `Vec` grows geometrically, which keeps appends amortized O(1).
        self.terms
            .try_reserve(additional)
            .map_err(|_| Error::AllocationFailure {
                requested: additional,
                length: self.terms.len(),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.terms.capacity()
    }

    /// Returns the terms in insertion order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns a new expression holding the terms of `self` followed by the
    /// terms of `rhs`. Its value is the sum of both values.
    pub fn concat(&self, rhs: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.len() + rhs.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&rhs.terms);
        Self { terms }
    }

    /// Returns the distributed product of `self` and `rhs`.
    ///
    /// The result holds one term per pair, in row-major order: for each term
    /// of `self`, for each term of `rhs`. Its length is
    /// `self.len() * rhs.len()`. Under [`OverflowPolicy::Wrap`], a pair whose
    /// denominator wraps to zero contributes no term.
    pub fn multiply(&self, rhs: &Self, policy: OverflowPolicy) -> ArbResult<Self> {
        let count = self
            .len()
            .checked_mul(rhs.len())
            .ok_or(Error::AllocationFailure {
                requested: usize::MAX,
                length: self.len(),
            })?;

        let mut result = Self { terms: Vec::new() };
        result.try_reserve(count)?;

        for lhs_term in &self.terms {
            for rhs_term in &rhs.terms {
                match lhs_term.mul_with(rhs_term, policy) {
                    Ok(term) => result.terms.push(term),
                    Err(err) if err.is_invalid_denominator() => {
                        warn!(
                            "Product of `{}` and `{}` wrapped to a zero denominator and was dropped.",
                            lhs_term, rhs_term
                        );
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(result)
    }

    /// Distributed product failing with [`Error::ArithmeticOverflow`] if any
    /// field leaves the `i64` range.
    #[inline]
    pub fn checked_mul(&self, rhs: &Self) -> ArbResult<Self> {
        self.multiply(rhs, OverflowPolicy::Checked)
    }

    /// Distributed product with silent wrap-around.
    #[inline]
    pub fn wrapping_mul(&self, rhs: &Self) -> ArbResult<Self> {
        self.multiply(rhs, OverflowPolicy::Wrap)
    }

    /// Returns a new expression with every coefficient multiplied by `factor`.
    pub fn scale(&self, factor: i64, policy: OverflowPolicy) -> ArbResult<Self> {
        let terms = self
            .terms
            .iter()
            .map(|term| term.scale_with(factor, policy))
            .collect::<ArbResult<Vec<_>>>()?;
        Ok(Self { terms })
    }

    /// Returns a new expression with every term reduced to lowest terms.
    ///
    /// Nothing else in this crate reduces terms; this is the only way to get
    /// canonical fractions.
    pub fn reduced(&self) -> Self {
        self.terms.iter().map(Term::reduced).collect()
    }
}

impl Default for RationalExpression {
    fn default() -> Self {
        Self::new()
    }
}

impl Add<&RationalExpression> for &RationalExpression {
    type Output = RationalExpression;

    fn add(self, rhs: &RationalExpression) -> RationalExpression {
        self.concat(rhs)
    }
}

impl Add for RationalExpression {
    type Output = RationalExpression;

    fn add(mut self, rhs: RationalExpression) -> RationalExpression {
        self.terms.extend(rhs.terms);
        self
    }
}

impl From<Term> for RationalExpression {
    fn from(term: Term) -> Self {
        let mut terms = Vec::with_capacity(Self::DEFAULT_CAPACITY);
        terms.push(term);
        Self { terms }
    }
}

impl From<Vec<Term>> for RationalExpression {
    fn from(terms: Vec<Term>) -> Self {
        Self { terms }
    }
}

impl From<RationalExpression> for Vec<Term> {
    fn from(expr: RationalExpression) -> Self {
        expr.terms
    }
}

impl FromIterator<Term> for RationalExpression {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RationalExpression {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for RationalExpression {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl std::fmt::Display for RationalExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
