//! Values of expressions
//!
//! Two ways of collapsing an expression to a number live here:
//!  - [`ExactValue`], the exact rational sum computed with big integers, used
//!    for order-insensitive value equality and exact ordering;
//!  - the `f64` sum of each term's `c * a / b`, kept for callers that rely on
//!    the approximate ordering.
use std::{cmp::Ordering, ops::Add};

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{expr::RationalExpression, term::Term};

/// Leading bits of each part kept by [`ExactValue::to_f64`].
const CONVERSION_BITS: u64 = 64;

fn pow2(exponent: i64) -> f64 {
    2f64.powi(exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

fn big_gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let rem = &a % &b;
        a = b;
        b = rem;
    }
    a.abs()
}

/// An exact rational number in lowest terms with a positive denominator.
///
/// Being canonical, the derived equality and hash are value-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactValue {
    numerator: BigInt,
    denominator: BigInt,
}

impl ExactValue {
    /// Creates `numerator / denominator`, or `None` if the denominator is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Option<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            None
        } else {
            Some(Self::normalized(numerator.into(), denominator))
        }
    }

    /// The value `0/1`, which is also the value of the empty expression.
    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        let common = big_gcd(numerator.clone(), denominator.clone());
        let (numerator, denominator) = (numerator / &common, denominator / &common);

        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Nearest `f64`.
    ///
    /// Numerator and denominator are first truncated to their leading bits, so
    /// parts beyond the `f64` range still convert; only a value that is itself
    /// out of range becomes infinite (or zero).
    pub fn to_f64(&self) -> f64 {
        let numerator_shift = self.numerator.bits().saturating_sub(CONVERSION_BITS);
        let denominator_shift = self.denominator.bits().saturating_sub(CONVERSION_BITS);

        // Both truncated parts fit in `CONVERSION_BITS` bits, and the
        // denominator stays at least one.
        let numerator = (&self.numerator >> numerator_shift).to_f64().unwrap_or(f64::NAN);
        let denominator = (&self.denominator >> denominator_shift).to_f64().unwrap_or(f64::NAN);

        // value = (numerator / denominator) * 2^exponent, applied in two
        // halves so an in-range result never goes through an infinite factor.
        let exponent = numerator_shift as i64 - denominator_shift as i64;
        let half = exponent / 2;
        numerator / denominator * pow2(half) * pow2(exponent - half)
    }
}

impl From<&Term> for ExactValue {
    fn from(term: &Term) -> Self {
        Self::normalized(
            BigInt::from(term.coefficient()) * BigInt::from(term.numerator()),
            BigInt::from(term.denominator()),
        )
    }
}

impl From<i64> for ExactValue {
    fn from(value: i64) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }
}

impl Add<&ExactValue> for &ExactValue {
    type Output = ExactValue;

    fn add(self, rhs: &ExactValue) -> ExactValue {
        ExactValue::normalized(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Ord for ExactValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for ExactValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ExactValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl RationalExpression {
    /// Exact sum of all terms, in lowest terms. Never overflows.
    pub fn exact_value(&self) -> ExactValue {
        self.iter()
            .fold(ExactValue::zero(), |acc, term| &acc + &ExactValue::from(term))
    }

    /// Returns `true` if both expressions sum to the same rational value,
    /// whatever their terms and term order.
    pub fn value_eq(&self, other: &Self) -> bool {
        self.exact_value() == other.exact_value()
    }

    /// Exact ordering of the summed values.
    pub fn value_cmp(&self, other: &Self) -> Ordering {
        self.exact_value().cmp(&other.exact_value())
    }

    /// Sum of each term's `f64` value `c * a / b`, accumulated in order.
    pub fn approx_value(&self) -> f64 {
        self.iter()
            .fold(0.0, |acc, term| acc + term.approx_value())
    }

    /// Approximate ordering of the summed values.
    ///
    /// Totals that are neither strictly smaller nor strictly greater compare
    /// `Equal`. Distinct values closer than `f64` resolution are conflated;
    /// prefer [`RationalExpression::value_cmp`] when that matters.
    pub fn approx_cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = (self.approx_value(), other.approx_value());
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
