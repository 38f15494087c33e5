//! Weighted fraction terms
//!
//! A [`Term`] is the triple `(c, a, b)` standing for the rational value
//! `c * (a / b)`. The denominator is never zero; sign may sit on the
//! coefficient, on the numerator, or on both.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::OverflowPolicy,
    utils::{ArbResult, Error},
};

/// Greatest common divisor of `|a|` and `|b|` (Euclid).
///
/// The result is unsigned so that `|i64::MIN|` stays representable.
/// `gcd(0, x) = |x|` and `gcd(0, 0) = 0`.
#[inline]
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Represents a weighted fraction `coefficient * (numerator / denominator)`.
///
/// Terms are only created through validating constructors, so a `Term` value
/// always carries a non-zero denominator. They are never reduced implicitly;
/// see [`Term::reduced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i64, i64, i64)", into = "(i64, i64, i64)")
)]
pub struct Term {
    coefficient: i64,
    numerator: i64,
    denominator: i64,
}

impl Term {
    /// The term `1*(1/1)`.
    pub const ONE: Self = Self {
        coefficient: 1,
        numerator: 1,
        denominator: 1,
    };

    /// Creates a new term, rejecting a zero denominator.
    #[inline]
    pub fn new(coefficient: i64, numerator: i64, denominator: i64) -> ArbResult<Self> {
        if denominator == 0 {
            return Err(Error::InvalidDenominator {
                coefficient,
                numerator,
            });
        }

        Ok(Self {
            coefficient,
            numerator,
            denominator,
        })
    }

    #[inline]
    pub const fn coefficient(&self) -> i64 {
        self.coefficient
    }

    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns `true` if numerator and denominator share no factor above one.
    #[inline]
    pub const fn is_reduced(&self) -> bool {
        gcd(self.numerator, self.denominator) <= 1
    }

    /// Returns this term with numerator and denominator divided by their gcd.
    ///
    /// The coefficient and the placement of signs are left as they are.
    /// Reducing an already reduced term is a no-op.
    pub fn reduced(&self) -> Self {
        let common = gcd(self.numerator, self.denominator);
        if common <= 1 {
            return *self;
        }

        // `common` may be 2^63 when both fields are i64::MIN; both quotients
        // still fit.
        let common = common as i128;
        Self {
            coefficient: self.coefficient,
            numerator: (self.numerator as i128 / common) as i64,
            denominator: (self.denominator as i128 / common) as i64,
        }
    }

    /// Reduces this term in place.
    #[inline]
    pub fn reduce(&mut self) {
        *self = self.reduced();
    }

    /// Field-wise product `(c1*c2, a1*a2, b1*b2)`, failing on overflow.
    pub fn checked_mul(&self, rhs: &Term) -> ArbResult<Self> {
        match (
            self.coefficient.checked_mul(rhs.coefficient),
            self.numerator.checked_mul(rhs.numerator),
            self.denominator.checked_mul(rhs.denominator),
        ) {
            (Some(coefficient), Some(numerator), Some(denominator)) => Ok(Self {
                coefficient,
                numerator,
                denominator,
            }),
            _ => Err(Error::overflow("product", self, rhs)),
        }
    }

    /// Field-wise product with two's complement wrapping.
    ///
    /// Two non-zero denominators can wrap to zero (e.g. `2^32 * 2^32`), in which
    /// case the product is not a valid term and `InvalidDenominator` is returned.
    pub fn wrapping_mul(&self, rhs: &Term) -> ArbResult<Self> {
        Term::new(
            self.coefficient.wrapping_mul(rhs.coefficient),
            self.numerator.wrapping_mul(rhs.numerator),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }

    /// Field-wise product under the given overflow policy.
    #[inline]
    pub fn mul_with(&self, rhs: &Term, policy: OverflowPolicy) -> ArbResult<Self> {
        match policy {
            OverflowPolicy::Checked => self.checked_mul(rhs),
            OverflowPolicy::Wrap => self.wrapping_mul(rhs),
        }
    }

    /// Multiplies the coefficient by an integer factor under the given policy.
    pub fn scale_with(&self, factor: i64, policy: OverflowPolicy) -> ArbResult<Self> {
        let coefficient = match policy {
            OverflowPolicy::Checked => self
                .coefficient
                .checked_mul(factor)
                .ok_or_else(|| Error::overflow("scaling", self, factor))?,
            OverflowPolicy::Wrap => self.coefficient.wrapping_mul(factor),
        };

        Ok(Self {
            coefficient,
            ..*self
        })
    }

    /// Floating-point value `c * a / b`.
    #[inline]
    pub fn approx_value(&self) -> f64 {
        self.coefficient as f64 * self.numerator as f64 / self.denominator as f64
    }
}

impl TryFrom<(i64, i64, i64)> for Term {
    type Error = Error;

    fn try_from((coefficient, numerator, denominator): (i64, i64, i64)) -> ArbResult<Self> {
        Term::new(coefficient, numerator, denominator)
    }
}

impl From<Term> for (i64, i64, i64) {
    fn from(term: Term) -> Self {
        (term.coefficient, term.numerator, term.denominator)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}*({}/{})",
            self.coefficient, self.numerator, self.denominator
        )
    }
}
