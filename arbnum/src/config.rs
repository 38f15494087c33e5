//! Arithmetic policies
//!
//! Term fields are fixed-width `i64` values, so products and scalings can
//! leave the representable range. The policy below states what happens when
//! they do; it is an explicit parameter of every operation that may overflow.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{expr::RationalExpression, utils::ArbResult};

/// Overflow policies for term arithmetic
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowPolicy {
    /// Fail with [`Error::ArithmeticOverflow`](crate::utils::Error::ArithmeticOverflow)
    #[default]
    Checked,
    /// Wrap around silently (two's complement). A product whose denominator
    /// wraps to zero is dropped, as a zero-denominator append would be.
    Wrap,
}

impl OverflowPolicy {
    /// Creates an [`OverflowPolicy`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        OverflowPolicy::iter().find(|policy| policy.to_str() == s)
    }

    /// Returns the string representation of the [`OverflowPolicy`].
    pub fn to_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Checked => "checked",
            OverflowPolicy::Wrap => "wrap",
        }
    }
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Arithmetic settings handed to consumers that build many expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArithmeticConfig {
    pub overflow: OverflowPolicy,
    /// Number of term slots reserved by [`ArithmeticConfig::new_expression`].
    pub initial_capacity: usize,
}

impl ArithmeticConfig {
    /// Creates an empty expression with the configured capacity.
    ///
    /// The capacity usually comes from a configuration file, so an
    /// unsatisfiable value is reported as
    /// [`Error::AllocationFailure`](crate::utils::Error::AllocationFailure).
    #[inline]
    pub fn new_expression(&self) -> ArbResult<RationalExpression> {
        RationalExpression::try_with_capacity(self.initial_capacity)
    }
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Checked,
            initial_capacity: RationalExpression::DEFAULT_CAPACITY,
        }
    }
}
