use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

use crate::term::Term;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum Error {
    /// A term was given a zero denominator.
    #[error(
        "Denominator cannot be zero. The term `{coefficient}*({numerator}/0)` was rejected and the expression left unchanged."
    )]
    InvalidDenominator { coefficient: i64, numerator: i64 },

    /// A fixed-width term field left the representable range.
    #[error(
        "Arithmetic overflow while computing the {operation} of `{lhs}` and `{rhs}`. Use the wrapping policy to reproduce silent wrap-around."
    )]
    ArithmeticOverflow {
        operation: &'static str,
        lhs: String,
        rhs: String,
    },

    /// Term storage could not be grown.
    #[error(
        "Failed to reserve storage for {requested} additional terms (current length {length})."
    )]
    AllocationFailure { requested: usize, length: usize },

    /// Text could not be read back as an expression.
    #[error("Failed to parse expression `{input}`: {message}")]
    Parse { input: String, message: String },
}

impl Error {
    pub(crate) fn overflow(operation: &'static str, lhs: &Term, rhs: impl std::fmt::Display) -> Self {
        Error::ArithmeticOverflow {
            operation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }
}

pub type ArbResult<T> = Result<T, Error>;
