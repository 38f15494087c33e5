//! Arbnum: symbolic rational numbers kept as ordered lists of weighted terms.
//!
//! A [`RationalExpression`](expr::RationalExpression) is a sequence of terms
//! `c*(a/b)` whose value is their sum. The sequence is never collapsed into a
//! single fraction: every contribution keeps its provenance, which is what
//! makes traces built on top of it explainable.
//!
//! Arithmetic follows two simple rules:
//!  - addition concatenates the term lists of both operands,
//!  - multiplication distributes, producing one term per pair of terms.
//!
//! Terms are never reduced implicitly. Two notions of equality coexist: the
//! derived `==` compares term sequences (order-sensitive), while
//! [`value_eq`](expr::RationalExpression::value_eq) compares exact summed values.
//!
//! Example
//! ```
//! use arbnum::prelude::*;
//!
//! let mut x = RationalExpression::new();
//! x.push_term(1, 1, 3).unwrap();
//! x.push_term(1, 1, 2).unwrap();
//! let y = RationalExpression::from_term(1, 5, 6).unwrap();
//!
//! assert_eq!((&x + &y).to_string(), "1*(1/3) + 1*(1/2) + 1*(5/6)");
//! assert_eq!(x.checked_mul(&y).unwrap().to_string(), "1*(5/18) + 1*(5/12)");
//! assert!((&x + &y).value_eq(&(&y + &x)));
//! ```

/// Arithmetic policies shared by every operation that may overflow.
pub mod config;
/// The term-list expression engine.
pub mod expr;
/// Text format parser for rendered expressions.
pub mod parser;
/// Weighted fraction terms and gcd reduction.
pub mod term;
/// Error type shared by the crate.
pub mod utils;
/// Exact and approximate values of expressions.
pub mod value;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::config::{ArithmeticConfig, OverflowPolicy};
    pub use crate::expr::RationalExpression;
    pub use crate::term::{Term, gcd};
    pub use crate::utils::{ArbResult, Error};
    pub use crate::value::ExactValue;
}
