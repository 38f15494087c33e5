//! Parser for the rendered expression format.
//!
//! The grammar is the one produced by `Display`:
//! `c*(a/b) + c*(a/b) + ...`, with signed decimal integers and free
//! whitespace around every token. The empty string is the empty expression.
use std::str::FromStr;

use chumsky::prelude::*;

use crate::{
    expr::RationalExpression,
    term::Term,
    utils::{ArbResult, Error},
};

type RawTerm = (i64, i64, i64);

pub fn integer_parser<'src>()
-> impl Parser<'src, &'src str, i64, extra::Err<Rich<'src, char>>> + Clone {
    just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits.parse::<i64>().map_err(|err| {
                Rich::custom(span, format!("invalid 64-bit integer `{}`: {}", digits, err))
            })
        })
        .labelled("integer")
}

/// Parses `c*(a/b)` into its raw fields. The denominator is validated later
/// so that a zero yields `InvalidDenominator` rather than a syntax error.
pub fn term_parser<'src>()
-> impl Parser<'src, &'src str, RawTerm, extra::Err<Rich<'src, char>>> + Clone {
    integer_parser()
        .then_ignore(just('*').padded())
        .then(
            integer_parser()
                .then_ignore(just('/').padded())
                .then(integer_parser())
                .padded()
                .delimited_by(just('('), just(')')),
        )
        .map(|(coefficient, (numerator, denominator))| (coefficient, numerator, denominator))
        .labelled("term")
}

pub fn expression_parser<'src>()
-> impl Parser<'src, &'src str, Vec<RawTerm>, extra::Err<Rich<'src, char>>> + Clone {
    term_parser()
        .padded()
        .separated_by(just('+'))
        .collect::<Vec<_>>()
        .padded()
        .then_ignore(end())
}

fn parse_raw<'src, T>(
    parser: impl Parser<'src, &'src str, T, extra::Err<Rich<'src, char>>>,
    input: &'src str,
) -> ArbResult<T> {
    parser.parse(input).into_result().map_err(|errors| Error::Parse {
        input: input.to_string(),
        message: errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("; "),
    })
}

/// Parses a rendered expression back into a [`RationalExpression`].
pub fn parse_expression(input: &str) -> ArbResult<RationalExpression> {
    let raw = parse_raw(expression_parser(), input)?;

    let mut expr = RationalExpression::with_capacity(raw.len());
    for (coefficient, numerator, denominator) in raw {
        expr.push_term(coefficient, numerator, denominator)?;
    }
    Ok(expr)
}

/// Parses a single rendered term.
pub fn parse_term(input: &str) -> ArbResult<Term> {
    let (coefficient, numerator, denominator) =
        parse_raw(term_parser().padded().then_ignore(end()), input)?;
    Term::new(coefficient, numerator, denominator)
}

impl FromStr for RationalExpression {
    type Err = Error;

    fn from_str(s: &str) -> ArbResult<Self> {
        parse_expression(s)
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> ArbResult<Self> {
        parse_term(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_whitespace_and_signs() {
        let expr = parse_expression("  -1 * ( 2 / 5 )+3*(-7/ -8) ").unwrap();
        assert_eq!(expr.to_string(), "-1*(2/5) + 3*(-7/-8)");
    }

    #[test]
    fn empty_input_is_empty_expression() {
        assert!(parse_expression("").unwrap().is_empty());
        assert!(parse_expression("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_trailing_separator() {
        let err = parse_expression("1*(1/3) +").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn rejects_out_of_range_integers() {
        let err = parse_term("1*(99999999999999999999/3)").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn zero_denominator_is_not_a_syntax_error() {
        let err = parse_expression("1*(1/3) + 2*(1/0)").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDenominator {
                coefficient: 2,
                numerator: 1
            }
        );
    }
}
