use arbnum::prelude::*;

fn expr(terms: &[(i64, i64, i64)]) -> RationalExpression {
    let mut expr = RationalExpression::new();
    for &(c, a, b) in terms {
        expr.push_term(c, a, b).expect("valid term");
    }
    expr
}

#[test]
fn new_expression_is_empty_and_renders_empty() {
    let expr = RationalExpression::new();
    assert_eq!(expr.len(), 0);
    assert!(expr.is_empty());
    assert!(expr.capacity() >= RationalExpression::DEFAULT_CAPACITY);
    assert_eq!(expr.to_string(), "");
}

#[test]
fn push_term_appends_in_insertion_order() {
    let expr = expr(&[(1, 1, 3), (-2, 5, 7), (3, -1, 2)]);
    assert_eq!(expr.len(), 3);
    assert_eq!(expr.get(0), Some(&Term::new(1, 1, 3).unwrap()));
    assert_eq!(expr.get(1), Some(&Term::new(-2, 5, 7).unwrap()));
    assert_eq!(expr.get(2), Some(&Term::new(3, -1, 2).unwrap()));
    assert_eq!(expr.get(3), None);
}

#[test]
fn zero_denominator_is_rejected_and_expression_unchanged() {
    let mut expr = expr(&[(1, 1, 3)]);
    let before = expr.clone();

    let err = expr.push_term(4, 2, 0).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidDenominator {
            coefficient: 4,
            numerator: 2
        }
    );
    assert_eq!(expr, before);

    // Still usable afterwards.
    expr.push_term(1, 1, 2).unwrap();
    assert_eq!(expr.len(), 2);
}

#[test]
fn growth_past_initial_capacity_keeps_every_term() {
    let mut expr = RationalExpression::with_capacity(0);
    for i in 1..=100 {
        expr.push_term(i, i + 1, i + 2).unwrap();
    }
    assert_eq!(expr.len(), 100);
    for (i, term) in expr.iter().enumerate() {
        let i = i as i64 + 1;
        assert_eq!(term.coefficient(), i);
        assert_eq!(term.numerator(), i + 1);
        assert_eq!(term.denominator(), i + 2);
    }
}

#[test]
fn addition_renders_concatenated_terms() {
    let x = expr(&[(1, 1, 3), (1, 1, 2)]);
    let y = expr(&[(1, 5, 6)]);

    let sum = &x + &y;
    assert_eq!(sum.to_string(), "1*(1/3) + 1*(1/2) + 1*(5/6)");
    assert_eq!(sum, x.concat(&y));

    // Operands are left untouched.
    assert_eq!(x.to_string(), "1*(1/3) + 1*(1/2)");
    assert_eq!(y.to_string(), "1*(5/6)");
}

#[test]
fn owned_addition_matches_borrowed_addition() {
    let x = expr(&[(1, 1, 3), (1, 1, 2)]);
    let y = expr(&[(1, 5, 6)]);
    assert_eq!(x.clone() + y.clone(), &x + &y);
}

#[test]
fn addition_with_empty_is_identity() {
    let x = expr(&[(2, 3, 4)]);
    let empty = RationalExpression::new();
    assert_eq!(&x + &empty, x);
    assert_eq!(&empty + &x, x);
    assert!((&empty + &empty).is_empty());
}

#[test]
fn multiplication_renders_row_major_cross_product() {
    let x = expr(&[(1, 1, 3), (1, 1, 2)]);
    let y = expr(&[(1, 5, 6)]);

    let product = x.checked_mul(&y).unwrap();
    assert_eq!(product.to_string(), "1*(5/18) + 1*(5/12)");
}

#[test]
fn multiplication_order_is_row_major() {
    let x = expr(&[(1, 1, 2), (2, 1, 3)]);
    let y = expr(&[(3, 1, 5), (5, 1, 7)]);

    let product = x.checked_mul(&y).unwrap();
    assert_eq!(
        product.to_string(),
        "3*(1/10) + 5*(1/14) + 6*(1/15) + 10*(1/21)"
    );
}

#[test]
fn multiplication_with_empty_is_empty() {
    let x = expr(&[(1, 1, 2)]);
    let empty = RationalExpression::new();
    assert!(x.checked_mul(&empty).unwrap().is_empty());
    assert!(empty.checked_mul(&x).unwrap().is_empty());
}

#[test]
fn checked_multiplication_reports_overflow() {
    let x = expr(&[(1, 1, 2), (i64::MAX, 1, 2)]);
    let y = expr(&[(2, 1, 3)]);

    let err = x.checked_mul(&y).unwrap_err();
    assert!(err.is_arithmetic_overflow());
    assert!(err.to_string().contains("9223372036854775807*(1/2)"));
}

#[test]
fn wrapping_multiplication_wraps_silently() {
    let x = expr(&[(i64::MAX, 1, 2)]);
    let y = expr(&[(2, 1, 3)]);

    let product = x.wrapping_mul(&y).unwrap();
    assert_eq!(product.len(), 1);
    assert_eq!(product.terms()[0].coefficient(), i64::MAX.wrapping_mul(2));
    assert_eq!(product.terms()[0].coefficient(), -2);
}

#[test]
fn wrapping_multiplication_drops_zero_denominators() {
    let x = expr(&[(1, 1, 1 << 32), (1, 1, 3)]);
    let y = expr(&[(1, 1, 1 << 32)]);

    let wrapped = x.wrapping_mul(&y).unwrap();
    assert_eq!(wrapped.to_string(), "1*(1/12884901888)");

    assert!(x.checked_mul(&y).unwrap_err().is_arithmetic_overflow());
}

#[test]
fn scale_multiplies_coefficients_only() {
    let w = expr(&[(-1, 2, 5), (3, 1, 4)]);
    let scaled = w.scale(3, OverflowPolicy::Checked).unwrap();
    assert_eq!(scaled.to_string(), "-3*(2/5) + 9*(1/4)");

    let err = w.scale(i64::MAX, OverflowPolicy::Checked).unwrap_err();
    assert!(err.is_arithmetic_overflow());
    assert_eq!(w.scale(i64::MAX, OverflowPolicy::Wrap).unwrap().len(), 2);
}

#[test]
fn structural_equality_is_order_sensitive() {
    let x = expr(&[(1, 1, 3)]);
    let y = expr(&[(1, 1, 2)]);

    let xy = &x + &y;
    let yx = &y + &x;
    assert_ne!(xy, yx);
    assert!(xy.value_eq(&yx));
}

#[test]
fn structural_equality_does_not_reduce() {
    let half = expr(&[(1, 1, 2)]);
    let two_quarters = expr(&[(1, 2, 4)]);
    assert_ne!(half, two_quarters);
    assert!(half.value_eq(&two_quarters));
    assert_eq!(two_quarters.reduced(), half);
}

#[test]
fn reduced_is_opt_in_and_leaves_original_untouched() {
    let x = expr(&[(3, 4, 8), (1, 6, 9)]);
    let y = expr(&[(1, 2, 2)]);

    let reduced = x.reduced();
    assert_eq!(reduced.to_string(), "3*(1/2) + 1*(2/3)");
    assert_eq!(x.to_string(), "3*(4/8) + 1*(6/9)");

    // Arithmetic never reduces.
    assert_eq!(x.checked_mul(&y).unwrap().to_string(), "3*(8/16) + 1*(12/18)");
}

#[test]
fn from_term_and_iterators() {
    let x = RationalExpression::from_term(2, 3, 4).unwrap();
    assert_eq!(x.to_string(), "2*(3/4)");
    assert!(RationalExpression::from_term(2, 3, 0).is_err());

    let collected: RationalExpression = x.iter().copied().chain(x.iter().copied()).collect();
    assert_eq!(collected.to_string(), "2*(3/4) + 2*(3/4)");

    let terms: Vec<Term> = collected.into_iter().collect();
    assert_eq!(terms.len(), 2);
    assert_eq!(RationalExpression::from(Term::ONE).to_string(), "1*(1/1)");
}

#[test]
fn rendered_form_parses_back() {
    let x = expr(&[(1, 1, 3), (-1, 2, 5), (7, -3, 11)]);
    let parsed: RationalExpression = x.to_string().parse().unwrap();
    assert_eq!(parsed, x);

    let term: Term = "5*(6/-7)".parse().unwrap();
    assert_eq!(term, Term::new(5, 6, -7).unwrap());
}

#[test]
fn config_creates_expressions_with_requested_capacity() {
    let config = ArithmeticConfig {
        initial_capacity: 16,
        ..Default::default()
    };
    let expr = config.new_expression().unwrap();
    assert!(expr.is_empty());
    assert!(expr.capacity() >= 16);
    assert_eq!(config.overflow, OverflowPolicy::Checked);
}

#[test]
fn overflow_policy_string_forms() {
    assert_eq!(OverflowPolicy::from_str("checked"), Some(OverflowPolicy::Checked));
    assert_eq!(OverflowPolicy::from_str("wrap"), Some(OverflowPolicy::Wrap));
    assert_eq!(OverflowPolicy::from_str("saturate"), None);
    assert_eq!(OverflowPolicy::Wrap.to_string(), "wrap");
}

#[test]
fn unsatisfiable_capacity_is_an_allocation_failure() {
    let err = RationalExpression::try_with_capacity(usize::MAX).unwrap_err();
    assert_eq!(
        err,
        Error::AllocationFailure {
            requested: usize::MAX,
            length: 0
        }
    );

    let config = ArithmeticConfig {
        initial_capacity: usize::MAX,
        ..Default::default()
    };
    assert!(config.new_expression().unwrap_err().is_allocation_failure());

    let expr = RationalExpression::try_with_capacity(8).unwrap();
    assert!(expr.is_empty());
    assert!(expr.capacity() >= 8);
}

// Reserving 2^42 terms fails on ordinary hosts, but an overcommitting
// allocator may grant it.
#[test]
#[ignore]
fn huge_product_is_an_allocation_failure() {
    let x: RationalExpression = std::iter::repeat_n(Term::ONE, 1 << 21).collect();
    let err = x.checked_mul(&x).unwrap_err();
    assert_eq!(
        err,
        Error::AllocationFailure {
            requested: 1 << 42,
            length: 1 << 21
        }
    );
}
