//! Integration tests for the `i32`, `i64` and `f64` matchers.

#![cfg(feature = "matching")]

use casematch::matching::{
    DoubleMatcher, IntMatcher, Outcome, Tolerance, match_double, match_double_value, match_int,
    match_int_value, match_long, match_long_value,
};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Integer Matchers
// =============================================================================

#[rstest]
#[case(0, "zero")]
#[case(1, "one")]
#[case(-1, "negative")]
#[case(7, "many")]
fn int_value_matcher(#[case] input: i32, #[case] expected: &str) {
    let label = match_int_value::<&str>(input)
        .case_eq(0, |_| "zero")
        .case_eq(1, |_| "one")
        .case_of(|n: &i32| *n < 0, |_| "negative")
        .or_else("many");
    assert_eq!(label, expected);
}

#[rstest]
fn int_action_matcher_alias() {
    let hit = Cell::new(0);
    let matcher: IntMatcher<'_> = match_int(5).case_eq(5, |n| hit.set(n));
    assert!(matcher.resolve());
    assert_eq!(hit.get(), 5);
}

#[rstest]
fn int_extractor_yields_unboxed_option() {
    let halved = match_int_value::<i32>(10)
        .case_extract(|n: &i32| (n % 2 == 0).then_some(n / 2), |half| half)
        .result();
    assert_eq!(halved, Some(5));
}

#[rstest]
fn long_matcher_distinguishes_wide_values() {
    let big = i64::from(i32::MAX) + 1;
    let label = match_long_value::<&str>(big)
        .case_eq(i64::from(i32::MAX), |_| "i32 max")
        .case_eq(big, |_| "beyond i32")
        .result();
    assert_eq!(label, Some("beyond i32"));
    assert!(!match_long(0).case_eq(1, |_| {}).resolve());
}

#[rstest]
fn literal_case_payload_can_be_absent() {
    let later = Cell::new(false);
    let outcome = match_int_value::<&str>(3)
        .case_eq(3, |_| None::<&str>)
        .case_eq(3, |_| {
            later.set(true);
            Some("later")
        })
        .outcome();
    assert_eq!(outcome, Outcome::Absent);
    assert!(!later.get());
}

// =============================================================================
// Double Matchers
// =============================================================================

#[rstest]
fn double_case_eq_requires_exact_equality() {
    let sum = 0.1 + 0.2;
    assert!(!match_double(sum).case_eq(0.3, |_| {}).resolve());
    assert!(match_double(sum).case_approx(0.3, |_| {}).resolve());
}

#[rstest]
#[case(1.04, true)]
#[case(0.96, true)]
#[case(1.06, false)]
#[case(f64::NAN, false)]
fn double_close_to_uses_tolerance(#[case] input: f64, #[case] expected: bool) {
    let tolerance = Tolerance::new(0.05).unwrap();
    let matcher: DoubleMatcher<'_> = match_double(input).case_close_to(1.0, tolerance, |_| {});
    assert_eq!(matcher.resolve(), expected);
}

#[rstest]
fn double_nan_matches_no_equality_guard() {
    let label = match_double_value::<&str>(f64::NAN)
        .case_eq(f64::NAN, |_| "eq")
        .case_approx(f64::NAN, |_| "approx")
        .case_close_to(f64::NAN, Tolerance::new(1.0).unwrap(), |_| "close")
        .case_of(|x: &f64| x.is_nan(), |_| "nan")
        .result();
    assert_eq!(label, Some("nan"));
}

#[rstest]
fn double_signed_zeros_are_approximately_equal() {
    assert!(match_double(-0.0).case_approx(0.0, |_| {}).resolve());
    assert!(match_double(-0.0).case_eq(0.0, |_| {}).resolve());
}

#[rstest]
#[case(f64::INFINITY, f64::MAX, false)]
#[case(f64::NEG_INFINITY, f64::MIN, false)]
#[case(f64::MAX, f64::INFINITY, false)]
#[case(f64::INFINITY, f64::INFINITY, true)]
fn double_approx_keeps_infinities_apart(#[case] input: f64, #[case] target: f64, #[case] expected: bool) {
    assert_eq!(match_double(input).case_approx(target, |_| {}).resolve(), expected);
    let label = match_double_value::<&str>(input)
        .case_approx(target, |_| "approx")
        .or_else("apart");
    assert_eq!(label, if expected { "approx" } else { "apart" });
}

#[rstest]
fn invalid_tolerance_is_rejected_before_matching() {
    let evaluated = Cell::new(false);
    let result = Tolerance::new(-0.5).map(|tolerance| {
        match_double(1.0)
            .case_close_to(1.0, tolerance, |_| evaluated.set(true))
            .resolve()
    });
    assert!(result.is_err());
    assert!(!evaluated.get());
}
