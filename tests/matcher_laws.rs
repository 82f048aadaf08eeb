#![cfg(feature = "matching")]
//! Property-based tests for case resolution.
//!
//! - **First-match-wins**: the fired case is the earliest one whose guard
//!   accepts the input
//! - **Guard order purity**: exactly the guards up to and including the
//!   fired one are evaluated, each once
//! - **Fallback**: the fallback runs exactly when no guard accepts

use casematch::matching::{Outcome, match_on, match_value};
use proptest::prelude::*;
use std::cell::RefCell;

// =============================================================================
// First-Match-Wins
// =============================================================================

proptest! {
    #[test]
    fn prop_first_accepting_case_fires(guards in prop::collection::vec(any::<bool>(), 0..16)) {
        let evaluated = RefCell::new(Vec::new());

        let mut matcher = match_value::<usize, _>(());
        for (position, accepts) in guards.iter().copied().enumerate() {
            let evaluated = &evaluated;
            matcher = matcher.case_of(
                move |()| {
                    evaluated.borrow_mut().push(position);
                    accepts
                },
                move |()| position,
            );
        }
        let outcome = matcher.outcome();

        let first = guards.iter().position(|accepts| *accepts);
        match first {
            Some(index) => {
                prop_assert_eq!(outcome, Outcome::Present(index));
                prop_assert_eq!(evaluated.into_inner(), (0..=index).collect::<Vec<_>>());
            }
            None => {
                prop_assert_eq!(outcome, Outcome::Unmatched);
                prop_assert_eq!(evaluated.into_inner(), (0..guards.len()).collect::<Vec<_>>());
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_fallback_runs_iff_no_guard_accepts(input in any::<i32>(), bounds in prop::collection::vec(any::<i32>(), 0..8)) {
        let fallback_input = RefCell::new(None);
        let fired_cases = RefCell::new(0_usize);

        let mut matcher = match_on(input);
        for bound in bounds.iter().copied() {
            let fired_cases = &fired_cases;
            matcher = matcher.case_of(move |n: &i32| *n < bound, move |_| *fired_cases.borrow_mut() += 1);
        }
        matcher.otherwise(|n| *fallback_input.borrow_mut() = Some(n));

        let any_accepts = bounds.iter().any(|bound| input < *bound);
        prop_assert_eq!(fired_cases.into_inner(), usize::from(any_accepts));
        prop_assert_eq!(fallback_input.into_inner(), (!any_accepts).then_some(input));
    }
}

// =============================================================================
// Terminal Consistency
// =============================================================================

proptest! {
    #[test]
    fn prop_or_else_agrees_with_outcome(present in any::<Option<bool>>(), fallback in any::<u8>()) {
        let build = || {
            let matcher = match_value::<u8, _>(7_u8);
            match present {
                None => matcher,
                Some(true) => matcher.case_if(true, |n| n),
                Some(false) => matcher.case_if(true, |_| -> Option<u8> { None }),
            }
        };

        let outcome = build().outcome();
        prop_assert_eq!(build().result(), outcome.into_option());
        prop_assert_eq!(build().or_else(fallback), outcome.into_option().unwrap_or(fallback));
        prop_assert_eq!(
            build().otherwise(fallback),
            match outcome {
                Outcome::Present(value) => Some(value),
                Outcome::Absent => None,
                Outcome::Unmatched => Some(fallback),
            }
        );
    }
}
