//! Tests for resolving a matcher through a shared reference.

#![cfg(feature = "matching")]

use casematch::MatchError;
use casematch::matching::{OneShot, match_on, match_value};
use rstest::rstest;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};

#[rstest]
fn resolves_once_from_fn_callback() {
    let fired = Cell::new(0);
    let pending = OneShot::new(match_on(5).case_of(|n: &i32| *n > 0, |_| fired.set(fired.get() + 1)));

    let callback = || pending.resolve(|matcher| matcher.resolve());
    let results: Vec<_> = (0..3).map(|_| callback()).collect();

    assert_eq!(
        results,
        vec![Ok(true), Err(MatchError::AlreadyResolved), Err(MatchError::AlreadyResolved)]
    );
    assert_eq!(fired.get(), 1);
}

#[rstest]
fn any_terminal_can_be_used() {
    let pending = OneShot::new(match_value::<String, _>(2).case_of(|n: &i32| *n == 2, |n| n.to_string()));
    assert_eq!(pending.resolve(|matcher| matcher.or_else(String::new())), Ok(String::from("2")));
    assert!(pending.is_resolved());
}

#[rstest]
fn panic_inside_terminal_leaves_one_shot_spent() {
    let pending = OneShot::new(match_on(1).case_of(|_: &i32| panic!("guard failed"), |_| {}));

    let first = catch_unwind(AssertUnwindSafe(|| pending.resolve(|matcher| matcher.resolve())));
    assert!(first.is_err());
    assert!(pending.is_resolved());
    assert_eq!(
        pending.resolve(|matcher| matcher.resolve()),
        Err(MatchError::AlreadyResolved)
    );
}
