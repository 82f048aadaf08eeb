//! First-match-wins case matching.
//!
//! A matcher owns one input and an ordered list of cases. Each case pairs a
//! guard (or an extractor) with an action. Calling a terminal operation
//! resolves the matcher: the cases are tried in registration order and the
//! action of the first applicable case runs. No later guard is evaluated.
//!
//! - [`ActionMatcher`] (entry [`match_on`]): actions consume the input for
//!   their side effects.
//! - [`ValueMatcher`] (entry [`match_value`]): actions produce a value, and
//!   "no case fired" is kept apart from "a case fired without a value".
//! - Primitive aliases and entries for `i32`, `i64` and `f64`
//!   ([`match_int`], [`match_long`], [`match_double`] and their `_value`
//!   forms) add literal and tolerance guards.
//! - [`Narrow`] provides runtime type dispatch over `dyn Any` owners.
//! - [`OneShot`] resolves a matcher at most once through a shared reference.
//!
//! # Examples
//!
//! ## Dispatching on a runtime type
//!
//! ```rust
//! use casematch::matching::match_value;
//! use std::any::Any;
//!
//! fn describe(value: Box<dyn Any>) -> String {
//!     match_value::<String, _>(value)
//!         .case_type::<String, _, _>(|text| format!("text of {} bytes", text.len()))
//!         .case_type::<i32, _, _>(|number| format!("the number {number}"))
//!         .or_else(String::from("something else"))
//! }
//!
//! assert_eq!(describe(Box::new(String::from("abc"))), "text of 3 bytes");
//! assert_eq!(describe(Box::new(9_i32)), "the number 9");
//! assert_eq!(describe(Box::new(1.5_f64)), "something else");
//! ```
//!
//! ## One terminal per matcher
//!
//! Terminal operations take the matcher by value, so it cannot be resolved
//! twice:
//!
//! ```compile_fail
//! use casematch::matching::match_value;
//!
//! let matcher = match_value::<i32, _>(1).case_if(true, |n| n);
//! let first = matcher.result();
//! let second = matcher.result();
//! ```
//!
//! A failing guard or action is a panic of the caller's closure. It unwinds
//! through the terminal call unchanged and the matcher is dropped with it.

mod action_matcher;
mod case;
mod guard;
mod narrow;
mod one_shot;
mod outcome;
mod primitive;
mod value_matcher;

pub use action_matcher::{ActionMatcher, match_on};
pub use guard::{Guard, GuardKind};
pub use narrow::Narrow;
pub use one_shot::OneShot;
pub use outcome::Outcome;
pub use primitive::{
    DoubleMatcher, DoubleValueMatcher, IntMatcher, IntValueMatcher, LongMatcher, LongValueMatcher,
    Tolerance, match_double, match_double_value, match_int, match_int_value, match_long,
    match_long_value, ulp_distance, within_ulps,
};
pub use value_matcher::{ValueMatcher, match_value};

static_assertions::assert_not_impl_any!(ActionMatcher<'static, i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(ValueMatcher<'static, i32, i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(OneShot<ActionMatcher<'static, i32>>: Sync);
static_assertions::assert_impl_all!(Tolerance: Send, Sync, Copy);
