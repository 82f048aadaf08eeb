//! Reusable guard constructors.
//!
//! Every function here returns a predicate over a borrowed input that can be
//! passed straight to `case_of`. The predicates own whatever they compare
//! against, so they do not borrow from the arguments they were built from.
//!
//! # Examples
//!
//! ```rust
//! use casematch::guards::{between, one_of, starts_with};
//! use casematch::matching::match_value;
//!
//! let status = match_value::<&str, _>(404_u16)
//!     .case_of(one_of([301, 302, 307]), |_| "redirect")
//!     .case_of(between(400, 499).unwrap(), |_| "client error")
//!     .or_else("other");
//! assert_eq!(status, "client error");
//!
//! let scheme = match_value::<&str, _>("https://example.org")
//!     .case_of(starts_with("http://"), |_| "plain")
//!     .case_of(starts_with("https://"), |_| "tls")
//!     .or_else("unknown");
//! assert_eq!(scheme, "tls");
//! ```

use crate::MatchError;
use crate::found::{Found, FoundKind};
use crate::matching::{self, Tolerance};

// =============================================================================
// Comparisons
// =============================================================================

/// Accepts inputs equal to `expected`.
pub fn equal_to<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |input| *input == expected
}

/// Accepts inputs strictly less than `bound`.
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |input| *input < bound
}

/// Accepts inputs less than or equal to `bound`.
pub fn at_most<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |input| *input <= bound
}

/// Accepts inputs strictly greater than `bound`.
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |input| *input > bound
}

/// Accepts inputs greater than or equal to `bound`.
pub fn at_least<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |input| *input >= bound
}

/// Accepts inputs in the inclusive range `low..=high`.
///
/// # Errors
///
/// Returns [`MatchError::InvalidArgument`] if `low` is greater than `high`
/// or the two cannot be compared (for example a NaN bound).
///
/// # Examples
///
/// ```rust
/// use casematch::guards::between;
///
/// let teen = between(13, 19).unwrap();
/// assert!(teen(&13) && teen(&19));
/// assert!(!teen(&20));
///
/// assert!(between(5, 1).is_err());
/// assert!(between(f64::NAN, 1.0).is_err());
/// ```
pub fn between<T: PartialOrd>(low: T, high: T) -> Result<impl Fn(&T) -> bool, MatchError> {
    if low <= high {
        Ok(move |input: &T| low <= *input && *input <= high)
    } else {
        Err(MatchError::invalid_argument(
            "low",
            "must not be greater than `high`",
        ))
    }
}

/// Accepts inputs equal to any of `values`.
pub fn one_of<T, I>(values: I) -> impl Fn(&T) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let values: Vec<T> = values.into_iter().collect();
    move |input| values.contains(input)
}

// =============================================================================
// Strings
// =============================================================================

/// Accepts strings starting with `prefix`.
pub fn starts_with<S: AsRef<str>>(prefix: &str) -> impl Fn(&S) -> bool + use<S> {
    let prefix = prefix.to_owned();
    move |input| input.as_ref().starts_with(prefix.as_str())
}

/// Accepts strings ending with `suffix`.
pub fn ends_with<S: AsRef<str>>(suffix: &str) -> impl Fn(&S) -> bool + use<S> {
    let suffix = suffix.to_owned();
    move |input| input.as_ref().ends_with(suffix.as_str())
}

/// Accepts strings containing `needle`.
pub fn contains<S: AsRef<str>>(needle: &str) -> impl Fn(&S) -> bool + use<S> {
    let needle = needle.to_owned();
    move |input| input.as_ref().contains(needle.as_str())
}

/// Accepts strings that are empty or contain only whitespace.
pub fn is_blank<S: AsRef<str>>() -> impl Fn(&S) -> bool {
    |input| input.as_ref().trim().is_empty()
}

// =============================================================================
// Options
// =============================================================================

/// Accepts `Some(_)`.
pub fn is_present<T>() -> impl Fn(&Option<T>) -> bool {
    Option::is_some
}

/// Accepts `None`.
pub fn is_absent<T>() -> impl Fn(&Option<T>) -> bool {
    Option::is_none
}

// =============================================================================
// Floating point
// =============================================================================

/// Accepts values within `tolerance` of `target`.
pub fn close_to(target: f64, tolerance: Tolerance) -> impl Fn(&f64) -> bool {
    move |input| tolerance.accepts(*input, target)
}

/// Accepts values at most `ulps` representable values away from `target`.
pub fn within_ulps(target: f64, ulps: u64) -> impl Fn(&f64) -> bool {
    move |input| matching::within_ulps(*input, target, ulps)
}

// =============================================================================
// Collections
// =============================================================================

/// Accepts collections in which `predicate` holds for `kind` of the
/// elements, as classified by [`Found`].
///
/// # Examples
///
/// ```rust
/// use casematch::found::FoundKind;
/// use casematch::guards::quantified;
///
/// let mixed = quantified(FoundKind::Some, |n: &i32| *n < 0);
/// assert!(mixed(&vec![-1, 2]));
/// assert!(!mixed(&vec![-1, -2]));
/// assert!(!mixed(&Vec::new()));
/// ```
pub fn quantified<C, E, P>(kind: FoundKind, predicate: P) -> impl Fn(&C) -> bool
where
    C: AsRef<[E]>,
    P: Fn(&E) -> bool,
{
    move |input| Found::classify(input.as_ref(), &predicate).kind() == kind
}

/// Accepts collections with at least one element satisfying `predicate`.
pub fn any_element<C, E, P>(predicate: P) -> impl Fn(&C) -> bool
where
    C: AsRef<[E]>,
    P: Fn(&E) -> bool,
{
    move |input| Found::classify(input.as_ref(), &predicate).any()
}

/// Accepts non-empty collections whose elements all satisfy `predicate`.
pub fn every_element<C, E, P>(predicate: P) -> impl Fn(&C) -> bool
where
    C: AsRef<[E]>,
    P: Fn(&E) -> bool,
{
    quantified(FoundKind::All, predicate)
}

/// Accepts collections with no element satisfying `predicate`, including
/// empty ones.
pub fn no_element<C, E, P>(predicate: P) -> impl Fn(&C) -> bool
where
    C: AsRef<[E]>,
    P: Fn(&E) -> bool,
{
    quantified(FoundKind::None, predicate)
}
