//! Matchers over unboxed `i32`, `i64` and `f64` inputs.
//!
//! The primitive matchers are the generic matchers instantiated at the
//! primitive type, so the input is never boxed and extracted values are
//! plain `Option<i32>` and friends. Each primitive gets aliases, entry
//! functions and a `case_eq` literal guard; `f64` additionally gets
//! tolerance-based equality.
//!
//! The literal and tolerance guards register as testing cases: the compared
//! value and the action are captured by one closure, so each such case costs
//! a single allocation.
//!
//! | input | action matcher | value matcher          | entry functions                  |
//! |-------|----------------|------------------------|----------------------------------|
//! | `i32` | `IntMatcher`    | `IntValueMatcher<O>`    | `match_int`, `match_int_value`    |
//! | `i64` | `LongMatcher`   | `LongValueMatcher<O>`   | `match_long`, `match_long_value`  |
//! | `f64` | `DoubleMatcher` | `DoubleValueMatcher<O>` | `match_double`, `match_double_value` |

use paste::paste;

use super::{ActionMatcher, ValueMatcher};
use crate::MatchError;

/// An absolute tolerance for comparing `f64` values.
///
/// A tolerance is finite and non-negative; [`Tolerance::new`] rejects
/// anything else.
///
/// # Examples
///
/// ```rust
/// use casematch::matching::Tolerance;
///
/// let tolerance = Tolerance::new(0.01).unwrap();
/// assert!(tolerance.accepts(1.005, 1.0));
/// assert!(!tolerance.accepts(1.02, 1.0));
///
/// assert!(Tolerance::new(-1.0).is_err());
/// assert!(Tolerance::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// A tolerance of zero: only equal values are accepted.
    pub const EXACT: Self = Self(0.0);

    /// Creates a tolerance of `epsilon`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidArgument`] if `epsilon` is NaN, negative
    /// or infinite.
    pub fn new(epsilon: f64) -> Result<Self, MatchError> {
        if epsilon.is_nan() {
            Err(MatchError::invalid_argument("epsilon", "must not be NaN"))
        } else if epsilon < 0.0 {
            Err(MatchError::invalid_argument(
                "epsilon",
                format!("must not be negative, got {epsilon}"),
            ))
        } else if epsilon.is_infinite() {
            Err(MatchError::invalid_argument("epsilon", "must be finite"))
        } else {
            Ok(Self(epsilon))
        }
    }

    /// Returns the tolerance as a plain `f64`.
    #[inline]
    #[must_use]
    pub const fn epsilon(self) -> f64 {
        self.0
    }

    /// Returns `true` if `actual` is within the tolerance of `target`.
    ///
    /// NaN is never accepted. Infinities are only accepted by an equal
    /// infinity.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn accepts(self, actual: f64, target: f64) -> bool {
        actual == target || (actual - target).abs() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::EXACT
    }
}

/// Maps the bits of `value` onto a line where adjacent floats are adjacent
/// integers and both zeros meet at 0.
#[allow(clippy::cast_possible_wrap)]
const fn ordered_bits(value: f64) -> i64 {
    let bits = value.to_bits() as i64;
    if bits < 0 { i64::MIN - bits } else { bits }
}

/// Returns the number of representable `f64` values between `a` and `b`.
///
/// Returns `None` if either value is NaN, or if exactly one of them is
/// infinite. Equal infinities are `Some(0)`.
///
/// # Examples
///
/// ```rust
/// use casematch::matching::ulp_distance;
///
/// assert_eq!(ulp_distance(1.0, 1.0), Some(0));
/// assert_eq!(ulp_distance(1.0, 1.0_f64.next_up()), Some(1));
/// assert_eq!(ulp_distance(0.0, -0.0), Some(0));
/// assert_eq!(ulp_distance(f64::NAN, 1.0), None);
/// assert_eq!(ulp_distance(f64::INFINITY, f64::MAX), None);
/// ```
#[must_use]
pub const fn ulp_distance(a: f64, b: f64) -> Option<u64> {
    if a.is_nan() || b.is_nan() {
        None
    } else if a.is_infinite() || b.is_infinite() {
        if a.to_bits() == b.to_bits() { Some(0) } else { None }
    } else {
        Some(ordered_bits(a).abs_diff(ordered_bits(b)))
    }
}

/// Returns `true` if `actual` is at most `ulps` representable values away
/// from `target`.
#[inline]
#[must_use]
pub const fn within_ulps(actual: f64, target: f64, ulps: u64) -> bool {
    match ulp_distance(actual, target) {
        Some(distance) => distance <= ulps,
        None => false,
    }
}

macro_rules! primitive_matchers {
    ($($primitive:ty => $name:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("An [`ActionMatcher`] over an unboxed `", stringify!($primitive), "`.")]
                pub type [<$name Matcher>]<'a> = ActionMatcher<'a, $primitive>;

                #[doc = concat!("A [`ValueMatcher`] over an unboxed `", stringify!($primitive), "`.")]
                pub type [<$name ValueMatcher>]<'a, O> = ValueMatcher<'a, $primitive, O>;

                #[doc = concat!("Creates an action matcher over the `", stringify!($primitive), "` `input`.")]
                #[inline]
                pub fn [<match_ $name:snake>]<'a>(input: $primitive) -> [<$name Matcher>]<'a> {
                    ActionMatcher::new(input)
                }

                #[doc = concat!("Creates a value matcher over the `", stringify!($primitive), "` `input`.")]
                #[inline]
                pub fn [<match_ $name:snake _value>]<'a, O>(input: $primitive) -> [<$name ValueMatcher>]<'a, O> {
                    ValueMatcher::new(input)
                }

                impl<'a> ActionMatcher<'a, $primitive> {
                    /// Adds a case applying when the input equals `literal`.
                    #[inline]
                    #[allow(clippy::float_cmp)]
                    pub fn case_eq<A>(self, literal: $primitive, action: A) -> Self
                    where
                        A: FnOnce($primitive) + 'a,
                    {
                        self.case_tested(move |input: &$primitive| *input == literal, action)
                    }
                }

                impl<'a, O> ValueMatcher<'a, $primitive, O> {
                    /// Adds a case applying when the input equals `literal`.
                    #[inline]
                    #[allow(clippy::float_cmp)]
                    pub fn case_eq<A, R>(self, literal: $primitive, action: A) -> Self
                    where
                        A: FnOnce($primitive) -> R + 'a,
                        R: Into<Option<O>>,
                    {
                        self.case_tested(move |input: &$primitive| *input == literal, action)
                    }
                }
            )*
        }
    };
}

primitive_matchers!(i32 => Int, i64 => Long, f64 => Double);

impl<'a> ActionMatcher<'a, f64> {
    /// Adds a case applying when the input is within `tolerance` of `target`.
    #[inline]
    pub fn case_close_to<A>(self, target: f64, tolerance: Tolerance, action: A) -> Self
    where
        A: FnOnce(f64) + 'a,
    {
        self.case_tested(move |input: &f64| tolerance.accepts(*input, target), action)
    }

    /// Adds a case applying when the input is at most one representable
    /// value away from `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_double;
    ///
    /// let fired = match_double(0.1 + 0.2).case_approx(0.3, |_| {}).resolve();
    /// assert!(fired);
    /// ```
    #[inline]
    pub fn case_approx<A>(self, target: f64, action: A) -> Self
    where
        A: FnOnce(f64) + 'a,
    {
        self.case_tested(move |input: &f64| within_ulps(*input, target, 1), action)
    }
}

impl<'a, O> ValueMatcher<'a, f64, O> {
    /// Adds a case applying when the input is within `tolerance` of `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::{match_double_value, Tolerance};
    ///
    /// let tolerance = Tolerance::new(0.5).unwrap();
    /// let label = match_double_value::<&str>(2.3)
    ///     .case_close_to(2.0, tolerance, |_| "about two")
    ///     .or_else("elsewhere");
    ///
    /// assert_eq!(label, "about two");
    /// ```
    #[inline]
    pub fn case_close_to<A, R>(self, target: f64, tolerance: Tolerance, action: A) -> Self
    where
        A: FnOnce(f64) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.case_tested(move |input: &f64| tolerance.accepts(*input, target), action)
    }

    /// Adds a case applying when the input is at most one representable
    /// value away from `target`.
    #[inline]
    pub fn case_approx<A, R>(self, target: f64, action: A) -> Self
    where
        A: FnOnce(f64) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.case_tested(move |input: &f64| within_ulps(*input, target, 1), action)
    }
}
