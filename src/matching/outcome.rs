//! The three-way outcome of a value-producing match.

/// What resolving a [`ValueMatcher`](super::ValueMatcher) produced.
///
/// Unlike [`ValueMatcher::result`](super::ValueMatcher::result), which folds
/// the last two states into `None`, an `Outcome` keeps "a case fired but its
/// action returned nothing" apart from "no case fired".
///
/// # Examples
///
/// ```rust
/// use casematch::matching::{match_value, Outcome};
///
/// let absent = match_value::<u32, _>("x")
///     .case_of(|s: &&str| s.len() == 1, |s| s.parse::<u32>().ok())
///     .outcome();
/// assert_eq!(absent, Outcome::Absent);
///
/// let unmatched = match_value::<u32, _>("").case_of(|s: &&str| s.len() == 1, |_| 1_u32).outcome();
/// assert_eq!(unmatched, Outcome::Unmatched);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<O> {
    /// A case fired and its action produced a value.
    Present(O),
    /// A case fired and its action produced no value.
    Absent,
    /// No case fired.
    Unmatched,
}

impl<O> Outcome<O> {
    /// Returns `true` if a case fired, whether or not it produced a value.
    #[inline]
    pub const fn fired(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }

    /// Returns `true` if a case fired and produced a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if a case fired without producing a value.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if no case fired.
    #[inline]
    pub const fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched)
    }

    /// Converts a borrowed outcome into an outcome of references.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&O> {
        match self {
            Self::Present(value) => Outcome::Present(value),
            Self::Absent => Outcome::Absent,
            Self::Unmatched => Outcome::Unmatched,
        }
    }

    /// Maps the produced value, leaving the other states untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(O) -> U,
    {
        match self {
            Self::Present(value) => Outcome::Present(function(value)),
            Self::Absent => Outcome::Absent,
            Self::Unmatched => Outcome::Unmatched,
        }
    }

    /// Returns the produced value, if any.
    #[inline]
    pub fn into_option(self) -> Option<O> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Unmatched => None,
        }
    }
}

impl<O> From<Outcome<O>> for Option<O> {
    #[inline]
    fn from(outcome: Outcome<O>) -> Self {
        outcome.into_option()
    }
}
