//! Error types raised by the matching engine itself.
//!
//! Failures inside caller-supplied guards and actions are never represented
//! here: they are panics of the caller's own closures and unwind through the
//! terminal operation untouched. `MatchError` only covers the conditions the
//! library detects on its own.

use std::fmt;

/// Represents errors detected by the library.
///
/// # Examples
///
/// ```rust
/// use casematch::MatchError;
///
/// let error = MatchError::invalid_argument("epsilon", "must not be negative");
/// assert_eq!(
///     format!("{error}"),
///     "invalid argument `epsilon`: must not be negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A required argument was rejected by a validating constructor.
    ///
    /// Raised by the call that received the argument, before any case of
    /// any matcher has been evaluated.
    InvalidArgument {
        /// The name of the rejected argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
    /// No case fired, or the fired case produced an absent result.
    ///
    /// Only raised by terminals that explicitly opt into failing.
    NoMatch,
    /// A terminal operation was requested on a matcher that has already
    /// been resolved.
    AlreadyResolved,
}

impl MatchError {
    /// Creates an [`MatchError::InvalidArgument`] for `argument`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::MatchError;
    ///
    /// let error = MatchError::invalid_argument("low", "greater than high");
    /// assert!(matches!(error, MatchError::InvalidArgument { argument: "low", .. }));
    /// ```
    #[must_use]
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a [`MatchError::NoMatch`].
    #[inline]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, reason } => {
                write!(formatter, "invalid argument `{argument}`: {reason}")
            }
            Self::NoMatch => write!(formatter, "no case produced a result"),
            Self::AlreadyResolved => write!(
                formatter,
                "matcher already resolved. A matcher accepts exactly one terminal operation."
            ),
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn invalid_argument_display() {
        let error = MatchError::invalid_argument("epsilon", "must be finite");
        assert_eq!(format!("{error}"), "invalid argument `epsilon`: must be finite");
    }

    #[rstest]
    fn no_match_display() {
        assert_eq!(format!("{}", MatchError::NoMatch), "no case produced a result");
    }

    #[rstest]
    fn already_resolved_display() {
        assert_eq!(
            format!("{}", MatchError::AlreadyResolved),
            "matcher already resolved. A matcher accepts exactly one terminal operation."
        );
    }

    #[rstest]
    fn invalid_argument_equality_compares_reason() {
        let first = MatchError::invalid_argument("low", "greater than high");
        let second = MatchError::invalid_argument("low", "greater than high");
        let third = MatchError::invalid_argument("low", "not finite");
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[rstest]
    fn is_no_match_only_for_no_match() {
        assert!(MatchError::NoMatch.is_no_match());
        assert!(!MatchError::AlreadyResolved.is_no_match());
    }

    #[rstest]
    fn match_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<MatchError>();
    }
}
