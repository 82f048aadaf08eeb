//! Single resolution through a shared reference.
//!
//! The matchers are consumed by their terminal, so resolving one twice does
//! not compile. `OneShot` is for the cases where ownership cannot express
//! that: a matcher captured by an `Fn` callback, or stored in a struct and
//! resolved from a `&self` method. The second resolution is then reported at
//! run time instead.

use std::cell::RefCell;
use std::fmt;

use crate::MatchError;

/// Holds a matcher that may be resolved at most once through `&self`.
///
/// # Examples
///
/// ```rust
/// use casematch::MatchError;
/// use casematch::matching::{match_value, OneShot};
///
/// let pending = OneShot::new(match_value::<i32, _>(4).case_of(|n: &i32| n % 2 == 0, |n| n / 2));
///
/// assert_eq!(pending.resolve(|matcher| matcher.result()), Ok(Some(2)));
/// assert_eq!(
///     pending.resolve(|matcher| matcher.result()),
///     Err(MatchError::AlreadyResolved)
/// );
/// ```
pub struct OneShot<M> {
    matcher: RefCell<Option<M>>,
}

impl<M> OneShot<M> {
    /// Wraps `matcher` for a single later resolution.
    #[inline]
    pub const fn new(matcher: M) -> Self {
        Self {
            matcher: RefCell::new(Some(matcher)),
        }
    }

    /// Hands the matcher to `terminal` and returns what it produced.
    ///
    /// The matcher is taken out before `terminal` runs, so a panic inside a
    /// guard or action still leaves this `OneShot` spent.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::AlreadyResolved`] if the matcher was already
    /// handed out.
    pub fn resolve<X, F>(&self, terminal: F) -> Result<X, MatchError>
    where
        F: FnOnce(M) -> X,
    {
        let matcher = self
            .matcher
            .borrow_mut()
            .take()
            .ok_or(MatchError::AlreadyResolved)?;
        Ok(terminal(matcher))
    }

    /// Returns `true` if the matcher has already been handed out.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.matcher.borrow().is_none()
    }
}

impl<M> fmt::Debug for OneShot<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OneShot")
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}
