//! The matcher whose cases run side effects.

use std::fmt;

use super::case::{Case, CaseList, Resolution};
use super::{Guard, Narrow};
use crate::MatchError;

/// A case matcher whose actions consume the input and produce nothing.
///
/// Cases are registered with the chainable `case_*` methods and resolved by
/// exactly one terminal method (`resolve`, `otherwise`, `otherwise_err` or
/// `otherwise_fail`). Every terminal consumes the matcher.
///
/// Nothing runs during registration. When the terminal is called, the cases
/// are tried in registration order and only the first one whose guard passes
/// has its action run. Guards of later cases are never evaluated.
///
/// # Examples
///
/// ```rust
/// use casematch::matching::match_on;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
///
/// match_on(-3)
///     .case_of(|n: &i32| *n > 0, |n| log.borrow_mut().push(format!("positive {n}")))
///     .case_of(|n: &i32| *n < 0, |n| log.borrow_mut().push(format!("negative {n}")))
///     .otherwise(|n| log.borrow_mut().push(format!("zero {n}")));
///
/// assert_eq!(*log.borrow(), vec!["negative -3".to_string()]);
/// ```
#[must_use = "a matcher does nothing until a terminal operation is called"]
pub struct ActionMatcher<'a, T> {
    cases: CaseList<'a, T, ()>,
}

/// Creates an [`ActionMatcher`] over `input`.
///
/// # Examples
///
/// ```rust
/// use casematch::matching::match_on;
///
/// let fired = match_on("text").case_of(|s: &&str| s.is_empty(), |_| {}).resolve();
/// assert!(!fired);
/// ```
#[inline]
pub fn match_on<'a, T>(input: T) -> ActionMatcher<'a, T> {
    ActionMatcher::new(input)
}

impl<'a, T> ActionMatcher<'a, T> {
    /// Creates a matcher over `input` with no cases.
    #[inline]
    pub fn new(input: T) -> Self {
        Self {
            cases: CaseList::new(input),
        }
    }

    /// Returns the number of registered cases.
    #[inline]
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Adds a case guarded by `guard`, in any of its shapes.
    #[inline]
    pub fn case_guard<A>(mut self, guard: Guard<'a, T>, action: A) -> Self
    where
        A: FnOnce(T) + 'a,
    {
        self.cases.push(Case::guarded(guard, action));
        self
    }

    /// Adds a case whose test and action share one allocation.
    #[inline]
    pub(super) fn case_tested<Q, A>(mut self, test: Q, action: A) -> Self
    where
        Q: FnOnce(&T) -> bool + 'a,
        A: FnOnce(T) + 'a,
    {
        self.cases.push(Case::testing(test, action));
        self
    }

    /// Adds a case applying when `predicate` accepts the input.
    #[inline]
    pub fn case_of<P, A>(self, predicate: P, action: A) -> Self
    where
        P: FnOnce(&T) -> bool + 'a,
        A: FnOnce(T) + 'a,
    {
        self.case_guard(Guard::predicate(predicate), action)
    }

    /// Adds a case applying when `condition` returns `true`.
    ///
    /// The condition does not see the input and only runs if resolution
    /// reaches this case.
    #[inline]
    pub fn case_when<S, A>(self, condition: S, action: A) -> Self
    where
        S: FnOnce() -> bool + 'a,
        A: FnOnce(T) + 'a,
    {
        self.case_guard(Guard::supplier(condition), action)
    }

    /// Adds a case applying when `condition` is `true`.
    ///
    /// `condition` is an ordinary argument, so it is computed by the caller
    /// now, even if an earlier case ends up matching. The case is still only
    /// considered in its turn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_on;
    /// use std::cell::Cell;
    ///
    /// let computed = Cell::new(false);
    /// let condition = || {
    ///     computed.set(true);
    ///     true
    /// };
    ///
    /// let fired = match_on(1)
    ///     .case_of(|_: &i32| true, |_| {})
    ///     .case_if(condition(), |_| unreachable!())
    ///     .resolve();
    ///
    /// assert!(fired);
    /// assert!(computed.get());
    /// ```
    #[inline]
    pub fn case_if<A>(self, condition: bool, action: A) -> Self
    where
        A: FnOnce(T) + 'a,
    {
        self.case_guard(Guard::literal(condition), action)
    }

    /// Adds a case applying when `extract` finds a value in the input.
    ///
    /// The action receives the extracted value instead of the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_on;
    /// use std::cell::Cell;
    ///
    /// let port = Cell::new(0_u16);
    /// match_on("localhost:8080")
    ///     .case_extract(
    ///         |address: &&str| address.rsplit_once(':').and_then(|(_, p)| p.parse().ok()),
    ///         |parsed: u16| port.set(parsed),
    ///     )
    ///     .otherwise(|_| port.set(80));
    ///
    /// assert_eq!(port.get(), 8080);
    /// ```
    #[inline]
    pub fn case_extract<X, E, A>(mut self, extract: E, action: A) -> Self
    where
        E: FnOnce(&T) -> Option<X> + 'a,
        A: FnOnce(X) + 'a,
    {
        self.cases.push(Case::extracting(extract, action));
        self
    }

    /// Adds a case applying when `narrow` converts the owned input.
    ///
    /// `narrow` gives the input back in `Err` to decline, which lets it move
    /// parts of the input into the action without cloning.
    #[inline]
    pub fn case_narrow<X, N, A>(mut self, narrow: N, action: A) -> Self
    where
        N: FnOnce(T) -> Result<X, T> + 'a,
        A: FnOnce(X) + 'a,
    {
        self.cases.push(Case::narrowing(narrow, action));
        self
    }

    /// Resolves the matcher and reports whether a case fired.
    #[inline]
    pub fn resolve(self) -> bool {
        matches!(self.cases.resolve(), Resolution::Fired(()))
    }

    /// Resolves the matcher, handing the input to `fallback` if no case fired.
    #[inline]
    pub fn otherwise<F>(self, fallback: F)
    where
        F: FnOnce(T),
    {
        if let Resolution::Unmatched(input) = self.cases.resolve() {
            fallback(input);
        }
    }

    /// Resolves the matcher, failing with the error built by `error` if no
    /// case fired.
    ///
    /// # Errors
    ///
    /// Returns `error(input)` when no case fired.
    #[inline]
    pub fn otherwise_err<E, F>(self, error: F) -> Result<(), E>
    where
        F: FnOnce(T) -> E,
    {
        match self.cases.resolve() {
            Resolution::Fired(()) => Ok(()),
            Resolution::Unmatched(input) => Err(error(input)),
        }
    }

    /// Resolves the matcher, failing with [`MatchError::NoMatch`] if no case
    /// fired.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoMatch`] when no case fired.
    #[inline]
    pub fn otherwise_fail(self) -> Result<(), MatchError> {
        self.otherwise_err(|_| MatchError::NoMatch)
    }
}

impl<'a, T: Narrow> ActionMatcher<'a, T> {
    /// Adds a case applying when the runtime type of the input is `U`.
    ///
    /// The action receives the input narrowed to `U` (see
    /// [`Narrow::Narrowed`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_on;
    /// use std::any::Any;
    /// use std::cell::RefCell;
    ///
    /// let seen = RefCell::new(String::new());
    /// let input: Box<dyn Any> = Box::new(String::from("x"));
    ///
    /// match_on(input)
    ///     .case_type::<String, _>(|text| seen.borrow_mut().push_str(&format!("S:{text}")))
    ///     .case_type::<i32, _>(|number| seen.borrow_mut().push_str(&format!("I:{number}")))
    ///     .otherwise(|_| seen.borrow_mut().push_str("other"));
    ///
    /// assert_eq!(*seen.borrow(), "S:x");
    /// ```
    #[inline]
    pub fn case_type<U: 'static, A>(self, action: A) -> Self
    where
        A: FnOnce(T::Narrowed<U>) + 'a,
    {
        self.case_narrow(|input: T| input.narrow::<U>(), action)
    }

    /// Adds a case applying when the runtime type of the input is `U`.
    ///
    /// Unlike [`case_type`](Self::case_type), the action receives the input
    /// as it is.
    #[inline]
    pub fn case_instance_of<U: 'static, A>(self, action: A) -> Self
    where
        A: FnOnce(T) + 'a,
    {
        self.case_guard(Guard::instance_of::<U>(), action)
    }
}

impl<T: fmt::Debug> fmt::Debug for ActionMatcher<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ActionMatcher")
            .field("input", self.cases.input())
            .field("cases", &self.cases.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn no_cases_resolves_to_false() {
        assert!(!match_on(1).resolve());
    }

    #[rstest]
    #[case(5, "positive")]
    #[case(-5, "negative")]
    #[case(0, "zero")]
    fn first_matching_case_runs(#[case] input: i32, #[case] expected: &str) {
        let seen = Cell::new("");
        match_on(input)
            .case_of(|n: &i32| *n > 0, |_| seen.set("positive"))
            .case_of(|n: &i32| *n < 0, |_| seen.set("negative"))
            .otherwise(|_| seen.set("zero"));
        assert_eq!(seen.get(), expected);
    }

    #[rstest]
    fn otherwise_receives_original_input() {
        let received = RefCell::new(None);
        match_on(String::from("kept"))
            .case_of(|s: &String| s.is_empty(), |_| {})
            .otherwise(|s| *received.borrow_mut() = Some(s));
        assert_eq!(received.into_inner().as_deref(), Some("kept"));
    }

    #[rstest]
    fn otherwise_not_called_when_case_fired() {
        let called = Cell::new(false);
        match_on(1)
            .case_of(|_: &i32| true, |_| {})
            .otherwise(|_| called.set(true));
        assert!(!called.get());
    }

    #[rstest]
    fn otherwise_err_returns_factory_error() {
        let result = match_on(7)
            .case_of(|n: &i32| *n == 0, |_| {})
            .otherwise_err(|n| format!("unexpected {n}"));
        assert_eq!(result, Err(String::from("unexpected 7")));
    }

    #[rstest]
    fn otherwise_fail_reports_no_match() {
        assert_eq!(match_on(7).otherwise_fail(), Err(MatchError::NoMatch));
        assert_eq!(match_on(7).case_if(true, |_| {}).otherwise_fail(), Ok(()));
    }

    #[rstest]
    fn supplier_guard_not_called_after_match() {
        let calls = Cell::new(0);
        let fired = match_on(())
            .case_if(true, |()| {})
            .case_when(
                || {
                    calls.set(calls.get() + 1);
                    true
                },
                |()| {},
            )
            .resolve();
        assert!(fired);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn narrow_case_moves_field_into_action() {
        let taken = RefCell::new(Vec::new());
        match_on(Ok::<Vec<u8>, String>(vec![1, 2]))
            .case_narrow(|r: Result<Vec<u8>, String>| r.map_err(Err), |bytes| {
                *taken.borrow_mut() = bytes;
            })
            .otherwise(|_| {});
        assert_eq!(*taken.borrow(), vec![1, 2]);
    }

    #[rstest]
    fn debug_shows_input_and_case_count() {
        let matcher = match_on(3).case_if(false, |_| {}).case_if(true, |_| {});
        assert_eq!(matcher.case_count(), 2);
        assert_eq!(format!("{matcher:?}"), "ActionMatcher { input: 3, cases: 2 }");
    }
}
