//! The matcher whose cases produce a value.

use std::fmt;
use std::marker::PhantomData;

use super::case::{Case, CaseList, Resolution};
use super::{Guard, Narrow, Outcome};
use crate::MatchError;

/// A case matcher whose actions produce a value of type `O`.
///
/// An action may return `O` or `Option<O>`; returning `None` means the case
/// fired but produced nothing. That state is kept apart from "no case fired"
/// and every terminal treats the two differently:
///
/// | terminal          | no case fired      | fired, absent   | fired, present |
/// |-------------------|--------------------|-----------------|----------------|
/// | `result`          | `None`             | `None`          | `Some(o)`      |
/// | `otherwise(v)`    | `Some(v)`          | `None`          | `Some(o)`      |
/// | `or_else(v)`      | `v`                | `v`             | `o`            |
/// | `or_else_fail`    | `Err(NoMatch)`     | `Err(NoMatch)`  | `Ok(o)`        |
/// | `outcome`         | `Unmatched`        | `Absent`        | `Present(o)`   |
///
/// # Examples
///
/// ```rust
/// use casematch::matching::match_value;
///
/// let kind = match_value::<&str, _>(42)
///     .case_of(|n: &i32| *n < 0, |_| "negative")
///     .case_of(|n: &i32| n % 2 == 0, |_| "even")
///     .case_of(|_: &i32| true, |_| "odd")
///     .result();
///
/// assert_eq!(kind, Some("even"));
/// ```
#[must_use = "a matcher does nothing until a terminal operation is called"]
pub struct ValueMatcher<'a, T, O> {
    cases: CaseList<'a, T, Option<O>>,
    output: PhantomData<fn() -> O>,
}

/// Creates a [`ValueMatcher`] over `input` producing values of type `O`.
///
/// `O` is the declared result type; it is usually spelled out with a
/// turbofish and is used only for type inference.
///
/// # Examples
///
/// ```rust
/// use casematch::matching::match_value;
///
/// let length = match_value::<usize, _>(String::from("four"))
///     .case_of(|s: &String| !s.is_empty(), |s| s.len())
///     .or_else(0);
///
/// assert_eq!(length, 4);
/// ```
#[inline]
pub fn match_value<'a, O, T>(input: T) -> ValueMatcher<'a, T, O> {
    ValueMatcher::new(input)
}

impl<'a, T, O> ValueMatcher<'a, T, O> {
    /// Creates a matcher over `input` with no cases.
    #[inline]
    pub fn new(input: T) -> Self {
        Self {
            cases: CaseList::new(input),
            output: PhantomData,
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
    pub fn case_guard<A, R>(mut self, guard: Guard<'a, T>, action: A) -> Self
    where
        A: FnOnce(T) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.cases
            .push(Case::guarded(guard, move |input| action(input).into()));
        self
    }

    /// Adds a case whose test and action share one allocation.
    #[inline]
    pub(super) fn case_tested<Q, A, R>(mut self, test: Q, action: A) -> Self
    where
        Q: FnOnce(&T) -> bool + 'a,
        A: FnOnce(T) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.cases
            .push(Case::testing(test, move |input| action(input).into()));
        self
    }

    /// Adds a case applying when `predicate` accepts the input.
    #[inline]
    pub fn case_of<P, A, R>(self, predicate: P, action: A) -> Self
    where
        P: FnOnce(&T) -> bool + 'a,
        A: FnOnce(T) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.case_guard(Guard::predicate(predicate), action)
    }

    /// Adds a case applying when `condition` returns `true`.
    #[inline]
    pub fn case_when<S, A, R>(self, condition: S, action: A) -> Self
    where
        S: FnOnce() -> bool + 'a,
        A: FnOnce(T) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.case_guard(Guard::supplier(condition), action)
    }

    /// Adds a case applying when `condition` is `true`.
    ///
    /// `condition` is computed by the caller at registration, even if an
    /// earlier case ends up matching.
    #[inline]
    pub fn case_if<A, R>(self, condition: bool, action: A) -> Self
    where
        A: FnOnce(T) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.case_guard(Guard::literal(condition), action)
    }

    /// Adds a case applying when `extract` finds a value in the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_value;
    ///
    /// let doubled = match_value::<i64, _>("21")
    ///     .case_extract(|s: &&str| s.parse::<i64>().ok(), |n| n * 2)
    ///     .result();
    ///
    /// assert_eq!(doubled, Some(42));
    /// ```
    #[inline]
    pub fn case_extract<X, E, A, R>(mut self, extract: E, action: A) -> Self
    where
        E: FnOnce(&T) -> Option<X> + 'a,
        A: FnOnce(X) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.cases
            .push(Case::extracting(extract, move |value| action(value).into()));
        self
    }

    /// Adds a case applying when `narrow` converts the owned input.
    #[inline]
    pub fn case_narrow<X, N, A, R>(mut self, narrow: N, action: A) -> Self
    where
        N: FnOnce(T) -> Result<X, T> + 'a,
        A: FnOnce(X) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.cases
            .push(Case::narrowing(narrow, move |value| action(value).into()));
        self
    }

    /// Resolves the matcher into its three-way [`Outcome`].
    #[inline]
    pub fn outcome(self) -> Outcome<O> {
        match self.cases.resolve() {
            Resolution::Fired(Some(value)) => Outcome::Present(value),
            Resolution::Fired(None) => Outcome::Absent,
            Resolution::Unmatched(_) => Outcome::Unmatched,
        }
    }

    /// Resolves the matcher into the produced value, if any.
    ///
    /// "No case fired" and "a case fired without a value" both yield `None`;
    /// use [`outcome`](Self::outcome) to tell them apart.
    #[inline]
    pub fn result(self) -> Option<O> {
        self.outcome().into_option()
    }

    /// Resolves the matcher, substituting `value` only if no case fired.
    ///
    /// A case that fired without a value still yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_value;
    ///
    /// let unmatched = match_value::<i32, _>(1).case_if(false, |n| n).otherwise(0);
    /// assert_eq!(unmatched, Some(0));
    ///
    /// let absent = match_value::<i32, _>(1)
    ///     .case_if(true, |_| -> Option<i32> { None })
    ///     .otherwise(0);
    /// assert_eq!(absent, None);
    /// ```
    #[inline]
    pub fn otherwise(self, value: O) -> Option<O> {
        self.otherwise_with(|_| value)
    }

    /// Resolves the matcher, computing a value from the input only if no
    /// case fired.
    #[inline]
    pub fn otherwise_with<F>(self, fallback: F) -> Option<O>
    where
        F: FnOnce(T) -> O,
    {
        match self.cases.resolve() {
            Resolution::Fired(payload) => payload,
            Resolution::Unmatched(input) => Some(fallback(input)),
        }
    }

    /// Resolves the matcher, substituting `value` if no value was produced.
    #[inline]
    pub fn or_else(self, value: O) -> O {
        self.result().unwrap_or(value)
    }

    /// Resolves the matcher, calling `supplier` if no value was produced.
    #[inline]
    pub fn or_else_with<S>(self, supplier: S) -> O
    where
        S: FnOnce() -> O,
    {
        self.result().unwrap_or_else(supplier)
    }

    /// Resolves the matcher, failing with the error built by `error` if no
    /// value was produced.
    ///
    /// # Errors
    ///
    /// Returns `error()` when no case fired or the fired case produced no
    /// value.
    #[inline]
    pub fn or_else_err<E, F>(self, error: F) -> Result<O, E>
    where
        F: FnOnce() -> E,
    {
        self.result().ok_or_else(error)
    }

    /// Resolves the matcher, failing with [`MatchError::NoMatch`] if no
    /// value was produced.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoMatch`] when no case fired or the fired case
    /// produced no value.
    #[inline]
    pub fn or_else_fail(self) -> Result<O, MatchError> {
        self.or_else_err(|| MatchError::NoMatch)
    }

    /// Resolves the matcher, passing the produced value to `consumer`.
    ///
    /// `consumer` is not called when no value was produced.
    #[inline]
    pub fn if_result<C>(self, consumer: C)
    where
        C: FnOnce(O),
    {
        if let Some(value) = self.result() {
            consumer(value);
        }
    }

    /// Resolves the matcher, calling exactly one of the two continuations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_value;
    ///
    /// let message = match_value::<u8, _>(300_u32)
    ///     .case_extract(|n: &u32| u8::try_from(*n).ok(), |byte| byte)
    ///     .then(|byte| format!("byte {byte}"), || String::from("too large"));
    ///
    /// assert_eq!(message, "too large");
    /// ```
    #[inline]
    pub fn then<R, F, G>(self, on_result: F, on_absent: G) -> R
    where
        F: FnOnce(O) -> R,
        G: FnOnce() -> R,
    {
        self.result().map_or_else(on_absent, on_result)
    }
}

impl<'a, T: Narrow, O> ValueMatcher<'a, T, O> {
    /// Adds a case applying when the runtime type of the input is `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::match_value;
    /// use std::any::Any;
    ///
    /// let input: Box<dyn Any> = Box::new(7_i32);
    /// let label = match_value::<String, _>(input)
    ///     .case_type::<String, _, _>(|text| text)
    ///     .case_type::<i32, _, _>(|number| format!("int {number}"))
    ///     .or_else(String::from("unknown"));
    ///
    /// assert_eq!(label, "int 7");
    /// ```
    #[inline]
    pub fn case_type<U: 'static, A, R>(self, action: A) -> Self
    where
        A: FnOnce(T::Narrowed<U>) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.case_narrow(|input: T| input.narrow::<U>(), action)
    }

    /// Adds a case applying when the runtime type of the input is `U`,
    /// handing the action the input as it is.
    #[inline]
    pub fn case_instance_of<U: 'static, A, R>(self, action: A) -> Self
    where
        A: FnOnce(T) -> R + 'a,
        R: Into<Option<O>>,
    {
        self.case_guard(Guard::instance_of::<U>(), action)
    }
}

impl<T: fmt::Debug, O> fmt::Debug for ValueMatcher<'_, T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValueMatcher")
            .field("input", self.cases.input())
            .field("cases", &self.cases.len())
            .field("output", &std::any::type_name::<O>())
            .finish()
    }
}
