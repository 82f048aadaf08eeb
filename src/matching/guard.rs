//! Guards: the conditions deciding whether a case applies.
//!
//! A [`Guard`] is a tagged union over the four guard shapes a case can be
//! registered with. All shapes are evaluated through the single dispatch
//! function [`Guard::test`], so the engine never needs to know which shape
//! the caller used.

use std::fmt;

use super::Narrow;

/// The shape of a [`Guard`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardKind {
    /// A predicate over the input.
    Predicate,
    /// A runtime type test on the input.
    Instance,
    /// A zero-argument condition, independent of the input.
    Supplier,
    /// A boolean computed by the caller before registration.
    Literal,
}

impl GuardKind {
    /// Returns a short lowercase name for the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Predicate => "predicate",
            Self::Instance => "instance",
            Self::Supplier => "supplier",
            Self::Literal => "literal",
        }
    }
}

/// A condition deciding whether a case applies to the input.
///
/// Each guard is evaluated at most once, when resolution reaches its case.
/// A guard belonging to a case after the first matching one is never
/// evaluated at all, with one exception: the value of a [`Guard::Literal`]
/// was already computed by the caller when the case was registered.
///
/// # Examples
///
/// ```rust
/// use casematch::matching::Guard;
///
/// let positive = Guard::predicate(|value: &i32| *value > 0);
/// assert!(positive.test(&5));
///
/// let always = Guard::<i32>::literal(true);
/// assert!(always.test(&-5));
/// ```
pub enum Guard<'a, T> {
    /// A predicate over the input.
    Predicate(Box<dyn FnOnce(&T) -> bool + 'a>),
    /// A runtime type test, built from [`Narrow::is_instance_of`].
    Instance {
        /// The name of the target type, for diagnostics.
        type_name: &'static str,
        /// The monomorphized type test.
        test: fn(&T) -> bool,
    },
    /// A condition that ignores the input.
    Supplier(Box<dyn FnOnce() -> bool + 'a>),
    /// A precomputed boolean.
    Literal(bool),
}

impl<'a, T> Guard<'a, T> {
    /// Creates a predicate guard.
    #[inline]
    pub fn predicate<P>(predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + 'a,
    {
        Self::Predicate(Box::new(predicate))
    }

    /// Creates a guard that ignores the input and asks `condition` instead.
    #[inline]
    pub fn supplier<S>(condition: S) -> Self
    where
        S: FnOnce() -> bool + 'a,
    {
        Self::Supplier(Box::new(condition))
    }

    /// Creates a guard from a boolean the caller has already computed.
    ///
    /// The expression producing `value` runs when the guard is built, even if
    /// an earlier case ends up matching. Use [`Guard::supplier`] to defer it.
    #[inline]
    pub const fn literal(value: bool) -> Self {
        Self::Literal(value)
    }

    /// Returns the shape of this guard.
    #[inline]
    pub const fn kind(&self) -> GuardKind {
        match self {
            Self::Predicate(_) => GuardKind::Predicate,
            Self::Instance { .. } => GuardKind::Instance,
            Self::Supplier(_) => GuardKind::Supplier,
            Self::Literal(_) => GuardKind::Literal,
        }
    }

    /// Evaluates the guard against `input`, consuming it.
    #[inline]
    pub fn test(self, input: &T) -> bool {
        match self {
            Self::Predicate(predicate) => predicate(input),
            Self::Instance { test, .. } => test(input),
            Self::Supplier(condition) => condition(),
            Self::Literal(value) => value,
        }
    }
}

impl<T: Narrow> Guard<'_, T> {
    /// Creates a guard passing when the runtime type of the input is `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::matching::Guard;
    /// use std::any::Any;
    ///
    /// let input: Box<dyn Any> = Box::new("text");
    /// assert!(Guard::instance_of::<&str>().test(&input));
    /// assert!(!Guard::instance_of::<String>().test(&input));
    /// ```
    #[inline]
    #[must_use]
    pub fn instance_of<U: 'static>() -> Self {
        Self::Instance {
            type_name: std::any::type_name::<U>(),
            test: T::is_instance_of::<U>,
        }
    }
}

impl<T> fmt::Debug for Guard<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => formatter.write_str("Predicate(<fn>)"),
            Self::Instance { type_name, .. } => formatter
                .debug_struct("Instance")
                .field("type_name", type_name)
                .finish_non_exhaustive(),
            Self::Supplier(_) => formatter.write_str("Supplier(<fn>)"),
            Self::Literal(value) => formatter.debug_tuple("Literal").field(value).finish(),
        }
    }
}
