//! Runtime type dispatch for type-erased inputs.
//!
//! [`Narrow`] is the single "is-instance-of" capability the matchers use for
//! [`case_type`](super::ActionMatcher::case_type) and
//! [`case_instance_of`](super::ActionMatcher::case_instance_of). It is
//! implemented for the usual owners of `dyn Any` and narrows by downcasting:
//! the runtime [`TypeId`](std::any::TypeId) is tested first and the value is
//! only reinterpreted once the test has passed.
//!
//! For closed sum types use the extractors generated by
//! `#[derive(Variants)]` together with `case_narrow` instead.

use std::any::Any;
use std::rc::Rc;

/// A type-erased value whose concrete type can be tested and recovered.
///
/// `Narrowed<U>` is the view the input turns into once it is known to hold a
/// `U`: an unboxed `U` for `Box<dyn Any>`, an `Rc<U>` for `Rc<dyn Any>` and a
/// `&U` for `&dyn Any`.
///
/// # Examples
///
/// ```rust
/// use casematch::matching::Narrow;
/// use std::any::Any;
///
/// let boxed: Box<dyn Any> = Box::new(42_i32);
/// assert!(boxed.is_instance_of::<i32>());
/// assert!(!boxed.is_instance_of::<String>());
///
/// let number: i32 = boxed.narrow::<i32>().ok().unwrap();
/// assert_eq!(number, 42);
/// ```
pub trait Narrow: Sized {
    /// The input viewed as a `U`.
    type Narrowed<U: 'static>;

    /// Returns `true` if the runtime type of the value is `U`.
    fn is_instance_of<U: 'static>(&self) -> bool;

    /// Narrows the value to `U`, or gives it back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the original value if its runtime type is not `U`.
    fn narrow<U: 'static>(self) -> Result<Self::Narrowed<U>, Self>;
}

impl Narrow for Box<dyn Any> {
    type Narrowed<U: 'static> = U;

    #[inline]
    fn is_instance_of<U: 'static>(&self) -> bool {
        (**self).is::<U>()
    }

    #[inline]
    fn narrow<U: 'static>(self) -> Result<U, Self> {
        self.downcast::<U>().map(|value| *value)
    }
}

impl Narrow for Box<dyn Any + Send> {
    type Narrowed<U: 'static> = U;

    #[inline]
    fn is_instance_of<U: 'static>(&self) -> bool {
        (**self).is::<U>()
    }

    #[inline]
    fn narrow<U: 'static>(self) -> Result<U, Self> {
        self.downcast::<U>().map(|value| *value)
    }
}

impl Narrow for Box<dyn Any + Send + Sync> {
    type Narrowed<U: 'static> = U;

    #[inline]
    fn is_instance_of<U: 'static>(&self) -> bool {
        (**self).is::<U>()
    }

    #[inline]
    fn narrow<U: 'static>(self) -> Result<U, Self> {
        self.downcast::<U>().map(|value| *value)
    }
}

impl Narrow for Rc<dyn Any> {
    type Narrowed<U: 'static> = Rc<U>;

    #[inline]
    fn is_instance_of<U: 'static>(&self) -> bool {
        (**self).is::<U>()
    }

    #[inline]
    fn narrow<U: 'static>(self) -> Result<Rc<U>, Self> {
        self.downcast::<U>()
    }
}

impl<'r> Narrow for &'r dyn Any {
    type Narrowed<U: 'static> = &'r U;

    #[inline]
    fn is_instance_of<U: 'static>(&self) -> bool {
        (**self).is::<U>()
    }

    #[inline]
    fn narrow<U: 'static>(self) -> Result<&'r U, Self> {
        self.downcast_ref::<U>().ok_or(self)
    }
}
