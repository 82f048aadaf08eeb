//! Cells for carrying values out of action closures.
//!
//! Matcher actions are `FnOnce` closures, and several of them usually need
//! access to the same destination. A capture cell is written through a
//! shared reference, so every action can hold `&cell` and the caller reads
//! the cell once the terminal call has returned. The matching engine does
//! not know about these cells.
//!
//! # Examples
//!
//! ```rust
//! use casematch::capture::{Capture, CaptureList};
//! use casematch::matching::match_on;
//!
//! let key = Capture::new();
//! let rejected = CaptureList::new();
//!
//! for entry in ["name=casematch", "broken", "kind=library"] {
//!     match_on(entry)
//!         .case_extract(
//!             |e: &&str| e.split_once('=').map(|(k, _)| k.to_owned()),
//!             |k| {
//!                 key.set(k);
//!             },
//!         )
//!         .otherwise(rejected.pusher());
//! }
//!
//! assert_eq!(key.get().as_deref(), Some("kind"));
//! assert_eq!(rejected.into_vec(), vec!["broken"]);
//! ```

use std::cell::RefCell;

/// A single slot written by an action and read after resolution.
#[derive(Debug)]
pub struct Capture<T> {
    slot: RefCell<Option<T>>,
}

impl<T> Capture<T> {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Stores `value`, returning the value it replaced.
    pub fn set(&self, value: T) -> Option<T> {
        self.slot.replace(Some(value))
    }

    /// Returns a closure storing its argument in this cell, for use as an
    /// action.
    pub fn setter(&self) -> impl Fn(T) + '_ {
        move |value| {
            self.set(value);
        }
    }

    /// Removes and returns the stored value.
    pub fn take(&self) -> Option<T> {
        self.slot.take()
    }

    /// Returns `true` if a value is stored.
    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Consumes the cell, returning the stored value.
    pub fn into_inner(self) -> Option<T> {
        self.slot.into_inner()
    }
}

impl<T> Default for Capture<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Capture<T> {
    /// Returns a clone of the stored value.
    pub fn get(&self) -> Option<T> {
        self.slot.borrow().clone()
    }
}

/// An append-only list written by actions and read after resolution.
#[derive(Debug)]
pub struct CaptureList<T> {
    values: RefCell<Vec<T>>,
}

impl<T> CaptureList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: RefCell::new(Vec::new()),
        }
    }

    /// Appends `value`.
    pub fn push(&self, value: T) {
        self.values.borrow_mut().push(value);
    }

    /// Returns a closure appending its argument to this list, for use as an
    /// action.
    pub fn pusher(&self) -> impl Fn(T) + '_ {
        move |value| self.push(value)
    }

    /// Returns the number of captured values.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Returns `true` if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    /// Removes and returns every captured value, leaving the list empty.
    pub fn take_all(&self) -> Vec<T> {
        self.values.take()
    }

    /// Consumes the list, returning the captured values in capture order.
    pub fn into_vec(self) -> Vec<T> {
        self.values.into_inner()
    }
}

impl<T> Default for CaptureList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> CaptureList<T> {
    /// Returns a copy of the captured values in capture order.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.borrow().clone()
    }
}
