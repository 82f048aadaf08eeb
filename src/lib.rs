//! # casematch
//!
//! First-match-wins case combinators and quantifier classification.
//!
//! ## Overview
//!
//! A matcher holds one input and an ordered list of guarded cases. Exactly
//! one terminal call resolves it: the earliest case whose guard accepts the
//! input runs, and nothing after it is evaluated. This brings the shape of a
//! `match` expression to situations a `match` cannot express directly, such
//! as guards assembled at run time, dispatch on the runtime type behind
//! `dyn Any`, or cases contributed by several pieces of code.
//!
//! - **Matching**: [`ActionMatcher`](matching::ActionMatcher) and
//!   [`ValueMatcher`](matching::ValueMatcher), with unboxed `i32`, `i64` and
//!   `f64` variants
//! - **Found**: classify how many elements of a sequence satisfy a predicate
//! - **Guards**: reusable predicate constructors
//! - **Capture**: cells for collecting values out of action closures
//! - **Derive**: `#[derive(Variants)]` predicates and extractors for enums
//!
//! ## Feature Flags
//!
//! - `matching`: the case-matching engine
//! - `found`: the quantifier classifier
//! - `guards`: helper guard catalogue
//! - `capture`: capture cells
//! - `derive`: `#[derive(Variants)]`
//! - `serde`: serialization for `Found`
//! - `rayon`: parallel classification
//! - `tracing`: trace events from case resolution
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use casematch::prelude::*;
//!
//! let sign = match_int_value::<&str>(-7)
//!     .case_eq(0, |_| "zero")
//!     .case_of(|n: &i32| *n > 0, |_| "positive")
//!     .or_else("negative");
//! assert_eq!(sign, "negative");
//!
//! let found = Found::classify(["foo", "bar", "baz"], |word| word.starts_with('b'));
//! assert_eq!(found.kind(), FoundKind::Some);
//! assert_eq!(found.count(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `tracing` event at trace level when the `tracing` feature is on.
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "casematch", $($argument)*);
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and entry functions.
///
/// # Usage
///
/// ```rust
/// use casematch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MatchError;

    #[cfg(feature = "matching")]
    pub use crate::matching::*;

    #[cfg(feature = "found")]
    pub use crate::found::{Found, FoundKind};

    #[cfg(feature = "capture")]
    pub use crate::capture::{Capture, CaptureList};

    #[cfg(feature = "derive")]
    pub use crate::Variants;
}

mod error;

pub use error::MatchError;

#[cfg(feature = "matching")]
pub mod matching;

#[cfg(feature = "found")]
pub mod found;

#[cfg(feature = "guards")]
pub mod guards;

#[cfg(feature = "capture")]
pub mod capture;

#[cfg(feature = "derive")]
pub use casematch_derive::Variants;
