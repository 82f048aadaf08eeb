//! Derive macros for casematch.
//!
//! # Available Derive Macros
//!
//! - [`Variants`]: Generates a predicate, a borrowing extractor and an owned
//!   narrowing extractor for each enum variant
//!
//! # Example
//!
//! ```rust,ignore
//! use casematch::Variants;
//! use casematch::matching::match_value;
//!
//! #[derive(Variants)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//!     Empty,
//! }
//!
//! // Generated methods:
//! // - Shape::is_circle(&self) -> bool
//! // - Shape::as_circle(&self) -> Option<&f64>
//! // - Shape::into_circle(self) -> Result<f64, Shape>
//! // - Shape::as_rectangle(&self) -> Option<(&f64, &f64)>
//! // - Shape::into_rectangle(self) -> Result<(f64, f64), Shape>
//! // - Shape::into_empty(self) -> Result<(), Shape>
//! // ...
//!
//! let area = match_value::<f64, _>(Shape::Rectangle(2.0, 3.0))
//!     .case_narrow(Shape::into_circle, |r| std::f64::consts::PI * r * r)
//!     .case_narrow(Shape::into_rectangle, |(w, h)| w * h)
//!     .or_else(0.0);
//! assert_eq!(area, 6.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod variants;

use proc_macro::TokenStream;

/// Derive macro generating guards and extractors for enum variants.
///
/// For each variant `Foo` the macro generates three inherent methods, named
/// after the variant in `snake_case`:
///
/// ```rust,ignore
/// impl EnumName {
///     pub const fn is_foo(&self) -> bool { ... }
///     pub const fn as_foo(&self) -> Option<..references..> { ... }
///     pub fn into_foo(self) -> Result<..fields.., Self> { ... }
/// }
/// ```
///
/// The extracted shape depends on the variant:
///
/// | variant              | `as_foo`              | `into_foo`          |
/// |----------------------|-----------------------|---------------------|
/// | `Foo`                | `Option<()>`          | `Result<(), Self>`  |
/// | `Foo(A)`             | `Option<&A>`          | `Result<A, Self>`   |
/// | `Foo(A, B)`          | `Option<(&A, &B)>`    | `Result<(A, B), Self>` |
/// | `Foo { a: A, b: B }` | `Option<(&A, &B)>`    | `Result<(A, B), Self>` |
///
/// Fields of struct variants are extracted in declaration order. `is_foo`
/// works as a `case_of` guard, `as_foo` with `case_extract` on borrowed
/// inputs, and `into_foo` with `case_narrow`, which hands the action the
/// owned fields.
///
/// # Requirements
///
/// - The type must be an enum; structs and unions are rejected
///
/// # Example
///
/// ```rust,ignore
/// use casematch::Variants;
///
/// #[derive(Debug, PartialEq, Variants)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Quit,
/// }
///
/// let click = Event::Click { x: 3, y: 4 };
/// assert!(click.is_click());
/// assert_eq!(click.as_click(), Some((&3, &4)));
/// assert_eq!(click.into_key_press(), Err(Event::Click { x: 3, y: 4 }));
/// ```
#[proc_macro_derive(Variants)]
pub fn derive_variants(input: TokenStream) -> TokenStream {
    variants::derive_variants_impl(input)
}
