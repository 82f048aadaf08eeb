//! Quantifier classification.
//!
//! [`Found`] records how many elements of a sequence satisfy a predicate and
//! whether that is none, some or all of them. The predicate is applied to
//! every element; there is no early exit, so the count is always exact.
//!
//! # Examples
//!
//! ```rust
//! use casematch::found::{Found, FoundKind, exists, for_all};
//!
//! let words = ["foo", "bar", "baz"];
//!
//! let found = Found::classify(words, |word| word.starts_with('b'));
//! assert_eq!(found.kind(), FoundKind::Some);
//! assert_eq!(found.count(), 2);
//!
//! assert!(exists(words, |word| word.len() == 3));
//! assert!(for_all(words, |word| word.len() == 3));
//! assert!(!for_all(Vec::<&str>::new(), |_| true));
//! ```

#[cfg(feature = "rayon")]
mod parallel;

use std::fmt;

use crate::MatchError;

/// How many elements satisfied the predicate, relative to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FoundKind {
    /// No element satisfied the predicate, including the empty sequence.
    None,
    /// At least one element but not every element satisfied it.
    Some,
    /// Every element of a non-empty sequence satisfied it.
    All,
}

impl fmt::Display for FoundKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Some => "Some",
            Self::All => "All",
        };
        formatter.write_str(name)
    }
}

/// The classification of a sequence against a predicate.
///
/// The kind and the count always agree: the kind is [`FoundKind::None`]
/// exactly when the count is zero, [`FoundKind::All`] when the count equals
/// the (non-zero) number of elements scanned, and [`FoundKind::Some`]
/// otherwise. Both fields are private so this cannot be broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFound"))]
pub struct Found {
    kind: FoundKind,
    count: usize,
}

impl Found {
    /// The classification of an empty sequence.
    pub const NONE: Self = Self {
        kind: FoundKind::None,
        count: 0,
    };

    /// Classifies `sequence` against `predicate`.
    ///
    /// The predicate runs once per element, in iteration order, and a panic
    /// in it propagates without producing a `Found`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::found::{Found, FoundKind};
    ///
    /// let evens = Found::classify(&[2, 4, 6], |n| n % 2 == 0);
    /// assert_eq!(evens.kind(), FoundKind::All);
    /// assert_eq!(evens.count(), 3);
    ///
    /// assert_eq!(Found::classify(Vec::<i32>::new(), |_| true), Found::NONE);
    /// ```
    pub fn classify<I, P>(sequence: I, mut predicate: P) -> Self
    where
        I: IntoIterator,
        P: FnMut(I::Item) -> bool,
    {
        let (count, total) = sequence
            .into_iter()
            .fold((0_usize, 0_usize), |(count, total), item| {
                (count + usize::from(predicate(item)), total + 1)
            });
        Self::tally(count, total)
    }

    /// Classifies a sequence that may be absent; an absent sequence is
    /// treated as empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::found::Found;
    ///
    /// let missing: Option<Vec<u8>> = None;
    /// assert_eq!(Found::classify_nullable(missing, |_| true), Found::NONE);
    /// ```
    pub fn classify_nullable<I, P>(sequence: Option<I>, predicate: P) -> Self
    where
        I: IntoIterator,
        P: FnMut(I::Item) -> bool,
    {
        sequence.map_or(Self::NONE, |sequence| Self::classify(sequence, predicate))
    }

    /// Builds a `Found` from a count of matching elements out of `total`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidArgument`] if `count` exceeds `total`.
    pub fn from_counts(count: usize, total: usize) -> Result<Self, MatchError> {
        if count > total {
            Err(MatchError::invalid_argument(
                "count",
                format!("{count} matching elements out of {total}"),
            ))
        } else {
            Ok(Self::tally(count, total))
        }
    }

    const fn tally(count: usize, total: usize) -> Self {
        let kind = if count == 0 {
            FoundKind::None
        } else if count == total {
            FoundKind::All
        } else {
            FoundKind::Some
        };
        Self { kind, count }
    }

    /// Returns the kind of the classification.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> FoundKind {
        self.kind
    }

    /// Returns how many elements satisfied the predicate.
    #[inline]
    #[must_use]
    pub const fn count(self) -> usize {
        self.count
    }

    /// Returns `true` if at least one element satisfied the predicate.
    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        !matches!(self.kind, FoundKind::None)
    }

    /// Returns `true` if every element of a non-empty sequence satisfied the
    /// predicate.
    #[inline]
    #[must_use]
    pub const fn all(self) -> bool {
        matches!(self.kind, FoundKind::All)
    }
}

impl Default for Found {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Found {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}({})", self.kind, self.count)
    }
}

/// Classifies a sequence of already evaluated predicate results.
impl FromIterator<bool> for Found {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::classify(iter, |passed| passed)
    }
}

/// The unchecked wire form of [`Found`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFound {
    kind: FoundKind,
    count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFound> for Found {
    type Error = MatchError;

    fn try_from(raw: RawFound) -> Result<Self, Self::Error> {
        match (raw.kind, raw.count) {
            (FoundKind::None, 0) => Ok(Self::NONE),
            (FoundKind::None, count) => Err(MatchError::invalid_argument(
                "count",
                format!("kind None requires a count of 0, got {count}"),
            )),
            (kind, 0) => Err(MatchError::invalid_argument(
                "count",
                format!("kind {kind} requires a non-zero count"),
            )),
            (kind, count) => Ok(Self { kind, count }),
        }
    }
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Every element is still visited.
pub fn exists<I, P>(sequence: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    Found::classify(sequence, predicate).any()
}

/// Returns `true` if the sequence is non-empty and every element satisfies
/// `predicate`.
pub fn for_all<I, P>(sequence: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    Found::classify(sequence, predicate).all()
}

/// Returns `true` if no element satisfies `predicate`, including when the
/// sequence is empty.
pub fn none_match<I, P>(sequence: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    Found::classify(sequence, predicate).kind() == FoundKind::None
}

static_assertions::assert_impl_all!(Found: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(&[], FoundKind::None, 0)]
    #[case(&[1, 3, 5], FoundKind::None, 0)]
    #[case(&[1, 2, 3], FoundKind::Some, 1)]
    #[case(&[2, 4], FoundKind::All, 2)]
    fn classify_even_numbers(
        #[case] numbers: &[i32],
        #[case] kind: FoundKind,
        #[case] count: usize,
    ) {
        let found = Found::classify(numbers, |n| n % 2 == 0);
        assert_eq!(found.kind(), kind);
        assert_eq!(found.count(), count);
    }

    #[rstest]
    fn predicate_runs_on_every_element() {
        let calls = Cell::new(0);
        let found = Found::classify(0..10, |_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 10);
        assert!(found.all());
    }

    #[rstest]
    fn absent_sequence_is_none() {
        assert_eq!(Found::classify_nullable(None::<Vec<i32>>, |_| true), Found::NONE);
        assert_eq!(
            Found::classify_nullable(Some(vec![1]), |_| true).kind(),
            FoundKind::All
        );
    }

    #[rstest]
    #[case(0, 0, FoundKind::None)]
    #[case(0, 4, FoundKind::None)]
    #[case(2, 4, FoundKind::Some)]
    #[case(4, 4, FoundKind::All)]
    fn from_counts_derives_kind(#[case] count: usize, #[case] total: usize, #[case] kind: FoundKind) {
        assert_eq!(Found::from_counts(count, total).map(Found::kind), Ok(kind));
    }

    #[rstest]
    fn from_counts_rejects_count_above_total() {
        assert!(matches!(
            Found::from_counts(5, 4),
            Err(MatchError::InvalidArgument { argument: "count", .. })
        ));
    }

    #[rstest]
    fn collect_from_booleans() {
        let found: Found = [true, false, true].into_iter().collect();
        assert_eq!(found.to_string(), "Some(2)");
    }

    #[rstest]
    fn free_functions_agree_with_kind() {
        let empty: [u8; 0] = [];
        assert!(!exists(empty, |_| true));
        assert!(!for_all(empty, |_| true));
        assert!(none_match(empty, |_| true));

        assert!(exists([1, 2], |n| n == 2));
        assert!(!for_all([1, 2], |n| n == 2));
        assert!(!none_match([1, 2], |n| n == 2));
    }

    #[rstest]
    fn default_is_none() {
        assert_eq!(Found::default(), Found::NONE);
        assert_eq!(Found::NONE.to_string(), "None(0)");
    }
}
