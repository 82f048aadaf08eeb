#![cfg(feature = "found")]
//! Property-based tests for `Found` classification.
//!
//! - **Totality**: the count is exactly the number of accepted elements
//! - **Kind consistency**: the kind is derived from count and length alone
//! - **Complement**: classifying with the negated predicate swaps None and All

use casematch::found::{Found, FoundKind};
use proptest::prelude::*;

fn expected_kind(count: usize, total: usize) -> FoundKind {
    if count == 0 {
        FoundKind::None
    } else if count == total {
        FoundKind::All
    } else {
        FoundKind::Some
    }
}

// =============================================================================
// Totality
// =============================================================================

proptest! {
    #[test]
    fn prop_count_matches_filter(values in prop::collection::vec(any::<i16>(), 0..64), threshold in any::<i16>()) {
        let found = Found::classify(&values, |value| *value < threshold);
        let expected = values.iter().filter(|value| **value < threshold).count();

        prop_assert_eq!(found.count(), expected);
        prop_assert_eq!(found.kind(), expected_kind(expected, values.len()));
    }
}

proptest! {
    #[test]
    fn prop_predicate_called_once_per_element(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut calls = 0_usize;
        let _ = Found::classify(&values, |_| {
            calls += 1;
            false
        });
        prop_assert_eq!(calls, values.len());
    }
}

// =============================================================================
// Complement
// =============================================================================

proptest! {
    #[test]
    fn prop_negation_swaps_none_and_all(values in prop::collection::vec(any::<bool>(), 1..32)) {
        let found = Found::classify(&values, |value| *value);
        let negated = Found::classify(&values, |value| !*value);

        prop_assert_eq!(found.count() + negated.count(), values.len());
        match found.kind() {
            FoundKind::All => prop_assert_eq!(negated.kind(), FoundKind::None),
            FoundKind::None => prop_assert_eq!(negated.kind(), FoundKind::All),
            FoundKind::Some => prop_assert_eq!(negated.kind(), FoundKind::Some),
        }
    }
}

proptest! {
    #[test]
    fn prop_from_counts_agrees_with_classify(values in prop::collection::vec(any::<bool>(), 0..32)) {
        let classified = Found::classify(&values, |value| *value);
        let counted = Found::from_counts(classified.count(), values.len());
        prop_assert_eq!(counted, Ok(classified));
    }
}
