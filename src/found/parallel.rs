//! Parallel classification with rayon.

use rayon::prelude::*;

use super::Found;

impl Found {
    /// Classifies `sequence` against `predicate` on the rayon thread pool.
    ///
    /// Produces the same `Found` as [`Found::classify`]; only the order in
    /// which the predicate sees the elements differs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use casematch::found::{Found, FoundKind};
    ///
    /// let numbers: Vec<u64> = (1..=1_000).collect();
    /// let found = Found::classify_par(&numbers, |n| n % 10 == 0);
    ///
    /// assert_eq!(found.kind(), FoundKind::Some);
    /// assert_eq!(found.count(), 100);
    /// ```
    pub fn classify_par<I, P>(sequence: I, predicate: P) -> Self
    where
        I: IntoParallelIterator,
        P: Fn(I::Item) -> bool + Sync + Send,
    {
        let (count, total) = sequence
            .into_par_iter()
            .map(|item| (usize::from(predicate(item)), 1_usize))
            .reduce(|| (0, 0), |left, right| (left.0 + right.0, left.1 + right.1));
        Self::tally(count, total)
    }
}
