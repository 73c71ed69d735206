//! Divide-and-conquer inversion counting.
//!
//! An inversion is a pair of positions `(i, j)` with `i < j` whose values are
//! out of order (`value[i] > value[j]`). Counting is structurally a merge
//! sort: each half is sorted and counted recursively, and the pairs that
//! straddle the split are tallied while the halves are merged. This runs in
//! `O(n log n)` time with `O(n)` auxiliary space.
//!
//! Ties are never counted, so the result stays well defined when the input
//! contains duplicates.

use tracing::debug;

/// Counts the inversions in `items`.
///
/// # Examples
/// ```
/// use tally_core::count_inversions;
///
/// assert_eq!(count_inversions(&[2, 3, 8, 6, 1]), 5);
/// assert_eq!(count_inversions::<i64>(&[]), 0);
/// ```
#[must_use]
pub fn count_inversions<T: Ord + Clone>(items: &[T]) -> u64 {
    let (_, inversions) = sort_and_count(items);
    debug!(len = items.len(), inversions, "counted inversions");
    inversions
}

/// Sorts `items` and counts its inversions in one pass.
///
/// The sorted copy is what allows the parent call to count split inversions
/// by merging; callers that only need the count should use
/// [`count_inversions`].
///
/// # Examples
/// ```
/// use tally_core::sort_and_count;
///
/// let (sorted, inversions) = sort_and_count(&[3, 1, 2]);
/// assert_eq!(sorted, [1, 2, 3]);
/// assert_eq!(inversions, 2);
/// ```
#[must_use]
pub fn sort_and_count<T: Ord + Clone>(items: &[T]) -> (Vec<T>, u64) {
    if items.len() <= 1 {
        return (items.to_vec(), 0);
    }

    // Floor split: the left half is never the longer one.
    let mid = items.len() / 2;
    let (left, right) = items.split_at(mid);
    let (left_sorted, left_inversions) = sort_and_count(left);
    let (right_sorted, right_inversions) = sort_and_count(right);
    let (merged, split_inversions) = merge_and_count(left_sorted, right_sorted);

    (merged, left_inversions + right_inversions + split_inversions)
}

/// Merges two sorted runs, counting the pairs where a right element
/// precedes left elements that are strictly greater.
fn merge_and_count<T: Ord>(left: Vec<T>, right: Vec<T>) -> (Vec<T>, u64) {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_remaining = left.len();
    let mut split = 0_u64;
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };

        if take_right {
            // Every unplaced left element is greater than this one.
            split += left_remaining as u64;
            merged.extend(right.next());
        } else {
            left_remaining -= 1;
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    (merged, split)
}

/// Extension trait exposing inversion counting on slices.
///
/// # Examples
/// ```
/// use tally_core::Inversions;
///
/// assert_eq!([5, 4, 3, 2, 1].inversions(), 10);
/// assert_eq!(vec!["a", "b"].inversions(), 0);
/// ```
pub trait Inversions {
    /// Returns the number of out-of-order pairs.
    fn inversions(&self) -> u64;
}

impl<T: Ord + Clone> Inversions for [T] {
    fn inversions(&self) -> u64 {
        count_inversions(self)
    }
}
