//! Public-API checks for inversion counting.

use rstest::rstest;
use tally_core::{Inversions, count_inversions};

#[rstest]
#[case::empty(vec![], 0)]
#[case::single(vec![1], 0)]
#[case::worked_example(vec![2, 3, 8, 6, 1], 5)]
#[case::increasing(vec![1, 2, 3, 4, 5, 6], 0)]
#[case::decreasing(vec![6, 5, 4, 3, 2, 1], 15)]
fn counts_inversions(#[case] items: Vec<i64>, #[case] expected: u64) {
    assert_eq!(count_inversions(&items), expected);
    assert_eq!(items.inversions(), expected);
}

#[test]
fn counts_large_reversed_permutation() {
    let items: Vec<i64> = (1..=100_000).rev().collect();
    assert_eq!(count_inversions(&items), 100_000 * 99_999 / 2);
}

#[test]
fn reversal_complements_worked_example() {
    let items = [2, 3, 8, 6, 1];
    let reversed: Vec<i32> = items.iter().rev().copied().collect();
    assert_eq!(count_inversions(&items) + count_inversions(&reversed), 10);
}
