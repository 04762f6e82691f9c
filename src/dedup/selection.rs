//! Comparison-sort strategy.
//!
//! A quadratic nested compare-and-swap sort: for every position `i`, each
//! later position `j` holding a smaller element is swapped into `i`. After
//! the inner pass, `i` holds the minimum of `values[i..]`, which makes this
//! equivalent to selection sort with extra swaps. Uses no allocation beyond
//! the snapshot kept for reporting.

use super::compact::compact_vec;

/// Sort `values` in place with the nested compare-and-swap sort.
///
/// Returns the number of swaps performed.
pub fn selection_sort<T: Ord + Copy>(values: &mut [T]) -> usize {
    let mut swaps = 0;
    for i in 0..values.len() {
        for j in i..values.len() {
            if values[i] > values[j] {
                values.swap(i, j);
                swaps += 1;
            }
        }
    }
    log::trace!("Selection sort of {} elements: {} swaps", values.len(), swaps);
    swaps
}

/// Sort `values` with [`selection_sort`], keep a snapshot of the sorted
/// sequence and compact it.
///
/// Returns `(sorted, unique)`. The caller's vector is consumed.
///
/// # Example
///
/// ```
/// use intdupe::dedup::selection::dedup_selection;
///
/// let (sorted, unique) = dedup_selection(vec![3, 1, 3]);
/// assert_eq!(sorted, vec![1, 3, 3]);
/// assert_eq!(unique, vec![1, 3]);
/// ```
#[must_use]
pub fn dedup_selection<T: Ord + Copy>(mut values: Vec<T>) -> (Vec<T>, Vec<T>) {
    selection_sort(&mut values);
    let sorted = values.clone();
    (sorted, compact_vec(values))
}
