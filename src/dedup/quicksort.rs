//! Partition-sort (quicksort) strategy.
//!
//! The sort is a recursive two-cursor partition around the middle element of
//! the current range. The cursors scan inward past elements already on the
//! correct side of the pivot, swap the first out-of-order pair they meet and
//! advance past it, until they cross. Each side is then sorted when it holds
//! more than one element: the smaller side recursively, the larger one in
//! the same call.
//!
//! Average cost is O(n log n). The middle pivot keeps sorted and reverse
//! sorted input fast, but crafted inputs still degrade to O(n^2). Recursion
//! depth is at most O(log n) regardless of the input.

use super::compact::compact_vec;

/// Sort `values` in place with the middle-pivot partition scheme.
///
/// Empty and single-element slices are left untouched.
///
/// # Example
///
/// ```
/// use intdupe::dedup::quicksort::quicksort;
///
/// let mut values = [5, -1, 3, 3, 0];
/// quicksort(&mut values);
/// assert_eq!(values, [-1, 0, 3, 3, 5]);
/// ```
pub fn quicksort<T: Ord + Copy>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }
    sort_range(values, 0, values.len() - 1);
}

/// Sort the inclusive range `[begin, end]`.
///
/// Recurses into the smaller partition and loops on the larger one, so the
/// stack depth stays within O(log n) even when the partitions are lopsided.
fn sort_range<T: Ord + Copy>(values: &mut [T], mut begin: usize, mut end: usize) {
    while begin < end {
        let (i, j) = partition(values, begin, end);
        let (b, e) = (begin as isize, end as isize);

        if j - b < e - i {
            if b < j {
                sort_range(values, begin, j as usize);
            }
            begin = i as usize;
        } else {
            if i < e {
                sort_range(values, i as usize, end);
            }
            if j <= b {
                break;
            }
            end = j as usize;
        }
    }
}

/// Partition `[begin, end]` around its middle element and return the
/// crossed cursors `(i, j)`: `[begin, j]` holds nothing above the pivot and
/// `[i, end]` nothing below it.
fn partition<T: Ord + Copy>(values: &mut [T], begin: usize, end: usize) -> (isize, isize) {
    log::trace!("Partitioning range [{}, {}]", begin, end);

    let pivot = values[begin + (end - begin) / 2];
    // `j` may step one below `begin` (and below zero) once the cursors cross.
    let mut i = begin as isize;
    let mut j = end as isize;

    while i <= j {
        while values[i as usize] < pivot {
            i += 1;
        }
        while values[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            values.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }
    (i, j)
}

/// Sort `values` with [`quicksort`], keep a snapshot of the sorted sequence
/// and compact it.
///
/// Returns `(sorted, unique)`. The caller's vector is consumed.
#[must_use]
pub fn dedup_quicksort<T: Ord + Copy>(mut values: Vec<T>) -> (Vec<T>, Vec<T>) {
    quicksort(&mut values);
    let sorted = values.clone();
    (sorted, compact_vec(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_quicksort_empty() {
        let mut values: Vec<i64> = Vec::new();
        quicksort(&mut values);
        assert!(values.is_empty());
    }

    #[test]
    fn test_quicksort_single() {
        let mut values = vec![7];
        quicksort(&mut values);
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_quicksort_two_elements() {
        let mut values = vec![2, 1];
        quicksort(&mut values);
        assert_eq!(values, vec![1, 2]);

        let mut values = vec![1, 1];
        quicksort(&mut values);
        assert_eq!(values, vec![1, 1]);
    }

    #[test]
    fn test_quicksort_reverse_sorted() {
        let mut values: Vec<i64> = (0..200).rev().collect();
        quicksort(&mut values);
        assert_eq!(values, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn test_quicksort_all_equal() {
        let mut values = vec![4; 64];
        quicksort(&mut values);
        assert_eq!(values, vec![4; 64]);
    }

    #[test]
    fn test_quicksort_extremes() {
        let mut values = vec![i64::MAX, 0, i64::MIN, -1, i64::MAX, i64::MIN];
        quicksort(&mut values);
        assert_eq!(values, vec![i64::MIN, i64::MIN, -1, 0, i64::MAX, i64::MAX]);
    }

    #[test]
    fn test_quicksort_matches_std_sort() {
        let mut values = vec![1, 2, 34, 34, 25, 1, 45, 3, 26, 85, 4, 34, 86, 25, 43, 2, 1];
        let mut expected = values.clone();
        expected.sort_unstable();
        quicksort(&mut values);
        assert_eq!(values, expected);
        assert!(is_sorted(&values));
    }

    #[test]
    fn test_dedup_quicksort() {
        let (sorted, mut unique) = dedup_quicksort(vec![1, 2, 34, 34, 25, 1]);
        assert_eq!(sorted, vec![1, 1, 2, 25, 34, 34]);
        unique.sort_unstable();
        assert_eq!(unique, vec![1, 2, 25, 34]);
    }

    /// Orders items lazily so every partition is as lopsided as possible.
    ///
    /// Items start out as "gas" (larger than every frozen value). Whenever
    /// two gas items are compared one of them is frozen to the next value,
    /// preferring the item most recently seen next to solid values, which
    /// tends to be the pivot.
    mod adversary {
        use std::cell::RefCell;
        use std::cmp::Ordering;

        #[derive(Default)]
        struct State {
            values: Vec<usize>,
            gas: usize,
            frozen: usize,
            candidate: usize,
        }

        thread_local! {
            static STATE: RefCell<State> = RefCell::new(State::default());
        }

        #[derive(Debug, Clone, Copy)]
        pub struct Item(pub usize);

        impl Ord for Item {
            fn cmp(&self, other: &Self) -> Ordering {
                STATE.with(|state| {
                    let mut st = state.borrow_mut();
                    let (x, y) = (self.0, other.0);
                    let gas = st.gas;
                    if st.values[x] == gas && st.values[y] == gas {
                        let freeze = if x == st.candidate { x } else { y };
                        st.values[freeze] = st.frozen;
                        st.frozen += 1;
                    }
                    if st.values[x] == gas {
                        st.candidate = x;
                    } else if st.values[y] == gas {
                        st.candidate = y;
                    }
                    st.values[x].cmp(&st.values[y])
                })
            }
        }

        impl PartialOrd for Item {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl PartialEq for Item {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for Item {}

        /// A permutation of `0..n` that drives the sort into its worst case.
        pub fn permutation(n: usize, sort: fn(&mut [Item])) -> Vec<i64> {
            STATE.with(|state| {
                *state.borrow_mut() = State {
                    values: vec![n; n],
                    gas: n,
                    frozen: 0,
                    candidate: 0,
                };
            });
            let mut items: Vec<Item> = (0..n).map(Item).collect();
            sort(&mut items);
            STATE.with(|state| {
                let mut st = state.borrow_mut();
                for idx in 0..n {
                    if st.values[idx] == n {
                        st.values[idx] = st.frozen;
                        st.frozen += 1;
                    }
                }
                st.values.iter().map(|&v| v as i64).collect()
            })
        }
    }

    #[test]
    fn test_quicksort_adversarial_input_on_small_stack() {
        let n = 4_000;
        let input = adversary::permutation(n, quicksort);
        assert_eq!(input.len(), n);

        // Linear recursion depth would overflow this stack long before the end.
        let handle = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(move || {
                let (sorted, unique) = dedup_quicksort(input);
                (is_sorted(&sorted), unique.len())
            })
            .unwrap();
        let (sorted_ok, distinct) = handle.join().unwrap();
        assert!(sorted_ok);
        assert_eq!(distinct, n);
    }

    #[test]
    fn test_dedup_quicksort_empty() {
        let (sorted, unique) = dedup_quicksort(Vec::<i64>::new());
        assert!(sorted.is_empty());
        assert!(unique.is_empty());
    }
}
