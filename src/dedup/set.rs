//! Set-based strategy.
//!
//! A single pass records each element into a seen-set. An element whose
//! insertion fails has been seen before, so its value is recorded as
//! repeated. The repeated set therefore holds the values with multiplicity
//! of at least two, each once, not every duplicate occurrence.
//!
//! # Example
//!
//! ```
//! use intdupe::dedup::set::{repeated_values, scan};
//!
//! let result = scan(&[1, 2, 34, 34, 25, 1]);
//! assert_eq!(result.distinct.len(), 4);
//! assert_eq!(result.repeated_sorted(), vec![1, 34]);
//!
//! assert!(repeated_values(&[1, 2, 3]).is_empty());
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// Result of a set-based scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetScan<T: Eq + Hash> {
    /// Every distinct value in the input
    pub distinct: HashSet<T>,
    /// Values whose insertion into the seen-set failed at least once
    pub repeated: HashSet<T>,
}

impl<T: Eq + Hash + Ord + Copy> SetScan<T> {
    /// Distinct values in ascending order.
    #[must_use]
    pub fn distinct_sorted(&self) -> Vec<T> {
        sorted(&self.distinct)
    }

    /// Repeated values in ascending order.
    #[must_use]
    pub fn repeated_sorted(&self) -> Vec<T> {
        sorted(&self.repeated)
    }
}

fn sorted<T: Ord + Copy>(set: &HashSet<T>) -> Vec<T> {
    let mut values: Vec<T> = set.iter().copied().collect();
    values.sort_unstable();
    values
}

/// Scan `values` once and collect both the seen-set and the repeated set.
#[must_use]
pub fn scan<T: Eq + Hash + Copy>(values: &[T]) -> SetScan<T> {
    let mut distinct = HashSet::with_capacity(values.len());
    let mut repeated = HashSet::new();
    for &value in values {
        if !distinct.insert(value) {
            repeated.insert(value);
        }
    }
    SetScan { distinct, repeated }
}

/// Values occurring at least twice in `values`.
#[must_use]
pub fn repeated_values<T: Eq + Hash + Copy>(values: &[T]) -> HashSet<T> {
    scan(values).repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty() {
        let result = scan::<i64>(&[]);
        assert!(result.distinct.is_empty());
        assert!(result.repeated.is_empty());
    }

    #[test]
    fn test_scan_single() {
        let result = scan(&[7]);
        assert_eq!(result.distinct_sorted(), vec![7]);
        assert!(result.repeated.is_empty());
    }

    #[test]
    fn test_repeated_counts_each_value_once() {
        // 34 appears three times but is reported once
        let repeated = repeated_values(&[34, 34, 34, 1]);
        assert_eq!(repeated, HashSet::from([34]));
    }

    #[test]
    fn test_scan_sample_prefix() {
        let result = scan(&[1, 2, 34, 34, 25, 1]);
        assert_eq!(result.distinct_sorted(), vec![1, 2, 25, 34]);
        assert_eq!(result.repeated_sorted(), vec![1, 34]);
    }

    #[test]
    fn test_repeated_is_subset_of_distinct() {
        let result = scan(&[5, -5, 5, 0, -5, 9]);
        assert!(result.repeated.is_subset(&result.distinct));
        assert_eq!(result.repeated_sorted(), vec![-5, 5]);
    }
}
