//! Order-preserving linear-scan strategy.
//!
//! Each element is appended to the output only when the output does not
//! already contain it. The containment check is linear, so the whole pass is
//! O(n^2), but first-occurrence order is kept and the input is only read.

/// Distinct values of `values` in first-occurrence order.
///
/// # Example
///
/// ```
/// use intdupe::dedup::linear::first_occurrences;
///
/// assert_eq!(first_occurrences(&[1, 2, 34, 34, 25, 1]), vec![1, 2, 34, 25]);
/// ```
#[must_use]
pub fn first_occurrences<T: PartialEq + Copy>(values: &[T]) -> Vec<T> {
    let mut unique = Vec::new();
    for &value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrences_empty() {
        assert!(first_occurrences::<i64>(&[]).is_empty());
    }

    #[test]
    fn test_first_occurrences_keeps_order() {
        assert_eq!(first_occurrences(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_first_occurrences_unique_input_unchanged() {
        let values = [9, -4, 0, 12];
        assert_eq!(first_occurrences(&values), values.to_vec());
    }

    #[test]
    fn test_first_occurrences_all_equal() {
        assert_eq!(first_occurrences(&[8, 8, 8]), vec![8]);
    }
}
