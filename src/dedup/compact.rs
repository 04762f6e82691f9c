//! In-place duplicate compaction shared by the sort-based strategies.
//!
//! # Overview
//!
//! Compaction walks the sequence with an outer cursor `i` and an inner
//! cursor `j`. Whenever `seq[i] == seq[j]`, the element at the last active
//! position is moved into `j`, the active length shrinks by one and `j` is
//! examined again because a new element now lives there.
//!
//! Once every `i` has been visited, the first `active length` positions hold
//! each distinct value exactly once. Pulling replacements from the tail means
//! the retained prefix is not guaranteed to stay sorted.
//!
//! # Example
//!
//! ```
//! use intdupe::dedup::compact::{compact, compact_vec};
//!
//! let mut values = [1, 1, 2, 2, 3];
//! let active = compact(&mut values);
//! assert_eq!(active, 3);
//!
//! let mut unique = compact_vec(vec![4, 4, 4, 5]);
//! unique.sort_unstable();
//! assert_eq!(unique, vec![4, 5]);
//! ```

/// Compact `values` in place and return the active length.
///
/// Positions at or beyond the returned length are considered discarded; their
/// content is unspecified. The input does not have to be sorted for the
/// result to be duplicate free, but the sort-based strategies only ever call
/// this on sorted input.
pub fn compact<T: PartialEq + Copy>(values: &mut [T]) -> usize {
    let mut active = values.len();
    let mut replaced = 0usize;

    let mut i = 0;
    while i < active {
        let mut j = i + 1;
        while j < active {
            if values[i] == values[j] {
                values[j] = values[active - 1];
                active -= 1;
                replaced += 1;
                // re-examine j, it now holds the former tail element
            } else {
                j += 1;
            }
        }
        i += 1;
    }

    log::trace!(
        "Compaction kept {} of {} elements ({} replaced from tail)",
        active,
        values.len(),
        replaced
    );
    active
}

/// Consume `values`, compact it and truncate to the active length.
#[must_use]
pub fn compact_vec<T: PartialEq + Copy>(mut values: Vec<T>) -> Vec<T> {
    let active = compact(&mut values);
    values.truncate(active);
    values
}
