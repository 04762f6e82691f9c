//! Duplicate detection strategies.
//!
//! This module provides four interchangeable ways to find the distinct values
//! of an integer sequence:
//! - Hash-set scan ([`set`]), which also reports values seen more than once
//! - Order-preserving linear scan ([`linear`])
//! - Quadratic compare-and-swap sort followed by compaction ([`selection`])
//! - Middle-pivot quicksort followed by compaction ([`quicksort`])
//!
//! The functions here are pure: they return their results and never print.
//! Timing and reporting live in [`crate::runner`].

pub mod compact;
pub mod linear;
pub mod quicksort;
pub mod selection;
pub mod set;
pub mod strategy;

pub use strategy::{DedupOutcome, Strategy, UnknownStrategy};

/// Reference sequence with heavy repetition, used by `intdupe run --sample`.
pub const SAMPLE: [i64; 78] = [
    1, 2, 34, 34, 25, 1, 45, 3, 26, 85, 4, 34, 86, 25, 43, 2, 1, 10000, 11, 16, 19, 1, 18, 4, 9, 3,
    20, 17, 8, 15, 6, 2, 5, 10, 14, 12, 13, 7, 8, 9, 1, 2, 15, 12, 18, 10, 14, 20, 17, 16, 3, 6,
    19, 13, 5, 11, 4, 7, 19, 16, 5, 9, 12, 3, 20, 7, 15, 17, 10, 6, 1, 8, 18, 4, 14, 13, 2, 11,
];
