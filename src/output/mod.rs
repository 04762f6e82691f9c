//! Output formatters for run results.
//!
//! This module provides different output formats:
//! - Text for terminals
//! - JSON for automation and scripting
//! - CSV for spreadsheet import
//!
//! # Example
//!
//! ```
//! use intdupe::output::TextOutput;
//! use intdupe::runner::DedupRunner;
//!
//! let input = [4, 4, 9];
//! let (outcomes, summary) = DedupRunner::with_defaults().run(&input);
//! let text = TextOutput::new(&input, &outcomes, &summary).with_color(false).render();
//! assert!(text.contains("2 distinct of 3 values"));
//! ```

pub mod csv;
pub mod json;
pub mod text;

// Re-export main types
pub use csv::CsvOutput;
pub use json::JsonOutput;
pub use text::TextOutput;
