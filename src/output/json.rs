//! JSON output formatter for run results.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "input": [1, 2, 34, 34, 25, 1],
//!   "results": [
//!     { "strategy": "linear", "unique": [1, 2, 34, 25], "elapsed_ms": 0.004 },
//!     { "strategy": "hashset", "unique": [1, 2, 25, 34], "repeated": [1, 34], "elapsed_ms": 0.003 }
//!   ],
//!   "summary": {
//!     "input_len": 6,
//!     "distinct": 4,
//!     "duplicates_removed": 2,
//!     "total_elapsed_ms": 0.05,
//!     "exit_code": 0,
//!     "exit_code_name": "ID000",
//!     "generated_at": "2026-01-01T00:00:00Z"
//!   }
//! }
//! ```
//!
//! `elapsed_ms` and `total_elapsed_ms` are omitted when timing is disabled.

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dedup::{DedupOutcome, Strategy};
use crate::error::ExitCode;
use crate::runner::RunSummary;

/// One strategy result in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonResult {
    /// Strategy name
    pub strategy: Strategy,
    /// Distinct values in strategy order
    pub unique: Vec<i64>,
    /// Values seen more than once (hashset only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeated: Option<Vec<i64>>,
    /// Sorted sequence before compaction (sort strategies only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<i64>>,
    /// Time spent inside the strategy in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Length of the input sequence
    pub input_len: usize,
    /// Number of distinct values
    pub distinct: usize,
    /// Number of elements dropped as duplicates
    pub duplicates_removed: usize,
    /// Duration of the whole run in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_elapsed_ms: Option<f64>,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "ID000")
    pub exit_code_name: String,
    /// When this output was produced
    pub generated_at: DateTime<Utc>,
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// The input sequence
    pub input: Vec<i64>,
    /// One entry per strategy run
    pub results: Vec<JsonResult>,
    /// Run summary
    pub summary: JsonSummary,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl JsonOutput {
    /// Build the JSON output for a run.
    ///
    /// `outcomes` and `summary.timings` are paired by position.
    ///
    /// # Example
    ///
    /// ```
    /// use intdupe::error::ExitCode;
    /// use intdupe::output::json::JsonOutput;
    /// use intdupe::runner::DedupRunner;
    ///
    /// let input = [3, 3, 4];
    /// let (outcomes, summary) = DedupRunner::with_defaults().run(&input);
    /// let output = JsonOutput::new(&input, &outcomes, &summary, ExitCode::Success, true);
    /// assert_eq!(output.results.len(), 4);
    /// assert_eq!(output.summary.duplicates_removed, 1);
    /// ```
    #[must_use]
    pub fn new(
        input: &[i64],
        outcomes: &[DedupOutcome<i64>],
        summary: &RunSummary,
        exit_code: ExitCode,
        timing: bool,
    ) -> Self {
        let results = outcomes
            .iter()
            .enumerate()
            .map(|(idx, outcome)| JsonResult {
                strategy: outcome.strategy,
                unique: outcome.unique.clone(),
                repeated: outcome.repeated.clone(),
                sorted: outcome.sorted.clone(),
                elapsed_ms: summary
                    .timings
                    .get(idx)
                    .filter(|_| timing)
                    .map(|t| millis(t.elapsed)),
            })
            .collect();

        Self {
            input: input.to_vec(),
            results,
            summary: JsonSummary {
                input_len: summary.input_len,
                distinct: summary.distinct,
                duplicates_removed: summary.duplicates_removed(),
                total_elapsed_ms: timing.then(|| millis(summary.total_elapsed)),
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
                generated_at: Utc::now(),
            },
        }
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), JsonOutputError> {
        let json = self.to_json_pretty()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
