//! CSV output formatter for run results.
//!
//! One row is generated for each value a strategy reports.
//!
//! # Columns
//!
//! - `strategy`: Strategy name
//! - `kind`: `unique` for distinct values, `repeated` for values seen more
//!   than once (hashset only)
//! - `position`: Zero-based position within the strategy's list
//! - `value`: The integer

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::dedup::{DedupOutcome, Strategy};

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow {
    strategy: Strategy,
    kind: &'static str,
    position: usize,
    value: i64,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    outcomes: &'a [DedupOutcome<i64>],
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(outcomes: &'a [DedupOutcome<i64>]) -> Self {
        Self { outcomes }
    }

    fn rows(&self) -> impl Iterator<Item = CsvRow> + 'a {
        let outcomes: &'a [DedupOutcome<i64>] = self.outcomes;
        outcomes.iter().flat_map(|outcome| {
            let unique = outcome
                .unique
                .iter()
                .enumerate()
                .map(move |(position, &value)| CsvRow {
                    strategy: outcome.strategy,
                    kind: "unique",
                    position,
                    value,
                });
            let repeated = outcome
                .repeated
                .iter()
                .flatten()
                .enumerate()
                .map(move |(position, &value)| CsvRow {
                    strategy: outcome.strategy,
                    kind: "repeated",
                    position,
                    value,
                });
            unique.chain(repeated)
        })
    }

    /// Write the CSV output, header included, to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let mut wtr = csv::Writer::from_writer(writer);
        let mut written = 0usize;
        for row in self.rows() {
            wtr.serialize(row)?;
            written += 1;
        }
        if written == 0 {
            // serialize() emits the header lazily; keep it for empty results
            wtr.write_record(["strategy", "kind", "position", "value"])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render the CSV output into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_csv_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
