//! Human-readable text output.
//!
//! ```text
//! Input (6 values): [1, 2, 34, 34, 25, 1]
//!
//! linear     [1, 2, 34, 25]            0.004 ms
//! selection  [1, 2, 34, 25]            0.002 ms
//!            sorted: [1, 1, 2, 25, 34, 34]
//! hashset    [1, 2, 25, 34]            0.003 ms
//!            repeated: [1, 34]
//!
//! 4 distinct of 6 values (2 duplicates removed) in 0.051 ms, fastest: selection
//! ```

use std::fmt::Write as _;
use std::io;

use yansi::Paint;

use crate::dedup::DedupOutcome;
use crate::runner::RunSummary;

/// Text output formatter.
pub struct TextOutput<'a> {
    input: &'a [i64],
    outcomes: &'a [DedupOutcome<i64>],
    summary: &'a RunSummary,
    timing: bool,
    color: bool,
}

impl<'a> TextOutput<'a> {
    /// Create a text formatter. Timing and color are on by default.
    #[must_use]
    pub fn new(
        input: &'a [i64],
        outcomes: &'a [DedupOutcome<i64>],
        summary: &'a RunSummary,
    ) -> Self {
        Self {
            input,
            outcomes,
            summary,
            timing: true,
            color: true,
        }
    }

    /// Enable or disable elapsed times.
    #[must_use]
    pub fn with_timing(mut self, timing: bool) -> Self {
        self.timing = timing;
        self
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn strategy_label(&self, name: &str) -> String {
        let padded = format!("{name:<10}");
        if self.color {
            padded.bold().cyan().to_string()
        } else {
            padded
        }
    }

    fn dim(&self, text: String) -> String {
        if self.color {
            text.dim().to_string()
        } else {
            text
        }
    }

    /// Render the whole report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Input ({} values): {:?}\n",
            self.input.len(),
            self.input
        );

        for (idx, outcome) in self.outcomes.iter().enumerate() {
            let values = format!("{:?}", outcome.unique);
            let _ = write!(
                out,
                "{} {:<24}",
                self.strategy_label(outcome.strategy.name()),
                values
            );
            if self.timing {
                if let Some(timing) = self.summary.timings.get(idx) {
                    let ms = timing.elapsed.as_secs_f64() * 1000.0;
                    let _ = write!(out, " {}", self.dim(format!("{ms:.3} ms")));
                }
            }
            out.push('\n');

            if let Some(sorted) = &outcome.sorted {
                let _ = writeln!(out, "{:10} {}", "", self.dim(format!("sorted: {sorted:?}")));
            }
            if let Some(repeated) = &outcome.repeated {
                let _ = writeln!(out, "{:10} repeated: {:?}", "", repeated);
            }
        }

        let _ = write!(
            out,
            "\n{} distinct of {} values ({} duplicates removed)",
            self.summary.distinct,
            self.summary.input_len,
            self.summary.duplicates_removed()
        );
        if self.timing {
            let total = self.summary.total_elapsed.as_secs_f64() * 1000.0;
            let _ = write!(out, " in {total:.3} ms");
            if self.summary.timings.len() > 1 {
                if let Some(fastest) = self.summary.fastest() {
                    let _ = write!(out, ", fastest: {}", fastest.strategy);
                }
            }
        }
        out.push('\n');
        out
    }

    /// Write the report to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }
}
