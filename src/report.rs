//! Reporting hooks for strategy runs.
//!
//! The strategies never print. A [`DedupReporter`] passed to
//! [`crate::runner::DedupRunner`] receives every intermediate result instead.
//! [`LogReporter`] forwards them to the `log` facade; [`NoopReporter`]
//! discards them.

use std::time::Duration;

use crate::dedup::{DedupOutcome, Strategy};

/// Message prefix for elapsed time lines.
pub const ELAPSED_TIME: &str = "The time elapsed in milliseconds";

/// Receiver for strategy run events.
///
/// Implement this trait to observe runs performed by
/// [`crate::runner::DedupRunner`]. Every method has an empty default.
pub trait DedupReporter: Send + Sync {
    /// Called before a strategy receives its copy of the input.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The strategy about to run
    /// * `input` - The sequence it will process
    fn on_strategy_start(&self, _strategy: Strategy, _input: &[i64]) {}

    /// Called with the fully sorted sequence, before compaction.
    ///
    /// Only the sort-based strategies produce this event.
    fn on_sorted(&self, _strategy: Strategy, _sorted: &[i64]) {}

    /// Called with the outcome of a strategy.
    fn on_outcome(&self, _outcome: &DedupOutcome<i64>) {}

    /// Called after a strategy completed.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The strategy that ran
    /// * `elapsed` - Wall time spent inside the strategy
    fn on_strategy_end(&self, _strategy: Strategy, _elapsed: Duration) {}
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl DedupReporter for NoopReporter {}

/// Reporter that writes human-readable lines through the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    timing: bool,
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogReporter {
    /// Create a log reporter that includes elapsed time lines.
    #[must_use]
    pub fn new() -> Self {
        Self { timing: true }
    }

    /// Enable or disable elapsed time lines.
    #[must_use]
    pub fn with_timing(mut self, timing: bool) -> Self {
        self.timing = timing;
        self
    }

    /// Whether elapsed time lines are logged.
    #[must_use]
    pub fn timing(&self) -> bool {
        self.timing
    }
}

impl DedupReporter for LogReporter {
    fn on_strategy_start(&self, strategy: Strategy, input: &[i64]) {
        log::info!("{} strategy", strategy);
        log::debug!("All the elements {:?}", input);
    }

    fn on_sorted(&self, _strategy: Strategy, sorted: &[i64]) {
        log::info!("All the elements {:?}", sorted);
    }

    fn on_outcome(&self, outcome: &DedupOutcome<i64>) {
        log::info!("The unique elements {:?}", outcome.unique);
        if let Some(repeated) = &outcome.repeated {
            log::info!("Values seen more than once {:?}", repeated);
        }
    }

    fn on_strategy_end(&self, _strategy: Strategy, elapsed: Duration) {
        if self.timing {
            log::info!("{} {}", ELAPSED_TIME, elapsed.as_millis());
        }
    }
}
