//! Timed strategy runs.
//!
//! # Overview
//!
//! [`DedupRunner`] wraps the pure strategies in [`crate::dedup`] with timing
//! and reporting. Each strategy receives its own copy of the input, so the
//! caller's sequence is never reordered even when a sort-based strategy runs.
//!
//! # Example
//!
//! ```
//! use intdupe::dedup::Strategy;
//! use intdupe::runner::{DedupRunner, RunnerConfig};
//!
//! let runner = DedupRunner::new(
//!     RunnerConfig::default().with_strategies(vec![Strategy::Linear, Strategy::Quicksort]),
//! );
//! let input = [1, 2, 34, 34, 25, 1];
//! let (outcomes, summary) = runner.run(&input);
//!
//! assert_eq!(outcomes.len(), 2);
//! assert_eq!(outcomes[0].unique, vec![1, 2, 34, 25]);
//! assert_eq!(summary.input_len, 6);
//! assert_eq!(input, [1, 2, 34, 34, 25, 1]);
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::dedup::{DedupOutcome, Strategy};
use crate::report::{DedupReporter, NoopReporter};

/// Configuration for a [`DedupRunner`].
#[derive(Clone)]
pub struct RunnerConfig {
    /// Strategies to run, in order. Duplicates are run twice.
    pub strategies: Vec<Strategy>,
    /// Receiver for run events.
    pub reporter: Arc<dyn DedupReporter>,
}

impl std::fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("strategies", &self.strategies)
            .field("reporter", &"<reporter>")
            .finish()
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            reporter: Arc::new(NoopReporter),
        }
    }
}

impl RunnerConfig {
    /// Set the strategies to run.
    ///
    /// An empty list falls back to every strategy.
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = if strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            strategies
        };
        self
    }

    /// Set the reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn DedupReporter>) -> Self {
        self.reporter = reporter;
        self
    }
}

/// Elapsed time of one strategy call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyTiming {
    /// Strategy that ran
    pub strategy: Strategy,
    /// Wall time spent inside the strategy
    pub elapsed: Duration,
}

/// Summary of a [`DedupRunner::run`] call.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Length of the input sequence
    pub input_len: usize,
    /// Number of distinct values in the input
    pub distinct: usize,
    /// Per-strategy timings, in run order
    pub timings: Vec<StrategyTiming>,
    /// Duration of the whole run, including copies and reporting
    pub total_elapsed: Duration,
}

impl RunSummary {
    /// Whether the input contained at least one repeated value.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.distinct < self.input_len
    }

    /// Number of elements that were dropped as duplicates.
    #[must_use]
    pub fn duplicates_removed(&self) -> usize {
        self.input_len - self.distinct
    }

    /// Timing of the fastest strategy, if any ran.
    #[must_use]
    pub fn fastest(&self) -> Option<StrategyTiming> {
        self.timings.iter().copied().min_by_key(|t| t.elapsed)
    }
}

/// Runs strategies with timing and reporting around them.
#[derive(Debug, Clone, Default)]
pub struct DedupRunner {
    config: RunnerConfig,
}

impl DedupRunner {
    /// Create a runner with the given configuration.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Create a runner that runs every strategy and reports nothing.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Run a single strategy over `values`, consuming them.
    ///
    /// Returns the outcome and the time spent inside the strategy.
    pub fn run_one(&self, strategy: Strategy, values: Vec<i64>) -> (DedupOutcome<i64>, Duration) {
        let reporter = self.config.reporter.as_ref();
        reporter.on_strategy_start(strategy, &values);

        let begin = Instant::now();
        let outcome = strategy.apply(values);
        let elapsed = begin.elapsed();

        if let Some(sorted) = &outcome.sorted {
            reporter.on_sorted(strategy, sorted);
        }
        reporter.on_outcome(&outcome);
        reporter.on_strategy_end(strategy, elapsed);

        log::debug!(
            "{} kept {} distinct values in {:?}",
            strategy,
            outcome.distinct_count(),
            elapsed
        );
        (outcome, elapsed)
    }

    /// Run every configured strategy over a copy of `values`.
    pub fn run(&self, values: &[i64]) -> (Vec<DedupOutcome<i64>>, RunSummary) {
        let begin = Instant::now();
        let mut outcomes = Vec::with_capacity(self.config.strategies.len());
        let mut summary = RunSummary {
            input_len: values.len(),
            distinct: crate::dedup::set::scan(values).distinct.len(),
            ..RunSummary::default()
        };

        for &strategy in &self.config.strategies {
            let (outcome, elapsed) = self.run_one(strategy, values.to_vec());
            if outcome.distinct_count() != summary.distinct {
                log::warn!(
                    "{} reported {} distinct values, expected {}",
                    strategy,
                    outcome.distinct_count(),
                    summary.distinct
                );
            }
            summary.timings.push(StrategyTiming { strategy, elapsed });
            outcomes.push(outcome);
        }

        summary.total_elapsed = begin.elapsed();
        (outcomes, summary)
    }
}
