//! IntDupe - Duplicate Integer Detection
//!
//! Four interchangeable strategies for finding the distinct values of an
//! integer sequence (hash-set, order-preserving linear scan, selection-style
//! sort with compaction, quicksort with compaction), a timing runner around
//! them, and text/JSON/CSV reporting for the `intdupe` binary.

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod runner;

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::{Cli, Commands, OutputFormat, RunArgs};
use crate::config::Config;
use crate::dedup::Strategy;
use crate::error::ExitCode;
use crate::output::{CsvOutput, JsonOutput, TextOutput};
use crate::report::{DedupReporter, LogReporter, NoopReporter};
use crate::runner::{DedupRunner, RunnerConfig};

/// Run the application for parsed CLI arguments.
///
/// Initializes logging, loads the layered configuration and dispatches the
/// subcommand. Results go to stdout.
///
/// # Errors
///
/// Returns an error for invalid input values or output failures.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);
    let mut config = Config::load(cli.config.as_deref());

    match cli.command {
        Commands::Strategies => {
            let mut stdout = io::stdout().lock();
            for strategy in Strategy::ALL {
                writeln!(stdout, "{:<10} {}", strategy.name(), strategy.description())?;
            }
            Ok(ExitCode::Success)
        }
        Commands::Run(args) => {
            let stdout_is_terminal = io::stdout().is_terminal();
            config.apply_run_args(&args, color_disabled(cli.no_color, stdout_is_terminal));
            let reporter: Arc<dyn DedupReporter> = if cli.verbose > 0 {
                Arc::new(LogReporter::new().with_timing(config.timing))
            } else {
                Arc::new(NoopReporter)
            };
            run_command(&args, &config, reporter, &mut io::stdout().lock())
        }
    }
}

/// Whether text output should be plain: on request, or when stdout is not a
/// terminal (pipes and files get no escape codes).
fn color_disabled(no_color: bool, stdout_is_terminal: bool) -> bool {
    no_color || !stdout_is_terminal
}

/// Execute `intdupe run` and write the formatted results to `out`.
///
/// # Errors
///
/// Returns [`crate::error::InputError`] (wrapped) for invalid or missing
/// values, or an I/O/serialization error from the formatter.
pub fn run_command<W: Write>(
    args: &RunArgs,
    config: &Config,
    reporter: Arc<dyn DedupReporter>,
    out: &mut W,
) -> Result<ExitCode> {
    let input = args.input_values()?;
    log::debug!(
        "Running {:?} over {} values",
        config.effective_strategies(),
        input.len()
    );

    let runner = DedupRunner::new(
        RunnerConfig::default()
            .with_strategies(config.effective_strategies())
            .with_reporter(reporter),
    );
    let (outcomes, summary) = runner.run(&input);

    let exit_code = if summary.has_duplicates() {
        ExitCode::Success
    } else {
        ExitCode::NoDuplicates
    };

    match config.output {
        OutputFormat::Text => TextOutput::new(&input, &outcomes, &summary)
            .with_timing(config.timing)
            .with_color(config.color)
            .write_to(out)
            .context("Failed to write text output")?,
        OutputFormat::Json => {
            JsonOutput::new(&input, &outcomes, &summary, exit_code, config.timing)
                .write_to(out)
                .context("Failed to write JSON output")?
        }
        OutputFormat::Csv => CsvOutput::new(&outcomes)
            .write_to(out)
            .context("Failed to write CSV output")?,
    }

    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_color_disabled_when_piped() {
        assert!(color_disabled(false, false));
        assert!(color_disabled(true, false));
        assert!(color_disabled(true, true));
        assert!(!color_disabled(false, true));
    }

    #[test]
    fn test_piped_run_has_no_escape_codes() {
        let args = match Cli::try_parse_from(["intdupe", "run", "1", "1"]).unwrap().command {
            Commands::Run(args) => args,
            Commands::Strategies => unreachable!(),
        };
        let mut config = Config::default();
        config.apply_run_args(&args, color_disabled(false, false));

        let mut out = Vec::new();
        run_command(&args, &config, Arc::new(NoopReporter), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("linear"));
        assert!(!text.contains('\u{1b}'));
    }
}
