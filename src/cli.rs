//! Command-line interface definitions for IntDupe.
//!
//! Global options (verbosity, color, config file) plus two subcommands:
//!
//! ```bash
//! # Run every strategy over the given values
//! intdupe run 1 2 34 34 25 1
//!
//! # Comma separated values and negatives are accepted
//! intdupe run 4,-2,4 -- -7
//!
//! # Only quicksort, JSON output, over the built-in sample
//! intdupe run --sample -s quicksort -o json
//!
//! # List strategies
//! intdupe strategies
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::dedup::Strategy;
use crate::error::InputError;

/// Duplicate integer detection with four interchangeable strategies.
#[derive(Debug, Parser)]
#[command(name = "intdupe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (results are still written to stdout)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Path to a TOML configuration file
    ///
    /// Defaults to the platform config directory (e.g. ~/.config/intdupe/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the distinct values of a sequence of integers
    Run(RunArgs),
    /// List the available strategies
    Strategies,
}

/// Arguments for the run subcommand.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Integers to deduplicate (space or comma separated)
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Use the built-in sample sequence (appended after VALUES)
    #[arg(long)]
    pub sample: bool,

    /// Strategy to run (can be specified multiple times; default: all)
    #[arg(short, long = "strategy", value_enum, value_name = "STRATEGY")]
    pub strategies: Vec<Strategy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Omit elapsed times from the output
    #[arg(long)]
    pub no_timing: bool,
}

impl RunArgs {
    /// Collect the input sequence from VALUES and `--sample`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidValue`] for the first unparseable token
    /// and [`InputError::Empty`] when nothing was given.
    pub fn input_values(&self) -> Result<Vec<i64>, InputError> {
        let mut values = parse_values(&self.values)?;
        if self.sample {
            values.extend_from_slice(&crate::dedup::SAMPLE);
        }
        if values.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(values)
    }
}

/// Output format for run results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parse integer tokens. Each token may hold several comma separated values.
///
/// # Examples
///
/// ```
/// use intdupe::cli::parse_values;
///
/// let tokens = vec!["1,2".to_string(), "-3".to_string(), " 4 ".to_string()];
/// assert_eq!(parse_values(&tokens).unwrap(), vec![1, 2, -3, 4]);
/// ```
///
/// # Errors
///
/// Returns [`InputError::InvalidValue`] for the first token that is not a
/// signed 64-bit integer. Empty pieces (`1,,2`) are skipped.
pub fn parse_values(tokens: &[String]) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::with_capacity(tokens.len());
    for piece in tokens.iter().flat_map(|t| t.split(',')) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let value = piece
            .parse::<i64>()
            .map_err(|source| InputError::InvalidValue {
                token: piece.to_string(),
                source,
            })?;
        values.push(value);
    }
    Ok(values)
}
