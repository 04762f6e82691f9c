//! Structured error handling and exit codes.

use std::num::ParseIntError;

use serde::Serialize;
use thiserror::Error;

/// Exit codes for the IntDupe application.
///
/// - 0: Success (completed normally, duplicates found)
/// - 1: General error (unexpected failure)
/// - 2: No duplicates found (completed normally, every value distinct)
/// - 3: Invalid input (unparseable value or nothing to process)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Run completed and duplicates were found.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// No duplicates: Run completed but every value was distinct.
    NoDuplicates = 2,
    /// Invalid input: The values could not be parsed or none were given.
    InvalidInput = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "ID000",
            Self::GeneralError => "ID001",
            Self::NoDuplicates => "ID002",
            Self::InvalidInput => "ID003",
        }
    }
}

/// Errors raised while turning command-line tokens into a sequence.
#[derive(Debug, Error)]
pub enum InputError {
    /// A token is not a valid signed 64-bit integer.
    #[error("Invalid value '{token}': {source}")]
    InvalidValue {
        /// The offending token
        token: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// No values were given and the sample sequence was not requested.
    #[error("No input values given (pass integers or use --sample)")]
    Empty,
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "ID001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}

/// Pick the exit code for an error returned by [`crate::run_app`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<InputError>().is_some() {
        ExitCode::InvalidInput
    } else {
        ExitCode::GeneralError
    }
}
