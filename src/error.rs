//! Error types for the finance manager.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for finance manager operations
pub type Result<T> = std::result::Result<T, FinanceError>;

/// Errors that can occur while loading, exporting or querying records.
///
/// Malformed field values are never errors: they become sentinels on the
/// record (see [`crate::field`]). Only I/O and stream faults abort.
#[derive(Error, Debug)]
pub enum FinanceError {
    /// The CSV source could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream faulted mid-read
    #[error("CSV stream error: {0}")]
    StreamFault(#[from] csv::Error),

    /// The JSON destination could not be written
    #[error("cannot write {}: {source}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrong number of command-line arguments
    #[error("Missing or extra arguments. Usage:\n{}", crate::USAGE)]
    MissingArgument,

    /// Unrecognized CLI command
    #[error("Unknown command '{0}'. Usage:\n{}", crate::USAGE)]
    UnknownCommand(String),

    /// Unrecognized record kind for `export`
    #[error("Unknown record kind '{0}', expected accounts, categories or transactions")]
    UnknownRecordKind(String),

    /// A date given on the command line could not be parsed
    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    /// The account named on the command line is not in the accounts file
    #[error("Account '{0}' not found")]
    AccountNotFound(String),
}
