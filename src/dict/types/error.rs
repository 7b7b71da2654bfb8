//! Custom error types for the vi2zh-dict crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fatal conversion failures.
///
/// Malformed input lines are not errors: they are reported as
/// [`LineOutcome::Skipped`](super::models::LineOutcome::Skipped) and counted.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input dictionary file does not exist.
    #[error("Could not find input file '{}'", .0.display())]
    InputNotFound(PathBuf),

    /// Any other I/O failure: unreadable or non-UTF-8 input, unwritable output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `ConvertError` type.
pub type Result<T> = std::result::Result<T, ConvertError>;
