//! Error types.
//!
//! The selection algorithms fail only on goodie-window preconditions
//! (`SelectionError`). Record construction rejects malformed values
//! (`RecordError`), the text parser reports the offending line
//! (`ParseError`), and the crate-level `Error` wraps everything the
//! file-based entry points can raise.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the file-based entry points.
#[derive(Error, Debug)]
pub enum Error {
    /// Selection precondition violated.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Input text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reading or writing a file failed.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Precondition failures of the goodie window selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// More goodies requested than are available.
    #[error("Requested {requested} goodies but only {available} are available")]
    InsufficientItems { requested: usize, available: usize },

    /// Headcount is zero or negative.
    #[error("Headcount must be at least 1, got {headcount}")]
    InvalidHeadcount { headcount: i64 },
}

/// Rejected field values at record construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Job ends before it starts.
    #[error("Job ends at {end} before it starts at {start}")]
    EndBeforeStart { start: i64, end: i64 },

    /// Profit is negative or not a finite number.
    #[error("Invalid profit: {0}")]
    InvalidProfit(f64),

    /// Price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
}

/// A malformed input line.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// Categories of parse failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Input ended where another line was expected.
    #[error("expected {0}, found end of input")]
    MissingLine(&'static str),

    /// A numeric field did not parse.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A `key: value` line lacks the `": "` separator.
    #[error("missing ': ' separator in '{0}'")]
    MissingSeparator(String),

    /// Field values were parsed but the record is invalid.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] RecordError),
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}
