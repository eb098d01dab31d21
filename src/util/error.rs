//! Error types for radarscan.

use thiserror::Error;

/// Result alias for radarscan operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Errors raised by configuration, parsing, and matching.
#[derive(Debug, Error, PartialEq)]
pub enum ScanError {
    /// The alphabet characters cannot be used for parsing.
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: &'static str },
    /// The match threshold lies outside the supported probability range.
    #[error("invalid match threshold {value}: must lie in [0.0, 1.0]")]
    InvalidThreshold { value: f64 },
    /// Input text produced no lines.
    #[error("invalid data: no lines found in input")]
    EmptyInput,
    /// A line in the input had zero length.
    #[error("invalid data: line {line} is empty")]
    EmptyLine { line: usize },
    /// A line length disagreed with the first line of the input.
    #[error("invalid data: line {line} has length {got}, expected {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        got: usize,
    },
    /// The pattern grid passed to the matcher has no cells.
    #[error("pattern grid is empty")]
    EmptyPattern,
    /// The radar grid passed to the matcher has no cells.
    #[error("radar grid is empty")]
    EmptyRadar,
}
