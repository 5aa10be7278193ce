//! Error types for JSON parsing, generation, and value access.

use crate::value::Kind;
use thiserror::Error;

/// Errors that can occur while parsing, serializing, or accessing JSON values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The input text was not well-formed JSON, or trailing non-whitespace
    /// characters remained after a complete value. Carries the 1-based line
    /// and column where the error was detected.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// An accessor was called against a value of a different kind
    /// (e.g. `as_string` on a `Number`).
    #[error("type mismatch: expected {expected:?}, found {actual:?}")]
    TypeMismatch { expected: Kind, actual: Kind },

    /// A non-mutating object lookup for a key that is not present.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// An array index outside `0..len`.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A string payload or object key containing a character the format
    /// cannot represent (newline, carriage return, or backslash — there is
    /// no escape mechanism). Rejected at construction, not silently escaped.
    #[error("invalid character {0:?} in string value")]
    InvalidCharacter(char),

    /// The generator detected a value it cannot render, e.g. a non-finite
    /// double. This indicates a defect in the caller's tree, not bad input.
    #[error("generate error: {0}")]
    Generate(String),
}

/// Convenience alias used throughout jsonv-core.
pub type Result<T> = std::result::Result<T, JsonError>;
