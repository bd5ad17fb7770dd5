//! Error types for mr-blocks

use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while scanning for or rewriting a marker region.
///
/// Line and column numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("({line}:{column}): Expected {expected}, got {found:?}")]
    Syntax {
        line: usize,
        column: usize,
        expected: &'static str,
        found: char,
    },

    #[error("({line}:{column}): Nested markers are not allowed (marker '{name}' is already open)")]
    NestedMarker {
        name: String,
        line: usize,
        column: usize,
    },

    #[error("({line}:{column}): Marker names cannot be longer than {max} bytes")]
    NameTooLong {
        line: usize,
        column: usize,
        max: usize,
    },

    #[error("({line}:{column}): Unexpected end of marker, an end line needs a marker name")]
    UnexpectedEnd { line: usize, column: usize },

    #[error("Marker '{name}' not found")]
    MarkerNotFound { name: String },

    #[error("Expected end of marker '{name}', got end of buffer. Please add '{prefix}}}'")]
    UnterminatedMarker { name: String, prefix: String },

    #[error("Could not grow buffer by {requested} bytes")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
