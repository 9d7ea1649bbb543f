//! Error types for routine invocation.

use thiserror::Error;

/// Errors raised while invoking or rendering a routine.
///
/// Routines themselves cannot fail; these cover the invocation surface
/// (names and literal parameters) and the output stream.
#[derive(Error, Debug)]
pub enum QueryError {
    /// No routine is registered under the name.
    #[error("Unknown routine: {0}")]
    UnknownRoutine(String),

    /// A parameter was given to a routine that takes none.
    #[error("Routine {routine} does not take a parameter")]
    UnexpectedParameter { routine: String },

    /// The parameter could not be read as a decimal amount.
    #[error("Invalid parameter for {routine}: {value:?} is not a decimal amount")]
    InvalidParameter { routine: String, value: String },

    /// Writing the rendered output failed.
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),
}

/// Result type for routine invocation.
pub type Result<T> = std::result::Result<T, QueryError>;
