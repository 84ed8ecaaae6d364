//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during expression parsing or evaluation
///
/// A variable missing from the context is deliberately *not* an error: it
/// evaluates to unknown and propagates through arithmetic. The conditions
/// below all indicate a mis-authored form definition.
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Expression parse error, with the byte position of the offending text
    #[error("parse error at position {position}: {message}")]
    Parse { message: String, position: usize },

    /// Unknown function
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments
    #[error("wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Invalid argument
    #[error("invalid argument: {0}")]
    Argument(String),
}
