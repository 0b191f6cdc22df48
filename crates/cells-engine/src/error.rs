//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while tokenizing or evaluating a formula.
///
/// None of these reach the caller of an edit: the sheet records any of them
/// as the `ERROR` display value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FormulaError {
    /// The formula could not be tokenized (e.g. it does not start with `=`)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The token sequence is not a well-formed expression
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// An operand (literal or referenced value) is not a number
    #[error("Non-numeric operand: {0}")]
    NonNumeric(String),

    /// Division by zero, overflow or NaN
    #[error("Result is not a finite number")]
    NonFinite,

    /// Text that is not a cell id
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),
}
