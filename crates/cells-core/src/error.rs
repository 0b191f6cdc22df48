//! Error types for Cells core.

use thiserror::Error;

/// Errors that can occur when building or driving a sheet.
///
/// Formula failures are not here: they are written into the cell as `ERROR`.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid grid dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Unknown cell: {0}")]
    UnknownCell(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
