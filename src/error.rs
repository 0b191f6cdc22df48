//! Error types for the Cells command line

use thiserror::Error;

/// Errors that can occur in the Cells command line
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Sheet(#[from] cells_core::SheetError),
}

pub type Result<T> = std::result::Result<T, CliError>;
