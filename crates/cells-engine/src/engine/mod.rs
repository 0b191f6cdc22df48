//! Spreadsheet engine API.
//!
//! This module provides the stateless computation pieces of the grid:
//!
//! - [`CellRef`] - Cell id parsing (A1 notation ↔ row/col indices)
//! - [`GridSize`], [`column_labels`] - Fixed grid layout and its id space
//! - [`tokenize`], [`Token`] - Formula tokenizer
//! - [`extract_references`] - Cell references a formula depends on
//! - [`evaluate`] - Arithmetic evaluation over resolved references
//! - [`format_number`] - Format results for display

mod cell_ref;
mod deps;
mod eval;
mod format;
mod layout;
mod token;

pub use cell_ref::CellRef;
pub use deps::{extract_references, is_reference_shape};
pub use eval::{evaluate, is_plain_number, parse_number};
pub use format::{ERROR_VALUE, format_number};
pub use layout::{GridSize, MAX_COLUMNS, MAX_ROWS, column_labels};
pub use token::{Operator, Token, tokenize};
