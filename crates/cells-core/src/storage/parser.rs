//! Parser for edit scripts.
//!
//! One edit per line in `CELL: INPUT` form, applied in order:
//!
//! ```text
//! # comments and blank lines are skipped
//! A1: 5
//! B1: =A1 * 2
//! ```

use crate::error::{Result, SheetError};
use crate::sheet::{Propagation, Sheet};
use cells_engine::engine::is_reference_shape;
use std::fs;
use std::path::Path;

/// A single scripted edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    /// 1-based source line.
    pub line: usize,
    pub id: String,
    pub input: String,
}

/// Read and parse an edit script file.
pub fn load_edits(path: &Path) -> Result<Vec<Edit>> {
    let content = fs::read_to_string(path)?;
    parse_edits(&content)
}

/// Parse edit script content.
pub fn parse_edits(content: &str) -> Result<Vec<Edit>> {
    let mut edits = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((id, input)) = line.split_once(':') else {
            return Err(SheetError::Parse {
                line: line_num + 1,
                message: "Expected 'CELL: INPUT' format".to_string(),
            });
        };

        let id = id.trim();
        if !is_reference_shape(id) {
            return Err(SheetError::Parse {
                line: line_num + 1,
                message: format!("Invalid cell reference: {}", id),
            });
        }

        edits.push(Edit {
            line: line_num + 1,
            id: id.to_string(),
            input: input.trim().to_string(),
        });
    }

    Ok(edits)
}

/// Apply edits in order. An edit of a cell outside the sheet fails with the
/// line it came from; edits before it stay applied.
pub fn apply_edits(sheet: &mut Sheet, edits: &[Edit]) -> Result<Vec<Propagation>> {
    edits
        .iter()
        .map(|edit| {
            sheet
                .edit(&edit.id, &edit.input)
                .map_err(|err| match err {
                    SheetError::UnknownCell(id) => SheetError::Parse {
                        line: edit.line,
                        message: format!("Unknown cell: {}", id),
                    },
                    other => other,
                })
        })
        .collect()
}
