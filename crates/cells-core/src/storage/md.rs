//! Markdown export functionality

use crate::sheet::Sheet;
use std::fmt::Write as _;
use std::path::Path;

/// Render the whole grid as a markdown table of display values.
pub fn render_markdown(sheet: &Sheet) -> String {
    let mut out = String::new();

    // Header row with column labels
    out.push_str("|   |");
    for label in sheet.column_labels() {
        let _ = write!(out, " {} |", label);
    }
    out.push('\n');

    out.push_str("|---|");
    for _ in sheet.column_labels() {
        out.push_str("---|");
    }
    out.push('\n');

    for row in sheet.matrix() {
        let _ = write!(out, "| {} |", row.number);
        for (_, cell) in row.iter() {
            let _ = write!(out, " {} |", cell.computed_value);
        }
        out.push('\n');
    }

    out
}

/// Write the grid to a markdown file
pub fn write_markdown(path: &Path, sheet: &Sheet) -> std::io::Result<()> {
    std::fs::write(path, render_markdown(sheet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_markdown_small_grid() {
        let mut sheet = Sheet::new(2, 2).unwrap();
        sheet.edit("A1", "5").unwrap();
        sheet.edit("B2", "=A1/0").unwrap();
        assert_eq!(
            render_markdown(&sheet),
            "|   | A | B |\n|---|---|---|\n| 1 | 5 |  |\n| 2 |  | ERROR |\n"
        );
    }

    #[test]
    fn test_write_markdown_creates_file() {
        let path = std::env::temp_dir().join("cells_write_markdown_test.md");
        let sheet = Sheet::new(1, 1).unwrap();
        write_markdown(&path, &sheet).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(content, "|   | A |\n|---|---|\n| 1 |  |\n");
    }
}
