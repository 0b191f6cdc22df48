use super::{Cell, Sheet};
use cells_engine::engine::CellRef;

/// One projected row: column label -> cell, in label order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView<'a> {
    /// 1-based row number.
    pub number: usize,
    cells: Vec<(&'a str, &'a Cell)>,
}

impl<'a> RowView<'a> {
    pub fn get(&self, label: &str) -> Option<&'a Cell> {
        self.cells
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, cell)| *cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Cell)> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Sheet {
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Static `(row, column)` -> id layout, row-major.
    pub fn cell_label_matrix(&self) -> &[Vec<CellRef>] {
        &self.cell_label_matrix
    }

    /// Id at a 1-based row number and column label.
    pub fn lookup(&self, row_number: usize, label: &str) -> Option<CellRef> {
        let col = self.column_labels.iter().position(|l| l == label)?;
        let row = self.cell_label_matrix.get(row_number.checked_sub(1)?)?;
        row.get(col).copied()
    }

    /// Read-only row/column projection of the current cells.
    pub fn matrix(&self) -> Vec<RowView<'_>> {
        self.cell_label_matrix
            .iter()
            .enumerate()
            .map(|(row, ids)| RowView {
                number: row + 1,
                cells: self
                    .column_labels
                    .iter()
                    .zip(ids)
                    .map(|(label, id)| (label.as_str(), &self.cells[self.index(id)]))
                    .collect(),
            })
            .collect()
    }
}
