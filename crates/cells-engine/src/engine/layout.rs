//! Fixed grid layout: dimensions, column labels and the id space.

use super::cell_ref::CellRef;

/// Widest supported grid: labels `A` through `ZZ`.
pub const MAX_COLUMNS: usize = 702;
/// Tallest supported grid.
pub const MAX_ROWS: usize = 9999;

/// Dimensions of a grid. Fixed once a sheet is built.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridSize {
    pub rows: usize,
    pub columns: usize,
}

impl GridSize {
    /// Returns None for zero or out-of-range dimensions.
    pub fn new(rows: usize, columns: usize) -> Option<GridSize> {
        if (1..=MAX_ROWS).contains(&rows) && (1..=MAX_COLUMNS).contains(&columns) {
            Some(GridSize { rows, columns })
        } else {
            None
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        cell.row < self.rows && cell.col < self.columns
    }

    /// Resolve a symbol to a cell of this grid.
    ///
    /// Only canonical ids inside the bounds resolve, so reference matching
    /// widens and narrows together with the column labels.
    pub fn resolve(&self, symbol: &str) -> Option<CellRef> {
        CellRef::from_str(symbol).filter(|cell| self.contains(cell))
    }

    /// Row-major position of a cell, if it is inside the grid.
    pub fn index_of(&self, cell: &CellRef) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.columns + cell.col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| CellRef::new(row, col)))
    }
}

/// The first `n` column labels in bijective base-26 (A..Z, AA, AB, ...).
pub fn column_labels(n: usize) -> Vec<String> {
    (0..n).map(CellRef::col_to_letters).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_labels_wrap_after_z() {
        let labels = column_labels(28);
        assert_eq!(labels.len(), 28);
        assert_eq!(labels[0], "A");
        assert_eq!(labels[25], "Z");
        assert_eq!(labels[26], "AA");
        assert_eq!(labels[27], "AB");
    }

    #[test]
    fn test_column_labels_are_unique() {
        let labels = column_labels(MAX_COLUMNS);
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), MAX_COLUMNS);
        assert_eq!(labels.last().map(String::as_str), Some("ZZ"));
    }

    #[test]
    fn test_grid_size_rejects_out_of_range() {
        assert!(GridSize::new(0, 10).is_none());
        assert!(GridSize::new(10, 0).is_none());
        assert!(GridSize::new(MAX_ROWS + 1, 1).is_none());
        assert!(GridSize::new(1, MAX_COLUMNS + 1).is_none());
        assert!(GridSize::new(MAX_ROWS, MAX_COLUMNS).is_some());
    }

    #[test]
    fn test_index_of_is_row_major() {
        let size = GridSize::new(3, 4).unwrap();
        assert_eq!(size.index_of(&CellRef::new(0, 0)), Some(0));
        assert_eq!(size.index_of(&CellRef::new(1, 2)), Some(6));
        assert_eq!(size.index_of(&CellRef::new(3, 0)), None);
        assert_eq!(size.cells().count(), size.cell_count());
        assert_eq!(size.cells().nth(5), Some(CellRef::new(1, 1)));
    }
}
