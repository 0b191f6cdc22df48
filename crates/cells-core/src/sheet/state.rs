use crate::error::{Result, SheetError};
use crate::graph::DependencyGraph;
use cells_engine::engine::{CellRef, GridSize, column_labels};

/// Default grid height.
pub const DEFAULT_ROWS: usize = 10;
/// Default grid width.
pub const DEFAULT_COLUMNS: usize = 10;

/// A single grid location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Stable id; `Display` gives the `A1` form.
    pub id: CellRef,
    /// Raw formula text, or None when the cell holds a literal.
    pub formula: Option<String>,
    /// What the cell shows: literal text, a formatted number, `ERROR`, or
    /// empty when nothing has been computed yet.
    pub computed_value: String,
}

impl Cell {
    pub fn new_empty(id: CellRef) -> Cell {
        Cell {
            id,
            formula: None,
            computed_value: String::new(),
        }
    }

    pub fn is_formula(&self) -> bool {
        self.formula.is_some()
    }

    /// Text to show when the cell is opened for editing.
    pub fn to_input_string(&self) -> &str {
        self.formula.as_deref().unwrap_or(&self.computed_value)
    }
}

/// The fixed grid of cells with its reverse dependency index.
///
/// Dimensions, labels and the id space are fixed at construction; cells are
/// never added or removed, only edited through [`Sheet::edit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub(crate) size: GridSize,
    /// Every cell, row-major.
    pub(crate) cells: Vec<Cell>,
    pub(crate) column_labels: Vec<String>,
    /// Row-major `(row, column)` -> id lookup, aligned with `column_labels`.
    pub(crate) cell_label_matrix: Vec<Vec<CellRef>>,
    /// Cell -> cells whose formulas reference it.
    pub(crate) graph: DependencyGraph,
}

impl Sheet {
    /// Build an empty `rows` x `columns` grid.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let size =
            GridSize::new(rows, columns).ok_or(SheetError::InvalidDimensions { rows, columns })?;

        let cells = size.cells().map(Cell::new_empty).collect();
        let cell_label_matrix = (0..rows)
            .map(|row| (0..columns).map(|col| CellRef::new(row, col)).collect())
            .collect();

        log::debug!("initialized {}x{} sheet", rows, columns);

        Ok(Sheet {
            size,
            cells,
            column_labels: column_labels(columns),
            cell_label_matrix,
            graph: DependencyGraph::new(),
        })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn columns(&self) -> usize {
        self.size.columns
    }

    /// Resolve an id (`"C12"`) to a cell of this sheet.
    pub fn resolve(&self, id: &str) -> Option<CellRef> {
        self.size.resolve(id)
    }

    pub fn get(&self, id: &str) -> Option<&Cell> {
        self.resolve(id).and_then(|cell_ref| self.get_ref(&cell_ref))
    }

    pub fn get_ref(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.size.index_of(cell_ref).map(|idx| &self.cells[idx])
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells whose formulas reference `id`, row-major. Empty for unknown ids.
    pub fn children(&self, id: &str) -> Vec<CellRef> {
        match self.resolve(id) {
            Some(cell_ref) => self.graph.children(cell_ref).collect(),
            None => Vec::new(),
        }
    }

    /// The maintained reverse dependency index.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Rebuild the reverse dependency index from the current formulas.
    pub fn rebuild_graph(&self) -> DependencyGraph {
        let formulas = self
            .cells
            .iter()
            .filter_map(|cell| cell.formula.as_deref().map(|formula| (cell.id, formula)));
        DependencyGraph::from_formulas(formulas, &self.size)
    }

    /// Position of a cell known to be inside the grid.
    pub(crate) fn index(&self, cell_ref: &CellRef) -> usize {
        cell_ref.row * self.size.columns + cell_ref.col
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Sheet::new(DEFAULT_ROWS, DEFAULT_COLUMNS).expect("default grid dimensions are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sheet_is_empty() {
        let sheet = Sheet::new(3, 2).unwrap();
        assert_eq!(sheet.cells().count(), 6);
        assert!(
            sheet
                .cells()
                .all(|c| c.formula.is_none() && c.computed_value.is_empty())
        );
        assert_eq!(sheet.graph().edge_count(), 0);
    }

    #[test]
    fn test_new_is_pure_construction() {
        assert_eq!(Sheet::new(4, 5).unwrap(), Sheet::new(4, 5).unwrap());
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(matches!(
            Sheet::new(0, 10),
            Err(SheetError::InvalidDimensions { rows: 0, columns: 10 })
        ));
        assert!(Sheet::new(10, 703).is_err());
    }

    #[test]
    fn test_get_by_id() {
        let sheet = Sheet::default();
        assert_eq!(sheet.get("C2").unwrap().id, CellRef::new(1, 2));
        assert_eq!(sheet.get("C2").unwrap().id.to_string(), "C2");
        assert!(sheet.get("K1").is_none());
        assert!(sheet.get("A11").is_none());
        assert!(sheet.get("nope").is_none());
    }

    #[test]
    fn test_cell_input_string() {
        let mut cell = Cell::new_empty(CellRef::new(0, 0));
        cell.computed_value = "7".to_string();
        assert_eq!(cell.to_input_string(), "7");
        cell.formula = Some("=B1".to_string());
        assert_eq!(cell.to_input_string(), "=B1");
        assert!(cell.is_formula());
    }
}
