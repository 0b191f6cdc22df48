use super::{Propagation, Sheet};
use crate::error::{Result, SheetError};
use cells_engine::engine::{CellRef, extract_references, is_plain_number};

impl Sheet {
    /// Set a cell from raw input and recompute everything that depends on it.
    ///
    /// Input that is a plain number (or blank) is stored as a literal;
    /// anything else is stored as a formula. Re-entering a cell's current
    /// formula, or its current literal, changes nothing. Formula failures and
    /// cycles are written into the affected cells as `ERROR`; the only error
    /// returned is for an id outside the grid, in which case the sheet is
    /// left untouched.
    pub fn edit(&mut self, id: &str, raw: &str) -> Result<Propagation> {
        let Some(cell_ref) = self.resolve(id) else {
            log::warn!("ignoring edit of unknown cell {:?}", id);
            return Err(SheetError::UnknownCell(id.to_string()));
        };
        Ok(self.edit_cell(cell_ref, raw))
    }

    fn edit_cell(&mut self, cell_ref: CellRef, raw: &str) -> Propagation {
        let idx = self.index(&cell_ref);

        let cell = &self.cells[idx];
        let unchanged = match &cell.formula {
            Some(formula) => formula == raw,
            None => cell.computed_value == raw,
        };
        if unchanged {
            log::debug!("{}: input unchanged", cell_ref);
            return Propagation::unchanged();
        }

        if let Some(old_formula) = self.cells[idx].formula.take() {
            for precedent in extract_references(&old_formula, &self.size) {
                self.graph.remove_edge(precedent, cell_ref);
            }
        }

        if is_plain_number(raw) {
            log::debug!("{}: literal {:?}", cell_ref, raw);
            self.cells[idx].computed_value = raw.to_string();
        } else {
            log::debug!("{}: formula {:?}", cell_ref, raw);
            for precedent in extract_references(raw, &self.size) {
                self.graph.add_edge(precedent, cell_ref);
            }
            let cell = &mut self.cells[idx];
            cell.formula = Some(raw.to_string());
            cell.computed_value = String::new();
        }

        self.recalculate(cell_ref)
    }
}
