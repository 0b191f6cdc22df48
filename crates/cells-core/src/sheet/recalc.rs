//! Recalculation of a changed cell and everything downstream of it.
//!
//! One propagation walks the reverse dependency index from the changed cell.
//! Cells on a cycle are forced to `ERROR`; every other reachable formula cell
//! is evaluated exactly once, after all of its reachable precedents, so a
//! diamond (`C1 = A1 + B1`, `B1 = A1`) sees final values. Cells downstream of
//! a cycle are evaluated against the poisoned values and so read `ERROR` too.

use super::Sheet;
use cells_engine::engine::{CellRef, ERROR_VALUE, evaluate, format_number, tokenize};

/// What a single edit recomputed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Propagation {
    /// False when the edit was a no-op.
    pub changed: bool,
    /// Formula cells that were evaluated, in evaluation order.
    pub recomputed: Vec<CellRef>,
    /// Cells found on a cycle and forced to `ERROR`, row-major per cycle.
    pub cyclic: Vec<CellRef>,
}

impl Propagation {
    pub fn unchanged() -> Self {
        Self::default()
    }
}

impl Sheet {
    /// Recompute `origin` and every cell that transitively depends on it.
    pub fn recalculate(&mut self, origin: CellRef) -> Propagation {
        let mut propagation = Propagation {
            changed: true,
            ..Propagation::default()
        };
        if !self.size.contains(&origin) {
            return propagation;
        }

        for component in self.graph.components_from(origin) {
            if self.graph.is_cycle(&component) {
                for cell_ref in component {
                    let idx = self.index(&cell_ref);
                    self.cells[idx].computed_value = ERROR_VALUE.to_string();
                    propagation.cyclic.push(cell_ref);
                }
                continue;
            }

            for cell_ref in component {
                let Some(value) = self.evaluate_cell(&cell_ref) else {
                    continue;
                };
                let idx = self.index(&cell_ref);
                self.cells[idx].computed_value = value;
                propagation.recomputed.push(cell_ref);
            }
        }

        log::debug!(
            "recalculated from {}: {} evaluated, {} on cycles",
            origin,
            propagation.recomputed.len(),
            propagation.cyclic.len()
        );
        propagation
    }

    /// Evaluate a cell's formula against the current values of the cells it
    /// references. None for literal cells.
    fn evaluate_cell(&self, cell_ref: &CellRef) -> Option<String> {
        let formula = self.cells[self.index(cell_ref)].formula.as_deref()?;

        let result = tokenize(formula).and_then(|tokens| {
            evaluate(&tokens, |symbol| {
                self.size
                    .resolve(symbol)
                    .map(|referenced| self.cells[self.index(&referenced)].computed_value.as_str())
            })
        });

        Some(match result {
            Ok(n) => {
                let value = format_number(n);
                log::trace!("{} = {}", cell_ref, value);
                value
            }
            Err(err) => {
                log::trace!("{}: {}", cell_ref, err);
                ERROR_VALUE.to_string()
            }
        })
    }
}
