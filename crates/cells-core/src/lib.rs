//! cells-core - UI-agnostic sheet model for the Cells grid.

pub mod error;
pub mod graph;
pub mod sheet;
pub mod storage;

pub use error::{Result, SheetError};
pub use graph::DependencyGraph;
pub use sheet::{Cell, Propagation, RowView, Sheet};

pub use cells_engine::engine::{CellRef, ERROR_VALUE, GridSize};
