//! Sheet state and logic (UI-agnostic).

mod ops;
mod recalc;
mod state;
mod view;

pub use recalc::Propagation;
pub use state::{Cell, DEFAULT_COLUMNS, DEFAULT_ROWS, Sheet};
pub use view::RowView;
