//! Edit scripts and markdown rendering.

mod md;
mod parser;

pub use md::{render_markdown, write_markdown};
pub use parser::{Edit, apply_edits, load_edits, parse_edits};
