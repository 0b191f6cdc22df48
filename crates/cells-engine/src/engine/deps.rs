//! Dependency extraction from formula strings.
//!
//! Finds the cells a formula references. A symbol counts as a reference when
//! it looks like a cell id (letters followed by digits) and names a cell of
//! the grid. This drives the reverse-dependency index and therefore
//! recalculation and cycle detection.

use regex::Regex;
use std::sync::OnceLock;

use super::cell_ref::CellRef;
use super::layout::GridSize;
use super::token::{Token, tokenize};

/// Whether a symbol has the shape of a cell id: letters, then digits.
pub fn is_reference_shape(symbol: &str) -> bool {
    reference_shape_re().is_match(symbol)
}

/// Extract the distinct cells a formula references, in order of first appearance.
///
/// A formula that does not tokenize references nothing.
pub fn extract_references(formula: &str, size: &GridSize) -> Vec<CellRef> {
    let Ok(tokens) = tokenize(formula) else {
        return Vec::new();
    };

    let mut refs: Vec<CellRef> = Vec::new();
    for token in &tokens {
        let Token::Operand(symbol) = token else {
            continue;
        };
        if !is_reference_shape(symbol) {
            continue;
        }
        if let Some(cell) = size.resolve(symbol) {
            if !refs.contains(&cell) {
                refs.push(cell);
            }
        }
    }
    refs
}

fn reference_shape_re() -> &'static Regex {
    static SHAPE_RE: OnceLock<Regex> = OnceLock::new();
    SHAPE_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z]+[0-9]+$").expect("reference shape regex must compile")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> GridSize {
        GridSize::new(10, 10).unwrap()
    }

    #[test]
    fn test_extract_references_dedups_in_order() {
        let refs = extract_references("=B2+A1*B2", &size());
        assert_eq!(refs, vec![CellRef::new(1, 1), CellRef::new(0, 0)]);
    }

    #[test]
    fn test_extract_references_skips_numbers_and_outside_cells() {
        let refs = extract_references("=10+K1+A11+a1+C3", &size());
        assert_eq!(refs, vec![CellRef::new(2, 2)]);
    }

    #[test]
    fn test_extract_references_without_equals_is_empty() {
        assert!(extract_references("A1+B1", &size()).is_empty());
    }

    #[test]
    fn test_reference_shape() {
        assert!(is_reference_shape("A1"));
        assert!(is_reference_shape("zz10"));
        assert!(!is_reference_shape("10"));
        assert!(!is_reference_shape("A"));
        assert!(!is_reference_shape("1A"));
        assert!(!is_reference_shape("A1B"));
    }
}
