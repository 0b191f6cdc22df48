//! cells_engine - Stateless spreadsheet engine pieces for the Cells grid.

pub mod engine;
pub mod error;

pub use error::{FormulaError, FormulaResult};

#[cfg(test)]
mod tests {
    use crate::engine::*;

    #[test]
    fn test_from_str_single_letter_columns() {
        let a1 = CellRef::from_str("A1").unwrap();
        assert_eq!(a1.row, 0);
        assert_eq!(a1.col, 0);

        let b1 = CellRef::from_str("B1").unwrap();
        assert_eq!(b1.row, 0);
        assert_eq!(b1.col, 1);

        let z1 = CellRef::from_str("Z1").unwrap();
        assert_eq!(z1.row, 0);
        assert_eq!(z1.col, 25);
    }

    #[test]
    fn test_from_str_multi_letter_columns() {
        assert_eq!(CellRef::from_str("AA1").unwrap().col, 26);
        assert_eq!(CellRef::from_str("AB1").unwrap().col, 27);
        assert_eq!(CellRef::from_str("AZ1").unwrap().col, 51);
        assert_eq!(CellRef::from_str("BA1").unwrap().col, 52);
    }

    #[test]
    fn test_from_str_row_numbers() {
        assert_eq!(CellRef::from_str("A1").unwrap().row, 0);
        assert_eq!(CellRef::from_str("A10").unwrap().row, 9);
        assert_eq!(CellRef::from_str("A100").unwrap().row, 99);
    }

    #[test]
    fn test_from_str_rejects_non_canonical_ids() {
        assert!(CellRef::from_str("a1").is_none());
        assert!(CellRef::from_str("A0").is_none());
        assert!(CellRef::from_str("A01").is_none());
        assert!(CellRef::from_str("1A").is_none());
        assert!(CellRef::from_str("A").is_none());
        assert!(CellRef::from_str("").is_none());
    }

    #[test]
    fn test_display_round_trips_id() {
        for id in ["A1", "J10", "Z99", "AA1", "ZZ9999"] {
            assert_eq!(CellRef::from_str(id).unwrap().to_string(), id);
        }
    }

    #[test]
    fn test_grid_size_resolves_only_in_bounds_ids() {
        let size = GridSize::new(10, 10).unwrap();
        assert_eq!(size.resolve("J10"), Some(CellRef::new(9, 9)));
        assert_eq!(size.resolve("K1"), None);
        assert_eq!(size.resolve("A11"), None);
        assert_eq!(size.resolve("j10"), None);
    }

    #[test]
    fn test_formula_pipeline_evaluates_references() {
        let size = GridSize::new(3, 3).unwrap();
        let tokens = tokenize("= A1 * 2 + B2").unwrap();
        let refs = extract_references("= A1 * 2 + B2", &size);
        assert_eq!(refs, vec![CellRef::new(0, 0), CellRef::new(1, 1)]);

        let value = evaluate(&tokens, |symbol| match symbol {
            "A1" => Some("4"),
            "B2" => Some(""),
            _ => None,
        })
        .unwrap();
        assert_eq!(format_number(value), "8");
    }
}
