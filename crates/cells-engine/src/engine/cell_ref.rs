//! Cell id parsing and formatting.
//!
//! Provides bidirectional conversion between cell ids (e.g., "A1", "B2",
//! "AA100") and zero-indexed row/column coordinates. Only the canonical
//! upper-case form with no leading zeros parses, so an id and its
//! coordinates always round-trip.
//!
//! # Examples
//!
//! ```
//! use cells_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::FormulaError;

/// A reference to a cell by row and column indices (0-indexed).
///
/// Ordering is row-major, which is also the order cells are laid out in.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell id (e.g., "A1", "B2", "AA10").
    /// Returns None if the input is not a canonical id.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(id: &str) -> Option<CellRef> {
        Self::parse_a1(id)
    }

    fn parse_a1(id: &str) -> Option<CellRef> {
        let caps = id_re().captures(id)?;
        let letters = &caps["letters"];
        let numbers = &caps["numbers"];

        let mut col_acc = 0usize;
        for c in letters.bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        let col = col_acc.checked_sub(1)?;

        let row = numbers.parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(row, col))
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

fn id_re() -> &'static Regex {
    static ID_RE: OnceLock<Regex> = OnceLock::new();
    ID_RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Z]+)(?<numbers>[1-9][0-9]*)$")
            .expect("cell id regex must compile")
    })
}

impl std::str::FromStr for CellRef {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| FormulaError::InvalidReference(s.to_string()))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}
