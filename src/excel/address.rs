//! A1-style cell addresses

use std::fmt;

/// A cell address split into its column label and 1-based row number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellAddress {
    pub column: String,
    pub row: u32,
}

impl CellAddress {
    /// Row holding the header labels
    pub const HEADER_ROW: u32 = 1;

    /// Build an address from a zero-based (row, column) grid position
    pub fn from_position(row: u32, col: u32) -> Self {
        Self {
            column: column_label(col),
            row: row + 1,
        }
    }

    pub fn is_header(&self) -> bool {
        self.row == Self::HEADER_ROW
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// Convert column index to Excel column letter (0→A, 1→B, 25→Z, 26→AA, etc.)
pub fn column_label(n: u32) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}
