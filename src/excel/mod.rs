//! Spreadsheet reading
//!
//! - `address`: A1-style cell addresses
//! - `extractor`: per-scenario column extraction from workbooks

mod address;
mod extractor;

pub use address::{column_label, CellAddress};
pub use extractor::{extract, HeaderMap, SheetExtractor};
