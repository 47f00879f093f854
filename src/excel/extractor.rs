//! Sheet extractor - spreadsheet (.xlsx) → row-indexed records

use crate::error::{ConvertError, ConvertResult};
use crate::excel::address::CellAddress;
use crate::scenarios::Scenario;
use crate::types::{CellValue, RowTable};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Column label → header text, rebuilt from row 1 of every sheet
pub type HeaderMap = HashMap<String, String>;

/// Extracts one scenario's kept columns from a spreadsheet file
pub struct SheetExtractor {
    path: PathBuf,
    scenario: &'static Scenario,
}

impl SheetExtractor {
    pub fn new<P: AsRef<Path>>(path: P, scenario: &'static Scenario) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            scenario,
        }
    }

    /// Read every sheet of the workbook into one row-indexed table
    pub fn extract(&self) -> ConvertResult<RowTable> {
        info!(
            "Converting {}, scenario {}",
            self.path.display(),
            self.scenario.index
        );

        let mut workbook =
            open_workbook_auto(&self.path).map_err(|e| ConvertError::UnreadableSpreadsheet {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let sheet_names = workbook.sheet_names().to_vec();
        debug!("Found {} sheet(s) in {}", sheet_names.len(), self.path.display());

        // Sheets share one table; equal row numbers merge into the same record
        let mut table = RowTable::new();
        for sheet_name in sheet_names {
            match workbook.worksheet_range(&sheet_name) {
                Ok(range) => {
                    let kept = self.process_sheet(&range, &mut table);
                    debug!("Sheet '{}': kept {} cell(s)", sheet_name, kept);
                }
                Err(e) => warn!(
                    "Skipping sheet '{}' in {}: {}",
                    sheet_name,
                    self.path.display(),
                    e
                ),
            }
        }

        Ok(table)
    }

    /// Walk the populated cells of one sheet, returning how many were kept
    fn process_sheet(&self, range: &Range<Data>, table: &mut RowTable) -> usize {
        let Some((start_row, start_col)) = range.start() else {
            return 0; // Empty sheet
        };

        let mut headers = HeaderMap::new();
        let mut kept = 0;

        // Row-major, so row 1 is seen before any data row
        for (row, col, cell) in range.used_cells() {
            let address =
                CellAddress::from_position(start_row + row as u32, start_col + col as u32);

            if address.is_header() {
                if let Some(header) = header_text(cell) {
                    headers.insert(address.column, header);
                }
                continue;
            }

            // Keyed by the registry spelling so all files of a scenario agree
            let Some(header) = headers
                .get(&address.column)
                .and_then(|h| self.scenario.kept_header(h))
            else {
                continue;
            };

            match cell_value(cell) {
                Some(value) => {
                    table.set(address.row, header, value);
                    kept += 1;
                }
                None => debug!("Ignoring {} at {}", cell, address),
            }
        }

        kept
    }
}

/// Extract `scenario`'s columns from the spreadsheet at `path`
pub fn extract(path: &Path, scenario: &'static Scenario) -> ConvertResult<RowTable> {
    SheetExtractor::new(path, scenario).extract()
}

/// Header label of a row-1 cell, or `None` when it carries nothing
fn header_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.clone(),
        Data::Empty | Data::Error(_) => return None,
        other => other.to_string(),
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Convert a data cell to its output value.
///
/// Only empty cells, empty strings and error cells count as absent: a 0%
/// risk or a `false` flag is data.
fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        // Dates stay Excel serial numbers
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(_) | Data::Empty => None,
    }
}
