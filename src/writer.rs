//! Aggregator/writer - merges a scenario's tables and writes its JSON file

use crate::error::{ConvertError, ConvertResult};
use crate::scenarios::Scenario;
use crate::types::{OutputLayout, Record, RowTable};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// How the scenario JSON is laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub layout: OutputLayout,
    /// Indented JSON instead of a single line
    pub pretty: bool,
}

/// Merge the per-file tables of one scenario.
///
/// The first table is the base and keeps its row-indexed positions. Later
/// (variant) tables contribute only their records, appended in row order.
pub fn aggregate(tables: Vec<RowTable>) -> Vec<Option<Record>> {
    let mut tables = tables.into_iter();
    let mut rows = match tables.next() {
        Some(base) => base.into_slots(),
        None => return Vec::new(),
    };
    for supplement in tables {
        rows.extend(supplement.into_records().map(Some));
    }
    rows
}

/// Render the merged rows as JSON
pub fn to_json(
    scenario: &Scenario,
    rows: &[Option<Record>],
    options: WriteOptions,
) -> ConvertResult<String> {
    let serialize_error = |source: serde_json::Error| ConvertError::Serialize {
        scenario: scenario.index,
        source,
    };

    let rendered = match options.layout {
        OutputLayout::Sparse => render(rows, options.pretty),
        OutputLayout::Dense => {
            let dense: Vec<&Record> = rows.iter().flatten().collect();
            render(&dense, options.pretty)
        }
    };
    rendered.map_err(serialize_error)
}

fn render<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Write `{output_dir}/scenario-{N}.json`, creating `output_dir` if needed.
///
/// The write completes before this returns.
pub fn write_scenario(
    scenario: &Scenario,
    rows: &[Option<Record>],
    output_dir: &Path,
    options: WriteOptions,
) -> ConvertResult<PathBuf> {
    let path = output_dir.join(scenario.output_file_name());
    let json = to_json(scenario, rows, options)?;

    let write_error = |source: std::io::Error| ConvertError::Write {
        scenario: scenario.index,
        path: path.clone(),
        source,
    };
    fs::create_dir_all(output_dir).map_err(write_error)?;
    fs::write(&path, json).map_err(write_error)?;

    info!(
        "Wrote scenario {} ({} slot(s)) to {}",
        scenario.index,
        rows.len(),
        path.display()
    );
    Ok(path)
}
