//! File resolver - groups input spreadsheets by scenario
//!
//! Files are named `{N}[.{variant}]-description.xlsx`. The leading integer is
//! the scenario; `3.1-...` is a supplementary file for scenario 3, covering a
//! case the published table leaves out.

use crate::error::{ConvertError, ConvertResult};
use crate::scenarios::Scenario;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extensions calamine can open
const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Numeric prefix of an input file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FilePrefix {
    pub scenario: u32,
    /// `Some(1)` for `3.1-...`, `None` for the base file
    pub variant: Option<u32>,
}

/// Input files per scenario, base file first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioFiles {
    by_scenario: BTreeMap<u8, Vec<PathBuf>>,
}

impl ScenarioFiles {
    /// Files for a scenario; empty when nothing matched
    pub fn files(&self, scenario: u8) -> &[PathBuf] {
        self.by_scenario
            .get(&scenario)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.by_scenario.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Scans an input directory for scenario spreadsheets
pub struct FileResolver {
    input_dir: PathBuf,
    prefix_pattern: Regex,
}

impl FileResolver {
    pub fn new<P: AsRef<Path>>(input_dir: P) -> ConvertResult<Self> {
        // The full leading digit run is captured, so `31-...` reads as 31, never 3
        let prefix_pattern = Regex::new(r"^(\d+)(?:\.(\d+))?")
            .map_err(|e| ConvertError::Pattern(e.to_string()))?;
        Ok(Self {
            input_dir: input_dir.as_ref().to_path_buf(),
            prefix_pattern,
        })
    }

    /// Parse the scenario/variant prefix of a file name
    pub fn parse_prefix(&self, file_name: &str) -> Option<FilePrefix> {
        let captures = self.prefix_pattern.captures(file_name)?;
        let scenario = captures.get(1)?.as_str().parse().ok()?;
        let variant = match captures.get(2) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        Some(FilePrefix { scenario, variant })
    }

    /// List the input directory (non-recursively) and group matching files.
    ///
    /// Within a scenario the base file comes first, then variants in numeric
    /// order (`3.2` before `3.10`), ties broken by file name.
    pub fn resolve(&self) -> ConvertResult<ScenarioFiles> {
        if !self.input_dir.is_dir() {
            return Err(ConvertError::MissingInputDirectory(self.input_dir.clone()));
        }

        let read_error = |source: std::io::Error| ConvertError::ReadDirectory {
            path: self.input_dir.clone(),
            source,
        };

        let mut matched: Vec<(FilePrefix, String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.input_dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !is_spreadsheet(&path) {
                debug!("Skipping non-spreadsheet {}", name);
                continue;
            }
            let Some(prefix) = self.parse_prefix(name) else {
                debug!("Skipping {}: no scenario number", name);
                continue;
            };
            if prefix.scenario == 0 || prefix.scenario > u32::from(Scenario::count()) {
                warn!(
                    "Skipping {}: scenario {} is not in 1..={}",
                    name,
                    prefix.scenario,
                    Scenario::count()
                );
                continue;
            }
            matched.push((prefix, name.to_string(), path));
        }

        // read_dir order is platform-dependent
        matched.sort();

        let mut files = ScenarioFiles::default();
        for (prefix, _, path) in matched {
            files
                .by_scenario
                .entry(prefix.scenario as u8)
                .or_default()
                .push(path);
        }
        Ok(files)
    }
}

/// Resolve the input files of every scenario under `input_dir`
pub fn resolve_files(input_dir: &Path) -> ConvertResult<ScenarioFiles> {
    FileResolver::new(input_dir)?.resolve()
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| e.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
