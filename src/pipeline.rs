//! Conversion pipeline: resolve → extract → aggregate → write, per scenario

use crate::error::{ConvertError, ConvertResult};
use crate::excel::extract;
use crate::resolver::resolve_files;
use crate::scenarios::Scenario;
use crate::types::{OutputLayout, RowTable};
use crate::writer::{aggregate, write_scenario, WriteOptions};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub const DEFAULT_INPUT_DIR: &str = "xlsx";
pub const DEFAULT_OUTPUT_DIR: &str = "json";

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub layout: OutputLayout,
    pub pretty: bool,
    /// Warn and skip spreadsheets that fail to open instead of failing their scenario
    pub skip_unreadable: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            layout: OutputLayout::Sparse,
            pretty: false,
            skip_unreadable: false,
        }
    }
}

impl ConvertConfig {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            layout: self.layout,
            pretty: self.pretty,
        }
    }
}

/// What happened to one scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub scenario: &'static Scenario,
    /// Matched input files, base first
    pub files: Vec<PathBuf>,
    /// Files left out under `skip_unreadable`
    pub skipped: Vec<PathBuf>,
    /// Materialized records written
    pub records: usize,
    /// Output path, or why the scenario was not written
    pub result: ConvertResult<PathBuf>,
}

impl ScenarioOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of all six scenarios, in scenario order
#[derive(Debug)]
pub struct ConversionReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ConversionReport {
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// `Err(Incomplete)` when any scenario failed
    pub fn into_result(self) -> ConvertResult<Self> {
        let failed = self.failures().count();
        if failed == 0 {
            Ok(self)
        } else {
            Err(ConvertError::Incomplete { failed })
        }
    }
}

/// Convert every scenario found under `config.input_dir`.
///
/// A missing input directory fails the whole run before anything is written.
/// Any other failure is confined to its scenario and recorded in the report;
/// the remaining scenarios are still converted.
pub fn run(config: &ConvertConfig) -> ConvertResult<ConversionReport> {
    let files = resolve_files(&config.input_dir)?;
    info!(
        "Found {} input file(s) in {}",
        files.total(),
        config.input_dir.display()
    );

    let outcomes = Scenario::all()
        .iter()
        .map(|scenario| convert_scenario(scenario, files.files(scenario.index), config))
        .collect();

    Ok(ConversionReport { outcomes })
}

/// Convert one scenario from its matched files. Always writes the output
/// file unless a file failed to open (and is not skipped) or the write fails.
pub fn convert_scenario(
    scenario: &'static Scenario,
    files: &[PathBuf],
    config: &ConvertConfig,
) -> ScenarioOutcome {
    info!(
        "Working on scenario {} ({}), matched {} file(s)",
        scenario.index,
        scenario.name,
        files.len()
    );

    let mut outcome = ScenarioOutcome {
        scenario,
        files: files.to_vec(),
        skipped: Vec::new(),
        records: 0,
        result: Ok(PathBuf::new()),
    };

    // Fresh accumulator per scenario
    let mut tables = Vec::with_capacity(files.len());
    for (i, path) in files.iter().enumerate() {
        match extract(path, scenario) {
            Ok(table) => tables.push(table),
            Err(e) if config.skip_unreadable => {
                warn!("Scenario {}: skipping {}", scenario.index, e);
                outcome.skipped.push(path.clone());
                // An empty base keeps later variant files appended flattened
                if i == 0 {
                    tables.push(RowTable::new());
                }
            }
            Err(e) => {
                error!("Scenario {}: {}", scenario.index, e);
                outcome.result = Err(e);
                return outcome;
            }
        }
    }

    let rows = aggregate(tables);
    outcome.records = rows.iter().flatten().count();
    outcome.result = write_scenario(scenario, &rows, &config.output_dir, config.write_options());
    if let Err(e) = &outcome.result {
        error!("{}", e);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> ConvertConfig {
        ConvertConfig {
            input_dir: dir.path().join("xlsx"),
            output_dir: dir.path().join("json"),
            ..ConvertConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("xlsx"));
        assert_eq!(config.output_dir, PathBuf::from("json"));
        assert_eq!(config.layout, OutputLayout::Sparse);
        assert!(!config.skip_unreadable);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let result = run(&config);

        assert!(matches!(
            result,
            Err(ConvertError::MissingInputDirectory(_))
        ));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_empty_input_writes_six_empty_arrays() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        fs::create_dir(&config.input_dir).unwrap();

        let report = run(&config).unwrap().into_result().unwrap();

        assert_eq!(report.outcomes.len(), 6);
        for scenario in Scenario::all() {
            let path = config.output_dir.join(scenario.output_file_name());
            assert_eq!(fs::read_to_string(path).unwrap(), "[]");
        }
    }

    #[test]
    fn test_unreadable_file_fails_only_its_scenario() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        fs::create_dir(&config.input_dir).unwrap();
        fs::write(config.input_dir.join("2-corrupt.xlsx"), b"not a zip").unwrap();

        let report = run(&config).unwrap();

        let failed: Vec<u8> = report.failures().map(|o| o.scenario.index).collect();
        assert_eq!(failed, vec![2]);
        assert!(!config.output_dir.join("scenario-2.json").exists());
        assert!(config.output_dir.join("scenario-1.json").exists());
        assert!(config.output_dir.join("scenario-6.json").exists());
        assert!(matches!(
            report.into_result(),
            Err(ConvertError::Incomplete { failed: 1 })
        ));
    }

    #[test]
    fn test_skip_unreadable() {
        let dir = TempDir::new().unwrap();
        let config = ConvertConfig {
            skip_unreadable: true,
            ..config(&dir)
        };
        fs::create_dir(&config.input_dir).unwrap();
        fs::write(config.input_dir.join("2-corrupt.xlsx"), b"not a zip").unwrap();

        let report = run(&config).unwrap();

        assert!(report.is_success());
        assert_eq!(report.outcomes[1].skipped.len(), 1);
        assert_eq!(
            fs::read_to_string(config.output_dir.join("scenario-2.json")).unwrap(),
            "[]"
        );
    }
}
