//! PapMap risk tables - ASCCP spreadsheet to JSON conversion
//!
//! Converts the published ASCCP cervical screening risk tables into one JSON
//! array per clinical scenario for the PapMap decision-support application.
//!
//! # Pipeline
//!
//! - [`resolver`] groups `{N}[.{variant}]-*.xlsx` files by scenario
//! - [`excel`] extracts each scenario's kept columns, row by row
//! - [`writer`] appends supplementary files after the base table and writes
//!   `scenario-{N}.json`
//!
//! # Example
//!
//! ```no_run
//! use papmap_tables::pipeline::{run, ConvertConfig};
//!
//! let report = run(&ConvertConfig::default())?.into_result()?;
//! for outcome in &report.outcomes {
//!     println!("{}: {} records", outcome.scenario.name, outcome.records);
//! }
//! # Ok::<(), papmap_tables::error::ConvertError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod pipeline;
pub mod resolver;
pub mod scenarios;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use pipeline::{run, ConversionReport, ConvertConfig};
pub use scenarios::Scenario;
pub use types::{CellValue, OutputLayout, Record, RowTable};
