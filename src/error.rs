use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input directory not found: {}", .0.display())]
    MissingInputDirectory(PathBuf),

    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file-name pattern: {0}")]
    Pattern(String),

    #[error("Unreadable spreadsheet {}: {message}", path.display())]
    UnreadableSpreadsheet { path: PathBuf, message: String },

    #[error("Scenario {scenario}: failed to serialize output: {source}")]
    Serialize {
        scenario: u8,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scenario {scenario}: failed to write {}: {source}", path.display())]
    Write {
        scenario: u8,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} scenario(s) failed to convert")]
    Incomplete { failed: usize },
}
