//! Structured error types for dump-summary
//!
//! Using thiserror for automatic Display implementation and error chaining.
//! Input-side and output-side failures are separate enums so callers can tell
//! them apart without inspecting messages.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Dump directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Dump path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to list dump directory {}: {source}", .path.display())]
    ReadDirectory { path: PathBuf, source: std::io::Error },

    #[error("Failed to read dump file {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("Dump file name {} is not valid UTF-8", .0.display())]
    NonUtf8FileName(PathBuf),

    #[error("Dump file name '{file_name}' does not contain the marker '{marker}'")]
    MissingMarker { file_name: String, marker: String },

    #[error("Dump file name '{file_name}' has no basename before the marker '{marker}'")]
    EmptyBasename { file_name: String, marker: String },

    #[error(
        "{}:{line}: expected a numeric value for metric '{metric}', found '{value}'",
        .path.display()
    )]
    InvalidValue { path: PathBuf, line: usize, metric: String, value: String },

    #[error(
        "{}: {leftover} trailing line(s) do not form a complete name/value/separator record",
        .path.display()
    )]
    IncompleteRecord { path: PathBuf, leftover: usize },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Summary path {} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to create summary directory {}: {source}", .path.display())]
    CreateDirectory { path: PathBuf, source: std::io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteReport { path: PathBuf, source: std::io::Error },

    #[error("Failed to serialize summaries: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Internal error: metric '{metric}' of '{basename}' has no values to summarize")]
    EmptySeries { basename: String, metric: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_marker_display() {
        let err = InputError::MissingMarker {
            file_name: "notes.txt".to_string(),
            marker: ".db".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Dump file name 'notes.txt' does not contain the marker '.db'"
        );
    }

    #[test]
    fn test_invalid_value_names_location() {
        let err = InputError::InvalidValue {
            path: PathBuf::from("dump/run.db0"),
            line: 5,
            metric: "latency".to_string(),
            value: "fast".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dump/run.db0:5"));
        assert!(msg.contains("latency"));
        assert!(msg.contains("'fast'"));
    }

    #[test]
    fn test_empty_series_names_basename_and_metric() {
        let err = SummaryError::EmptySeries {
            basename: "run".to_string(),
            metric: "latency".to_string(),
        };
        assert!(err.to_string().contains("'latency' of 'run'"));
    }
}
