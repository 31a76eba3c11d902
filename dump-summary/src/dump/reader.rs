//! Dump file reader.
//!
//! A dump file is a flat sequence of lines read in groups of three:
//!
//! ```text
//! render frame          ← metric name
//! 0.0123                ← value (seconds)
//!                       ← separator, ignored
//! upload textures
//! 0.0040
//! ```
//!
//! The tracer does not terminate the last entry with a separator, so the
//! final group normally has two lines. [`TripletMode`] decides what happens
//! to such a group.

use crate::domain::{InputError, MetricMap, TripletMode};
use log::{debug, warn};
use std::path::Path;

/// Lines per dump record: name, value, separator.
const RECORD_LINES: usize = 3;

/// Read one dump file into a metric name → value map.
///
/// # Errors
/// Returns [`InputError::ReadFile`] if the file cannot be read, otherwise any
/// error from [`parse_dump`].
pub fn read_dump_file(path: &Path, mode: TripletMode) -> Result<MetricMap, InputError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| InputError::ReadFile { path: path.to_path_buf(), source })?;
    let metrics = parse_dump(&content, mode, path)?;
    debug!("{}: {} metric(s)", path.display(), metrics.len());
    Ok(metrics)
}

/// Parse dump text. `origin` is only used in error messages.
///
/// A metric repeated within one file keeps its last value.
///
/// # Errors
/// - [`InputError::InvalidValue`] when a value line is not a float
/// - [`InputError::IncompleteRecord`] for a trailing partial group in strict mode
pub fn parse_dump(content: &str, mode: TripletMode, origin: &Path) -> Result<MetricMap, InputError> {
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    let mut metrics = MetricMap::new();

    for (index, group) in lines.chunks(RECORD_LINES).enumerate() {
        if group.len() < RECORD_LINES && mode == TripletMode::Strict {
            return Err(InputError::IncompleteRecord {
                path: origin.to_path_buf(),
                leftover: group.len(),
            });
        }

        let name = group[0];
        let Some(&raw_value) = group.get(1) else {
            warn!("{}: dropping trailing metric '{name}' without a value", origin.display());
            continue;
        };

        let value = raw_value.parse::<f64>().map_err(|_| InputError::InvalidValue {
            path: origin.to_path_buf(),
            line: index * RECORD_LINES + 2,
            metric: name.to_string(),
            value: raw_value.to_string(),
        })?;

        if metrics.insert(name.to_string(), value).is_some() {
            warn!("{}: metric '{name}' appears more than once, keeping the last value", origin.display());
        }
    }

    Ok(metrics)
}
