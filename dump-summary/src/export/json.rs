//! JSON export of the summary database
//!
//! Layout: `{ "<basename>": { "<metric>": { "min": .., "mean": .., "std": ..,
//! "max": .., "count": .. } } }`, keys in sorted order.

use crate::domain::{OutputError, SummaryDatabase};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize `summaries` to `writer` as pretty-printed JSON.
///
/// # Errors
/// [`OutputError::Serialize`] if serialization or the underlying write fails.
pub fn export<W: Write>(summaries: &SummaryDatabase, writer: W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(writer, summaries)?;
    Ok(())
}

/// Write `summaries` as JSON to `path`, replacing any existing file.
///
/// # Errors
/// [`OutputError::WriteReport`] if the file cannot be created or flushed,
/// [`OutputError::Serialize`] if serialization fails.
pub fn write_json(path: &Path, summaries: &SummaryDatabase) -> Result<(), OutputError> {
    let write_err = |source: std::io::Error| OutputError::WriteReport { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    export(summaries, &mut writer)?;
    writer.flush().map_err(write_err)?;

    info!("exported summaries to {}", path.display());
    Ok(())
}
