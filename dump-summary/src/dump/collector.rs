//! Dump collection and merging.
//!
//! Dump files of one trace source share a basename and differ only in what
//! follows the marker (`render.cpp.db0`, `render.cpp.db1`, ...). The collector
//! reads every file of the input directory and appends each value to the
//! series of its (basename, metric) pair.
//!
//! # Ordering
//!
//! Files are processed in file name order, so the position of a value inside
//! a series is stable across runs and platforms.

use crate::domain::{DumpDatabase, InputError, MetricMap, TripletMode};
use crate::dump::reader::read_dump_file;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Marker separating the basename from the dump index in file names.
pub const DEFAULT_MARKER: &str = ".db";

/// Knobs for a collection run.
#[derive(Debug, Clone)]
pub struct CollectorOptions {
    /// Substring whose first occurrence ends the basename.
    pub marker: String,
    /// How trailing partial records are treated.
    pub mode: TripletMode,
    /// Log and skip files that fail to parse instead of aborting.
    pub skip_malformed: bool,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            mode: TripletMode::default(),
            skip_malformed: false,
        }
    }
}

/// A dump file left out of the database in skip mode.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: InputError,
}

/// Outcome of a collection run.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub database: DumpDatabase,
    /// Number of files merged into `database`.
    pub files_read: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Accumulates dump files into a [`DumpDatabase`].
///
/// The collector owns the database until [`DumpCollector::into_database`]
/// hands it to the next stage.
#[derive(Debug, Default)]
pub struct DumpCollector {
    options: CollectorOptions,
    database: DumpDatabase,
    files_read: usize,
    skipped: Vec<SkippedFile>,
}

impl DumpCollector {
    #[must_use]
    pub fn new(options: CollectorOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// Read and merge every regular file in `dir`.
    ///
    /// # Errors
    /// Directory-level failures are always fatal. Per-file failures are
    /// fatal unless `skip_malformed` is set, in which case they are recorded
    /// in the report.
    pub fn collect(mut self, dir: &Path) -> Result<CollectReport, InputError> {
        for path in list_dump_files(dir)? {
            match self.add_file(&path) {
                Ok(()) => {}
                Err(error) if self.options.skip_malformed => {
                    warn!("skipping {}: {error}", path.display());
                    self.skipped.push(SkippedFile { path, error });
                }
                Err(error) => return Err(error),
            }
        }

        info!(
            "collected {} file(s) into {} basename(s), {} skipped",
            self.files_read,
            self.database.len(),
            self.skipped.len()
        );

        Ok(CollectReport {
            database: self.database,
            files_read: self.files_read,
            skipped: self.skipped,
        })
    }

    /// Read one dump file and merge it under its basename.
    ///
    /// The basename is validated before the file is read.
    ///
    /// # Errors
    /// Any [`InputError`] raised while naming or reading the file.
    pub fn add_file(&mut self, path: &Path) -> Result<(), InputError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| InputError::NonUtf8FileName(path.to_path_buf()))?;
        let basename = derive_basename(file_name, &self.options.marker)?.to_string();

        let metrics = read_dump_file(path, self.options.mode)?;
        debug!("{} → '{basename}'", path.display());
        self.merge(basename, metrics);
        self.files_read += 1;
        Ok(())
    }

    /// Append every value of `metrics` to the series of `basename`.
    pub fn merge(&mut self, basename: String, metrics: MetricMap) {
        let series = self.database.entry(basename).or_default();
        for (metric, value) in metrics {
            series.entry(metric).or_default().push(value);
        }
    }

    #[must_use]
    pub fn database(&self) -> &DumpDatabase {
        &self.database
    }

    #[must_use]
    pub fn into_database(self) -> DumpDatabase {
        self.database
    }
}

/// Derive the grouping key of a dump file name.
///
/// # Errors
/// - [`InputError::MissingMarker`] if `marker` does not occur in `file_name`
/// - [`InputError::EmptyBasename`] if the name starts with the marker
pub fn derive_basename<'a>(file_name: &'a str, marker: &str) -> Result<&'a str, InputError> {
    let end = file_name.find(marker).ok_or_else(|| InputError::MissingMarker {
        file_name: file_name.to_string(),
        marker: marker.to_string(),
    })?;

    if end == 0 {
        return Err(InputError::EmptyBasename {
            file_name: file_name.to_string(),
            marker: marker.to_string(),
        });
    }

    Ok(&file_name[..end])
}

/// List regular files of `dir`, sorted by file name.
fn list_dump_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.exists() {
        return Err(InputError::MissingDirectory(dir.to_path_buf()));
    }

    let read_dir_err = |source: std::io::Error| InputError::ReadDirectory { path: dir.to_path_buf(), source };
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        // Follows symlinks, matching a plain "is this a file" check
        if path.is_file() {
            files.push(path);
        } else {
            debug!("ignoring non-file entry {}", path.display());
        }
    }

    files.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
