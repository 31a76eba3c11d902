//! Plain-text summary reports, one file per basename.
//!
//! ```text
//! render frame
//! min: 0.0101, mean: 0.0123, std: 0.0011, max: 0.0152, N: 12
//!
//! upload textures
//! min: 0.0031, mean: 0.004, std: 0.0004, max: 0.0049, N: 12
//!
//! ```

use crate::analysis::MetricSummary;
use crate::domain::{OutputError, SummaryDatabase};
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Extension appended to the basename of every report.
pub const REPORT_EXTENSION: &str = "txt";

/// Render one report: metric name, summary line, blank line, per metric in
/// name order.
#[must_use]
pub fn render_report(metrics: &BTreeMap<String, MetricSummary>) -> String {
    metrics.iter().map(|(metric, summary)| format!("{metric}\n{summary}\n\n")).collect()
}

/// Write `<basename>.txt` for every basename into `dir`, creating it first.
///
/// Existing reports are overwritten. Returns the written paths in basename
/// order.
///
/// # Errors
/// - [`OutputError::CreateDirectory`] if `dir` cannot be created
/// - [`OutputError::WriteReport`] if a report cannot be written
pub fn write_summaries(dir: &Path, summaries: SummaryDatabase) -> Result<Vec<PathBuf>, OutputError> {
    std::fs::create_dir_all(dir)
        .map_err(|source| OutputError::CreateDirectory { path: dir.to_path_buf(), source })?;

    let mut written = Vec::with_capacity(summaries.len());
    for (basename, metrics) in summaries {
        let path = dir.join(format!("{basename}.{REPORT_EXTENSION}"));
        std::fs::write(&path, render_report(&metrics))
            .map_err(|source| OutputError::WriteReport { path: path.clone(), source })?;
        debug!("wrote {} ({} metric(s))", path.display(), metrics.len());
        written.push(path);
    }

    info!("wrote {} report(s) to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn summary(values: &[f64]) -> MetricSummary {
        MetricSummary::from_values(values).unwrap()
    }

    #[test]
    fn test_render_report_sorted_triplets() {
        let metrics = BTreeMap::from([
            ("zeta".to_string(), summary(&[1.0])),
            ("alpha".to_string(), summary(&[1.0, 2.0, 3.0])),
        ]);

        assert_eq!(
            render_report(&metrics),
            "alpha\nmin: 1, mean: 2, std: 0.816497, max: 3, N: 3\n\n\
             zeta\nmin: 1, mean: 1, std: 0, max: 1, N: 1\n\n"
        );
    }

    #[test]
    fn test_render_report_empty() {
        assert_eq!(render_report(&BTreeMap::new()), "");
    }

    #[test]
    fn test_creates_nested_output_directory() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("a").join("summary");

        let mut db = SummaryDatabase::new();
        db.insert("run".to_string(), BTreeMap::from([("x".to_string(), summary(&[2.0]))]));
        db.insert("other".to_string(), BTreeMap::from([("y".to_string(), summary(&[3.0]))]));

        let written = write_summaries(&out, db).unwrap();

        assert_eq!(written, vec![out.join("other.txt"), out.join("run.txt")]);
        let content = std::fs::read_to_string(out.join("run.txt")).unwrap();
        assert_eq!(content, "x\nmin: 2, mean: 2, std: 0, max: 2, N: 1\n\n");
    }

    #[test]
    fn test_overwrites_previous_report() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("run.txt"), "stale\nold line\n\n".repeat(10)).unwrap();

        let mut db = SummaryDatabase::new();
        db.insert("run".to_string(), BTreeMap::from([("x".to_string(), summary(&[1.0]))]));
        write_summaries(tmp.path(), db).unwrap();

        let content = std::fs::read_to_string(tmp.path().join("run.txt")).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with("x\n"));
    }

    #[test]
    fn test_output_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("summary");
        std::fs::write(&blocker, "").unwrap();

        let err = write_summaries(&blocker, SummaryDatabase::new()).unwrap_err();
        assert!(matches!(err, OutputError::CreateDirectory { .. }));
    }
}
