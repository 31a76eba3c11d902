//! Descriptive statistics per (basename, metric) pair.

// Sample counts are converted to f64 for averaging
#![allow(clippy::cast_precision_loss)]

use crate::analysis::format::format_g;
use crate::domain::{DumpDatabase, MetricSeries, SummaryDatabase, SummaryError};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Summary of every value observed for one metric.
///
/// Renders as `min: <g>, mean: <g>, std: <g>, max: <g>, N: <count>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub min: f64,
    pub mean: f64,
    /// Population standard deviation (divides by N).
    pub std: f64,
    pub max: f64,
    pub count: usize,
}

impl MetricSummary {
    /// Summarize `values`, or `None` when there is nothing to summarize.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        // f64::min/max skip NaN, but a NaN sample must show up in every field
        let (min, max) = if values.iter().any(|v| v.is_nan()) {
            (f64::NAN, f64::NAN)
        } else {
            (
                values.iter().copied().fold(f64::INFINITY, f64::min),
                values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            )
        };
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self { min, mean, std: variance.sqrt(), max, count })
    }
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min: {}, mean: {}, std: {}, max: {}, N: {}",
            format_g(self.min),
            format_g(self.mean),
            format_g(self.std),
            format_g(self.max),
            self.count
        )
    }
}

/// Summarize every metric of one basename.
///
/// # Errors
/// [`SummaryError::EmptySeries`] if a metric has no values.
pub fn summarize_series(
    basename: &str,
    series: &MetricSeries,
) -> Result<BTreeMap<String, MetricSummary>, SummaryError> {
    series
        .iter()
        .map(|(metric, values)| -> Result<_, SummaryError> {
            let summary =
                MetricSummary::from_values(values).ok_or_else(|| SummaryError::EmptySeries {
                    basename: basename.to_string(),
                    metric: metric.clone(),
                })?;
            Ok((metric.clone(), summary))
        })
        .collect()
}

/// Summarize the whole database.
///
/// # Errors
/// [`SummaryError::EmptySeries`] if any metric has no values. This cannot
/// happen for databases built by the collector.
pub fn summarize(database: &DumpDatabase) -> Result<SummaryDatabase, SummaryError> {
    let summaries = database
        .iter()
        .map(|(basename, series)| -> Result<_, SummaryError> {
            Ok((basename.clone(), summarize_series(basename, series)?))
        })
        .collect::<Result<SummaryDatabase, SummaryError>>()?;

    info!(
        "summarized {} metric(s) across {} basename(s)",
        summaries.values().map(BTreeMap::len).sum::<usize>(),
        summaries.len()
    );
    Ok(summaries)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_has_zero_std() {
        let s = MetricSummary::from_values(&[5.0]).unwrap();
        assert_eq!(s.min, 5.0);
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.max, 5.0);
        assert_eq!(s.std, 0.0);
        assert_eq!(s.count, 1);
        assert_eq!(s.to_string(), "min: 5, mean: 5, std: 0, max: 5, N: 1");
    }

    #[test]
    fn test_population_std() {
        let s = MetricSummary::from_values(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert!((s.mean - 2.0).abs() < 1e-12);
        assert!((s.std - 0.816_496_580_927_726).abs() < 1e-9);
        assert_eq!(s.max, 3.0);
        assert_eq!(s.to_string(), "min: 1, mean: 2, std: 0.816497, max: 3, N: 3");
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = MetricSummary::from_values(&[0.3, 0.1, 0.2]).unwrap();
        assert_eq!(a.min, 0.1);
        assert_eq!(a.max, 0.3);
        assert_eq!(a.count, 3);
    }

    #[test]
    fn test_nan_sample_poisons_every_statistic() {
        let s = MetricSummary::from_values(&[f64::NAN, 1.0, 3.0]).unwrap();
        assert!(s.min.is_nan());
        assert!(s.max.is_nan());
        assert_eq!(s.to_string(), "min: nan, mean: nan, std: nan, max: nan, N: 3");
    }

    #[test]
    fn test_nan_read_from_dump_reaches_report() {
        let metrics = crate::dump::parse_dump(
            "x\nnan\n\n",
            crate::domain::TripletMode::Strict,
            std::path::Path::new("run.db0"),
        )
        .unwrap();
        let s = MetricSummary::from_values(&[metrics["x"], 2.0]).unwrap();
        assert_eq!(s.to_string(), "min: nan, mean: nan, std: nan, max: nan, N: 2");
    }

    #[test]
    fn test_empty_values_have_no_summary() {
        assert!(MetricSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_summarize_reports_empty_series() {
        let mut db = DumpDatabase::new();
        db.entry("run".to_string()).or_default().insert("latency".to_string(), Vec::new());

        let err = summarize(&db).unwrap_err();
        let SummaryError::EmptySeries { basename, metric } = err;
        assert_eq!(basename, "run");
        assert_eq!(metric, "latency");
    }

    #[test]
    fn test_summarize_covers_every_pair() {
        let mut db = DumpDatabase::new();
        db.entry("a".to_string()).or_default().insert("x".to_string(), vec![1.0, 3.0]);
        db.entry("a".to_string()).or_default().insert("y".to_string(), vec![2.0]);
        db.entry("b".to_string()).or_default().insert("x".to_string(), vec![4.0]);

        let summaries = summarize(&db).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries["a"]["x"].mean, 2.0);
        assert_eq!(summaries["a"]["y"].count, 1);
        assert_eq!(summaries["b"]["x"].max, 4.0);
    }
}
