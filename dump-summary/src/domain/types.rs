//! Core types shared by the pipeline stages

use crate::analysis::MetricSummary;
use std::collections::BTreeMap;
use std::fmt;

/// Metric name → value, as read from a single dump file.
pub type MetricMap = BTreeMap<String, f64>;

/// Metric name → every value observed for it, in file discovery order.
pub type MetricSeries = BTreeMap<String, Vec<f64>>;

/// Basename → metric series for every file sharing that basename.
pub type DumpDatabase = BTreeMap<String, MetricSeries>;

/// Basename → metric name → summary statistics.
pub type SummaryDatabase = BTreeMap<String, BTreeMap<String, MetricSummary>>;

/// How the reader treats a trailing group of fewer than three lines.
///
/// Trace dumps separate entries with a blank line and do not terminate the
/// last one, so well-formed files usually end with a two-line group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripletMode {
    /// Keep a trailing `name, value` pair; drop a lone trailing name.
    #[default]
    Lenient,
    /// Reject any trailing partial group.
    Strict,
}

impl fmt::Display for TripletMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}
