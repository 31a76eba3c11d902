//! Statistics over aggregated dump values
//!
//! This module contains the pure reduction from value series to summaries,
//! separated from file reading and report writing.

pub mod format;
pub mod summary;

pub use format::format_g;
pub use summary::{summarize, summarize_series, MetricSummary};
