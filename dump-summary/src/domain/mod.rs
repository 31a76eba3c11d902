//! Domain model for dump-summary
//!
//! This module contains the maps that flow between pipeline stages and the
//! structured errors each stage can raise:
//! - Type aliases that name every nesting level of the aggregated maps
//! - The triplet parsing mode exposed at the reader boundary
//! - Input-side, output-side and invariant errors kept apart

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{DumpDatabase, MetricMap, MetricSeries, SummaryDatabase, TripletMode};

pub use errors::{InputError, OutputError, SummaryError};
