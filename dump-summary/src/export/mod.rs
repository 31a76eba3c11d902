//! Summary export functionality
//!
//! This module persists the summary database. Text reports are the primary
//! output; JSON export is available for feeding other tooling.

pub mod json;
pub mod report_writer;

pub use json::write_json;
pub use report_writer::{render_report, write_summaries, REPORT_EXTENSION};
