//! Dump file ingestion
//!
//! This module turns the flat-text dump files written by the performance
//! tracer into the aggregated [`DumpDatabase`](crate::domain::DumpDatabase).

pub mod collector;
pub mod reader;

pub use collector::{derive_basename, CollectReport, CollectorOptions, DumpCollector, SkippedFile};
pub use reader::{parse_dump, read_dump_file};
