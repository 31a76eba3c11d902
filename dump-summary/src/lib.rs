//! # dump-summary - Performance Trace Dump Summarizer
//!
//! The performance tracer writes one dump file per test run. Each file holds
//! the elapsed time of every traced section, and the files of one trace
//! source share a basename (`render.cpp.db0`, `render.cpp.db1`, ...).
//! dump-summary folds all runs of a basename together and reports, per traced
//! section, how the measured values are distributed.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ Dump Reader  │──▶│    Dump      │──▶│   Summary    │──▶│   Summary    │
//! │  (one file)  │   │  Collector   │   │   Computer   │   │    Writer    │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!   MetricMap          DumpDatabase       SummaryDatabase    <basename>.txt
//! ```
//!
//! Each stage completes before the next one starts. The collector owns the
//! aggregated database while it runs; the writer consumes the summaries.
//!
//! ## Module Structure
//!
//! - [`dump`]: Reading dump files and merging them per basename
//!   - `reader`: Name / value / separator triplets, strict or lenient tail
//!   - `collector`: Sorted directory scan, basename derivation, merging
//!
//! - [`analysis`]: min, mean, population std, max and count per metric,
//!   rendered with printf `%g` semantics
//!
//! - [`export`]: Text reports and optional JSON export
//!
//! - [`cli`]: Command-line argument parsing and configuration
//!
//! - [`preflight`]: Directory layout checks before any file is read
//!
//! - [`domain`]: Map types shared by the stages and structured errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # Summarize ./dump into ./summary
//! dump-summary
//!
//! # Summarize the tracer's default output directory, skipping broken dumps
//! dump-summary --input trace_perf/dump --skip-malformed
//! ```

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod dump;
pub mod export;
pub mod preflight;
