//! CLI argument definitions

use crate::domain::TripletMode;
use crate::dump::collector::{CollectorOptions, DEFAULT_MARKER};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dump-summary",
    version,
    about = "Summarize performance-trace dump files per basename",
    after_help = "\
EXAMPLES:
    dump-summary                              Read ./dump, write ./summary
    dump-summary -i trace_perf/dump           Read dumps from another directory
    dump-summary --strict --skip-malformed    Require complete records, skip bad files
    dump-summary --json summary.json          Also export summaries as JSON"
)]
pub struct Args {
    /// Directory containing the dump files
    #[arg(short, long, value_name = "DIR", default_value = "dump")]
    pub input: PathBuf,

    /// Directory the summary reports are written to (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = "summary")]
    pub output: PathBuf,

    /// Substring ending the basename in dump file names
    #[arg(
        long,
        value_name = "TEXT",
        default_value = DEFAULT_MARKER,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub marker: String,

    /// Reject dump files whose last record is incomplete
    #[arg(long)]
    pub strict: bool,

    /// Report and skip malformed dump files instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Also export the summaries as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    #[must_use]
    pub fn triplet_mode(&self) -> TripletMode {
        if self.strict {
            TripletMode::Strict
        } else {
            TripletMode::Lenient
        }
    }

    #[must_use]
    pub fn collector_options(&self) -> CollectorOptions {
        CollectorOptions {
            marker: self.marker.clone(),
            mode: self.triplet_mode(),
            skip_malformed: self.skip_malformed,
        }
    }
}
