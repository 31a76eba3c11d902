//! # dump-summary - Main Entry Point
//!
//! Runs the four pipeline stages in order: collect, summarize, write reports,
//! and optionally export JSON.

use anyhow::{Context, Result};
use clap::Parser;
use dump_summary::analysis::summarize;
use dump_summary::cli::Args;
use dump_summary::domain::{InputError, OutputError, SummaryError};
use dump_summary::dump::DumpCollector;
use dump_summary::export::{write_json, write_summaries};
use dump_summary::preflight::run_preflight_checks;
use log::info;

// Exit codes (sysexits.h where one fits); clap exits with 2 on usage errors
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATAERR: i32 = 65;
const EXIT_SOFTWARE: i32 = 70;
const EXIT_CANTCREAT: i32 = 73;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<InputError>().is_some() {
        EXIT_DATAERR
    } else if err.downcast_ref::<OutputError>().is_some() {
        EXIT_CANTCREAT
    } else if err.downcast_ref::<SummaryError>().is_some() {
        EXIT_SOFTWARE
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let quiet = args.quiet;

    run_preflight_checks(&args)?;
    info!(
        "reading {} (marker '{}', {} records)",
        args.input.display(),
        args.marker,
        args.triplet_mode()
    );

    // ── Stage 1+2: read and merge every dump file ───────────────────────
    let report = DumpCollector::new(args.collector_options()).collect(&args.input)?;

    for skipped in &report.skipped {
        eprintln!("warning: skipped {}: {}", skipped.path.display(), skipped.error);
    }

    // ── Stage 3: statistics ─────────────────────────────────────────────
    let summaries = summarize(&report.database)?;

    if let Some(ref json_path) = args.json {
        write_json(json_path, &summaries)
            .with_context(|| format!("JSON export to {} failed", json_path.display()))?;
    }

    // ── Stage 4: one report per basename ────────────────────────────────
    let written = write_summaries(&args.output, summaries)?;

    if !quiet {
        println!(
            "{} dump file(s) → {} report(s) in {}",
            report.files_read,
            written.len(),
            args.output.display()
        );
        if !report.skipped.is_empty() {
            println!("skipped: {}", report.skipped.len());
        }
        if let Some(ref json_path) = args.json {
            println!("export: {}", json_path.display());
        }
    }

    Ok(())
}
