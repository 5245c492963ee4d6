//! Command implementation for the report decoder CLI
//!
//! Sets up logging, gathers the report text from arguments or standard
//! input, runs the decode engine and prints the result.

use std::io::Read;

use tracing::{debug, info};

use crate::cli::args::Args;
use crate::decoder::decode;
use crate::{Error, Result};

/// Main command runner for the decoder CLI
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let report = gather_report(&args)?;
    info!(bytes = report.len(), "decoding report");

    let rendered = decode(&report);
    debug!(lines = rendered.lines().count(), "report decoded");
    println!("{rendered}");

    Ok(())
}

/// Report text from the trailing arguments, falling back to standard input
fn gather_report(args: &Args) -> Result<String> {
    let report = if args.report.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| Error::io("failed to read report from stdin", e))?;
        buffer
    } else {
        args.report.join(" ")
    };

    if report.trim().is_empty() {
        return Err(Error::EmptyReport);
    }
    Ok(report)
}

/// Set up tracing with an environment-driven filter
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={log_level}")));

    // Logs go to stderr so the decoded text on stdout stays clean.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
