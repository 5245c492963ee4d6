//! Command-line argument definitions for the report decoder
//!
//! This module defines the CLI interface using the clap derive API. The CLI
//! is a thin host around the decode engine: it receives raw report text and
//! prints the rendered result.

use clap::Parser;

/// CLI arguments for the METAR/TAF report decoder
///
/// Decodes a raw METAR, SPECI or TAF report into plain-language text. The
/// report may be passed as arguments or piped on standard input.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-decoder",
    version,
    about = "Decode raw METAR/SPECI/TAF aviation weather reports into plain language",
    long_about = "Decodes raw aviation weather reports (METAR and SPECI observations, TAF \
                  forecasts) into an ordered sequence of plain-language statements, with unit \
                  conversions and host-local time annotations. The report text may be given as \
                  trailing arguments or piped on standard input."
)]
pub struct Args {
    /// Raw report text; read from standard input when omitted
    /// Weather tokens such as `-SHRA` begin with a hyphen and must not be
    /// parsed as flags.
    #[arg(value_name = "REPORT", trailing_var_arg = true, allow_hyphen_values = true)]
    pub report: Vec<String>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
