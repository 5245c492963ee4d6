//! Report decode engine
//!
//! This module turns one raw METAR/SPECI/TAF report string into one rendered
//! plain-language string. The pipeline is tokenize, parse the header,
//! classify each remaining token, render.
//!
//! ## Architecture
//!
//! The engine is organized into logical components:
//! - [`tokenizer`] - Line-ending/whitespace normalization, terminator and trend-group handling
//! - [`header`] - Report kind, station, observation time, validity and flag parsing
//! - [`classifier`] - Priority-ordered field-grammar dispatch over body tokens
//! - [`render`] - Fixed-vocabulary text for header fields and decoded elements
//! - [`output`] - Per-call append-only fragment accumulation
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::decode;
//!
//! let text = decode("METAR ZBAA 241200Z 24015G25KT 9999 FEW020 22/15 Q1013");
//! assert!(text.contains("Station: ZBAA"));
//! ```

pub mod classifier;
pub mod header;
pub mod output;
pub mod render;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use output::Output;

use tracing::debug;

use crate::models::ReportHeader;

/// Decode one raw report into ordered plain-language text
///
/// Never fails: the two fatal header conditions become fixed messages in the
/// returned string, and body tokens matching no field grammar are dropped
/// silently. The call is pure and reentrant; nothing persists across calls.
pub fn decode(report: &str) -> String {
    let tokens = tokenizer::tokenize(report);
    let mut out = Output::new();

    match ReportHeader::parse(&tokens) {
        Ok((header, consumed)) => {
            render::render_header(&header, &mut out);
            for token in &tokens[consumed..] {
                let token = token.to_ascii_uppercase();
                match classifier::classify(&token) {
                    Some(element) => render::render_element(&element, &mut out),
                    None => debug!(%token, "token matched no field grammar"),
                }
            }
        }
        Err(failure) => {
            debug!(error = %failure.reason, "header parsing failed");
            if let Some(kind) = failure.kind {
                render::render_kind(kind, &mut out);
            }
            out.line(render::fatal_message(&failure.reason));
        }
    }

    out.finish()
}
