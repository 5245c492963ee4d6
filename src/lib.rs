//! METAR/TAF Report Decoder Library
//!
//! A Rust library for decoding raw aviation weather reports (METAR and SPECI
//! observations, TAF forecasts) into ordered, plain-language text.
//!
//! This library provides tools for:
//! - Tokenizing free-form report text with proper terminator and trend-group handling
//! - Parsing report headers (type, station, observation time, validity, flags)
//! - Classifying body tokens against a priority-ordered set of field grammars
//! - Converting units (knots, feet, hectopascals, statute miles) with exact ratios
//! - Computing relative humidity from temperature and dew point
//! - Annotating UTC times with the host's local wall clock
//!
//! The engine is a pure function: one call consumes one report string and
//! returns one rendered string, with no shared state across calls.

pub mod constants;
pub mod localtime;
pub mod models;
pub mod units;

// Core decoding modules
pub mod decoder;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use decoder::decode;
pub use models::{DecodedElement, ObservationTime, ReportHeader, ReportKind};

/// Result type alias for the report decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report decoding operations
///
/// Only the two header conditions are fatal to a decode pass; both are
/// converted into fixed output messages by [`decoder::decode`] and never
/// reach the caller. The I/O and input variants belong to the CLI layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Station code is not exactly 4 characters
    #[error("invalid station code: '{token}' (expected 4 characters)")]
    StationCode { token: String },

    /// Observation time token does not match the ddhhmm[Z] shape
    #[error("invalid observation time: '{token}' (expected 6 digits, optionally followed by 'Z')")]
    TimeFormat { token: String },

    /// No report text was provided to the CLI
    #[error("no report text provided")]
    EmptyReport,

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a station code error
    pub fn station_code(token: impl Into<String>) -> Self {
        Self::StationCode {
            token: token.into(),
        }
    }

    /// Create an observation time format error
    pub fn time_format(token: impl Into<String>) -> Self {
        Self::TimeFormat {
            token: token.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
