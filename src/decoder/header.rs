//! Report header parsing
//!
//! Consumes leading tokens in fixed order: report-kind keyword, station
//! code, observation time, optional TAF validity period, optional AUTO/COR
//! flag. Parsing never backtracks; the two fatal conditions (station code
//! not 4 characters, malformed observation time) abort immediately.

use crate::models::{ObservationTime, ReportFlag, ReportHeader, ReportKind, ValidPeriod};
use crate::Error;

/// Header parse failure, carrying the report kind classified before the
/// failing token so the fatal output path can still render its marker
#[derive(Debug)]
pub struct HeaderError {
    pub kind: Option<ReportKind>,
    pub reason: Error,
}

impl ReportHeader {
    /// Parse the header from the front of the token sequence
    ///
    /// On success returns the header and the index of the first body token.
    pub fn parse(tokens: &[String]) -> Result<(Self, usize), HeaderError> {
        let mut index = 0;

        let kind = match tokens.first().map(String::as_str) {
            Some("METAR") => {
                index += 1;
                Some(ReportKind::Metar)
            }
            Some("SPECI") => {
                index += 1;
                Some(ReportKind::Speci)
            }
            Some("TAF") => {
                index += 1;
                if tokens.get(index).is_some_and(|t| t == "AMD") {
                    index += 1;
                    Some(ReportKind::TafAmended)
                } else {
                    Some(ReportKind::Taf)
                }
            }
            // No keyword: the first token is assumed to be the station code.
            _ => None,
        };

        let station = tokens.get(index).cloned().unwrap_or_default();
        if station.chars().count() != 4 {
            return Err(HeaderError {
                kind,
                reason: Error::station_code(station),
            });
        }
        index += 1;

        let time_token = tokens.get(index).cloned().unwrap_or_default();
        let time = parse_observation_time(&time_token).ok_or_else(|| HeaderError {
            kind,
            reason: Error::time_format(time_token.clone()),
        })?;
        index += 1;

        let mut valid_period = None;
        if matches!(kind, Some(ReportKind::Taf) | Some(ReportKind::TafAmended)) {
            if let Some(candidate) = tokens.get(index).and_then(|t| parse_valid_period(t)) {
                valid_period = Some(candidate);
                index += 1;
            }
        }

        let flag = match tokens.get(index).map(String::as_str) {
            Some("AUTO") => {
                index += 1;
                Some(ReportFlag::Auto)
            }
            Some("COR") => {
                index += 1;
                Some(ReportFlag::Cor)
            }
            _ => None,
        };

        Ok((
            ReportHeader {
                kind,
                station,
                time,
                valid_period,
                flag,
            },
            index,
        ))
    }
}

/// Parse a ddhhmm or ddhhmmZ observation time token
fn parse_observation_time(token: &str) -> Option<ObservationTime> {
    let (digits, zulu) = match token.len() {
        6 => (token, false),
        7 if token.ends_with('Z') => (&token[..6], true),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(ObservationTime {
        day: digits[0..2].to_string(),
        hour: digits[2..4].to_string(),
        minute: digits[4..6].to_string(),
        zulu,
    })
}

/// Parse a `ddhh/ddhh` validity period token; shared with the classifier's
/// mid-report validity grammar
pub fn parse_valid_period(token: &str) -> Option<ValidPeriod> {
    let (from, to) = token.split_once('/')?;
    if from.len() != 4 || to.len() != 4 {
        return None;
    }
    if !from.bytes().all(|b| b.is_ascii_digit()) || !to.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(ValidPeriod {
        from_day: from[0..2].to_string(),
        from_hour: from[2..4].to_string(),
        to_day: to[0..2].to_string(),
        to_hour: to[2..4].to_string(),
    })
}
