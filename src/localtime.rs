//! Local wall-clock annotation for UTC times
//!
//! Rendered local times depend on the time zone configured on the executing
//! host, not on anything in the report itself. Tests therefore assert on the
//! annotation shape only, never on a concrete clock value.

use chrono::{Local, TimeZone, Utc};

/// Format a UTC hour/minute as the host-local `HH:MM` string
///
/// Returns `None` when the pair is not a valid time of day (possible for
/// unvalidated trend times); callers then render the UTC time alone.
pub fn local_clock(hour: u32, minute: u32) -> Option<String> {
    let date = Utc::now().date_naive();
    let naive = date.and_hms_opt(hour, minute, 0)?;
    let utc = Utc.from_utc_datetime(&naive);
    Some(utc.with_timezone(&Local).format("%H:%M").to_string())
}

/// The parenthesized local-time annotation for two-digit hour/minute fields,
/// or an empty string when the fields do not form a valid time
pub fn annotation(hour: &str, minute: &str) -> String {
    let parsed = hour
        .parse::<u32>()
        .ok()
        .zip(minute.parse::<u32>().ok())
        .and_then(|(h, m)| local_clock(h, m));
    match parsed {
        Some(clock) => format!("(local time: {clock})"),
        None => String::new(),
    }
}
