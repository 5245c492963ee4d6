//! Application constants for the report decoder
//!
//! This module contains the exact unit-conversion ratios and the fixed
//! code-table vocabularies (weather phenomena, cloud amounts, runway state,
//! sea state) used throughout the decoder.

// =============================================================================
// Unit Conversion Ratios
// =============================================================================

/// Exact conversion constants used by the unit converter
pub mod conversions {
    /// Meters per second in one knot (1852 m per nautical mile, 3600 s per hour)
    pub const METERS_PER_SECOND_PER_KNOT: f64 = 1852.0 / 3600.0;

    /// Meters in one foot
    pub const METERS_PER_FOOT: f64 = 0.3048;

    /// Kilometers in one statute mile (5280 feet)
    pub const KILOMETERS_PER_STATUTE_MILE: f64 = 0.3048 * 5280.0 / 1000.0;

    /// Inches of mercury in one hectopascal
    pub const INCHES_OF_MERCURY_PER_HECTOPASCAL: f64 = 76000.0 / (101325.0 * 25.4);

    /// Hectopascals in one inch of mercury
    pub const HECTOPASCALS_PER_INCH_OF_MERCURY: f64 = (101325.0 * 25.4) / 76000.0;
}

// =============================================================================
// Magnus Approximation Coefficients
// =============================================================================

/// Coefficients for the Magnus saturation-vapor-pressure approximation
/// `e_s(T) = 6.11 * 10^(7.5 T / (237.7 + T))` with T in degrees Celsius
pub mod magnus {
    pub const BASE_PRESSURE_HPA: f64 = 6.11;
    pub const COEFFICIENT: f64 = 7.5;
    pub const OFFSET_CELSIUS: f64 = 237.7;
}

// =============================================================================
// Weather Phenomenon Vocabulary
// =============================================================================

/// Present/recent weather code vocabulary per the aviation coding conventions
pub mod weather {
    /// Fixed phrase for one intensity/descriptor/phenomenon code
    pub fn phrase(code: &str) -> Option<&'static str> {
        let text = match code {
            "-" => "light",
            "+" => "heavy",
            "VC" => "nearby",
            "MI" => "shallow",
            "BC" => "patches of",
            "DR" => "drifting",
            "BL" => "blowing",
            "SH" => "showers of",
            "TS" => "thunderstorm",
            "FZ" => "freezing",
            "PR" => "partial",
            "DZ" => "drizzle",
            "RA" => "rain",
            "SN" => "snow",
            "SG" => "snow grains",
            "IC" => "ice crystals",
            "PL" => "ice pellets",
            "GR" => "hail",
            "GS" => "small hail",
            "BR" => "mist",
            "FG" => "fog",
            "FU" => "smoke",
            "VA" => "volcanic ash",
            "DU" => "widespread dust",
            "SA" => "sand",
            "HZ" => "haze",
            "PO" => "dust whirls",
            "SQ" => "squall",
            "FC" => "funnel cloud",
            "SS" => "sandstorm",
            "DS" => "duststorm",
            _ => return None,
        };
        Some(text)
    }
}

// =============================================================================
// Cloud Amount Vocabulary (oktas of sky covered)
// =============================================================================

/// Cloud-amount categories mapped to their okta ranges
pub mod clouds {
    pub fn amount_phrase(code: &str) -> Option<&'static str> {
        let text = match code {
            "FEW" => "few (1 to 2 oktas)",
            "SCT" => "scattered (3 to 4 oktas)",
            "BKN" => "broken (5 to 7 oktas)",
            "OVC" => "overcast (8 oktas)",
            _ => return None,
        };
        Some(text)
    }

    pub fn convective_phrase(code: &str) -> Option<&'static str> {
        let text = match code {
            "CB" => "cumulonimbus",
            "TCU" => "towering cumulus",
            _ => return None,
        };
        Some(text)
    }
}

// =============================================================================
// Runway State Code Tables (WMO runway-state group)
// =============================================================================

/// Vocabulary for the runway-state group digits
pub mod runway_state {
    /// Deposit-type digit (third character)
    pub fn deposit_phrase(digit: char) -> Option<&'static str> {
        let text = match digit {
            '0' => "dry",
            '1' => "damp",
            '2' => "wet or water patches",
            '3' => "rime or frost",
            '4' => "dry snow",
            '5' => "wet snow",
            '6' => "slush",
            '7' => "ice",
            '8' => "compacted snow",
            '9' => "frozen ruts or ridges",
            '/' => "deposit type unknown",
            _ => return None,
        };
        Some(text)
    }

    /// Contamination-extent digit (fourth character)
    pub fn extent_phrase(digit: char) -> Option<&'static str> {
        let text = match digit {
            '1' => "covering less than 10%",
            '2' => "covering 11% to 25%",
            '5' => "covering 26% to 50%",
            '9' => "covering 51% to 100%",
            '/' => "coverage unknown or clearing",
            _ => return None,
        };
        Some(text)
    }

    /// Two-digit deposit depth field; codes 92-99 are fixed bands.
    /// Code 91 is unassigned in the code table and renders nothing.
    pub fn depth_phrase(value: u32) -> Option<String> {
        let text = match value {
            0 => "deposit depth less than 1 mm".to_string(),
            1..=90 => format!("deposit depth {} mm", value),
            92 => "deposit depth 10 cm".to_string(),
            93 => "deposit depth 15 cm".to_string(),
            94 => "deposit depth 20 cm".to_string(),
            95 => "deposit depth 25 cm".to_string(),
            96 => "deposit depth 30 cm".to_string(),
            97 => "deposit depth 35 cm".to_string(),
            98 => "deposit depth 40 cm or more".to_string(),
            99 => "snow clearance in progress".to_string(),
            _ => return None,
        };
        Some(text)
    }

    /// Braking-action phrases for friction codes 91-99
    pub fn braking_phrase(value: u32) -> Option<&'static str> {
        let text = match value {
            91 => "braking action poor",
            92 => "braking action medium to poor",
            93 => "braking action medium",
            94 => "braking action medium to good",
            95 => "braking action good",
            99 => "braking action could not be determined",
            _ => return None,
        };
        Some(text)
    }
}

// =============================================================================
// Sea State Wave-Height Bands
// =============================================================================

/// Wave-height bands for the sea-state group, indexed by the state digit
pub mod sea_state {
    pub const WAVE_HEIGHT_BANDS: [&str; 10] = [
        "0 m",
        "0 to 0.1 m",
        "0.1 to 0.5 m",
        "0.5 to 1.25 m",
        "1.25 to 2.5 m",
        "2.5 to 4 m",
        "4 to 6 m",
        "6 to 9 m",
        "9 to 14 m",
        "greater than 14 m",
    ];
}

// =============================================================================
// Compass Points
// =============================================================================

/// Eight-point compass names for directional visibility suffixes
pub mod compass {
    pub fn point_phrase(code: &str) -> Option<&'static str> {
        let text = match code {
            "N" => "north",
            "NE" => "northeast",
            "E" => "east",
            "SE" => "southeast",
            "S" => "south",
            "SW" => "southwest",
            "W" => "west",
            "NW" => "northwest",
            _ => return None,
        };
        Some(text)
    }
}
