//! Data models for report decoding
//!
//! This module contains the core data structures for a decoded report: the
//! parsed header and the tagged variants produced by the token classifier.
//! Nothing here outlives a single decode call.

// =============================================================================
// Report Header Structures
// =============================================================================

/// Report type announced by the leading keyword token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Routine scheduled observation (METAR)
    Metar,
    /// Special unscheduled observation (SPECI)
    Speci,
    /// Aerodrome forecast (TAF)
    Taf,
    /// Amended aerodrome forecast (TAF AMD)
    TafAmended,
}

/// Optional header flag following the observation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFlag {
    /// Fully automated report (AUTO)
    Auto,
    /// Correction to a previous report (COR)
    Cor,
}

/// Observation time from the ddhhmm[Z] header token
///
/// The two-digit fields are kept as validated digit pairs so leading zeros
/// survive into the rendered output. `zulu` records whether the trailing `Z`
/// was present; its absence is annotated in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationTime {
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub zulu: bool,
}

/// Validity period `ddhh/ddhh` (TAF header or mid-report group)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPeriod {
    pub from_day: String,
    pub from_hour: String,
    pub to_day: String,
    pub to_hour: String,
}

/// Parsed report header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    /// Report kind, unset when no keyword token was present
    pub kind: Option<ReportKind>,
    /// 4-character station code
    pub station: String,
    /// Observation time
    pub time: ObservationTime,
    /// TAF validity period, when present
    pub valid_period: Option<ValidPeriod>,
    /// AUTO/COR flag, when present
    pub flag: Option<ReportFlag>,
}

// =============================================================================
// Classified Field Structures
// =============================================================================

/// Wind speed unit suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
}

/// Runway side designator (L/C/R)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunwaySide {
    Left,
    Center,
    Right,
}

/// Above/below qualifier on a visual-range value (P/M)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeQualifier {
    GreaterThan,
    LessThan,
}

/// Visual-range tendency qualifier (U/D/N)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RvrTrend {
    Increasing,
    Decreasing,
    NoChange,
}

/// Trend-change group opener (BECMG/TEMPO)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendKind {
    Becoming,
    Temporary,
}

/// Boundary-time subtype for trend groups (TL/FM/AT)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Until,
    From,
    At,
}

/// A trend boundary time `hhmm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBound {
    pub kind: BoundKind,
    pub hour: String,
    pub minute: String,
}

/// Extreme-temperature forecast kind (TX/TN)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremeKind {
    Maximum,
    Minimum,
}

/// One decoded body token, tagged by the field grammar that matched it
///
/// Each variant carries only the fields its grammar defines. Tokens matching
/// no grammar produce no element at all.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedElement {
    /// Calm-wind literal (00000KT/MPS/KMH)
    CalmWind,
    /// Wind group; `direction` is `None` for VRB
    Wind {
        direction: Option<String>,
        speed: u32,
        gust: Option<u32>,
        unit: WindUnit,
    },
    /// Variable wind direction `aaaVbbb`
    VariableWindDirection { from: String, to: String },
    /// Visibility in meters with optional compass suffix
    Visibility { meters: u32, direction: Option<String> },
    /// Visibility in statute miles; `display` keeps the token's own
    /// number-or-fraction text for rendering
    VisibilityStatuteMiles {
        greater_than: bool,
        display: String,
        miles: f64,
    },
    /// Altimeter setting in hectopascals (Qpppp)
    Qnh { hectopascals: u32 },
    /// Altimeter setting in hundredths of inches of mercury
    /// (QNHppppIN or Apppp)
    QnhInches { centi_inches: u32 },
    /// Runway visual range group
    RunwayVisualRange {
        runway: String,
        side: Option<RunwaySide>,
        qualifier: Option<RangeQualifier>,
        meters: String,
        upper_meters: Option<String>,
        trend: Option<RvrTrend>,
    },
    /// Ceiling and visibility OK
    Cavok,
    /// No significant change expected
    Nosig,
    /// Present weather code groups, in token order
    PresentWeather { codes: Vec<String> },
    /// Recent weather code groups (RE prefix), in token order
    RecentWeather { codes: Vec<String> },
    /// Temperature/dew-point pair; a half is `None` when reported as `//`
    /// or omitted
    TemperatureDewpoint {
        air: Option<i32>,
        dew_point: Option<i32>,
    },
    /// Sky clear literal (SKC)
    SkyClear,
    /// Vertical visibility; `None` means the sky is obscured (VV///)
    VerticalVisibility { hundreds_feet: Option<u32> },
    /// Cloud layer with amount code, base height and optional convective type
    CloudLayer {
        amount: String,
        hundreds_feet: u32,
        convective: Option<String>,
    },
    /// Wind-shear marker (WS)
    WindShear,
    /// ALL marker within a wind-shear statement
    AllRunwaysWord,
    /// RWY marker within a wind-shear statement
    RunwayWord,
    /// Specific runway reference `RWYdd[L|C|R]`
    Runway {
        number: String,
        side: Option<RunwaySide>,
    },
    /// No significant weather (NSW)
    NoSignificantWeather,
    /// No significant clouds (NSC)
    NoSignificantClouds,
    /// Trend-change opener, optionally with a merged boundary time
    Trend {
        kind: TrendKind,
        bound: Option<TrendBound>,
    },
    /// Standalone trend boundary time (TL/FM/AT hhmm)
    TrendTime { bound: TrendBound },
    /// Runway-state group; `cleared` covers the CLRD special case and
    /// `depth` is `None` in the short form without a depth field
    RunwayState {
        runway: String,
        cleared: bool,
        deposit: Option<char>,
        extent: Option<char>,
        depth: Option<String>,
        friction: String,
    },
    /// Airfield closed, runways snow-covered (SNOCLO)
    SnowClosure,
    /// Sea-surface temperature and wave-height band
    SeaState {
        below_zero: bool,
        temperature: u32,
        wave_code: usize,
    },
    /// Mid-report validity period `ddhh/ddhh`
    ValidityPeriod(ValidPeriod),
    /// Probability heading `PROBnn`
    Probability { percent: String },
    /// Forecast extreme temperature `T(N|X)dd/ddhhZ`
    ExtremeTemperature {
        kind: ExtremeKind,
        celsius: String,
        day: String,
        hour: String,
    },
}
