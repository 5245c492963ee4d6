//! Token classifier and grammar dispatch
//!
//! Every body token is evaluated against [`GRAMMARS`], a priority-ordered
//! table of (pattern, constructor) entries; the first grammar whose pattern
//! matches the whole token produces the decoded element, and no further
//! entries are tried. The ordering is a contract: several grammars overlap
//! structurally (a four-digit QNH group reads like other four-digit groups),
//! so more specific shapes are listed before more permissive ones. A token
//! matching no grammar yields `None` and is dropped by the caller.

use std::sync::LazyLock;

use regex::Regex;

use super::header::parse_valid_period;
use crate::models::{
    BoundKind, DecodedElement, ExtremeKind, RangeQualifier, RunwaySide, RvrTrend, TrendBound,
    TrendKind, WindUnit,
};

type Grammar = fn(&str) -> Option<DecodedElement>;

/// The dispatch table. Order is load-bearing; see the module docs.
const GRAMMARS: &[Grammar] = &[
    calm_wind,
    wind,
    variable_wind_direction,
    visibility_meters,
    visibility_statute_miles,
    qnh_hectopascals,
    qnh_inches_spelled,
    altimeter_inches,
    runway_visual_range,
    condition_literals,
    present_weather,
    recent_weather,
    temperature_dewpoint,
    sky_clear,
    vertical_visibility,
    cloud_layer,
    wind_shear,
    no_significant,
    trend_change,
    trend_time,
    runway_state,
    snow_closure,
    sea_state,
    validity_period,
    probability,
    extreme_temperature,
];

/// Classify one upper-cased token, returning the first grammar match
pub fn classify(token: &str) -> Option<DecodedElement> {
    GRAMMARS.iter().find_map(|grammar| grammar(token))
}

fn calm_wind(token: &str) -> Option<DecodedElement> {
    matches!(token, "00000KT" | "00000MPS" | "00000KMH").then_some(DecodedElement::CalmWind)
}

static WIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3}|VRB)(\d{2,3})(G\d{2,3})?(KT|MPS|KMH)$").expect("wind grammar")
});

fn wind(token: &str) -> Option<DecodedElement> {
    let caps = WIND.captures(token)?;
    let direction = (&caps[1] != "VRB").then(|| caps[1].to_string());
    let speed = caps[2].parse().ok()?;
    let gust = caps.get(3).and_then(|g| g.as_str()[1..].parse().ok());
    let unit = match &caps[4] {
        "KT" => WindUnit::Knots,
        "MPS" => WindUnit::MetersPerSecond,
        _ => WindUnit::KilometersPerHour,
    };
    Some(DecodedElement::Wind {
        direction,
        speed,
        gust,
        unit,
    })
}

static VARIABLE_WIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})V(\d{3})$").expect("variable wind grammar"));

fn variable_wind_direction(token: &str) -> Option<DecodedElement> {
    let caps = VARIABLE_WIND.captures(token)?;
    Some(DecodedElement::VariableWindDirection {
        from: caps[1].to_string(),
        to: caps[2].to_string(),
    })
}

static VISIBILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(N|S)?(E|W)?$").expect("visibility grammar"));

fn visibility_meters(token: &str) -> Option<DecodedElement> {
    let caps = VISIBILITY.captures(token)?;
    let meters = caps[1].parse().ok()?;
    let mut direction = String::new();
    if let Some(ns) = caps.get(2) {
        direction.push_str(ns.as_str());
    }
    if let Some(ew) = caps.get(3) {
        direction.push_str(ew.as_str());
    }
    Some(DecodedElement::Visibility {
        meters,
        direction: (!direction.is_empty()).then_some(direction),
    })
}

static VISIBILITY_SM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(P)?(\d{1,2})(?:/(\d{1,2}))?SM$").expect("statute mile visibility grammar")
});

fn visibility_statute_miles(token: &str) -> Option<DecodedElement> {
    let caps = VISIBILITY_SM.captures(token)?;
    let greater_than = caps.get(1).is_some();
    let numerator: f64 = caps[2].parse().ok()?;
    // Explicit small-fraction parse; the value is a bounded rational.
    let (display, miles) = match caps.get(3) {
        Some(denominator) => {
            let denominator: f64 = denominator.as_str().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            (
                format!("{}/{}", &caps[2], denominator as u32),
                numerator / denominator,
            )
        }
        None => (caps[2].to_string(), numerator),
    };
    Some(DecodedElement::VisibilityStatuteMiles {
        greater_than,
        display,
        miles,
    })
}

static QNH_HPA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Q(\d{3,4})$").expect("QNH grammar"));

fn qnh_hectopascals(token: &str) -> Option<DecodedElement> {
    let caps = QNH_HPA.captures(token)?;
    Some(DecodedElement::Qnh {
        hectopascals: caps[1].parse().ok()?,
    })
}

static QNH_INCHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^QNH(\d{3,4})INS?$").expect("QNH inches grammar"));

fn qnh_inches_spelled(token: &str) -> Option<DecodedElement> {
    let caps = QNH_INCHES.captures(token)?;
    Some(DecodedElement::QnhInches {
        centi_inches: caps[1].parse().ok()?,
    })
}

static ALTIMETER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A(\d{4})$").expect("altimeter grammar"));

fn altimeter_inches(token: &str) -> Option<DecodedElement> {
    let caps = ALTIMETER.captures(token)?;
    Some(DecodedElement::QnhInches {
        centi_inches: caps[1].parse().ok()?,
    })
}

static RVR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^R(\d{2})(R|C|L)?/(M|P)?(\d{4})(V\d{4})?(U|D|N)?$").expect("RVR grammar")
});

fn runway_visual_range(token: &str) -> Option<DecodedElement> {
    let caps = RVR.captures(token)?;
    let side = caps.get(2).and_then(|s| runway_side(s.as_str()));
    let qualifier = caps.get(3).map(|q| match q.as_str() {
        "P" => RangeQualifier::GreaterThan,
        _ => RangeQualifier::LessThan,
    });
    let trend = caps.get(6).map(|t| match t.as_str() {
        "U" => RvrTrend::Increasing,
        "D" => RvrTrend::Decreasing,
        _ => RvrTrend::NoChange,
    });
    Some(DecodedElement::RunwayVisualRange {
        runway: caps[1].to_string(),
        side,
        qualifier,
        meters: caps[4].to_string(),
        upper_meters: caps.get(5).map(|v| v.as_str()[1..].to_string()),
        trend,
    })
}

fn condition_literals(token: &str) -> Option<DecodedElement> {
    match token {
        "CAVOK" => Some(DecodedElement::Cavok),
        "NOSIG" => Some(DecodedElement::Nosig),
        _ => None,
    }
}

static PRESENT_WEATHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([-+])?(VC)?(MI|BC|DR|BL|SH|TS|FZ|PR)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(SH|TS|DZ|RA|SN|SG|IC|PL|GR|GS|BR|FG|FU|VA|DU|SA|HZ|PO|SQ|FC|SS|DS)$",
    )
    .expect("present weather grammar")
});

fn present_weather(token: &str) -> Option<DecodedElement> {
    let caps = PRESENT_WEATHER.captures(token)?;
    Some(DecodedElement::PresentWeather {
        codes: capture_codes(&caps),
    })
}

static RECENT_WEATHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^RE([-+])?(VC)?(MI|BC|BL|DR|SH|TS|FZ|PR)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(DZ|RA|SN|SG|IC|PL|GR|GS)?(SH|TS|DZ|RA|SN|SG|IC|PL|GR|GS|BR|FG|FU|VA|DU|SA|HZ|PO|SQ|FC|SS|DS)?$",
    )
    .expect("recent weather grammar")
});

fn recent_weather(token: &str) -> Option<DecodedElement> {
    let caps = RECENT_WEATHER.captures(token)?;
    Some(DecodedElement::RecentWeather {
        codes: capture_codes(&caps),
    })
}

/// Collect matched sub-group codes in capture order
fn capture_codes(caps: &regex::Captures<'_>) -> Vec<String> {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().to_string())
        .collect()
}

static TEMPERATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(M?\d\d|//)/(M?\d\d)?$").expect("temperature grammar"));

fn temperature_dewpoint(token: &str) -> Option<DecodedElement> {
    let caps = TEMPERATURE.captures(token)?;
    let air = parse_signed_celsius(&caps[1]);
    let dew_point = caps.get(2).and_then(|d| parse_signed_celsius(d.as_str()));
    Some(DecodedElement::TemperatureDewpoint { air, dew_point })
}

/// Parse a `dd` or `Mdd` temperature half; `//` and other unparsable halves
/// yield `None`
fn parse_signed_celsius(half: &str) -> Option<i32> {
    match half.strip_prefix('M') {
        Some(digits) => digits.parse::<i32>().ok().map(|v| -v),
        None => half.parse().ok(),
    }
}

fn sky_clear(token: &str) -> Option<DecodedElement> {
    (token == "SKC").then_some(DecodedElement::SkyClear)
}

static VERTICAL_VISIBILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^VV(\d{3}|///)$").expect("vertical visibility grammar"));

fn vertical_visibility(token: &str) -> Option<DecodedElement> {
    let caps = VERTICAL_VISIBILITY.captures(token)?;
    Some(DecodedElement::VerticalVisibility {
        hundreds_feet: caps[1].parse().ok(),
    })
}

static CLOUD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(FEW|SCT|BKN|OVC)(\d{3})(CB|TCU)?$").expect("cloud grammar"));

fn cloud_layer(token: &str) -> Option<DecodedElement> {
    let caps = CLOUD.captures(token)?;
    Some(DecodedElement::CloudLayer {
        amount: caps[1].to_string(),
        hundreds_feet: caps[2].parse().ok()?,
        convective: caps.get(3).map(|c| c.as_str().to_string()),
    })
}

static RUNWAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RWY(\d{2})(L|C|R)?$").expect("runway grammar"));

fn wind_shear(token: &str) -> Option<DecodedElement> {
    match token {
        "WS" => return Some(DecodedElement::WindShear),
        "ALL" => return Some(DecodedElement::AllRunwaysWord),
        "RWY" => return Some(DecodedElement::RunwayWord),
        _ => {}
    }
    let caps = RUNWAY.captures(token)?;
    Some(DecodedElement::Runway {
        number: caps[1].to_string(),
        side: caps.get(2).and_then(|s| runway_side(s.as_str())),
    })
}

fn runway_side(code: &str) -> Option<RunwaySide> {
    match code {
        "L" => Some(RunwaySide::Left),
        "C" => Some(RunwaySide::Center),
        "R" => Some(RunwaySide::Right),
        _ => None,
    }
}

fn no_significant(token: &str) -> Option<DecodedElement> {
    match token {
        "NSW" => Some(DecodedElement::NoSignificantWeather),
        "NSC" => Some(DecodedElement::NoSignificantClouds),
        _ => None,
    }
}

static TREND_BOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:BECMG|TEMPO)(TL|FM)(\d{2})(\d{2})$").expect("trend bound grammar")
});

fn trend_change(token: &str) -> Option<DecodedElement> {
    let kind = if token.starts_with("BECMG") {
        TrendKind::Becoming
    } else if token.starts_with("TEMPO") {
        TrendKind::Temporary
    } else {
        return None;
    };
    // Any BECMG/TEMPO opener announces a change; the merged TLhhmm/FMhhmm
    // suffix bounds it when present.
    let bound = TREND_BOUND.captures(token).map(|caps| TrendBound {
        kind: match &caps[1] {
            "TL" => BoundKind::Until,
            _ => BoundKind::From,
        },
        hour: caps[2].to_string(),
        minute: caps[3].to_string(),
    });
    Some(DecodedElement::Trend { kind, bound })
}

static TREND_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(TL|FM|AT)(\d{2})(\d{2})Z?$").expect("trend time grammar"));

fn trend_time(token: &str) -> Option<DecodedElement> {
    let caps = TREND_TIME.captures(token)?;
    let kind = match &caps[1] {
        "TL" => BoundKind::Until,
        "FM" => BoundKind::From,
        _ => BoundKind::At,
    };
    Some(DecodedElement::TrendTime {
        bound: TrendBound {
            kind,
            hour: caps[2].to_string(),
            minute: caps[3].to_string(),
        },
    })
}

static RUNWAY_STATE_CLEARED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})CLRD(\d{2}|//)$").expect("cleared runway grammar"));

// Depth is optional so both the 8-character WMO form and the 6-character
// short form (designator, deposit, extent, friction) decode.
static RUNWAY_STATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})([0-9/])([0-9/])(\d{2}|//)?(\d{2}|//)$").expect("runway state grammar")
});

fn runway_state(token: &str) -> Option<DecodedElement> {
    if let Some(caps) = RUNWAY_STATE_CLEARED.captures(token) {
        return Some(DecodedElement::RunwayState {
            runway: caps[1].to_string(),
            cleared: true,
            deposit: None,
            extent: None,
            depth: None,
            friction: caps[2].to_string(),
        });
    }
    let caps = RUNWAY_STATE.captures(token)?;
    Some(DecodedElement::RunwayState {
        runway: caps[1].to_string(),
        cleared: false,
        deposit: caps[2].chars().next(),
        extent: caps[3].chars().next(),
        depth: caps.get(4).map(|d| d.as_str().to_string()),
        friction: caps[5].to_string(),
    })
}

fn snow_closure(token: &str) -> Option<DecodedElement> {
    (token == "SNOCLO").then_some(DecodedElement::SnowClosure)
}

static SEA_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W(M)?(\d\d)/S(\d)$").expect("sea state grammar"));

fn sea_state(token: &str) -> Option<DecodedElement> {
    let caps = SEA_STATE.captures(token)?;
    Some(DecodedElement::SeaState {
        below_zero: caps.get(1).is_some(),
        temperature: caps[2].parse().ok()?,
        wave_code: caps[3].parse().ok()?,
    })
}

fn validity_period(token: &str) -> Option<DecodedElement> {
    parse_valid_period(token).map(DecodedElement::ValidityPeriod)
}

static PROBABILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PROB(\d{2})$").expect("probability grammar"));

fn probability(token: &str) -> Option<DecodedElement> {
    let caps = PROBABILITY.captures(token)?;
    Some(DecodedElement::Probability {
        percent: caps[1].to_string(),
    })
}

static EXTREME_TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^T(N|X)(\d{2})/(\d{2})(\d{2})Z$").expect("extreme temperature grammar")
});

fn extreme_temperature(token: &str) -> Option<DecodedElement> {
    let caps = EXTREME_TEMPERATURE.captures(token)?;
    let kind = match &caps[1] {
        "X" => ExtremeKind::Maximum,
        _ => ExtremeKind::Minimum,
    };
    Some(DecodedElement::ExtremeTemperature {
        kind,
        celsius: caps[2].to_string(),
        day: caps[3].to_string(),
        hour: caps[4].to_string(),
    })
}
