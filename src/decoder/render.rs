//! Fixed-vocabulary rendering of header fields and decoded elements
//!
//! Each function appends fragments to the per-call [`Output`]. Most
//! statements close their line; the wind-shear markers deliberately leave
//! the line open so `WS ALL RWY` reads as one statement.

use super::output::Output;
use crate::constants::{clouds, compass, runway_state, sea_state, weather};
use crate::localtime;
use crate::models::{
    BoundKind, DecodedElement, ExtremeKind, RangeQualifier, ReportFlag, ReportHeader, ReportKind,
    RunwaySide, RvrTrend, TrendKind, ValidPeriod, WindUnit,
};
use crate::units;
use crate::Error;

/// Fixed message for a fatal header failure
pub fn fatal_message(reason: &Error) -> &'static str {
    match reason {
        Error::StationCode { .. } => "No weather data available for this station",
        Error::TimeFormat { .. } => "Invalid time format",
        _ => "Unable to decode report",
    }
}

/// Render the report-kind marker line(s)
pub fn render_kind(kind: ReportKind, out: &mut Output) {
    match kind {
        ReportKind::Metar => out.line("[Routine weather report]"),
        ReportKind::Speci => out.line("[Special weather report]"),
        ReportKind::Taf => out.line("[Aerodrome forecast]"),
        ReportKind::TafAmended => {
            out.line("[Aerodrome forecast]");
            out.line("[Amended forecast]");
        }
    }
}

/// Render the parsed header, in field order
pub fn render_header(header: &ReportHeader, out: &mut Output) {
    if let Some(kind) = header.kind {
        render_kind(kind, out);
    }

    out.line(&format!("Station: {}", header.station));
    out.line(&format!("Date: day {} of the month", header.time.day));

    let mut time_line = format!("Time: {}:{} UTC", header.time.hour, header.time.minute);
    push_annotation(&mut time_line, &header.time.hour, &header.time.minute);
    if !header.time.zulu {
        time_line.push_str(" (time zone not confirmed)");
    }
    out.line(&time_line);

    if let Some(period) = &header.valid_period {
        out.line(&valid_period_line("Forecast valid", period));
    }

    match header.flag {
        Some(ReportFlag::Auto) => out.line("[Fully automated report]"),
        Some(ReportFlag::Cor) => out.line("[Correction to a previous report]"),
        None => {}
    }
}

/// Render one decoded element
pub fn render_element(element: &DecodedElement, out: &mut Output) {
    match element {
        DecodedElement::CalmWind => out.line("Surface wind: static wind"),
        DecodedElement::Wind {
            direction,
            speed,
            gust,
            unit,
        } => {
            let mut line = String::from("Surface wind: ");
            match direction {
                Some(degrees) => line.push_str(&format!("direction {degrees} degrees")),
                None => line.push_str("variable direction"),
            }
            line.push_str(&format!(", speed {}", speed_phrase(*speed, *unit)));
            if let Some(gust) = gust {
                line.push_str(&format!(", gusting {}", speed_phrase(*gust, *unit)));
            }
            out.line(&line);
        }
        DecodedElement::VariableWindDirection { from, to } => {
            out.line(&format!(
                "Wind direction varying from {from} degrees to {to} degrees"
            ));
        }
        DecodedElement::Visibility { meters, direction } => {
            let mut line = String::from("Visibility: ");
            match *meters {
                9999 => line.push_str("greater than 10 km"),
                0 => line.push_str("less than 50 m"),
                value => line.push_str(&format!("{value} meters")),
            }
            if let Some(point) = direction.as_deref().and_then(compass::point_phrase) {
                line.push_str(&format!(", {point}"));
            }
            out.line(&line);
        }
        DecodedElement::VisibilityStatuteMiles {
            greater_than,
            display,
            miles,
        } => {
            let prefix = if *greater_than { "greater than " } else { "" };
            out.line(&format!(
                "Visibility: {prefix}{display} statute miles (about {:.2} km)",
                units::statute_miles_to_kilometers(*miles)
            ));
        }
        DecodedElement::Qnh { hectopascals } => {
            out.line(&format!(
                "QNH: {hectopascals} hPa (about {:.2} inHg)",
                units::hectopascals_to_inches_of_mercury(f64::from(*hectopascals))
            ));
        }
        DecodedElement::QnhInches { centi_inches } => {
            let inches = f64::from(*centi_inches) / 100.0;
            out.line(&format!(
                "QNH: {}.{:02} inHg (about {} hPa)",
                centi_inches / 100,
                centi_inches % 100,
                units::inches_of_mercury_to_hectopascals(inches).round() as i64
            ));
        }
        DecodedElement::RunwayVisualRange {
            runway,
            side,
            qualifier,
            meters,
            upper_meters,
            trend,
        } => {
            let mut line = format!("Runway {runway}");
            push_side(&mut line, *side);
            line.push_str(": touchdown zone visual range ");
            let qualifier = match qualifier {
                Some(RangeQualifier::GreaterThan) => "greater than ",
                Some(RangeQualifier::LessThan) => "less than ",
                None => "",
            };
            match upper_meters {
                Some(upper) => {
                    line.push_str(&format!("from {qualifier}{meters} meters to {upper} meters"));
                }
                None => line.push_str(&format!("{qualifier}{meters} meters")),
            }
            match trend {
                Some(RvrTrend::Increasing) => line.push_str(", increasing"),
                Some(RvrTrend::Decreasing) => line.push_str(", decreasing"),
                Some(RvrTrend::NoChange) | None => {}
            }
            out.line(&line);
        }
        DecodedElement::Cavok => out.line("[Ceiling and visibility OK]"),
        DecodedElement::Nosig => out.line("[No significant change expected]"),
        DecodedElement::PresentWeather { codes } => {
            out.line(&format!("Weather: {}", weather_phrases(codes)));
        }
        DecodedElement::RecentWeather { codes } => {
            let mut line = String::from("Weather (observed since the previous report):");
            if !codes.is_empty() {
                line.push(' ');
                line.push_str(&weather_phrases(codes));
            }
            out.line(&line);
        }
        DecodedElement::TemperatureDewpoint { air, dew_point } => {
            match air {
                Some(celsius) => out.line(&format!(
                    "Temperature: {} degrees Celsius",
                    celsius_phrase(*celsius)
                )),
                None => out.line("Temperature: not reported"),
            }
            if let Some(celsius) = dew_point {
                out.line(&format!(
                    "Dew point: {} degrees Celsius",
                    celsius_phrase(*celsius)
                ));
            }
            if let (Some(air), Some(dew)) = (air, dew_point) {
                let humidity = units::relative_humidity(f64::from(*air), f64::from(*dew));
                out.line(&format!("Relative humidity: {humidity}%"));
            }
        }
        DecodedElement::SkyClear => out.line("[Sky clear]"),
        DecodedElement::VerticalVisibility { hundreds_feet } => match hundreds_feet {
            Some(hundreds) => {
                let feet = hundreds * 100;
                out.line(&format!(
                    "Vertical visibility: {feet} feet (about {} m)",
                    units::feet_to_meters(f64::from(feet)).round() as i64
                ));
            }
            None => out.line("Vertical visibility: sky obscured"),
        },
        DecodedElement::CloudLayer {
            amount,
            hundreds_feet,
            convective,
        } => {
            let feet = hundreds_feet * 100;
            let mut line = format!(
                "Cloud layer: {}, base {feet} feet (about {} m)",
                clouds::amount_phrase(amount).unwrap_or("clouds"),
                units::feet_to_meters(f64::from(feet)).round() as i64
            );
            if let Some(phrase) = convective.as_deref().and_then(clouds::convective_phrase) {
                line.push_str(&format!(", {phrase}"));
            }
            out.line(&line);
        }
        DecodedElement::WindShear => out.push("Wind shear: "),
        DecodedElement::AllRunwaysWord => out.push("all "),
        DecodedElement::RunwayWord => {
            out.push("runways");
            out.end_line();
        }
        DecodedElement::Runway { number, side } => {
            let mut line = format!("runway {number}");
            push_side(&mut line, *side);
            out.push(&line);
            out.end_line();
        }
        DecodedElement::NoSignificantWeather => out.line("[No significant weather]"),
        DecodedElement::NoSignificantClouds => out.line("[No significant clouds]"),
        DecodedElement::Trend { kind, bound } => {
            out.blank_line();
            match kind {
                TrendKind::Becoming => out.line("[Gradual change expected]"),
                TrendKind::Temporary => out.line("[Temporary change expected]"),
            }
            match bound {
                Some(bound) => {
                    let mut line = match bound.kind {
                        BoundKind::Until => {
                            format!("expected complete by {}:{} UTC", bound.hour, bound.minute)
                        }
                        _ => format!("beginning at {}:{} UTC", bound.hour, bound.minute),
                    };
                    push_annotation(&mut line, &bound.hour, &bound.minute);
                    out.line(&line);
                }
                None => out.line("(time not specified)"),
            }
        }
        DecodedElement::TrendTime { bound } => {
            let opener = match bound.kind {
                BoundKind::Until => "Until",
                BoundKind::From => "From",
                BoundKind::At => {
                    out.blank_line();
                    "At"
                }
            };
            let mut line = format!("{opener} {}:{} UTC", bound.hour, bound.minute);
            push_annotation(&mut line, &bound.hour, &bound.minute);
            line.push_str(", conditions change to:");
            out.line(&line);
        }
        DecodedElement::RunwayState {
            runway,
            cleared,
            deposit,
            extent,
            depth,
            friction,
        } => {
            let mut parts: Vec<String> = Vec::new();
            if let Some(phrase) = runway_designator_phrase(runway) {
                parts.push(phrase);
            }
            if *cleared {
                parts.push("returned to service".to_string());
            } else {
                if let Some(phrase) = deposit.and_then(runway_state::deposit_phrase) {
                    parts.push(phrase.to_string());
                }
                if let Some(phrase) = extent.and_then(runway_state::extent_phrase) {
                    parts.push(phrase.to_string());
                }
                match depth.as_deref() {
                    Some("//") => parts.push("deposit depth unknown".to_string()),
                    Some(digits) => {
                        if let Some(phrase) =
                            digits.parse().ok().and_then(runway_state::depth_phrase)
                        {
                            parts.push(phrase);
                        }
                    }
                    None => {}
                }
            }
            if friction.as_str() == "//" {
                parts.push("friction unknown".to_string());
            } else if let Ok(value) = friction.parse::<u32>() {
                if value < 91 {
                    parts.push(format!("friction coefficient 0.{friction}"));
                } else if let Some(phrase) = runway_state::braking_phrase(value) {
                    parts.push(phrase.to_string());
                }
            }
            out.line(&format!("Runway state: {}", parts.join(", ")));
        }
        DecodedElement::SnowClosure => out.line("[Airfield closed, runways snow-covered]"),
        DecodedElement::SeaState {
            below_zero,
            temperature,
            wave_code,
        } => {
            let celsius = if *below_zero {
                format!("minus {temperature}")
            } else {
                temperature.to_string()
            };
            out.line(&format!("Sea surface temperature: {celsius} degrees Celsius"));
            if let Some(band) = sea_state::WAVE_HEIGHT_BANDS.get(*wave_code) {
                out.line(&format!("Wave height: {band}"));
            }
        }
        DecodedElement::ValidityPeriod(period) => {
            out.line(&valid_period_line("Valid period", period));
        }
        DecodedElement::Probability { percent } => {
            out.blank_line();
            out.line(&format!(
                "The following is expected with a {percent}% probability:"
            ));
        }
        DecodedElement::ExtremeTemperature {
            kind,
            celsius,
            day,
            hour,
        } => {
            let extreme = match kind {
                ExtremeKind::Maximum => "maximum",
                ExtremeKind::Minimum => "minimum",
            };
            let mut line = format!(
                "Temperature: {extreme} {celsius} degrees Celsius, expected around day {day} {hour}:00 UTC"
            );
            push_annotation(&mut line, hour, "00");
            out.line(&line);
        }
    }
}

/// Append the host-local clock annotation, if the time is valid
fn push_annotation(line: &mut String, hour: &str, minute: &str) {
    let annotation = localtime::annotation(hour, minute);
    if !annotation.is_empty() {
        line.push(' ');
        line.push_str(&annotation);
    }
}

fn push_side(line: &mut String, side: Option<RunwaySide>) {
    match side {
        Some(RunwaySide::Left) => line.push_str(" left"),
        Some(RunwaySide::Center) => line.push_str(" center"),
        Some(RunwaySide::Right) => line.push_str(" right"),
        None => {}
    }
}

/// Matched weather sub-group codes mapped to their fixed phrases, in token
/// order
fn weather_phrases(codes: &[String]) -> String {
    codes
        .iter()
        .filter_map(|code| weather::phrase(code))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wind speed with the knots-only m/s annotation
fn speed_phrase(speed: u32, unit: WindUnit) -> String {
    match unit {
        WindUnit::Knots => format!(
            "{speed} knots (about {:.1} m/s)",
            units::knots_to_meters_per_second(f64::from(speed))
        ),
        WindUnit::MetersPerSecond => format!("{speed} m/s"),
        WindUnit::KilometersPerHour => format!("{speed} km/h"),
    }
}

/// Temperature with a spelled-out sign for below-zero values
fn celsius_phrase(celsius: i32) -> String {
    if celsius < 0 {
        format!("minus {}", -celsius)
    } else {
        celsius.to_string()
    }
}

/// One-line validity period statement, shared by the TAF header and the
/// mid-report group
fn valid_period_line(label: &str, period: &ValidPeriod) -> String {
    let mut line = format!("{label}: from day {} {}:00 UTC", period.from_day, period.from_hour);
    push_annotation(&mut line, &period.from_hour, "00");
    line.push_str(&format!(" to day {} {}:00 UTC", period.to_day, period.to_hour));
    push_annotation(&mut line, &period.to_hour, "00");
    line
}

/// Runway designator phrase; values 50-87 encode the right-hand parallel
/// runway, 88 means all runways, 89+ is reserved and renders nothing
fn runway_designator_phrase(runway: &str) -> Option<String> {
    let value: u32 = runway.parse().ok()?;
    if value < 50 {
        Some(format!("runway {runway} (or {runway} left)"))
    } else if value < 88 {
        Some(format!("runway {} right", value - 50))
    } else if value == 88 {
        Some("all runways".to_string())
    } else {
        None
    }
}
