//! End-to-end tests for the decode engine
//!
//! Local-time annotations are host-zone dependent by design, so these tests
//! assert on the annotation shape and the UTC values only.

use crate::decoder::decode;

/// Byte offset of `needle` in `haystack`, with a readable panic
fn offset_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in:\n{haystack}"))
}

#[test]
fn decoding_is_idempotent() {
    let report = "METAR ZBAA 241200Z 24015G25KT 9999 FEW020 22/15 Q1013";
    assert_eq!(decode(report), decode(report));
}

#[test]
fn minimal_report_decodes_in_token_order() {
    let text = decode("METAR ZBAA 241200Z 24015G25KT 9999 FEW020 22/15 Q1013");

    let mut last = 0;
    for needle in [
        "[Routine weather report]",
        "Station: ZBAA",
        "Date: day 24 of the month",
        "Time: 12:00 UTC",
        "Surface wind: direction 240 degrees",
        "Visibility: greater than 10 km",
        "Cloud layer: few (1 to 2 oktas), base 2000 feet (about 610 m)",
        "Temperature: 22 degrees Celsius",
        "Dew point: 15 degrees Celsius",
        "Relative humidity:",
        "QNH: 1013 hPa",
    ] {
        let position = offset_of(&text, needle);
        assert!(position >= last, "{needle:?} out of order in:\n{text}");
        last = position;
    }
}

#[test]
fn wind_speeds_convert_with_the_exact_knot_ratio() {
    let text = decode("METAR ZBAA 241200Z 24015G25KT");
    assert!(text.contains("speed 15 knots (about 7.7 m/s)"), "{text}");
    assert!(text.contains("gusting 25 knots (about 12.9 m/s)"), "{text}");
}

#[test]
fn static_wind_renders_without_numbers() {
    let text = decode("METAR ZBAA 241200Z 00000KT");
    assert!(text.contains("static wind"), "{text}");
    assert!(!text.contains("degrees"), "{text}");
    assert!(!text.contains("speed"), "{text}");
}

#[test]
fn visibility_special_values() {
    let text = decode("METAR ZBAA 241200Z 0000");
    assert!(text.contains("Visibility: less than 50 m"), "{text}");

    let text = decode("METAR ZBAA 241200Z 3000NE");
    assert!(text.contains("Visibility: 3000 meters, northeast"), "{text}");
}

#[test]
fn vertical_visibility_values() {
    let text = decode("METAR ZBAA 241200Z VV///");
    assert!(text.contains("Vertical visibility: sky obscured"), "{text}");

    let text = decode("METAR ZBAA 241200Z VV003");
    assert!(
        text.contains("Vertical visibility: 300 feet (about 91 m)"),
        "{text}"
    );
}

#[test]
fn malformed_station_stops_all_further_decoding() {
    let text = decode("METAR AB 241200Z 24015G25KT 9999");
    assert_eq!(
        text,
        "[Routine weather report]\nNo weather data available for this station"
    );
}

#[test]
fn malformed_observation_time_stops_all_further_decoding() {
    let text = decode("METAR ZBAA 1200Z 24015KT");
    assert_eq!(text, "[Routine weather report]\nInvalid time format");
}

#[test]
fn missing_zulu_suffix_is_annotated() {
    let text = decode("METAR ZBAA 241200 Q1013");
    assert!(text.contains("(time zone not confirmed)"), "{text}");
}

#[test]
fn short_runway_state_group_decodes_designator_and_braking() {
    let text = decode("METAR ZBAA 241200Z 881199");
    assert!(text.contains("all runways"), "{text}");
    assert!(
        text.contains("braking action could not be determined"),
        "{text}"
    );
}

#[test]
fn cleared_runway_state_suppresses_deposit_rendering() {
    let text = decode("METAR ZBAA 241200Z 88CLRD95");
    assert!(text.contains("returned to service"), "{text}");
    assert!(text.contains("braking action good"), "{text}");
    assert!(!text.contains("covering"), "{text}");
}

#[test]
fn report_terminator_discards_the_remainder() {
    let text = decode("METAR ZBAA 241200Z 00000KT Q1013= 24015G25KT");
    assert!(text.contains("static wind"), "{text}");
    assert!(!text.contains("240 degrees"), "{text}");
}

#[test]
fn wind_shear_statement_spans_tokens_on_one_line() {
    let text = decode("METAR ZBAA 241200Z WS ALL RWY");
    assert!(
        text.lines().any(|line| line == "Wind shear: all runways"),
        "{text}"
    );

    let text = decode("METAR ZBAA 241200Z WS RWY24C");
    assert!(
        text.lines().any(|line| line == "Wind shear: runway 24 center"),
        "{text}"
    );
}

#[test]
fn merged_trend_opener_renders_a_bounded_change() {
    let text = decode("METAR ZBAA 241200Z BECMG TL1800 3000 BR");
    assert!(text.contains("[Gradual change expected]"), "{text}");
    assert!(text.contains("expected complete by 18:00 UTC"), "{text}");
    assert!(text.contains("Visibility: 3000 meters"), "{text}");
    assert!(text.contains("Weather: mist"), "{text}");
}

#[test]
fn local_time_annotations_depend_on_the_host_zone() {
    // The concrete clock value is environment-dependent; only its presence
    // and shape are part of the output contract.
    let text = decode("METAR ZBAA 241200Z");
    assert!(text.contains("Time: 12:00 UTC (local time: "), "{text}");
}

#[test]
fn taf_amendment_and_validity_render_in_the_header() {
    let text = decode("TAF AMD ZBAA 241200Z 2412/2512 24015KT");
    assert!(text.contains("[Aerodrome forecast]"), "{text}");
    assert!(text.contains("[Amended forecast]"), "{text}");
    assert!(text.contains("Forecast valid: from day 24 12:00 UTC"), "{text}");
    assert!(text.contains("to day 25 12:00 UTC"), "{text}");
}

#[test]
fn auto_and_cor_flags_render_as_markers() {
    let text = decode("METAR ZBAA 241200Z AUTO 00000KT");
    assert!(text.contains("[Fully automated report]"), "{text}");

    let text = decode("METAR ZBAA 241200Z COR 00000KT");
    assert!(text.contains("[Correction to a previous report]"), "{text}");
}

#[test]
fn unmatched_tokens_are_dropped_without_error() {
    let with_garbage = decode("METAR ZBAA 241200Z RMK AO2 SLP123 Q1013");
    assert!(with_garbage.contains("QNH: 1013 hPa"), "{with_garbage}");
    assert!(!with_garbage.contains("RMK"), "{with_garbage}");
    assert!(!with_garbage.contains("SLP"), "{with_garbage}");
}

#[test]
fn body_tokens_are_upper_cased_before_classification() {
    let text = decode("METAR ZBAA 241200Z cavok nosig");
    assert!(text.contains("[Ceiling and visibility OK]"), "{text}");
    assert!(text.contains("[No significant change expected]"), "{text}");
}

#[test]
fn humidity_is_computed_from_the_pair() {
    let text = decode("METAR ZBAA 241200Z 22/15");
    assert!(text.contains("Relative humidity: 64.5"), "{text}");
}

#[test]
fn humidity_is_skipped_when_a_half_is_unreadable() {
    let text = decode("METAR ZBAA 241200Z ///15");
    assert!(text.contains("Temperature: not reported"), "{text}");
    assert!(!text.contains("Relative humidity"), "{text}");
}
