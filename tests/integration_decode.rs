//! Integration tests decoding complete real-world style reports

use metar_decoder::decode;

#[test]
fn routine_observation_with_rvr_weather_and_trend() {
    let text = decode(
        "METAR ZBAA 241200Z 24015G25KT 210V280 3000NE R36L/M0600V1000U -SHRA BKN030CB 22/15 Q1013 NOSIG",
    );

    assert!(text.contains("[Routine weather report]"), "{text}");
    assert!(text.contains("Station: ZBAA"), "{text}");
    assert!(text.contains("Surface wind: direction 240 degrees"), "{text}");
    assert!(
        text.contains("Wind direction varying from 210 degrees to 280 degrees"),
        "{text}"
    );
    assert!(text.contains("Visibility: 3000 meters, northeast"), "{text}");
    assert!(
        text.contains("Runway 36 left: touchdown zone visual range from less than 0600 meters to 1000 meters, increasing"),
        "{text}"
    );
    assert!(text.contains("Weather: light showers of rain"), "{text}");
    assert!(
        text.contains("Cloud layer: broken (5 to 7 oktas), base 3000 feet (about 914 m), cumulonimbus"),
        "{text}"
    );
    assert!(text.contains("Relative humidity:"), "{text}");
    assert!(text.contains("QNH: 1013 hPa"), "{text}");
    assert!(text.contains("[No significant change expected]"), "{text}");
}

#[test]
fn forecast_with_probability_tempo_and_extremes() {
    let text = decode(
        "TAF ZGGG 241100Z 2412/2512 21004MPS 9999 SCT020 TX32/2415Z TN24/2504Z PROB30 TEMPO 2418/2422 +TSRA",
    );

    assert!(text.contains("[Aerodrome forecast]"), "{text}");
    assert!(text.contains("Forecast valid: from day 24 12:00 UTC"), "{text}");
    assert!(text.contains("speed 4 m/s"), "{text}");
    assert!(
        text.contains("Temperature: maximum 32 degrees Celsius, expected around day 24 15:00 UTC"),
        "{text}"
    );
    assert!(
        text.contains("Temperature: minimum 24 degrees Celsius, expected around day 25 04:00 UTC"),
        "{text}"
    );
    assert!(
        text.contains("The following is expected with a 30% probability:"),
        "{text}"
    );
    assert!(text.contains("[Temporary change expected]"), "{text}");
    assert!(text.contains("Valid period: from day 24 18:00 UTC"), "{text}");
    assert!(text.contains("Weather: heavy thunderstorm rain"), "{text}");
}

#[test]
fn multi_line_report_with_terminator() {
    let text = decode("SPECI EGLL 010850Z\r\n18012KT 0400 FG VV001\r\nM01/M01 Q0997=\r\nEXTRA");

    assert!(text.contains("[Special weather report]"), "{text}");
    assert!(text.contains("Station: EGLL"), "{text}");
    assert!(text.contains("Visibility: 400 meters"), "{text}");
    assert!(text.contains("Weather: fog"), "{text}");
    assert!(
        text.contains("Vertical visibility: 100 feet (about 30 m)"),
        "{text}"
    );
    assert!(text.contains("Temperature: minus 1 degrees Celsius"), "{text}");
    assert!(text.contains("Relative humidity: 100%"), "{text}");
    assert!(text.contains("QNH: 997 hPa"), "{text}");
    assert!(!text.contains("EXTRA"), "{text}");
}

#[test]
fn winter_operations_report() {
    let text = decode("METAR UUEE 241630Z 00000KT 0800 SN VV002 M05/M07 Q1002 88490295 RESN");

    assert!(text.contains("Surface wind: static wind"), "{text}");
    assert!(text.contains("Weather: snow"), "{text}");
    assert!(text.contains("all runways"), "{text}");
    assert!(text.contains("dry snow"), "{text}");
    assert!(text.contains("covering 51% to 100%"), "{text}");
    assert!(text.contains("deposit depth 2 mm"), "{text}");
    assert!(text.contains("braking action good"), "{text}");
    assert!(
        text.contains("Weather (observed since the previous report): snow"),
        "{text}"
    );
}

#[test]
fn us_style_report_with_statute_miles_and_altimeter() {
    let text = decode("METAR KJFK 241251Z 24015KT 10SM FEW250 22/12 A2992");

    assert!(
        text.contains("Visibility: 10 statute miles (about 16.09 km)"),
        "{text}"
    );
    assert!(text.contains("QNH: 29.92 inHg (about 1013 hPa)"), "{text}");
}

#[test]
fn offshore_report_with_sea_state() {
    let text = decode("METAR ENSO 241150Z 20024KT 9999 SCT018 12/10 Q1008 W10/S5");

    assert!(
        text.contains("Sea surface temperature: 10 degrees Celsius"),
        "{text}"
    );
    assert!(text.contains("Wave height: 2.5 to 4 m"), "{text}");
}

#[test]
fn airfield_closed_for_snow() {
    let text = decode("METAR UUEE 241630Z 00000KT 0400 +SN SNOCLO");
    assert!(
        text.contains("[Airfield closed, runways snow-covered]"),
        "{text}"
    );
}

#[test]
fn decode_never_fails_on_arbitrary_text() {
    // Header failures and unmatched tokens all become plain text.
    for input in ["", "garbage", "METAR", "METAR TOOLONGSTATION 241200Z", "= = ="] {
        let text = decode(input);
        assert!(!text.is_empty(), "input {input:?} produced empty output");
    }
}
