//! Tests for report tokenization and normalization

use crate::decoder::tokenizer::tokenize;

#[test]
fn splits_on_single_spaces() {
    assert_eq!(
        tokenize("METAR ZBAA 241200Z"),
        vec!["METAR", "ZBAA", "241200Z"]
    );
}

#[test]
fn collapses_repeated_spaces() {
    assert_eq!(tokenize("METAR   ZBAA  241200Z"), vec!["METAR", "ZBAA", "241200Z"]);
}

#[test]
fn collapses_line_ending_runs() {
    assert_eq!(
        tokenize("METAR ZBAA\r\n241200Z\rQ1013\nNOSIG"),
        vec!["METAR", "ZBAA", "241200Z", "Q1013", "NOSIG"]
    );
    assert_eq!(
        tokenize("METAR\r\n\r\nZBAA\n\n241200Z"),
        vec!["METAR", "ZBAA", "241200Z"]
    );
}

#[test]
fn truncates_at_report_terminator() {
    assert_eq!(
        tokenize("METAR ZBAA 241200Z Q1013= TRAILING GARBAGE"),
        vec!["METAR", "ZBAA", "241200Z", "Q1013"]
    );
}

#[test]
fn merges_two_word_trend_openers() {
    assert_eq!(tokenize("BECMG TL1800"), vec!["BECMGTL1800"]);
    assert_eq!(tokenize("BECMG FM1600"), vec!["BECMGFM1600"]);
    assert_eq!(tokenize("TEMPO TL0300"), vec!["TEMPOTL0300"]);
    assert_eq!(tokenize("TEMPO FM0600"), vec!["TEMPOFM0600"]);
}

#[test]
fn merges_trend_openers_across_line_breaks() {
    // Line-ending normalization runs before the merge step.
    assert_eq!(tokenize("NOSIG BECMG\nTL1800"), vec!["NOSIG", "BECMGTL1800"]);
}

#[test]
fn empty_and_blank_input_yield_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \r\n  ").is_empty());
    assert!(tokenize("=METAR ZBAA").is_empty());
}
