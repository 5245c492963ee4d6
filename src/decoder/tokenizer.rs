//! Report tokenizer and normalizer
//!
//! Normalization steps, in order: collapse line-ending runs into spaces,
//! collapse whitespace runs into single spaces, merge two-word trend openers
//! into single tokens, truncate at the `=` report terminator, split on
//! spaces. Empty fragments never survive the split.

/// Two-word trend openers rewritten into single tokens so the classifier can
/// match them atomically
const TREND_MERGES: &[(&str, &str)] = &[
    ("BECMG TL", "BECMGTL"),
    ("BECMG FM", "BECMGFM"),
    ("TEMPO TL", "TEMPOTL"),
    ("TEMPO FM", "TEMPOFM"),
];

/// Split a raw report into its ordered token sequence
pub fn tokenize(report: &str) -> Vec<String> {
    let unlined = report.replace("\r\n", " ").replace(['\r', '\n'], " ");
    let mut collapsed = unlined.split_whitespace().collect::<Vec<_>>().join(" ");

    for (two_word, merged) in TREND_MERGES {
        collapsed = collapsed.replace(two_word, merged);
    }

    let body = match collapsed.find('=') {
        Some(position) => &collapsed[..position],
        None => collapsed.as_str(),
    };

    body.split_whitespace().map(str::to_string).collect()
}
