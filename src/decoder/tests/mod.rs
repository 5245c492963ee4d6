//! Test modules and helpers for the decode engine

mod decode_tests;
mod tokenizer_tests;

/// Build an owned token list from string literals
pub fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| t.to_string()).collect()
}
