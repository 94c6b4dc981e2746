//! Arabic-or-Elbonian classification of raw input.

use tracing::debug;

/// Which numeral system an input string appears to belong to.
///
/// An explicit two-branch tag: a strict base-10 parse of the trimmed input
/// either succeeds (Arabic, not yet bounds-checked) or the trimmed string is
/// an Elbonian candidate (not yet validated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Arabic(i64),
    Elbonian(String),
}

/// Classify a raw input string.
///
/// Leading and trailing whitespace is ignored; embedded whitespace defeats
/// the integer parse and is left for the validator to reject.
pub fn classify(raw: &str) -> Classification {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => {
            debug!(value, "classified as Arabic");
            Classification::Arabic(value)
        }
        Err(_) => {
            debug!(input = trimmed, "classified as Elbonian candidate");
            Classification::Elbonian(trimmed.to_string())
        }
    }
}
