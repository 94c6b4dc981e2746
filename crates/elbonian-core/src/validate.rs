//! Structural validation of Elbonian numeral strings.
//!
//! A single left-to-right scan carrying three pieces of state: the previous
//! symbol, a rank lock armed when a subtractive pair closes, and the length
//! of the current repeat run. Each rule maps to exactly one
//! [`RuleViolation`] variant, so every rejection is testable with a
//! single-character-delta input.

use tracing::debug;

use crate::error::RuleViolation;
use crate::symbol::{lookup, SymbolInfo};

/// How many times one symbol may appear consecutively.
const MAX_RUN: u32 = 3;

/// Check `s` (already trimmed) against every rule of the numeral system.
///
/// Digits are scanned for up front so a digit anywhere in the string is
/// reported as [`RuleViolation::DigitInNumeral`] ahead of any structural
/// finding. After that, violations are reported left to right, first hit
/// wins.
pub fn validate(s: &str) -> Result<(), RuleViolation> {
    if s.is_empty() {
        return Err(RuleViolation::Empty);
    }
    if let Some(d) = s.chars().find(|c| c.is_numeric()) {
        return Err(RuleViolation::DigitInNumeral(d));
    }

    let mut prev: Option<&'static SymbolInfo> = None;
    // Uppercase member of a subtractive pair that closed at the previous
    // position. The symbol after a pair must sit at least two ranks lower.
    let mut pair_lock: Option<&'static SymbolInfo> = None;
    let mut run: u32 = 1;

    for c in s.chars() {
        if c.is_whitespace() {
            return Err(RuleViolation::EmbeddedWhitespace);
        }
        let Some(sym) = lookup(c) else {
            return Err(RuleViolation::InvalidCharacter(c));
        };

        let Some(p) = prev else {
            prev = Some(sym);
            continue;
        };

        if let Some(pair) = pair_lock.take() {
            if sym.rank < pair.rank + 2 {
                return Err(RuleViolation::TooCloseAfterPair {
                    pair_upper: pair.ch,
                    next: c,
                });
            }
        }

        if sym.ch == p.ch {
            // A repeated lowercase prefix never closed its pair.
            if let Some(upper) = p.pair_upper {
                debug_assert_ne!(c, upper);
                return Err(RuleViolation::UnpairedLowercase {
                    lower: p.ch,
                    found: c,
                });
            }
            run += 1;
            if run > MAX_RUN {
                return Err(RuleViolation::RepeatLimit(c));
            }
        } else {
            run = 1;
            match p.pair_upper {
                // Previous was a lowercase prefix: only its partner may follow
                Some(upper) if sym.ch == upper => pair_lock = Some(sym),
                Some(_) => {
                    return Err(RuleViolation::UnpairedLowercase {
                        lower: p.ch,
                        found: c,
                    });
                }
                // Otherwise ranks must not ascend
                None if p.rank > sym.rank => {
                    return Err(RuleViolation::OutOfOrder {
                        prev: p.ch,
                        next: c,
                    });
                }
                None => {}
            }
        }
        prev = Some(sym);
    }

    if let Some(p) = prev {
        if p.pair_upper.is_some() {
            return Err(RuleViolation::TrailingLowercase(p.ch));
        }
    }

    debug!(input = s, "validated");
    Ok(())
}
