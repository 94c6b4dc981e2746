//! Value codec between validated Elbonian strings and integers.

use crate::symbol::lookup;

/// Greedy decomposition table, largest threshold first. Every remainder in
/// 1..=3999 is covered by at most three repeats of a threshold before the
/// next one applies, so the greedy walk is total on that range.
const DECOMPOSITION: [(u16, &str); 10] = [
    (1000, "M"),
    (500, "D"),
    (400, "dD"),
    (100, "C"),
    (50, "L"),
    (40, "lL"),
    (10, "X"),
    (5, "V"),
    (4, "vV"),
    (1, "I"),
];

/// Sum the signed symbol weights of `s`.
///
/// Precondition: `s` already passed [`validate`](crate::validate::validate).
/// No structural checks are repeated here; a pair like vV decodes to
/// 5 - 1 = 4 purely by summation. The structural rules admit sums past the
/// representable maximum (up to 4998 for "MMMDDDCCCLLLXXXVVVIII"), so the
/// raw sum is returned and the caller bounds-checks it.
pub fn decode(s: &str) -> u16 {
    let mut sum: i32 = 0;
    for c in s.chars() {
        let sym = lookup(c);
        debug_assert!(sym.is_some(), "decode called on unvalidated input");
        if let Some(sym) = sym {
            sum += sym.weight;
        }
    }
    debug_assert!(sum > 0, "validated input always nets positive");
    sum as u16
}

/// Encode `value` as the canonical greedy Elbonian string.
///
/// Precondition: `value` is in 1..=3999; construction bounds-checks Arabic
/// input before calling.
pub fn encode(value: u16) -> String {
    debug_assert!((1..=3999).contains(&value));
    let mut remainder = value;
    let mut out = String::new();
    for &(threshold, symbols) in &DECOMPOSITION {
        while remainder >= threshold {
            out.push_str(symbols);
            remainder -= threshold;
        }
    }
    out
}
