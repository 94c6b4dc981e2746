use super::*;
use crate::error::RuleViolation;

fn arabic(input: &str) -> u16 {
    Numeral::parse(input).unwrap().to_arabic()
}

fn elbonian(input: &str) -> String {
    Numeral::parse(input).unwrap().to_elbonian().to_string()
}

fn malformed(input: &str) -> RuleViolation {
    match Numeral::parse(input).unwrap_err() {
        ConvertError::MalformedNumber(rule) => rule,
        other => panic!("expected MalformedNumber for {input:?}, got {other:?}"),
    }
}

#[test]
fn test_decodes_elbonian() {
    assert_eq!(arabic("I"), 1);
    assert_eq!(arabic("III"), 3);
    assert_eq!(arabic("V"), 5);
    assert_eq!(arabic("vV"), 4);
    assert_eq!(arabic("VvV"), 9);
    assert_eq!(arabic(" MMDdDXVvV "), 2919);
    assert_eq!(arabic(" DdDLlLVvV"), 999);
}

#[test]
fn test_encodes_canonical_form() {
    assert_eq!(elbonian("4"), "vV");
    assert_eq!(elbonian("217"), "CCXVII");
    assert_eq!(elbonian("999"), "DdDLlLVvV");
    assert_eq!(elbonian("3049"), "MMMlLVvV");
    assert_eq!(elbonian(" 2919 "), "MMDdDXVvV");
}

#[test]
fn test_arabic_bounds() {
    assert_eq!(arabic("1"), 1);
    assert_eq!(arabic("3999"), 3999);
    assert_eq!(
        Numeral::parse("0").unwrap_err(),
        ConvertError::ValueOutOfBounds(0)
    );
    assert_eq!(
        Numeral::parse("4000").unwrap_err(),
        ConvertError::ValueOutOfBounds(4000)
    );
    assert_eq!(
        Numeral::parse("-17").unwrap_err(),
        ConvertError::ValueOutOfBounds(-17)
    );
}

#[test]
fn test_rejects_malformed() {
    assert_eq!(
        malformed("VM"),
        RuleViolation::OutOfOrder { prev: 'V', next: 'M' }
    );
    assert_eq!(malformed("MMDdDLLLLXVvV"), RuleViolation::RepeatLimit('L'));
    assert_eq!(malformed("MMDdDL LVvV"), RuleViolation::EmbeddedWhitespace);
    assert_eq!(malformed("iI"), RuleViolation::InvalidCharacter('i'));
    assert_eq!(malformed("cD"), RuleViolation::InvalidCharacter('c'));
    assert_eq!(
        malformed("dC"),
        RuleViolation::UnpairedLowercase { lower: 'd', found: 'C' }
    );
    assert_eq!(
        malformed("dDC"),
        RuleViolation::TooCloseAfterPair { pair_upper: 'D', next: 'C' }
    );
    assert_eq!(
        malformed("LlLX"),
        RuleViolation::TooCloseAfterPair { pair_upper: 'L', next: 'X' }
    );
    assert_eq!(malformed("Xl"), RuleViolation::OutOfOrder { prev: 'X', next: 'l' });
    assert_eq!(malformed("Cl"), RuleViolation::TrailingLowercase('l'));
    assert_eq!(malformed(""), RuleViolation::Empty);
    assert_eq!(malformed("   "), RuleViolation::Empty);
}

#[test]
fn test_digits_are_malformed_not_mixed() {
    assert_eq!(malformed("I9"), RuleViolation::DigitInNumeral('9'));
    assert_eq!(malformed("9I"), RuleViolation::DigitInNumeral('9'));
    assert_eq!(malformed("9 9"), RuleViolation::DigitInNumeral('9'));
    // An integer too large for the parse is still all digits
    assert_eq!(
        malformed("99999999999999999999"),
        RuleViolation::DigitInNumeral('9')
    );
}

#[test]
fn test_round_trip_whole_range() {
    for n in 1..=3999u16 {
        let from_arabic = Numeral::parse(&n.to_string()).unwrap();
        assert_eq!(from_arabic.to_arabic(), n);

        let from_elbonian = Numeral::parse(from_arabic.to_elbonian()).unwrap();
        assert_eq!(from_elbonian.to_arabic(), n);
        // Canonical input re-derives the identical string
        assert_eq!(from_elbonian.to_elbonian(), from_arabic.to_elbonian());
    }
}

#[test]
fn test_elbonian_above_bound_is_out_of_bounds() {
    // Structurally flawless (runs of 3, descending ranks, no pairs) but the
    // sum exceeds the representable maximum
    assert_eq!(
        Numeral::parse("MMMDDD").unwrap_err(),
        ConvertError::ValueOutOfBounds(4500)
    );
    // The largest sum the structural rules admit
    assert_eq!(
        Numeral::parse("MMMDDDCCCLLLXXXVVVIII").unwrap_err(),
        ConvertError::ValueOutOfBounds(4998)
    );
    // An in-range non-canonical string is still accepted
    assert_eq!(Numeral::parse("DD").unwrap().to_arabic(), 1000);
}

#[test]
fn test_noncanonical_valid_input_is_canonicalized() {
    // "DD" breaks no structural rule but is not the greedy form of 1000
    let n = Numeral::parse("DD").unwrap();
    assert_eq!(n.to_arabic(), 1000);
    assert_eq!(n.to_elbonian(), "M");
}

#[test]
fn test_display_and_from_str() {
    let n: Numeral = "2919".parse().unwrap();
    assert_eq!(n.to_string(), "MMDdDXVvV");
    assert!("VM".parse::<Numeral>().is_err());
}
