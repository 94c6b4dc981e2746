//! Error types. Both kinds are raised at construction time, never by the
//! accessors.

/// A structural rule of the Elbonian numeral system that the input violated.
///
/// Carried inside [`ConvertError::MalformedNumber`]; kept as its own enum so
/// tests (and the CLI `check` command) can tell the triggers apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("empty input")]
    Empty,

    #[error("'{0}' is not an Elbonian symbol")]
    InvalidCharacter(char),

    #[error("digit '{0}' may not appear in an Elbonian numeral")]
    DigitInNumeral(char),

    #[error("whitespace inside the numeral")]
    EmbeddedWhitespace,

    #[error("'{0}' repeated more than three times in a row")]
    RepeatLimit(char),

    #[error("'{next}' may not follow '{prev}': symbols run from largest to smallest")]
    OutOfOrder { prev: char, next: char },

    #[error("lowercase '{lower}' must be immediately followed by its uppercase partner, found '{found}'")]
    UnpairedLowercase { lower: char, found: char },

    #[error("numeral may not end with lowercase '{0}'")]
    TrailingLowercase(char),

    #[error("'{next}' may not directly follow the subtractive pair ending in '{pair_upper}'")]
    TooCloseAfterPair { pair_upper: char, next: char },
}

/// Failure to construct a [`Numeral`](crate::Numeral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Input classified as Elbonian broke a structural rule, contained a
    /// digit, or contained embedded whitespace.
    #[error("malformed Elbonian numeral: {0}")]
    MalformedNumber(#[from] RuleViolation),

    /// Input parsed as an Arabic integer outside 1..=3999.
    #[error("{0} cannot be represented as an Elbonian numeral (range is 1..=3999)")]
    ValueOutOfBounds(i64),
}
