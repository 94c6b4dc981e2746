//! The public conversion type.

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use tracing::debug_span;

use crate::classify::{classify, Classification};
use crate::codec;
use crate::error::ConvertError;
use crate::validate::validate;

/// Smallest representable Arabic value.
pub const MIN_VALUE: u16 = 1;
/// Largest representable Arabic value ("MMMDdDLlLVvV").
pub const MAX_VALUE: u16 = 3999;

/// A number held in both its Arabic and Elbonian representations.
///
/// Immutable once constructed: [`Numeral::parse`] does all classification,
/// validation and conversion up front, so the accessors are infallible pure
/// reads and the type is freely shareable across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    arabic: u16,
    elbonian: String,
}

impl Numeral {
    /// Parse a numeral in either representation.
    ///
    /// Leading and trailing whitespace is ignored. Input that parses as a
    /// base-10 integer is Arabic and must fall in 1..=3999; anything else is
    /// taken as Elbonian and checked against the structural rules of the
    /// numeral system. The bound applies to both paths: a structurally
    /// valid Elbonian string like "MMMDDD" that decodes past 3999 is
    /// [`ConvertError::ValueOutOfBounds`], not malformed.
    ///
    /// Elbonian input need not be canonical (the rules admit strings like
    /// "DD"); the stored Elbonian form is always the canonical greedy
    /// encoding of the decoded value.
    pub fn parse(input: &str) -> Result<Self, ConvertError> {
        let _span = debug_span!("numeral_parse").entered();
        let arabic = match classify(input) {
            Classification::Arabic(value) => {
                if !(i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)).contains(&value) {
                    return Err(ConvertError::ValueOutOfBounds(value));
                }
                value as u16
            }
            Classification::Elbonian(s) => {
                validate(&s)?;
                let value = codec::decode(&s);
                if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
                    return Err(ConvertError::ValueOutOfBounds(i64::from(value)));
                }
                value
            }
        };
        Ok(Numeral {
            arabic,
            elbonian: codec::encode(arabic),
        })
    }

    /// The value as an Arabic integer in 1..=3999.
    pub fn to_arabic(&self) -> u16 {
        self.arabic
    }

    /// The value in canonical Elbonian form.
    pub fn to_elbonian(&self) -> &str {
        &self.elbonian
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.elbonian)
    }
}

impl FromStr for Numeral {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Numeral::parse(s)
    }
}
