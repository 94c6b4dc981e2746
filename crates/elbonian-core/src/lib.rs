//! Elbonian ⇄ Arabic numeral conversion.
//!
//! The Elbonian system is a sign-value notation over ten symbols. Seven
//! uppercase symbols carry positive weights (M=1000, D=500, C=100, L=50,
//! X=10, V=5, I=1); three lowercase symbols (d, l, v) are subtractive
//! prefixes that only appear immediately before their uppercase partner,
//! so dD=400, lL=40 and vV=4. Symbols run from largest to smallest, no
//! symbol repeats more than three times in a row, and the representable
//! range is 1..=3999.
//!
//! [`Numeral::parse`] accepts either representation, validates it, and
//! computes both forms up front:
//!
//! ```
//! use elbonian_core::Numeral;
//!
//! let n = Numeral::parse("999").unwrap();
//! assert_eq!(n.to_elbonian(), "DdDLlLVvV");
//! assert_eq!(Numeral::parse("MMMlLVvV").unwrap().to_arabic(), 3049);
//! ```

mod classify;
mod codec;
mod error;
mod numeral;
mod symbol;
mod validate;

pub use error::{ConvertError, RuleViolation};
pub use numeral::{Numeral, MAX_VALUE, MIN_VALUE};
