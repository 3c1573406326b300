//! Arbitrary-precision unsigned integer on a decimal radix.
//!
//! [BigUInt] stores base-10⁹ limbs, so every digit-level query (digit count,
//! trailing zeros, the i-th decimal digit, power-of-ten scaling) is cheap and
//! exact. This is the coefficient type backing `bigdec-dec`'s `BigDecimal`;
//! a binary radix would make those queries require full divisions, so the
//! radix here is fixed and not configurable.

mod add;
mod add_ops;
mod buffer;
mod cmp;
mod convert;
mod div;
mod fmt;
mod helper_macros;
mod mul;
#[cfg(feature = "num-traits")]
mod numeric;
mod parse;
mod pow;
mod root;
mod shift;
mod ubig;
mod word;

pub use bigdec_base::{Error, ParseError};
pub use ubig::BigUInt;
pub use word::{DoubleWord, Word, DIGITS_PER_WORD, RADIX};
