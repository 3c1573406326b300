//! Arbitrary-precision signed decimal arithmetic.
//!
//! [BigDecimal] is a `sign · coefficient · 10^(-scale)` triple with a
//! [BigUInt] coefficient. Addition, subtraction and multiplication are
//! exact; division is correctly rounded to a requested precision; and a
//! transcendental kernel (`sqrt`, `exp`, `ln`, `log`, `power`, `root`,
//! `arctan`, [pi]) evaluates to any number of significant digits with a
//! final half-even rounding.
//!
//! Trailing zeros in the coefficient are meaningful, they encode precision:
//! `0.30` and `0.3` compare equal but print differently.

mod add;
mod atan;
mod bigdec;
mod cache;
mod cmp;
mod convert;
mod div;
mod exp;
mod fmt;
mod helper_macros;
mod log;
mod mul;
#[cfg(feature = "num-traits")]
mod numeric;
mod parse;
mod pi;
mod pow;
mod round;
mod sign;
mod sqrt;

pub use bigdec::BigDecimal;
pub use bigdec_base::{Error, ParseError, RoundingMode, Sign};
pub use bigdec_int::BigUInt;
pub use cache::MathCache;
pub use pi::{pi, pi_machin};

use static_assertions::const_assert_eq;

/// Significant digits used by the operators (`/`, `%`) and other entry
/// points that take no explicit precision.
pub const DEFAULT_PRECISION: usize = 28;

/// Guard digits added on top of a requested precision for intermediate
/// computations: one limb's worth.
pub(crate) const GUARD_DIGITS: usize = 9;
const_assert_eq!(GUARD_DIGITS, bigdec_int::DIGITS_PER_WORD);
