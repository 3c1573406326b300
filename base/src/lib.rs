//! Shared vocabulary for the `bigdec` crates: the sign type, the rounding
//! modes and the error taxonomy used across the integer and decimal layers.

mod error;
mod round;
mod sign;

pub use error::{Error, ParseError};
pub use round::RoundingMode;
pub use sign::Sign;
