//! Exact and correctly-rounded arbitrary-precision decimal arithmetic.
//!
//! This meta crate re-exports the member crates:
//!
//! - [`bigdec_int`]: the radix-10⁹ unsigned integer kernel ([BigUInt]);
//! - [`bigdec_dec`]: the signed decimal type ([BigDecimal]) with exact
//!   `+ - ×`, correctly-rounded division, quantization and the
//!   transcendental kernel;
//! - [`bigdec_base`]: the shared sign, rounding-mode and error types.
//!
//! # Examples
//!
//! ```
//! use bigdec::{BigDecimal, Error};
//!
//! let price: BigDecimal = "19.99".parse()?;
//! let qty: BigDecimal = "3".parse()?;
//! assert_eq!((price * qty).to_string(), "59.97");
//!
//! let two: BigDecimal = "2".parse()?;
//! assert_eq!(two.sqrt(30)?.to_string(), "1.41421356237309504880168872421");
//! # Ok::<(), Error>(())
//! ```

pub use bigdec_base as base;
pub use bigdec_dec as decimal;
pub use bigdec_int as integer;

pub use bigdec_base::{Error, ParseError, RoundingMode, Sign};
pub use bigdec_dec::{pi, pi_machin, BigDecimal, MathCache, DEFAULT_PRECISION};
pub use bigdec_int::BigUInt;
