//! Inverse tangent.

use crate::{bigdec::BigDecimal, pi, GUARD_DIGITS};
use bigdec_base::{Error, RoundingMode, Sign};
use bigdec_int::BigUInt;

impl BigDecimal {
    /// `arctan(self)` to `precision` significant digits.
    ///
    /// Three ranges: small arguments (`|x| <= 0.5`) run the Maclaurin
    /// series directly; mid-range arguments are contracted with the
    /// half-angle identity `arctan x = 2·arctan(x / (1 + √(1+x²)))`;
    /// large arguments reduce through `±π/2 - arctan(1/x)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let one: BigDecimal = "1".parse()?;
    /// assert_eq!(one.arctan(20)?.to_string(), "0.78539816339744830962");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn arctan(&self, precision: usize) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if self.is_zero() {
            return Ok(BigDecimal::from_raw(Sign::Positive, BigUInt::zero(), self.scale));
        }
        let wp = precision + GUARD_DIGITS;
        Ok(arctan_inner(self, wp).with_significant_digits(precision, RoundingMode::HalfEven))
    }
}

fn arctan_inner(x: &BigDecimal, wp: usize) -> BigDecimal {
    if x.sign() == Sign::Negative {
        return -arctan_inner(&x.abs(), wp);
    }
    let half = BigDecimal::from_raw(Sign::Positive, BigUInt::from(5u32), 1);
    let two = BigDecimal::from(2u32);
    if *x <= half {
        atan_taylor(x, wp)
    } else if *x <= two {
        // halve the angle: arctan x = 2·arctan(x / (1 + √(1+x²)))
        let x2 = (x * x).with_significant_digits(wp, RoundingMode::HalfEven);
        let s = (BigDecimal::one() + x2).sqrt_unchecked(wp);
        let y = x.div_prec(&(BigDecimal::one() + s), wp);
        let inner = arctan_inner(&y, wp);
        &inner + &inner
    } else {
        // arctan x = π/2 - arctan(1/x) for x > 2
        let inv = BigDecimal::one().div_prec(x, wp);
        let half_pi = pi::pi(wp).div_pow2(1);
        &half_pi - &atan_taylor(&inv, wp)
    }
}

/// `x - x³/3 + x⁵/5 - …` for `|x| <= 0.5`, folded as `Σ pow/(2k+1)` with
/// `pow` marching by `-x²`.
pub(crate) fn atan_taylor(x: &BigDecimal, wp: usize) -> BigDecimal {
    let neg_x2 = -(x * x).with_significant_digits(wp, RoundingMode::HalfEven);
    let mut sum = x.clone();
    let mut pow = x.clone();
    let mut k: u64 = 1;
    loop {
        pow = (&pow * &neg_x2).with_significant_digits(wp, RoundingMode::HalfEven);
        if pow.is_zero() {
            break;
        }
        k += 2;
        let term = pow.div_prec(&BigDecimal::from(k), wp);
        sum += &term;
        if term.order() < -(wp as i64) {
            break;
        }
    }
    sum
}
