//! The exponential function.

use crate::{bigdec::BigDecimal, GUARD_DIGITS};
use bigdec_base::{Error, RoundingMode, Sign};

/// ceil(log2(10)), used to pick the halving count in range reduction.
const LOG2_10_CEIL: i64 = 4;

impl BigDecimal {
    /// `e^self` to `precision` significant digits.
    ///
    /// Arguments at or above `10^19` overflow; at or below `-10^19` the
    /// result collapses to zero (no underflow error). The threshold is
    /// where the result's decimal exponent would no longer fit the scale
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let one: BigDecimal = "1".parse()?;
    /// assert_eq!(one.exp(30)?.to_string(), "2.71828182845904523536028747135");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn exp(&self, precision: usize) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if self.is_zero() {
            return Ok(BigDecimal::one());
        }
        if self.order() > 19 {
            return match self.sign {
                Sign::Positive => Err(Error::Overflow),
                Sign::Negative => Ok(BigDecimal::zero()),
            };
        }
        let wp = precision + GUARD_DIGITS;
        if self.sign == Sign::Negative {
            let inv = self.abs().exp_positive(wp, precision);
            let one = BigDecimal::one();
            return Ok(one
                .div_prec(&inv, wp)
                .with_significant_digits(precision, RoundingMode::HalfEven));
        }
        Ok(self
            .exp_positive(wp, precision)
            .with_significant_digits(precision, RoundingMode::HalfEven))
    }

    /// `e^self` for positive arguments at working precision.
    ///
    /// Range reduction: pick `k` with `2^k > self`, evaluate the Taylor
    /// series at `self / 2^k < 1` and square the result `k` times.
    fn exp_positive(&self, wp: usize, precision: usize) -> BigDecimal {
        debug_assert!(self.sign == Sign::Positive && !self.is_zero());
        let ord = self.order();
        let k = if ord <= 0 {
            0
        } else {
            (ord * LOG2_10_CEIL) as usize
        };
        // every squaring doubles the relative error, so the guard grows
        // with k by log10(2) per halving
        let wp = wp + k / 3 + 1;
        let reduced = self
            .div_pow2(k)
            .with_significant_digits(wp, RoundingMode::HalfEven);
        let mut result = taylor_exp(&reduced, wp, precision);
        for _ in 0..k {
            result = (&result * &result).with_significant_digits(wp, RoundingMode::HalfEven);
        }
        result
    }
}

/// `1 + x + x²/2! + x³/3! + …` for `0 < x < 1`, cut off when the next
/// term drops below the working precision or the term count exceeds
/// `2.5 × precision`.
fn taylor_exp(x: &BigDecimal, wp: usize, precision: usize) -> BigDecimal {
    let max_terms = 5 * precision / 2 + 8;
    let mut sum = BigDecimal::one() + x;
    let mut term = x.clone();
    let mut i: u64 = 1;
    loop {
        i += 1;
        term = (&term * x).with_significant_digits(wp, RoundingMode::HalfEven);
        term = term.div_prec(&BigDecimal::from(i), wp);
        if term.is_zero() {
            break;
        }
        sum += &term;
        if term.order() < -(wp as i64) || i as usize > max_terms {
            break;
        }
    }
    sum
}
