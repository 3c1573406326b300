//! Decimal square root.

use crate::bigdec::BigDecimal;
use bigdec_base::{Error, RoundingMode, Sign};
use bigdec_int::BigUInt;

impl BigDecimal {
    /// `√self` to `precision` significant digits, rounded half-even.
    ///
    /// Perfect squares come back exactly, with the trailing zeros
    /// introduced by scaling stripped; the scale of an exact result is
    /// normalized to 0 only when the input scale was non-negative, so
    /// `sqrt(100)` is `10` while `sqrt(1E+10)` stays `1E+5`.
    ///
    /// Fails with [Error::Domain] for negative input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let two: BigDecimal = "2".parse()?;
    /// assert_eq!(two.sqrt(10)?.to_string(), "1.414213562");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn sqrt(&self, precision: usize) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if self.sign == Sign::Negative {
            return Err(Error::Domain);
        }
        Ok(self.sqrt_unchecked(precision))
    }

    /// Square root for a known non-negative value and positive precision.
    pub(crate) fn sqrt_unchecked(&self, precision: usize) -> BigDecimal {
        debug_assert!(self.sign == Sign::Positive && precision >= 1);
        if self.is_zero() {
            return BigDecimal::from_raw(Sign::Positive, BigUInt::zero(), self.scale / 2);
        }

        // write self = c · 10^e with e even
        let mut c = self.coeff.clone();
        let mut e = -self.scale;
        if e % 2 != 0 {
            c = c.mul_pow10(1);
            e -= 1;
        }

        // rescale so the integer root carries precision + 1 digits:
        // digits(isqrt(c·10^2t)) = ceil(digits/2) + t
        let target = precision + 1;
        let d = c.digits();
        let t = target as i64 - ((d + 1) / 2) as i64;
        let mut exact_scaling = true;
        if t >= 0 {
            c = c.mul_pow10(2 * t as usize);
        } else {
            let (q, r) = c.split_pow10(2 * (-t) as usize);
            exact_scaling = r.is_zero();
            c = q;
        }

        let n = c.sqrt();
        let result_scale = t - e / 2;

        if exact_scaling && &n * &n == c {
            let out = BigDecimal::from_raw(Sign::Positive, n, result_scale).trim_trailing_zeros();
            if self.scale >= 0 && out.scale < 0 {
                return out.extend_precision((-out.scale) as usize);
            }
            return out;
        }

        // the true root is irrational here; nudge a root ending in 0 or 5
        // off the tie boundary before the final rounding
        let n = if n.digit(0) % 5 == 0 { n + 1u32 } else { n };
        BigDecimal::from_raw(Sign::Positive, n, result_scale)
            .with_significant_digits(precision, RoundingMode::HalfEven)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_sqrt_domain() {
        assert_eq!(dec("-1").sqrt(10), Err(Error::Domain));
        assert_eq!(dec("2").sqrt(0), Err(Error::Precision));
    }

    #[test]
    fn test_sqrt_zero() {
        let z = dec("0.00").sqrt(10).unwrap();
        assert!(z.is_zero());
        assert_eq!(z.scale(), 1);
    }

    #[test]
    fn test_sqrt_two() {
        assert_eq!(
            dec("2").sqrt(50).unwrap().to_string(),
            "1.4142135623730950488016887242096980785696718753769"
        );
        assert_eq!(dec("2").sqrt(10).unwrap().to_string(), "1.414213562");
    }

    #[test]
    fn test_sqrt_exact() {
        assert_eq!(dec("4").sqrt(28).unwrap().to_string(), "2");
        assert_eq!(dec("100").sqrt(28).unwrap().to_string(), "10");
        assert_eq!(dec("0.25").sqrt(28).unwrap().to_string(), "0.5");
        assert_eq!(dec("2.25").sqrt(28).unwrap().to_string(), "1.5");
        assert_eq!(dec("1E+10").sqrt(28).unwrap().to_string(), "1E+5");
    }

    #[test]
    fn test_sqrt_small_values() {
        assert_eq!(dec("0.1").sqrt(20).unwrap().to_string(), "0.31622776601683793320");
        assert_eq!(dec("0.5").sqrt(20).unwrap().to_string(), "0.70710678118654752440");
    }

    #[test]
    fn test_sqrt_relative_error() {
        for (text, prec) in [("3", 30usize), ("123.456", 25), ("0.007", 40), ("987654321", 15)] {
            let x = dec(text);
            let r = x.sqrt(prec).unwrap();
            let diff = (&(&r * &r) - &x).abs();
            // |r² - x| / x < 10^(1-prec)
            let bound_scale = prec as i64 - 1;
            let bound = &x * &BigDecimal::from_raw(Sign::Positive, BigUInt::one(), bound_scale);
            assert!(diff < bound, "sqrt({}, {}) too far: {}", text, prec, r);
        }
    }
}
