//! The rounding engine: removing trailing digits under a rounding mode.

use crate::bigdec::BigDecimal;
use bigdec_base::RoundingMode;
use bigdec_int::BigUInt;

/// Remove the trailing `n` digits of `x`, rounding per `mode`.
///
/// The sign-relative modes must already be resolved; only `Down`, `Up`,
/// `HalfUp` and `HalfEven` reach this point.
///
/// When rounding up carries all the way through (`99…9` becoming `10…0`)
/// the quotient gains a digit over the intended width. With `trim_carry`
/// set, that extra digit is dropped and the second return value tells the
/// caller to adjust the scale by one more.
pub(crate) fn remove_trailing_digits(
    x: &BigUInt,
    n: usize,
    mode: RoundingMode,
    trim_carry: bool,
) -> (BigUInt, bool) {
    debug_assert!(!matches!(mode, RoundingMode::Ceiling | RoundingMode::Floor));
    if n == 0 {
        return (x.clone(), false);
    }
    let digits_before = x.digits();
    let (q, r) = x.split_pow10(n);

    let round_up = match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => !r.is_zero(),
        RoundingMode::HalfUp => r.digit(n - 1) >= 5,
        RoundingMode::HalfEven => {
            let lead = r.digit(n - 1);
            if lead != 5 {
                lead > 5
            } else {
                // an exact half has nothing but zeros below the 5
                let exact_half = r.trailing_zeros() >= n - 1;
                if exact_half {
                    q.digit(0) % 2 == 1
                } else {
                    true
                }
            }
        }
        RoundingMode::Ceiling | RoundingMode::Floor => unreachable!(),
    };

    let q = if round_up { q + 1u32 } else { q };
    if trim_carry && q.digits() == digits_before - n + 1 {
        (q.div_pow10(1), true)
    } else {
        (q, false)
    }
}

impl BigDecimal {
    /// Reshape to exactly `ndigits` fractional digits (negative `ndigits`
    /// rounds to a power-of-ten multiple).
    ///
    /// Widening pads trailing zeros without changing the value; narrowing
    /// rounds per `mode`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, RoundingMode, Error};
    /// let v: BigDecimal = "123.456".parse()?;
    /// assert_eq!(v.round(2, RoundingMode::HalfEven).to_string(), "123.46");
    /// assert_eq!(v.round(-2, RoundingMode::HalfEven).to_string(), "1E+2");
    /// assert_eq!(v.round(5, RoundingMode::HalfEven).to_string(), "123.45600");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn round(&self, ndigits: i64, mode: RoundingMode) -> BigDecimal {
        let mode = mode.resolve(self.sign);
        let delta = self.scale - ndigits;
        if delta == 0 {
            return self.clone();
        }
        if delta < 0 {
            return self.extend_precision((-delta) as usize);
        }
        if delta > self.coeff.digits() as i64 {
            // every digit is removed and the nearest representable value
            // is zero at the target scale
            return BigDecimal::from_raw(self.sign, BigUInt::zero(), ndigits);
        }
        let (q, _) = remove_trailing_digits(&self.coeff, delta as usize, mode, false);
        BigDecimal::from_raw(self.sign, q, ndigits)
    }

    /// Coerce to the scale of `exp_template`, rounding per `mode` when
    /// narrowing and zero-padding when widening.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, RoundingMode, Error};
    /// let v: BigDecimal = "1.2345".parse()?;
    /// let cents: BigDecimal = "0.01".parse()?;
    /// assert_eq!(v.quantize(&cents, RoundingMode::HalfEven).to_string(), "1.23");
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn quantize(&self, exp_template: &BigDecimal, mode: RoundingMode) -> BigDecimal {
        let delta = self.scale - exp_template.scale;
        if delta <= 0 {
            self.extend_precision((-delta) as usize)
        } else {
            self.round(exp_template.scale, mode)
        }
    }

    /// Reduce the coefficient to at most `prec` significant digits,
    /// rounding per `mode` and adjusting the scale. Values that already
    /// fit are returned unchanged.
    pub(crate) fn with_significant_digits(&self, prec: usize, mode: RoundingMode) -> BigDecimal {
        debug_assert!(prec >= 1);
        let d = self.coeff.digits();
        if self.is_zero() || d <= prec {
            return self.clone();
        }
        let excess = d - prec;
        let mode = mode.resolve(self.sign);
        let (q, trimmed) = remove_trailing_digits(&self.coeff, excess, mode, true);
        let scale = self.scale - excess as i64 - trimmed as i64;
        BigDecimal::from_raw(self.sign, q, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RoundingMode::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    fn ubig(s: &str) -> BigUInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_engine_modes() {
        let x = ubig("12345");
        assert_eq!(remove_trailing_digits(&x, 2, Down, false).0, ubig("123"));
        assert_eq!(remove_trailing_digits(&x, 2, Up, false).0, ubig("124"));
        assert_eq!(remove_trailing_digits(&x, 2, HalfUp, false).0, ubig("123"));
        assert_eq!(remove_trailing_digits(&x, 2, HalfEven, false).0, ubig("123"));

        let y = ubig("12355");
        assert_eq!(remove_trailing_digits(&y, 2, HalfUp, false).0, ubig("124"));
        assert_eq!(remove_trailing_digits(&y, 2, HalfEven, false).0, ubig("124"));
    }

    #[test]
    fn test_engine_half_even_ties() {
        // exact halves go to the even neighbour
        assert_eq!(remove_trailing_digits(&ubig("25"), 1, HalfEven, false).0, ubig("2"));
        assert_eq!(remove_trailing_digits(&ubig("35"), 1, HalfEven, false).0, ubig("4"));
        assert_eq!(remove_trailing_digits(&ubig("2500"), 3, HalfEven, false).0, ubig("2"));
        // a non-zero digit below the 5 is not a tie
        assert_eq!(remove_trailing_digits(&ubig("2501"), 3, HalfEven, false).0, ubig("3"));
    }

    #[test]
    fn test_engine_exact_multiple() {
        let x = ubig("12000");
        assert_eq!(remove_trailing_digits(&x, 3, Up, false).0, ubig("12"));
        assert_eq!(remove_trailing_digits(&x, 3, HalfUp, false).0, ubig("12"));
    }

    #[test]
    fn test_engine_carry_trim() {
        // 999_5 rounds to 100, one digit wider than intended
        let x = ubig("9995");
        let (q, trimmed) = remove_trailing_digits(&x, 1, HalfEven, true);
        assert!(trimmed);
        assert_eq!(q, ubig("100"));
        let (q, trimmed) = remove_trailing_digits(&x, 1, HalfEven, false);
        assert!(!trimmed);
        assert_eq!(q, ubig("1000"));
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(dec("2.5").round(0, HalfEven).to_string(), "2");
        assert_eq!(dec("3.5").round(0, HalfEven).to_string(), "4");
        assert_eq!(dec("-2.5").round(0, HalfEven).to_string(), "-2");
        assert_eq!(dec("2.675").round(2, HalfEven).to_string(), "2.68");
    }

    #[test]
    fn test_round_directional() {
        assert_eq!(dec("1.01").round(0, Ceiling).to_string(), "2");
        assert_eq!(dec("-1.01").round(0, Ceiling).to_string(), "-1");
        assert_eq!(dec("1.99").round(0, Floor).to_string(), "1");
        assert_eq!(dec("-1.01").round(0, Floor).to_string(), "-2");
        assert_eq!(dec("1.99").round(0, Down).to_string(), "1");
        assert_eq!(dec("-1.99").round(0, Down).to_string(), "-1");
        assert_eq!(dec("1.01").round(0, Up).to_string(), "2");
    }

    #[test]
    fn test_round_widens() {
        let v = dec("1.5");
        assert_eq!(v.round(3, HalfEven).to_string(), "1.500");
        assert_eq!(v.round(3, HalfEven), v);
    }

    #[test]
    fn test_round_beyond_all_digits() {
        assert_eq!(dec("0.009").round(1, Down).to_string(), "0.0");
        assert_eq!(dec("-0.009").round(1, Down).to_string(), "0.0");
        assert_eq!(dec("0.09").round(1, HalfUp).to_string(), "0.1");
    }

    #[test]
    fn test_round_negative_ndigits() {
        assert_eq!(dec("123.456").round(-2, HalfEven).to_string(), "1E+2");
        assert_eq!(dec("151").round(-2, HalfEven).to_string(), "2E+2");
    }

    #[test]
    fn test_quantize() {
        assert_eq!(dec("1.2345").quantize(&dec("0.01"), HalfEven).to_string(), "1.23");
        assert_eq!(dec("1.2").quantize(&dec("0.0001"), HalfEven).to_string(), "1.2000");
        assert_eq!(dec("123.456").quantize(&dec("1E+2"), HalfEven).to_string(), "1E+2");
    }

    #[test]
    fn test_with_significant_digits() {
        let v = dec("1.23456789");
        assert_eq!(v.with_significant_digits(4, HalfEven).to_string(), "1.235");
        assert_eq!(v.with_significant_digits(20, HalfEven), v);
        let nines = dec("99.97");
        assert_eq!(nines.with_significant_digits(3, HalfEven).to_string(), "100");
        assert_eq!(nines.with_significant_digits(2, HalfEven).to_string(), "10E+1");
    }
}
