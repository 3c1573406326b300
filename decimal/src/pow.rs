//! Powers and roots.

use crate::{bigdec::BigDecimal, cache::MathCache, GUARD_DIGITS};
use bigdec_base::{Error, RoundingMode, Sign};
use core::convert::TryFrom;

impl BigDecimal {
    /// `self ^ exponent` to `precision` significant digits.
    ///
    /// `0^0` and a negative base with a non-integer exponent fail with
    /// [Error::Domain], as does `0` raised to a negative power. Integer
    /// exponents of up to 9 digits go through binary exponentiation;
    /// everything else through `exp(exponent · ln |self|)` with the sign
    /// reattached for odd integer exponents of a negative base.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let x: BigDecimal = "1.5".parse()?;
    /// let e: BigDecimal = "2".parse()?;
    /// assert_eq!(x.power(&e, 28)?.to_string(), "2.25");
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn power(&self, exponent: &BigDecimal, precision: usize) -> Result<BigDecimal, Error> {
        let mut cache = MathCache::new();
        self.power_with_cache(exponent, precision, &mut cache)
    }

    pub fn power_with_cache(
        &self,
        exponent: &BigDecimal,
        precision: usize,
        cache: &mut MathCache,
    ) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if exponent.is_zero() {
            if self.is_zero() {
                return Err(Error::Domain);
            }
            return Ok(BigDecimal::one());
        }
        if self.is_zero() {
            return match exponent.sign {
                Sign::Negative => Err(Error::Domain),
                Sign::Positive => Ok(BigDecimal::zero()),
            };
        }
        if self.is_one() {
            return Ok(BigDecimal::one());
        }
        if exponent.is_one() {
            return Ok(self.clone());
        }

        if let Some(n) = exponent.to_small_integer() {
            return self.pow_integer(n, precision);
        }

        let exponent_integral = exponent.is_integer();
        if self.sign == Sign::Negative && !exponent_integral {
            return Err(Error::Domain);
        }
        let negate = self.sign == Sign::Negative && is_odd_integer(exponent);

        let wp = precision + GUARD_DIGITS;
        let ln_base = self.abs().ln_with_cache(wp, cache)?;
        let product = (exponent * &ln_base).with_significant_digits(wp, RoundingMode::HalfEven);
        let result = product.exp(wp)?;
        let result = result.with_significant_digits(precision, RoundingMode::HalfEven);
        Ok(if negate { -result } else { result })
    }

    /// `self ^ n` for machine-sized integer exponents by repeated
    /// squaring, rounding each step at working precision.
    pub(crate) fn pow_integer(&self, n: i64, precision: usize) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        debug_assert!(!self.is_zero() || n > 0);
        let wp = precision + GUARD_DIGITS;
        let mut e = n.unsigned_abs();
        let mut base = self.clone();
        let mut acc = BigDecimal::one();
        loop {
            if e & 1 == 1 {
                acc = (&acc * &base).with_significant_digits(wp, RoundingMode::HalfEven);
            }
            e >>= 1;
            if e == 0 {
                break;
            }
            base = (&base * &base).with_significant_digits(wp, RoundingMode::HalfEven);
        }
        if n < 0 {
            acc = BigDecimal::one().true_divide(&acc, wp)?;
        }
        Ok(acc.with_significant_digits(precision, RoundingMode::HalfEven))
    }

    /// The `n`-th root of `self` to `precision` significant digits.
    ///
    /// `n = 0` fails with [Error::Domain]; a negative radicand requires an
    /// odd `n`; negative `n` is the reciprocal of the positive-index root.
    /// Square roots delegate to [BigDecimal::sqrt]; large indices
    /// (`n > 1000`) go through `exp(ln self / n)`; the rest run Newton's
    /// iteration `r ← ((n-1)·r + self/r^(n-1)) / n` from an `f64` seed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let x: BigDecimal = "27".parse()?;
    /// assert_eq!(x.root(3, 10)?.to_string(), "3");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn root(&self, n: i64, precision: usize) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if n == 0 {
            return Err(Error::Domain);
        }
        if self.is_zero() {
            return if n < 0 {
                Err(Error::Domain)
            } else {
                Ok(BigDecimal::zero())
            };
        }
        if n < 0 {
            let m = n.checked_neg().ok_or(Error::Domain)?;
            let wp = precision + GUARD_DIGITS;
            let r = self.root(m, wp)?;
            return Ok(BigDecimal::one()
                .true_divide(&r, wp)?
                .with_significant_digits(precision, RoundingMode::HalfEven));
        }
        if self.sign == Sign::Negative {
            if n % 2 == 0 {
                return Err(Error::Domain);
            }
            return Ok(-self.abs().root(n, precision)?);
        }
        if n == 1 {
            return Ok(self.clone());
        }
        if n == 2 {
            return self.sqrt(precision);
        }

        let wp = precision + GUARD_DIGITS;
        if n > 1000 {
            let l = self.ln(wp)?;
            let t = l.div_prec(&BigDecimal::from(n), wp);
            return Ok(t
                .exp(wp)?
                .with_significant_digits(precision, RoundingMode::HalfEven));
        }

        // Newton from a double-precision seed
        let guess = self.to_f64().powf((n as f64).recip());
        let mut r = if guess.is_finite() && guess > 0.0 {
            BigDecimal::try_from(guess).unwrap_or_else(|_| BigDecimal::one())
        } else {
            BigDecimal::from_raw(Sign::Positive, bigdec_int::BigUInt::one(), -(self.order() / n))
        };
        let n_dec = BigDecimal::from(n);
        let n_minus_one = BigDecimal::from(n - 1);
        let mut prev: Option<BigDecimal> = None;
        for _ in 0..64 {
            let pow = r.pow_integer(n - 1, wp)?;
            let quot = self.div_prec(&pow, wp);
            let next = (&(&r * &n_minus_one) + &quot).div_prec(&n_dec, wp);
            if next == r {
                break;
            }
            if prev.as_ref() == Some(&next) {
                break;
            }
            prev = Some(core::mem::replace(&mut r, next));
        }
        Ok(r.with_significant_digits(precision, RoundingMode::HalfEven))
    }
}

/// Parity of an integral decimal: the units digit decides; a negative
/// scale means factors of ten, hence even.
fn is_odd_integer(x: &BigDecimal) -> bool {
    debug_assert!(x.is_integer());
    if x.scale < 0 {
        return false;
    }
    x.coeff.digit(x.scale as usize) % 2 == 1
}
