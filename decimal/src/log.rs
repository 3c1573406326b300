//! Natural and based logarithms.

use crate::{bigdec::BigDecimal, cache::MathCache, GUARD_DIGITS};
use bigdec_base::{Error, RoundingMode, Sign};

impl BigDecimal {
    /// Natural logarithm to `precision` significant digits.
    ///
    /// Fails with [Error::Domain] for zero or negative input. A fresh
    /// constant cache is used; see [BigDecimal::ln_with_cache] to share
    /// one across calls.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let two: BigDecimal = "2".parse()?;
    /// assert_eq!(two.ln(20)?.to_string(), "0.69314718055994530942");
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn ln(&self, precision: usize) -> Result<BigDecimal, Error> {
        let mut cache = MathCache::new();
        self.ln_with_cache(precision, &mut cache)
    }

    /// Natural logarithm, reusing `cache` for ln 2, ln 1.25 and ln 10.
    ///
    /// Range reduction: write `x = m · 10^p · 2^a · 5^b` with
    /// `m ∈ [0.5, 1.5)`, evaluate `ln m` by series on `m - 1`, and
    /// compose `ln x = ln m + p·ln 10 + (a + 2b)·ln 2 + b·ln 1.25`
    /// (using `ln 5 = 2 ln 2 + ln 1.25`).
    pub fn ln_with_cache(&self, precision: usize, cache: &mut MathCache) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if self.is_zero() || self.sign == Sign::Negative {
            return Err(Error::Domain);
        }
        if self.is_one() {
            return Ok(BigDecimal::zero());
        }
        let wp = precision + GUARD_DIGITS;

        // m starts in [1, 10) with the power of ten split off
        let mut m = BigDecimal::from_raw(
            Sign::Positive,
            self.coeff.clone(),
            self.coeff.digits() as i64 - 1,
        );
        let p10 = self.order() - 1;
        let mut twos: i64 = 0;
        let mut fives: i64 = 0;
        let threshold = BigDecimal::from_raw(Sign::Positive, bigdec_int::BigUInt::from(15u32), 1);
        let five = BigDecimal::from(5u32);
        while m >= threshold {
            if m >= five {
                m = m.div_pow5(1);
                fives += 1;
            } else {
                m = m.div_pow2(1);
                twos += 1;
            }
        }

        let z = &m - &BigDecimal::one();
        let mut result = ln_one_plus_series(&z, wp);

        if p10 != 0 {
            result += cache.get_ln10(wp)? * BigDecimal::from(p10);
        }
        let ln2_weight = twos + 2 * fives;
        if ln2_weight != 0 {
            result += cache.get_ln2(wp)? * BigDecimal::from(ln2_weight);
        }
        if fives != 0 {
            result += cache.get_ln1_25(wp)? * BigDecimal::from(fives);
        }
        Ok(result.with_significant_digits(precision, RoundingMode::HalfEven))
    }

    /// Logarithm of `self` in base `base`, as `ln self / ln base`.
    ///
    /// Fails with [Error::Domain] when either value is outside `(0, ∞)`
    /// or the base is 1.
    #[inline]
    pub fn log(&self, base: &BigDecimal, precision: usize) -> Result<BigDecimal, Error> {
        let mut cache = MathCache::new();
        self.log_with_cache(base, precision, &mut cache)
    }

    pub fn log_with_cache(
        &self,
        base: &BigDecimal,
        precision: usize,
        cache: &mut MathCache,
    ) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if base.is_one() {
            return Err(Error::Domain);
        }
        let wp = precision + GUARD_DIGITS;
        let num = self.ln_with_cache(wp, cache)?;
        let den = base.ln_with_cache(wp, cache)?;
        Ok(num
            .div_prec(&den, wp)
            .with_significant_digits(precision, RoundingMode::HalfEven))
    }

    /// Base-10 logarithm. Powers of ten short-circuit to their exponent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let x: BigDecimal = "1E+7".parse()?;
    /// assert_eq!(x.log10(5)?.to_string(), "7");
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn log10(&self, precision: usize) -> Result<BigDecimal, Error> {
        let mut cache = MathCache::new();
        self.log10_with_cache(precision, &mut cache)
    }

    pub fn log10_with_cache(
        &self,
        precision: usize,
        cache: &mut MathCache,
    ) -> Result<BigDecimal, Error> {
        if precision == 0 {
            return Err(Error::Precision);
        }
        if self.is_zero() || self.sign == Sign::Negative {
            return Err(Error::Domain);
        }
        if self.coeff.is_power_of_ten() {
            return Ok(BigDecimal::from(self.order() - 1));
        }
        let wp = precision + GUARD_DIGITS;
        let num = self.ln_with_cache(wp, cache)?;
        let den = cache.get_ln10(wp)?;
        Ok(num
            .div_prec(&den, wp)
            .with_significant_digits(precision, RoundingMode::HalfEven))
    }
}

/// `ln(1 + z)` for `|z| < 1` by the alternating Maclaurin series,
/// written as `-Σ w^k / k` with `w = -z`.
pub(crate) fn ln_one_plus_series(z: &BigDecimal, wp: usize) -> BigDecimal {
    let w = -z;
    let mut sum = BigDecimal::zero();
    let mut pow = BigDecimal::one();
    let max_terms = 4 * wp + 16;
    let mut k: u64 = 0;
    loop {
        k += 1;
        pow = (&pow * &w).with_significant_digits(wp, RoundingMode::HalfEven);
        if pow.is_zero() {
            break;
        }
        let term = pow.div_prec(&BigDecimal::from(k), wp);
        sum -= &term;
        if term.order() < -(wp as i64) || k as usize > max_terms {
            break;
        }
    }
    sum
}
