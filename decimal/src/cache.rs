//! Cache for logarithm constants.

use crate::{bigdec::BigDecimal, log, GUARD_DIGITS};
use bigdec_base::{Error, RoundingMode, Sign};
use bigdec_int::BigUInt;

/// Digits of ln 2 known ahead of time; low-precision requests are served
/// from this constant instead of running the series.
const LN2_STR: &str = "0.69314718055994530941723212145817656807550013436025";
const LN2_STR_DIGITS: usize = 50;

/// Per-call-site cache of computed logarithm constants.
///
/// Each constant remembers the precision it was computed at. A request at
/// or below that precision is served by truncating the cached value;
/// anything above recomputes (with one limb of guard digits) and upgrades
/// the cache. Every stored value is itself a truncation of the true
/// constant, so reads are consistent no matter which precision filled the
/// cache first.
///
/// The cache is a plain value owned by the caller; `ln`, `log`, `log10`
/// and `power` take it by mutable reference and there is no global
/// instance.
///
/// # Examples
///
/// ```
/// # use bigdec_dec::{BigDecimal, MathCache, Error};
/// let mut cache = MathCache::new();
/// let ln2 = cache.get_ln2(30)?;
/// assert_eq!(ln2.to_string(), "0.693147180559945309417232121458");
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MathCache {
    ln2: Option<(BigDecimal, usize)>,
    ln1_25: Option<(BigDecimal, usize)>,
    ln10: Option<(BigDecimal, usize)>,
}

impl MathCache {
    pub fn new() -> MathCache {
        MathCache::default()
    }

    /// ln 2 truncated to `prec` significant digits.
    pub fn get_ln2(&mut self, prec: usize) -> Result<BigDecimal, Error> {
        if prec == 0 {
            return Err(Error::Precision);
        }
        if let Some((value, cached_prec)) = &self.ln2 {
            if *cached_prec >= prec {
                return Ok(value.with_significant_digits(prec, RoundingMode::Down));
            }
        }
        let (value, computed_prec) = if prec <= LN2_STR_DIGITS {
            (parse_constant(LN2_STR), LN2_STR_DIGITS)
        } else {
            (compute_ln2(prec), prec)
        };
        let result = value.with_significant_digits(prec, RoundingMode::Down);
        self.ln2 = Some((value, computed_prec));
        Ok(result)
    }

    /// ln 1.25 truncated to `prec` significant digits.
    pub fn get_ln1_25(&mut self, prec: usize) -> Result<BigDecimal, Error> {
        if prec == 0 {
            return Err(Error::Precision);
        }
        if let Some((value, cached_prec)) = &self.ln1_25 {
            if *cached_prec >= prec {
                return Ok(value.with_significant_digits(prec, RoundingMode::Down));
            }
        }
        let wp = prec + GUARD_DIGITS;
        let quarter = BigDecimal::from_raw(Sign::Positive, BigUInt::from(25u32), 2);
        let value = log::ln_one_plus_series(&quarter, wp)
            .with_significant_digits(prec, RoundingMode::Down);
        self.ln1_25 = Some((value.clone(), prec));
        Ok(value)
    }

    /// ln 10 truncated to `prec` significant digits, always composed as
    /// `3·ln 2 + ln 1.25` so it never runs its own series.
    pub fn get_ln10(&mut self, prec: usize) -> Result<BigDecimal, Error> {
        if prec == 0 {
            return Err(Error::Precision);
        }
        if let Some((value, cached_prec)) = &self.ln10 {
            if *cached_prec >= prec {
                return Ok(value.with_significant_digits(prec, RoundingMode::Down));
            }
        }
        let wp = prec + GUARD_DIGITS;
        let ln2 = self.get_ln2(wp)?;
        let ln1_25 = self.get_ln1_25(wp)?;
        let value = (ln2 * BigDecimal::from(3u32) + ln1_25)
            .with_significant_digits(prec, RoundingMode::Down);
        self.ln10 = Some((value.clone(), prec));
        Ok(value)
    }
}

fn parse_constant(text: &str) -> BigDecimal {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
        .collect();
    let scale = (text.len() - text.find('.').map_or(text.len(), |p| p + 1)) as i64;
    BigDecimal::from_raw(Sign::Positive, BigUInt::from_decimal_digits(&digits), scale)
}

/// ln 2 = 2·artanh(1/3) = 2·Σ (1/3)^(2k+1) / (2k+1)
///
/// Runs at `prec` plus guard digits and truncates, so the result is a
/// digit-prefix of the true constant.
fn compute_ln2(prec: usize) -> BigDecimal {
    let wp = prec + 2 * GUARD_DIGITS;
    let third = BigDecimal::one().div_prec(&BigDecimal::from(3u32), wp);
    let ninth = (&third * &third).with_significant_digits(wp, RoundingMode::HalfEven);
    let mut sum = third.clone();
    let mut pow = third;
    let mut k: u64 = 1;
    loop {
        k += 2;
        pow = (&pow * &ninth).with_significant_digits(wp, RoundingMode::HalfEven);
        let term = pow.div_prec(&BigDecimal::from(k), wp);
        sum += &term;
        if term.is_zero() || term.order() < -(wp as i64) {
            break;
        }
    }
    (&sum + &sum).with_significant_digits(prec, RoundingMode::Down)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln2_constant_prefix() {
        let mut cache = MathCache::new();
        let v = cache.get_ln2(10).unwrap();
        assert_eq!(v.to_string(), "0.6931471805");
    }

    #[test]
    fn test_ln2_series_extends_constant() {
        let mut cache = MathCache::new();
        let long = cache.get_ln2(60).unwrap().to_string();
        // the series result must reproduce the known digits
        assert!(long.starts_with(LN2_STR));
        assert_eq!(long.len(), LN2_STR.len() + 10);
    }

    #[test]
    fn test_cache_upgrade_and_reuse() {
        let mut cache = MathCache::new();
        let low = cache.get_ln10(10).unwrap();
        assert_eq!(low.to_string(), "2.302585092");
        let high = cache.get_ln10(40).unwrap();
        assert_eq!(high.to_string(), "2.302585092994045684017991454684364207601");
        // a later low-precision request truncates the upgraded value
        let low_again = cache.get_ln10(12).unwrap();
        assert_eq!(low_again.to_string(), "2.30258509299");
    }

    #[test]
    fn test_ln1_25() {
        let mut cache = MathCache::new();
        let v = cache.get_ln1_25(20).unwrap();
        assert_eq!(v.to_string(), "0.22314355131420975576");
    }

    #[test]
    fn test_zero_precision_rejected() {
        let mut cache = MathCache::new();
        assert_eq!(cache.get_ln2(0), Err(Error::Precision));
    }
}
