//! The signed decimal type.

use bigdec_base::Sign;
use bigdec_int::BigUInt;

/// Signed decimal number of unbounded magnitude and precision.
///
/// The value is `(-1)^sign · coefficient · 10^(-scale)`. A positive scale
/// counts fractional digits, a negative scale is a trailing-zero multiplier
/// (`1E+2` is coefficient 1 at scale -2).
///
/// Zero always carries a positive sign, but keeps its scale, so `0.00`
/// remembers that it has two fractional digits.
///
/// # Examples
///
/// ```
/// # use bigdec_dec::{BigDecimal, Error};
/// let a: BigDecimal = "0.1".parse()?;
/// let b: BigDecimal = "0.2".parse()?;
/// assert_eq!((a + b).to_string(), "0.3");
///
/// let x: BigDecimal = "1".parse()?;
/// let y: BigDecimal = "3".parse()?;
/// assert_eq!(x.true_divide(&y, 10)?.to_string(), "0.3333333333");
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BigDecimal {
    pub(crate) sign: Sign,
    pub(crate) coeff: BigUInt,
    pub(crate) scale: i64,
}

impl BigDecimal {
    /// Construct from raw parts, normalizing the sign of zero.
    #[inline]
    pub(crate) fn from_raw(sign: Sign, coeff: BigUInt, scale: i64) -> BigDecimal {
        let sign = if coeff.is_zero() { Sign::Positive } else { sign };
        BigDecimal { sign, coeff, scale }
    }

    /// The value 0 (at scale 0).
    #[inline]
    pub fn zero() -> BigDecimal {
        BigDecimal {
            sign: Sign::Positive,
            coeff: BigUInt::zero(),
            scale: 0,
        }
    }

    /// The value 1.
    #[inline]
    pub fn one() -> BigDecimal {
        BigDecimal {
            sign: Sign::Positive,
            coeff: BigUInt::one(),
            scale: 0,
        }
    }

    /// Construct from sign, coefficient and scale. A zero coefficient
    /// forces a positive sign.
    #[inline]
    pub fn from_parts(sign: Sign, coefficient: BigUInt, scale: i64) -> BigDecimal {
        BigDecimal::from_raw(sign, coefficient, scale)
    }

    /// Decompose into sign, coefficient and scale.
    #[inline]
    pub fn into_parts(self) -> (Sign, BigUInt, i64) {
        (self.sign, self.coeff, self.scale)
    }

    /// The sign. Zero reports positive.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The coefficient magnitude.
    #[inline]
    pub fn coefficient(&self) -> &BigUInt {
        &self.coeff
    }

    /// The scale: the power of ten the coefficient is divided by.
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Check whether the value is zero (at any scale).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Check whether the value is exactly one, at any representation
    /// (`1`, `1.0`, `0.1E+1` all qualify).
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive
            && !self.is_zero()
            && self.coeff.is_power_of_ten()
            && self.coeff.digits() as i64 - 1 == self.scale
    }

    /// Number of significant digits in the coefficient.
    #[inline]
    pub fn digits(&self) -> usize {
        self.coeff.digits()
    }

    /// Decimal order of magnitude: the value lies in
    /// `[10^(order-1), 10^order)`. Meaningless for zero.
    #[inline]
    pub(crate) fn order(&self) -> i64 {
        self.coeff.digits() as i64 - self.scale
    }

    /// Check whether the value is an integer.
    pub fn is_integer(&self) -> bool {
        if self.is_zero() || self.scale <= 0 {
            return true;
        }
        self.coeff.trailing_zeros() as i64 >= self.scale
    }

    /// Pad with `d` trailing zeros: the coefficient gains `d` digits and
    /// the scale grows by `d`, leaving the value unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let x: BigDecimal = "1.5".parse()?;
    /// assert_eq!(x.extend_precision(3).to_string(), "1.5000");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn extend_precision(&self, d: usize) -> BigDecimal {
        if d == 0 {
            return self.clone();
        }
        BigDecimal::from_raw(self.sign, self.coeff.mul_pow10(d), self.scale + d as i64)
    }

    /// Drop trailing zeros from the coefficient, decreasing the scale
    /// accordingly. The value is unchanged; zero is reduced to scale 0.
    pub fn trim_trailing_zeros(&self) -> BigDecimal {
        if self.is_zero() {
            return BigDecimal::zero();
        }
        let tz = self.coeff.trailing_zeros();
        if tz == 0 {
            return self.clone();
        }
        BigDecimal::from_raw(self.sign, self.coeff.div_pow10(tz), self.scale - tz as i64)
    }

    /// Exact division by `2^k` (multiply the coefficient by `5^k` and move
    /// the scale).
    pub(crate) fn div_pow2(&self, k: usize) -> BigDecimal {
        if k == 0 || self.is_zero() {
            return self.clone();
        }
        let coeff = &self.coeff * &BigUInt::from(5u32).pow(k);
        BigDecimal::from_raw(self.sign, coeff, self.scale + k as i64)
    }

    /// Exact division by `5^k` (multiply the coefficient by `2^k` and move
    /// the scale).
    pub(crate) fn div_pow5(&self, k: usize) -> BigDecimal {
        if k == 0 || self.is_zero() {
            return self.clone();
        }
        let coeff = &self.coeff * &BigUInt::from(2u32).pow(k);
        BigDecimal::from_raw(self.sign, coeff, self.scale + k as i64)
    }

    /// The integer value as `i64`, when the value is an integer of at most
    /// 9 digits.
    pub(crate) fn to_small_integer(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        let int = if self.scale >= 0 {
            self.coeff.div_pow10(self.scale as usize)
        } else {
            if self.coeff.digits() as i64 - self.scale > 9 {
                return None;
            }
            self.coeff.mul_pow10((-self.scale) as usize)
        };
        if int.digits() > 9 {
            return None;
        }
        let v = int.to_u64()? as i64;
        Some(match self.sign {
            Sign::Positive => v,
            Sign::Negative => -v,
        })
    }

    pub(crate) fn panic_divide_by_0() -> ! {
        panic!("decimal division by zero")
    }
}

impl Default for BigDecimal {
    /// Default value: 0.
    #[inline]
    fn default() -> BigDecimal {
        BigDecimal::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_normalization() {
        let z = BigDecimal::from_parts(Sign::Negative, BigUInt::zero(), 3);
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(z.scale(), 3);
        assert!(z.is_zero());
    }

    #[test]
    fn test_is_one() {
        assert!(BigDecimal::one().is_one());
        let one_point_zero: BigDecimal = "1.0".parse().unwrap();
        assert!(one_point_zero.is_one());
        let ten: BigDecimal = "10".parse().unwrap();
        assert!(!ten.is_one());
        let tenth: BigDecimal = "0.1".parse().unwrap();
        assert!(!tenth.is_one());
    }

    #[test]
    fn test_is_integer() {
        for text in ["0", "5", "-5", "5.0", "1E+3", "120.00"] {
            let v: BigDecimal = text.parse().unwrap();
            assert!(v.is_integer(), "{} should be integral", text);
        }
        for text in ["0.5", "-1.25", "12.30"] {
            let v: BigDecimal = text.parse().unwrap();
            assert!(!v.is_integer(), "{} should not be integral", text);
        }
    }

    #[test]
    fn test_trim_trailing_zeros() {
        let v: BigDecimal = "1.500".parse().unwrap();
        assert_eq!(v.trim_trailing_zeros().to_string(), "1.5");
        let v: BigDecimal = "1200".parse().unwrap();
        assert_eq!(v.trim_trailing_zeros().to_string(), "12E+2");
        let v: BigDecimal = "0.00".parse().unwrap();
        assert_eq!(v.trim_trailing_zeros().to_string(), "0");
    }

    #[test]
    fn test_div_pow2() {
        let v: BigDecimal = "10".parse().unwrap();
        assert_eq!(v.div_pow2(1).to_string(), "5.0");
        assert_eq!(v.div_pow2(3), "1.250".parse().unwrap());
    }

    #[test]
    fn test_to_small_integer() {
        let v: BigDecimal = "-120.00".parse().unwrap();
        assert_eq!(v.to_small_integer(), Some(-120));
        let v: BigDecimal = "3E+2".parse().unwrap();
        assert_eq!(v.to_small_integer(), Some(300));
        let v: BigDecimal = "0.5".parse().unwrap();
        assert_eq!(v.to_small_integer(), None);
        let v: BigDecimal = "1234567890".parse().unwrap();
        assert_eq!(v.to_small_integer(), None);
    }
}
