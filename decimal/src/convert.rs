//! Conversions between [BigDecimal] and other numeric types.

use crate::bigdec::BigDecimal;
use bigdec_base::{Error, Sign};
use bigdec_int::BigUInt;
use core::convert::TryFrom;

impl From<BigUInt> for BigDecimal {
    #[inline]
    fn from(coefficient: BigUInt) -> BigDecimal {
        BigDecimal::from_raw(Sign::Positive, coefficient, 0)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigDecimal {
            #[inline]
            fn from(value: $t) -> BigDecimal {
                BigDecimal::from_raw(Sign::Positive, BigUInt::from(value), 0)
            }
        }
    )*};
}
impl_from_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! impl_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for BigDecimal {
            #[inline]
            fn from(value: $t) -> BigDecimal {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                BigDecimal::from_raw(sign, BigUInt::from(value.unsigned_abs()), 0)
            }
        }
    )*};
}
impl_from_signed!(i8 i16 i32 i64 i128 isize);

impl TryFrom<f64> for BigDecimal {
    type Error = Error;

    /// Convert through the shortest decimal representation of the float.
    /// Fails with [Error::Domain] on NaN and infinities.
    fn try_from(value: f64) -> Result<BigDecimal, Error> {
        if !value.is_finite() {
            return Err(Error::Domain);
        }
        format!("{:e}", value).parse()
    }
}

impl BigDecimal {
    /// Approximate the value as `f64`. Values beyond the `f64` range come
    /// out infinite or zero.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.coeff.to_f64() * 10f64.powf(-(self.scale as f64));
        match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_integers() {
        assert_eq!(BigDecimal::from(0u32), BigDecimal::zero());
        assert_eq!(BigDecimal::from(42u64).to_string(), "42");
        assert_eq!(BigDecimal::from(-42i32).to_string(), "-42");
        assert_eq!(BigDecimal::from(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_try_from_f64() {
        let v = BigDecimal::try_from(1.5f64).unwrap();
        assert_eq!(v, "1.5".parse().unwrap());
        let v = BigDecimal::try_from(-0.25f64).unwrap();
        assert_eq!(v, "-0.25".parse().unwrap());
        assert_eq!(BigDecimal::try_from(f64::NAN), Err(Error::Domain));
        assert_eq!(BigDecimal::try_from(f64::INFINITY), Err(Error::Domain));
    }

    #[test]
    fn test_to_f64() {
        let v: BigDecimal = "-12.5".parse().unwrap();
        assert_eq!(v.to_f64(), -12.5);
        let v: BigDecimal = "1E+3".parse().unwrap();
        assert_eq!(v.to_f64(), 1000.0);
        assert_eq!(BigDecimal::zero().to_f64(), 0.0);
    }
}
