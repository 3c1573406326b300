//! Conversions between [BigUInt] and primitive types.

use crate::{
    buffer::Buffer,
    ubig::BigUInt,
    word::{Word, RADIX},
};

macro_rules! impl_from_word_sized {
    ($($t:ty)*) => {$(
        impl From<$t> for BigUInt {
            /// The value always fits in a single limb.
            #[inline]
            fn from(value: $t) -> BigUInt {
                let mut buffer = Buffer::allocate(1);
                buffer.push(value as Word);
                BigUInt(buffer)
            }
        }
    )*};
}
impl_from_word_sized!(u8 u16);

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigUInt {
            fn from(value: $t) -> BigUInt {
                let mut value = value as u128;
                let mut buffer = Buffer::allocate(5);
                loop {
                    buffer.push((value % RADIX as u128) as Word);
                    value /= RADIX as u128;
                    if value == 0 {
                        break;
                    }
                }
                BigUInt::from_buffer(buffer)
            }
        }
    )*};
}
impl_from_unsigned!(u32 u64 u128 usize);

impl BigUInt {
    /// Convert to `u64` if the value fits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::BigUInt;
    /// assert_eq!(BigUInt::from(42u32).to_u64(), Some(42));
    /// let big: BigUInt = "100000000000000000000".parse().unwrap();
    /// assert_eq!(big.to_u64(), None);
    /// ```
    pub fn to_u64(&self) -> Option<u64> {
        let mut acc: u64 = 0;
        for &word in self.words().iter().rev() {
            acc = acc.checked_mul(RADIX)?.checked_add(word as u64)?;
        }
        Some(acc)
    }

    /// Approximate the value as `f64`. Only the top three limbs contribute;
    /// anything below is beyond `f64` resolution anyway.
    pub fn to_f64(&self) -> f64 {
        let words = self.words();
        let take = words.len().min(3);
        let mut value = 0.0f64;
        for &word in words[words.len() - take..].iter().rev() {
            value = value * RADIX as f64 + word as f64;
        }
        let skipped = words.len() - take;
        value * (RADIX as f64).powi(skipped as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(BigUInt::from(0u8), BigUInt::zero());
        assert_eq!(BigUInt::from(255u8).to_string(), "255");
        assert_eq!(BigUInt::from(u32::MAX).to_string(), "4294967295");
        assert_eq!(BigUInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(
            BigUInt::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(BigUInt::zero().to_u64(), Some(0));
        assert_eq!(BigUInt::from(u64::MAX).to_u64(), Some(u64::MAX));
        let over = BigUInt::from(u64::MAX) + 1u32;
        assert_eq!(over.to_u64(), None);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(BigUInt::from(12345u32).to_f64(), 12345.0);
        let big: BigUInt = "1000000000000000000000000000000".parse().unwrap();
        let approx = big.to_f64();
        assert!((approx - 1e30).abs() / 1e30 < 1e-9);
    }
}
