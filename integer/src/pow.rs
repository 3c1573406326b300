//! Exponentiation.

use crate::ubig::BigUInt;

impl BigUInt {
    /// Raise to the power `exp` by repeated squaring.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::BigUInt;
    /// assert_eq!(BigUInt::from(5u32).pow(3), BigUInt::from(125u32));
    /// assert_eq!(BigUInt::from(7u32).pow(0), BigUInt::one());
    /// assert_eq!(BigUInt::zero().pow(4), BigUInt::zero());
    /// ```
    pub fn pow(&self, exp: usize) -> BigUInt {
        match exp {
            0 => return BigUInt::one(),
            1 => return self.clone(),
            _ => {}
        }
        let mut result = BigUInt::one();
        let mut base = self.clone();
        let mut exp = exp;
        loop {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = &base * &base;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow() {
        assert_eq!(BigUInt::from(2u32).pow(10), BigUInt::from(1024u32));
        assert_eq!(BigUInt::from(10u32).pow(20), BigUInt::one().mul_pow10(20));
        assert_eq!(
            BigUInt::from(3u32).pow(40).to_string(),
            "12157665459056928801"
        );
    }
}
