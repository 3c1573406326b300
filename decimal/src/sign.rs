//! Sign operations.

use crate::bigdec::BigDecimal;
use bigdec_base::Sign;
use core::ops::Neg;

impl BigDecimal {
    /// The absolute value.
    #[inline]
    pub fn abs(&self) -> BigDecimal {
        BigDecimal::from_raw(Sign::Positive, self.coeff.clone(), self.scale)
    }

    /// -1, 0 or 1 as the value is negative, zero or positive.
    #[inline]
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.sign == Sign::Negative {
            -1
        } else {
            1
        }
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        BigDecimal::from_raw(-self.sign, self.coeff, self.scale)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        BigDecimal::from_raw(-self.sign, self.coeff.clone(), self.scale)
    }
}
