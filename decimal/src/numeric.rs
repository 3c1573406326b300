//! Implementations of `num-traits` interfaces.

use crate::bigdec::BigDecimal;
use num_traits::{One, Zero};

impl Zero for BigDecimal {
    #[inline]
    fn zero() -> BigDecimal {
        BigDecimal::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigDecimal::is_zero(self)
    }
}

impl One for BigDecimal {
    #[inline]
    fn one() -> BigDecimal {
        BigDecimal::one()
    }

    #[inline]
    fn is_one(&self) -> bool {
        BigDecimal::is_one(self)
    }
}
