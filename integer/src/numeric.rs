//! Implementations of `num-traits` interfaces.

use crate::ubig::BigUInt;
use num_traits::{One, Zero};

impl Zero for BigUInt {
    #[inline]
    fn zero() -> BigUInt {
        BigUInt::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigUInt::is_zero(self)
    }
}

impl One for BigUInt {
    #[inline]
    fn one() -> BigUInt {
        BigUInt::one()
    }

    #[inline]
    fn is_one(&self) -> bool {
        BigUInt::is_one(self)
    }
}
