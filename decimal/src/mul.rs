//! Exact multiplication.

use crate::{bigdec::BigDecimal, helper_macros};
use core::ops::{Mul, MulAssign};

impl Mul<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// Coefficients multiply, scales add, signs xor. Never rounds.
    #[inline]
    fn mul(self, rhs: &BigDecimal) -> BigDecimal {
        BigDecimal::from_raw(
            self.sign * rhs.sign,
            &self.coeff * &rhs.coeff,
            self.scale + rhs.scale,
        )
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Mul for BigDecimal, mul);
helper_macros::forward_binop_assign_by_take!(impl MulAssign for BigDecimal, mul_assign, mul);
