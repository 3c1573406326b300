//! Exact addition and subtraction.

use crate::{bigdec::BigDecimal, helper_macros};
use bigdec_base::Sign;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Scale-aligned signed addition; `rhs_sign` lets subtraction reuse the
/// same path without cloning the operand.
fn add_signed(lhs: &BigDecimal, rhs: &BigDecimal, rhs_sign: Sign) -> BigDecimal {
    let scale = lhs.scale.max(rhs.scale);
    let a = lhs.coeff.mul_pow10((scale - lhs.scale) as usize);
    let b = rhs.coeff.mul_pow10((scale - rhs.scale) as usize);

    if lhs.sign == rhs_sign {
        return BigDecimal::from_raw(lhs.sign, &a + &b, scale);
    }
    match a.cmp(&b) {
        // equal magnitudes cancel to the canonical zero at the wider scale
        Ordering::Equal => BigDecimal::from_raw(Sign::Positive, bigdec_int::BigUInt::zero(), scale),
        Ordering::Greater => BigDecimal::from_raw(lhs.sign, &a - &b, scale),
        Ordering::Less => BigDecimal::from_raw(rhs_sign, &b - &a, scale),
    }
}

impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn add(self, rhs: &BigDecimal) -> BigDecimal {
        add_signed(self, rhs, rhs.sign)
    }
}

impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn sub(self, rhs: &BigDecimal) -> BigDecimal {
        add_signed(self, rhs, -rhs.sign)
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Add for BigDecimal, add);
helper_macros::forward_binop_to_ref_ref!(impl Sub for BigDecimal, sub);
helper_macros::forward_binop_assign_by_take!(impl AddAssign for BigDecimal, add_assign, add);
helper_macros::forward_binop_assign_by_take!(impl SubAssign for BigDecimal, sub_assign, sub);
