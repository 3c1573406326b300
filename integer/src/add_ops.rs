//! Addition and subtraction operators.

use crate::{add, buffer::Buffer, helper_macros, ubig::BigUInt};
use bigdec_base::Error;
use core::ops::{Add, AddAssign, Sub, SubAssign};

impl Add<&BigUInt> for &BigUInt {
    type Output = BigUInt;

    fn add(self, rhs: &BigUInt) -> BigUInt {
        let (long, short) = if self.0.len() >= rhs.0.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut buffer = Buffer::from(long.words());
        if add::add_in_place(&mut buffer, short.words()) {
            buffer.push(1);
        }
        BigUInt::from_buffer(buffer)
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Add for BigUInt, add);
helper_macros::forward_binop_assign_by_take!(impl AddAssign for BigUInt, add_assign, add);

impl BigUInt {
    /// `self - rhs`, failing with [Error::Underflow] when `rhs > self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::{BigUInt, Error};
    /// let a = BigUInt::from(100u32);
    /// let b = BigUInt::from(101u32);
    /// assert_eq!(b.try_sub(&a), Ok(BigUInt::one()));
    /// assert_eq!(a.try_sub(&b), Err(Error::Underflow));
    /// ```
    pub fn try_sub(&self, rhs: &BigUInt) -> Result<BigUInt, Error> {
        if self < rhs {
            return Err(Error::Underflow);
        }
        let mut buffer = Buffer::from(self.words());
        let borrow = add::sub_in_place(&mut buffer, rhs.words());
        debug_assert!(!borrow);
        Ok(BigUInt::from_buffer(buffer))
    }
}

impl Sub<&BigUInt> for &BigUInt {
    type Output = BigUInt;

    #[inline]
    fn sub(self, rhs: &BigUInt) -> BigUInt {
        match self.try_sub(rhs) {
            Ok(diff) => diff,
            Err(_) => BigUInt::panic_negative(),
        }
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Sub for BigUInt, sub);
helper_macros::forward_binop_assign_by_take!(impl SubAssign for BigUInt, sub_assign, sub);

helper_macros::forward_binop_with_primitive!(impl Add<u32> for BigUInt, add);
helper_macros::forward_binop_with_primitive!(impl Add<u64> for BigUInt, add);
helper_macros::forward_binop_with_primitive!(impl Add<usize> for BigUInt, add);
helper_macros::forward_binop_with_primitive!(impl Sub<u32> for BigUInt, sub);
helper_macros::forward_binop_with_primitive!(impl Sub<u64> for BigUInt, sub);
helper_macros::forward_binop_with_primitive!(impl Sub<usize> for BigUInt, sub);
