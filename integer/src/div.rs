//! Division with remainder.

use crate::{
    buffer::Buffer,
    helper_macros, mul,
    ubig::BigUInt,
    word::{DoubleWord, Word, RADIX},
};
use bigdec_base::Error;
use core::ops::{Div, DivAssign, Rem, RemAssign};

impl BigUInt {
    /// `(self / rhs, self % rhs)`, failing with [Error::DivByZero] when
    /// `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::{BigUInt, Error};
    /// let a = BigUInt::from(1000u32);
    /// let b = BigUInt::from(7u32);
    /// let (q, r) = a.try_div_rem(&b)?;
    /// assert_eq!(q, BigUInt::from(142u32));
    /// assert_eq!(r, BigUInt::from(6u32));
    /// assert_eq!(a.try_div_rem(&BigUInt::zero()), Err(Error::DivByZero));
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn try_div_rem(&self, rhs: &BigUInt) -> Result<(BigUInt, BigUInt), Error> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        Ok(self.div_rem(rhs))
    }

    /// `(self / rhs, self % rhs)` with `self = q·rhs + r` and `0 <= r < rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigUInt) -> (BigUInt, BigUInt) {
        if rhs.is_zero() {
            BigUInt::panic_divide_by_0()
        }
        if self < rhs {
            return (BigUInt::zero(), self.clone());
        }
        if rhs.0.len() == 1 {
            let (q, r) = div_rem_word(self.words(), rhs.0[0]);
            (BigUInt::from_buffer(q), BigUInt::from(r))
        } else {
            let (q, r) = div_rem_large(self.words(), rhs.words());
            (BigUInt::from_buffer(q), BigUInt::from_buffer(r))
        }
    }
}

impl Div<&BigUInt> for &BigUInt {
    type Output = BigUInt;

    #[inline]
    fn div(self, rhs: &BigUInt) -> BigUInt {
        self.div_rem(rhs).0
    }
}

impl Rem<&BigUInt> for &BigUInt {
    type Output = BigUInt;

    #[inline]
    fn rem(self, rhs: &BigUInt) -> BigUInt {
        self.div_rem(rhs).1
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Div for BigUInt, div);
helper_macros::forward_binop_to_ref_ref!(impl Rem for BigUInt, rem);
helper_macros::forward_binop_assign_by_take!(impl DivAssign for BigUInt, div_assign, div);
helper_macros::forward_binop_assign_by_take!(impl RemAssign for BigUInt, rem_assign, rem);

helper_macros::forward_binop_with_primitive!(impl Div<u32> for BigUInt, div);
helper_macros::forward_binop_with_primitive!(impl Div<u64> for BigUInt, div);
helper_macros::forward_binop_with_primitive!(impl Rem<u32> for BigUInt, rem);
helper_macros::forward_binop_with_primitive!(impl Rem<u64> for BigUInt, rem);

/// Division by a single limb: one linear pass with a running remainder.
/// The running value `rem·RADIX + limb` stays below RADIX², so it fits
/// a DoubleWord.
pub(crate) fn div_rem_word(words: &[Word], divisor: Word) -> (Buffer, Word) {
    debug_assert!(divisor != 0);
    let divisor = divisor as DoubleWord;
    let mut quotient = Buffer::allocate(words.len());
    quotient.push_zeros(words.len());
    let mut rem: DoubleWord = 0;
    for i in (0..words.len()).rev() {
        let cur = rem * RADIX + words[i] as DoubleWord;
        quotient[i] = (cur / divisor) as Word;
        rem = cur % divisor;
    }
    (quotient, rem as Word)
}

/// Knuth's algorithm D carried out in base 10⁹.
fn div_rem_large(words: &[Word], divisor: &[Word]) -> (Buffer, Buffer) {
    let n = divisor.len();
    let m = words.len() - n;
    debug_assert!(n >= 2);

    // D1: scale both operands so the divisor's top limb is >= RADIX/2,
    // which bounds the trial digit error by one
    let scale = (RADIX / (divisor[n - 1] as DoubleWord + 1)) as Word;
    let mut u = mul::mul_word(words, scale); // keeps an extra top limb
    let v = {
        let mut v = mul::mul_word(divisor, scale);
        debug_assert_eq!(v[n], 0);
        v.truncate(n);
        v
    };
    let vtop = v[n - 1] as DoubleWord;
    let vnext = v[n - 2] as DoubleWord;
    debug_assert!(vtop >= RADIX / 2);

    let mut quotient = Buffer::allocate(m + 1);
    quotient.push_zeros(m + 1);

    for j in (0..=m).rev() {
        // D3: trial digit from the top two remainder limbs over the top
        // divisor limb, corrected down while the two-limb check fails
        let top2 = u[j + n] as DoubleWord * RADIX + u[j + n - 1] as DoubleWord;
        let mut qhat = top2 / vtop;
        let mut rhat = top2 % vtop;
        loop {
            if qhat >= RADIX || qhat * vnext > rhat * RADIX + u[j + n - 2] as DoubleWord {
                qhat -= 1;
                rhat += vtop;
                if rhat < RADIX {
                    continue;
                }
            }
            break;
        }

        // D4: subtract qhat times the divisor
        let mut borrow: DoubleWord = 0;
        for i in 0..n {
            let p = qhat * v[i] as DoubleWord + borrow;
            let low = p % RADIX;
            borrow = p / RADIX;
            let ui = u[j + i] as DoubleWord;
            if ui >= low {
                u[j + i] = (ui - low) as Word;
            } else {
                u[j + i] = (ui + RADIX - low) as Word;
                borrow += 1;
            }
        }
        let utop = u[j + n] as DoubleWord;
        if utop >= borrow {
            u[j + n] = (utop - borrow) as Word;
        } else {
            // D6: the trial digit was one too large; add the divisor back.
            // The carry wrap at the top cancels the outstanding borrow.
            u[j + n] = (utop + RADIX - borrow) as Word;
            qhat -= 1;
            let mut carry: DoubleWord = 0;
            for i in 0..n {
                let s = u[j + i] as DoubleWord + v[i] as DoubleWord + carry;
                u[j + i] = (s % RADIX) as Word;
                carry = s / RADIX;
            }
            let t = u[j + n] as DoubleWord + carry;
            u[j + n] = if t >= RADIX { (t - RADIX) as Word } else { t as Word };
        }
        quotient[j] = qhat as Word;
    }

    // D8: unscale the remainder
    u.truncate(n);
    let (rem, r0) = div_rem_word(&u, scale);
    debug_assert_eq!(r0, 0);
    (quotient, rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(a: &str, b: &str, q: &str, r: &str) {
        let a: BigUInt = a.parse().unwrap();
        let b: BigUInt = b.parse().unwrap();
        let (qq, rr) = a.div_rem(&b);
        assert_eq!(qq.to_string(), q);
        assert_eq!(rr.to_string(), r);
        assert_eq!(&qq * &b + &rr, a);
    }

    #[test]
    fn test_div_small() {
        check("1000", "7", "142", "6");
        check("6", "7", "0", "6");
        check("7", "7", "1", "0");
    }

    #[test]
    fn test_div_single_limb() {
        check("123456789012345678901234567890", "997", "123828273833847220562923337", "901");
    }

    #[test]
    fn test_div_multi_limb() {
        check(
            "123456789012345678901234567890123456789",
            "987654321098765432109",
            "124999998860937500",
            "14172067901781269289",
        );
        check(
            "99999999999999999999999999999999999999",
            "10000000000000000001",
            "9999999999999999999",
            "0",
        );
    }

    #[test]
    fn test_div_needs_correction() {
        // quotient limbs that exercise the trial-digit correction path
        check(
            "100000000000000000000000000",
            "100000000999999999",
            "999999990",
            "10999999990",
        );
    }

    #[test]
    fn test_div_by_zero() {
        let a = BigUInt::from(5u32);
        assert_eq!(a.try_div_rem(&BigUInt::zero()), Err(Error::DivByZero));
    }

    #[test]
    #[should_panic]
    fn test_div_operator_panics_on_zero() {
        let _ = BigUInt::from(5u32) / BigUInt::zero();
    }
}
