//! Power-of-ten scaling.
//!
//! Whole limbs are moved by splicing the limb vector; the in-limb digit
//! part goes through a single-limb multiply or divide.

use crate::{
    buffer::Buffer,
    div, mul,
    ubig::BigUInt,
    word::{DIGITS_PER_WORD, WORD_POW10},
};

impl BigUInt {
    /// `self · 10^n`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::BigUInt;
    /// let a = BigUInt::from(123u32);
    /// assert_eq!(a.mul_pow10(11).to_string(), "12300000000000");
    /// ```
    pub fn mul_pow10(&self, n: usize) -> BigUInt {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let limbs = n / DIGITS_PER_WORD;
        let digits = n % DIGITS_PER_WORD;
        let mut buffer = if digits == 0 {
            Buffer::from(self.words())
        } else {
            mul::mul_word(self.words(), WORD_POW10[digits])
        };
        buffer.push_zeros_front(limbs);
        BigUInt::from_buffer(buffer)
    }

    /// `floor(self / 10^n)`.
    #[inline]
    pub fn div_pow10(&self, n: usize) -> BigUInt {
        self.split_pow10(n).0
    }

    /// `(floor(self / 10^n), self mod 10^n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::BigUInt;
    /// let a = BigUInt::from(12_345_678_901u64);
    /// let (q, r) = a.split_pow10(4);
    /// assert_eq!(q.to_string(), "1234567");
    /// assert_eq!(r.to_string(), "8901");
    /// ```
    pub fn split_pow10(&self, n: usize) -> (BigUInt, BigUInt) {
        if n == 0 {
            return (self.clone(), BigUInt::zero());
        }
        let limbs = n / DIGITS_PER_WORD;
        let digits = n % DIGITS_PER_WORD;
        let words = self.words();
        if limbs >= words.len() {
            return (BigUInt::zero(), self.clone());
        }
        let (low, high) = words.split_at(limbs);
        if digits == 0 {
            (BigUInt::from_words(high), BigUInt::from_words(low))
        } else {
            let (q, r) = div::div_rem_word(high, WORD_POW10[digits]);
            let mut rem = Buffer::from(low);
            rem.push(r);
            (BigUInt::from_buffer(q), BigUInt::from_buffer(rem))
        }
    }
}
