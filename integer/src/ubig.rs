//! Unsigned big integer.

use crate::{
    buffer::Buffer,
    word::{word_digits, Word, DIGITS_PER_WORD, WORD_POW10},
};

/// Unsigned integer of unbounded magnitude, stored as base-10⁹ limbs.
///
/// The representation is always normalized: either the most-significant
/// limb is non-zero, or the number is zero and holds exactly one zero limb.
///
/// # Examples
///
/// ```
/// # use bigdec_int::{BigUInt, Error};
/// let a: BigUInt = "123_456_789_000_000_000_000".parse()?;
/// let b = BigUInt::from(1_000_000_000u64);
/// assert_eq!((&a / &b).to_string(), "123456789000");
/// assert_eq!(a.digits(), 21);
/// assert_eq!(a.trailing_zeros(), 12);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BigUInt(pub(crate) Buffer);

impl BigUInt {
    /// Construct from a limb buffer, normalizing the representation.
    #[inline]
    pub(crate) fn from_buffer(mut buffer: Buffer) -> BigUInt {
        buffer.pop_zeros();
        if buffer.is_empty() {
            buffer.push(0);
        }
        BigUInt(buffer)
    }

    /// Construct from a limb slice, normalizing the representation.
    #[inline]
    pub(crate) fn from_words(words: &[Word]) -> BigUInt {
        BigUInt::from_buffer(Buffer::from(words))
    }

    #[inline]
    pub(crate) fn words(&self) -> &[Word] {
        &self.0
    }

    /// The value 0.
    #[inline]
    pub fn zero() -> BigUInt {
        let mut buffer = Buffer::allocate(1);
        buffer.push(0);
        BigUInt(buffer)
    }

    /// The value 1.
    #[inline]
    pub fn one() -> BigUInt {
        let mut buffer = Buffer::allocate(1);
        buffer.push(1);
        BigUInt(buffer)
    }

    /// Check whether the value is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 0
    }

    /// Check whether the value is 1.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 1
    }

    /// Number of decimal digits. Zero has 1 digit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::BigUInt;
    /// assert_eq!(BigUInt::zero().digits(), 1);
    /// assert_eq!(BigUInt::from(999u32).digits(), 3);
    /// assert_eq!(BigUInt::from(1_000_000_000u64).digits(), 10);
    /// ```
    #[inline]
    pub fn digits(&self) -> usize {
        let words = self.words();
        (words.len() - 1) * DIGITS_PER_WORD + word_digits(words[words.len() - 1])
    }

    /// The largest `k` such that `10^k` divides the value.
    ///
    /// Zero is reported as having no trailing zeros.
    pub fn trailing_zeros(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let mut zeros = 0;
        for &word in self.words() {
            if word == 0 {
                zeros += DIGITS_PER_WORD;
                continue;
            }
            let mut word = word;
            while word % 10 == 0 {
                zeros += 1;
                word /= 10;
            }
            break;
        }
        zeros
    }

    /// The `i`-th decimal digit counted from the least-significant end,
    /// or 0 when `i` is beyond the number's length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_int::BigUInt;
    /// let n = BigUInt::from(90_210u32);
    /// assert_eq!(n.digit(0), 0);
    /// assert_eq!(n.digit(1), 1);
    /// assert_eq!(n.digit(4), 9);
    /// assert_eq!(n.digit(40), 0);
    /// ```
    #[inline]
    pub fn digit(&self, i: usize) -> u8 {
        let words = self.words();
        let w = i / DIGITS_PER_WORD;
        if w >= words.len() {
            return 0;
        }
        ((words[w] / WORD_POW10[i % DIGITS_PER_WORD]) % 10) as u8
    }

    /// Check whether the value is `10^k` for some `k >= 0`.
    pub fn is_power_of_ten(&self) -> bool {
        let words = self.words();
        let top = words[words.len() - 1];
        if top != WORD_POW10[word_digits(top) - 1] {
            return false;
        }
        words[..words.len() - 1].iter().all(|&w| w == 0)
    }

    pub(crate) fn panic_negative() -> ! {
        panic!("subtraction of unsigned integers would be negative")
    }

    pub(crate) fn panic_divide_by_0() -> ! {
        panic!("divide by zero")
    }
}

impl Default for BigUInt {
    /// Default value: 0.
    #[inline]
    fn default() -> BigUInt {
        BigUInt::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert!(BigUInt::zero().is_zero());
        assert!(BigUInt::one().is_one());
        assert!(!BigUInt::one().is_zero());
        assert_eq!(BigUInt::default(), BigUInt::zero());
    }

    #[test]
    fn test_digits() {
        assert_eq!(BigUInt::zero().digits(), 1);
        assert_eq!(BigUInt::one().digits(), 1);
        assert_eq!(BigUInt::from(1_000_000_000u64).digits(), 10);
        assert_eq!(BigUInt::from(999_999_999u32).digits(), 9);
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(BigUInt::zero().trailing_zeros(), 0);
        assert_eq!(BigUInt::from(1u32).trailing_zeros(), 0);
        assert_eq!(BigUInt::from(1_000u32).trailing_zeros(), 3);
        assert_eq!(BigUInt::from(10_000_000_000u64).trailing_zeros(), 10);
        assert_eq!(BigUInt::from(25_000_000_000u64).trailing_zeros(), 9);
    }

    #[test]
    fn test_is_power_of_ten() {
        assert!(BigUInt::one().is_power_of_ten());
        assert!(BigUInt::from(10u32).is_power_of_ten());
        assert!(BigUInt::from(1_000_000_000u64).is_power_of_ten());
        assert!(BigUInt::from(10_000_000_000_000_000_000u64).is_power_of_ten());
        assert!(!BigUInt::zero().is_power_of_ten());
        assert!(!BigUInt::from(2u32).is_power_of_ten());
        assert!(!BigUInt::from(1_000_000_001u64).is_power_of_ten());
    }

    #[test]
    fn test_digit() {
        let n = BigUInt::from(1_234_567_890_123u64);
        assert_eq!(n.digit(0), 3);
        assert_eq!(n.digit(3), 0);
        assert_eq!(n.digit(9), 4);
        assert_eq!(n.digit(12), 1);
        assert_eq!(n.digit(13), 0);
    }
}
