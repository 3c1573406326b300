//! Word type and radix constants.

use static_assertions::const_assert;

/// One limb of a [crate::BigUInt], holding a base-10⁹ digit group.
pub type Word = u32;

/// Two limbs' worth of value; every accumulator in the kernel is this wide.
pub type DoubleWord = u64;

/// The limb radix. Each limb is in `[0, RADIX)`.
pub const RADIX: DoubleWord = 1_000_000_000;

/// Number of decimal digits carried by one limb.
pub const DIGITS_PER_WORD: usize = 9;

// A limb must fit the word type, and the schoolbook multiplication step
// `w + a*b + carry` (three values below RADIX, RADIX² and RADIX resp.)
// must fit a DoubleWord.
const_assert!(RADIX - 1 <= Word::MAX as DoubleWord);
const_assert!((RADIX - 1) * (RADIX - 1) <= DoubleWord::MAX - 2 * (RADIX - 1));

/// Powers of ten up to one limb, `WORD_POW10[k] = 10^k`.
pub(crate) const WORD_POW10: [Word; DIGITS_PER_WORD + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Number of decimal digits in a single limb (0 counts as 1 digit).
#[inline]
pub(crate) fn word_digits(word: Word) -> usize {
    debug_assert!((word as DoubleWord) < RADIX);
    let mut n = 1;
    while n < DIGITS_PER_WORD && word >= WORD_POW10[n] {
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_digits() {
        assert_eq!(word_digits(0), 1);
        assert_eq!(word_digits(9), 1);
        assert_eq!(word_digits(10), 2);
        assert_eq!(word_digits(999), 3);
        assert_eq!(word_digits(100_000_000), 9);
        assert_eq!(word_digits(999_999_999), 9);
    }
}
