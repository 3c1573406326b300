//! Low-level limb addition and subtraction.
//!
//! All routines work in place on limb slices and report the outgoing
//! carry or borrow; callers deal with buffer growth.

use crate::word::{DoubleWord, Word, RADIX};

/// words += rhs, where both slices have the same length.
/// Returns the outgoing carry.
pub(crate) fn add_same_len_in_place(words: &mut [Word], rhs: &[Word]) -> bool {
    debug_assert!(words.len() == rhs.len());
    let mut carry: DoubleWord = 0;
    for (a, b) in words.iter_mut().zip(rhs.iter()) {
        let sum = *a as DoubleWord + *b as DoubleWord + carry;
        if sum >= RADIX {
            *a = (sum - RADIX) as Word;
            carry = 1;
        } else {
            *a = sum as Word;
            carry = 0;
        }
    }
    carry != 0
}

/// words += 1. Returns the outgoing carry.
pub(crate) fn add_one_in_place(words: &mut [Word]) -> bool {
    for word in words.iter_mut() {
        if (*word as DoubleWord) + 1 == RADIX {
            *word = 0;
        } else {
            *word += 1;
            return false;
        }
    }
    true
}

/// words += rhs, where `words` is at least as long as `rhs`.
/// Returns the outgoing carry.
pub(crate) fn add_in_place(words: &mut [Word], rhs: &[Word]) -> bool {
    debug_assert!(words.len() >= rhs.len());
    let n = rhs.len();
    let carry = add_same_len_in_place(&mut words[..n], rhs);
    if carry {
        add_one_in_place(&mut words[n..])
    } else {
        false
    }
}

/// words -= rhs, where both slices have the same length.
/// Returns the outgoing borrow.
pub(crate) fn sub_same_len_in_place(words: &mut [Word], rhs: &[Word]) -> bool {
    debug_assert!(words.len() == rhs.len());
    let mut borrow: DoubleWord = 0;
    for (a, b) in words.iter_mut().zip(rhs.iter()) {
        let sub = *b as DoubleWord + borrow;
        if (*a as DoubleWord) >= sub {
            *a = (*a as DoubleWord - sub) as Word;
            borrow = 0;
        } else {
            *a = (*a as DoubleWord + RADIX - sub) as Word;
            borrow = 1;
        }
    }
    borrow != 0
}

/// words -= 1. Returns the outgoing borrow.
pub(crate) fn sub_one_in_place(words: &mut [Word]) -> bool {
    for word in words.iter_mut() {
        if *word == 0 {
            *word = (RADIX - 1) as Word;
        } else {
            *word -= 1;
            return false;
        }
    }
    true
}

/// words -= rhs, where `words` is at least as long as `rhs`.
/// Returns the outgoing borrow.
pub(crate) fn sub_in_place(words: &mut [Word], rhs: &[Word]) -> bool {
    debug_assert!(words.len() >= rhs.len());
    let n = rhs.len();
    let borrow = sub_same_len_in_place(&mut words[..n], rhs);
    if borrow {
        sub_one_in_place(&mut words[n..])
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_carry() {
        let mut words = [999_999_999, 999_999_999];
        let carry = add_same_len_in_place(&mut words, &[1, 0]);
        assert!(carry);
        assert_eq!(words, [0, 0]);
    }

    #[test]
    fn test_add_one() {
        let mut words = [999_999_999, 5];
        assert!(!add_one_in_place(&mut words));
        assert_eq!(words, [0, 6]);

        let mut words = [999_999_999, 999_999_999];
        assert!(add_one_in_place(&mut words));
        assert_eq!(words, [0, 0]);
    }

    #[test]
    fn test_sub_with_borrow() {
        let mut words = [0, 1];
        let borrow = sub_in_place(&mut words, &[1]);
        assert!(!borrow);
        assert_eq!(words, [999_999_999, 0]);
    }

    #[test]
    fn test_sub_underflow() {
        let mut words = [0, 0];
        let borrow = sub_in_place(&mut words, &[1, 0]);
        assert!(borrow);
    }
}
