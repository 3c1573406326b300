//! Parsing and digit-level conversion.

use crate::{
    buffer::Buffer,
    ubig::BigUInt,
    word::{word_digits, Word, DIGITS_PER_WORD, WORD_POW10},
};
use bigdec_base::{Error, ParseError};
use core::str::FromStr;

impl BigUInt {
    /// Build from decimal digit values (`0..=9`), most significant first.
    /// Leading zeros and an empty slice are both accepted.
    pub fn from_decimal_digits(digits: &[u8]) -> BigUInt {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        let mut buffer = Buffer::allocate(digits.len() / DIGITS_PER_WORD + 1);
        let mut end = digits.len();
        while end > 0 {
            let start = end.saturating_sub(DIGITS_PER_WORD);
            let mut word: Word = 0;
            for &d in &digits[start..end] {
                word = word * 10 + d as Word;
            }
            buffer.push(word);
            end = start;
        }
        BigUInt::from_buffer(buffer)
    }

    /// Decimal digit values, most significant first. Zero yields `[0]`.
    pub fn to_decimal_digits(&self) -> Vec<u8> {
        let words = self.words();
        let mut out = Vec::with_capacity(self.digits());
        let top = words[words.len() - 1];
        for k in (0..word_digits(top)).rev() {
            out.push(((top / WORD_POW10[k]) % 10) as u8);
        }
        for &word in words[..words.len() - 1].iter().rev() {
            for k in (0..DIGITS_PER_WORD).rev() {
                out.push(((word / WORD_POW10[k]) % 10) as u8);
            }
        }
        out
    }
}

impl FromStr for BigUInt {
    type Err = Error;

    /// Parse an unsigned decimal integer. Underscores and commas used as
    /// digit grouping are stripped.
    fn from_str(s: &str) -> Result<BigUInt, Error> {
        let mut digits = Vec::with_capacity(s.len());
        for b in s.bytes() {
            match b {
                b'0'..=b'9' => digits.push(b - b'0'),
                b'_' | b',' => {}
                _ => return Err(ParseError::InvalidDigit.into()),
            }
        }
        if digits.is_empty() {
            return Err(ParseError::NoDigits.into());
        }
        Ok(BigUInt::from_decimal_digits(&digits))
    }
}
