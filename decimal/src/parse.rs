//! Parsing the decimal wire format.
//!
//! Grammar (case-insensitive exponent marker):
//!
//! ```text
//! number    = [sign] digits ['.' [digits]] [exponent]
//!           | [sign] '.' digits [exponent]
//! sign      = '+' | '-'
//! exponent  = ('e' | 'E') ['+' | '-'] digits
//! ```
//!
//! Underscores and commas used as digit grouping are stripped. The caller
//! is expected to have trimmed surrounding whitespace.

use crate::bigdec::BigDecimal;
use bigdec_base::{Error, ParseError, Sign};
use bigdec_int::BigUInt;
use core::str::FromStr;

impl FromStr for BigDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigDecimal, Error> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(ParseError::NoDigits.into());
        }

        let (sign, mut i) = match bytes[0] {
            b'+' => (Sign::Positive, 1),
            b'-' => (Sign::Negative, 1),
            _ => (Sign::Positive, 0),
        };

        let mut digits: Vec<u8> = Vec::with_capacity(bytes.len());
        let mut frac_digits: i64 = 0;
        let mut seen_dot = false;
        let mut seen_digit = false;
        let mut exponent: i64 = 0;

        while i < bytes.len() {
            match bytes[i] {
                b @ b'0'..=b'9' => {
                    digits.push(b - b'0');
                    if seen_dot {
                        frac_digits += 1;
                    }
                    seen_digit = true;
                }
                b'.' => {
                    if seen_dot {
                        return Err(ParseError::InvalidDigit.into());
                    }
                    seen_dot = true;
                }
                b'_' | b',' => {}
                b'e' | b'E' => {
                    if !seen_digit {
                        return Err(ParseError::NoDigits.into());
                    }
                    exponent = parse_exponent(&bytes[i + 1..])?;
                    i = bytes.len();
                    continue;
                }
                _ => return Err(ParseError::InvalidDigit.into()),
            }
            i += 1;
        }

        if !seen_digit {
            return Err(ParseError::NoDigits.into());
        }

        // leading zeros carry no information; they are not part of the scale
        let first_nonzero = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
        let coeff = BigUInt::from_decimal_digits(&digits[first_nonzero..]);
        let scale = frac_digits - exponent;
        Ok(BigDecimal::from_raw(sign, coeff, scale))
    }
}

fn parse_exponent(bytes: &[u8]) -> Result<i64, Error> {
    if bytes.is_empty() {
        return Err(ParseError::MalformedExponent.into());
    }
    let (negative, mut i) = match bytes[0] {
        b'+' => (false, 1),
        b'-' => (true, 1),
        _ => (false, 0),
    };
    let mut value: i64 = 0;
    let mut seen_digit = false;
    while i < bytes.len() {
        match bytes[i] {
            b @ b'0'..=b'9' => {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add((b - b'0') as i64))
                    .ok_or(Error::Overflow)?;
                seen_digit = true;
            }
            b'_' | b',' => {}
            _ => return Err(ParseError::MalformedExponent.into()),
        }
        i += 1;
    }
    if !seen_digit {
        return Err(ParseError::MalformedExponent.into());
    }
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(s: &str) -> (Sign, String, i64) {
        let v: BigDecimal = s.parse().unwrap();
        let (sign, coeff, scale) = v.into_parts();
        (sign, coeff.to_string(), scale)
    }

    #[test]
    fn test_plain() {
        assert_eq!(parts("0"), (Sign::Positive, "0".into(), 0));
        assert_eq!(parts("42"), (Sign::Positive, "42".into(), 0));
        assert_eq!(parts("-42"), (Sign::Negative, "42".into(), 0));
        assert_eq!(parts("+0.5"), (Sign::Positive, "5".into(), 1));
        assert_eq!(parts(".5"), (Sign::Positive, "5".into(), 1));
        assert_eq!(parts("5."), (Sign::Positive, "5".into(), 0));
    }

    #[test]
    fn test_leading_and_trailing_zeros() {
        assert_eq!(parts("007"), (Sign::Positive, "7".into(), 0));
        assert_eq!(parts("0.001"), (Sign::Positive, "1".into(), 3));
        assert_eq!(parts("1.500"), (Sign::Positive, "1500".into(), 3));
        assert_eq!(parts("0.000"), (Sign::Positive, "0".into(), 3));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parts("1e3"), (Sign::Positive, "1".into(), -3));
        assert_eq!(parts("1E+2"), (Sign::Positive, "1".into(), -2));
        assert_eq!(parts("1.5e3"), (Sign::Positive, "15".into(), -2));
        assert_eq!(parts("12.34e-5"), (Sign::Positive, "1234".into(), 7));
        assert_eq!(parts("-2.5E-1"), (Sign::Negative, "25".into(), 2));
    }

    #[test]
    fn test_grouping() {
        assert_eq!(parts("1_000_000"), (Sign::Positive, "1000000".into(), 0));
        assert_eq!(parts("1,234.5"), (Sign::Positive, "12345".into(), 1));
    }

    #[test]
    fn test_errors() {
        for bad in ["", "+", "-", ".", "+.", "abc", "1.2.3", "1x", "--1", "1 "] {
            assert!(bad.parse::<BigDecimal>().is_err(), "{:?} should fail", bad);
        }
        assert_eq!("1e".parse::<BigDecimal>(), Err(ParseError::MalformedExponent.into()));
        assert_eq!("1e+".parse::<BigDecimal>(), Err(ParseError::MalformedExponent.into()));
        assert_eq!("1ex".parse::<BigDecimal>(), Err(ParseError::MalformedExponent.into()));
        assert_eq!("e5".parse::<BigDecimal>(), Err(ParseError::NoDigits.into()));
    }
}
