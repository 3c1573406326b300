//! Formatting to the canonical wire format.

use crate::bigdec::BigDecimal;
use bigdec_base::Sign;
use core::fmt;

impl fmt::Display for BigDecimal {
    /// Canonical rendering:
    ///
    /// - `scale = 0`: the digits, e.g. `-42`;
    /// - `0 < scale < digits`: a decimal point with exactly `scale`
    ///   fractional digits, e.g. `5.6088`;
    /// - `scale >= digits`: `0.` then zero padding, e.g. `0.00123`;
    /// - `scale < 0`: the digits with an explicit positive exponent,
    ///   e.g. `1E+2`. Appending the zeros instead would fabricate
    ///   significant digits and break the parse/format round trip.
    ///
    /// Trailing zeros in the coefficient are preserved; they encode
    /// precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.digits() + 8);
        if self.sign == Sign::Negative {
            out.push('-');
        }
        let digits = self.coeff.to_string();
        if self.scale < 0 {
            out.push_str(&digits);
            out.push_str("E+");
            out.push_str(&(-self.scale).to_string());
        } else if self.scale == 0 {
            out.push_str(&digits);
        } else if (self.scale as usize) < digits.len() {
            let point = digits.len() - self.scale as usize;
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        } else {
            out.push_str("0.");
            for _ in 0..(self.scale as usize - digits.len()) {
                out.push('0');
            }
            out.push_str(&digits);
        }
        f.pad(&out)
    }
}

impl BigDecimal {
    /// Render without scientific notation: a negative scale appends its
    /// zeros to the digits (`1E+2` becomes `100`). Lossy for precision
    /// information, exact for the numeric value.
    pub fn to_plain_string(&self) -> String {
        if self.scale >= 0 {
            return self.to_string();
        }
        let mut out = String::with_capacity(self.digits() + (-self.scale) as usize + 1);
        if self.sign == Sign::Negative {
            out.push('-');
        }
        out.push_str(&self.coeff.to_string());
        for _ in 0..(-self.scale) as usize {
            out.push('0');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(dec("0").to_string(), "0");
        assert_eq!(dec("-42").to_string(), "-42");
        assert_eq!(dec("5.6088").to_string(), "5.6088");
        assert_eq!(dec("0.3").to_string(), "0.3");
        assert_eq!(dec("0.00123").to_string(), "0.00123");
        assert_eq!(dec("1.500").to_string(), "1.500");
        assert_eq!(dec("1E+2").to_string(), "1E+2");
        assert_eq!(dec("0.000").to_string(), "0.000");
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "0", "1", "-1", "0.1", "-0.1", "123.456", "0.00077", "1.500",
            "1E+2", "-25E+9", "0.000",
        ] {
            let v = dec(text);
            assert_eq!(v.to_string(), text);
            let reparsed: BigDecimal = v.to_string().parse().unwrap();
            assert_eq!(reparsed.into_parts(), v.clone().into_parts());
        }
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(dec("1E+2").to_plain_string(), "100");
        assert_eq!(dec("-25E+3").to_plain_string(), "-25000");
        assert_eq!(dec("12.5").to_plain_string(), "12.5");
    }
}
