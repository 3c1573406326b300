//! Error types shared by the `bigdec` crates.

use core::fmt;

/// Detailed reason for a failed string conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input contains no digits where at least one is required.
    NoDigits,
    /// A character is not valid at its position (including a second
    /// decimal point or a misplaced sign).
    InvalidDigit,
    /// An exponent marker is present but not followed by a valid
    /// optionally-signed digit sequence.
    MalformedExponent,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoDigits => f.write_str("no digits found in the string"),
            ParseError::InvalidDigit => f.write_str("invalid digit for the number format"),
            ParseError::MalformedExponent => f.write_str("malformed exponent"),
        }
    }
}

impl std::error::Error for ParseError {}

/// The error surface of every fallible operation in the `bigdec` crates.
///
/// Operators (`+ - * / %`) panic on these conditions instead; the checked
/// methods (`try_sub`, `try_div_rem`, `true_divide`, the transcendental
/// kernel, ...) report them through this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// String conversion failed.
    Parse(ParseError),
    /// Division (or modulo) by zero.
    DivByZero,
    /// Unsigned subtraction with a larger subtrahend.
    Underflow,
    /// The argument lies outside the mathematical domain of the operation
    /// (square root of a negative, logarithm of a non-positive, `0^0`,
    /// even root of a negative, non-integer power of a negative base).
    Domain,
    /// The result magnitude is too large to be computed.
    Overflow,
    /// The requested precision is not usable for this operation.
    Precision,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "parse error: {}", e),
            Error::DivByZero => f.write_str("divide by zero"),
            Error::Underflow => f.write_str("unsigned subtraction underflow"),
            Error::Domain => f.write_str("argument outside the domain of the operation"),
            Error::Overflow => f.write_str("result too large to represent"),
            Error::Precision => f.write_str("invalid precision for the operation"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(e: ParseError) -> Error {
        Error::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::DivByZero.to_string(), "divide by zero");
        assert_eq!(
            Error::from(ParseError::NoDigits).to_string(),
            "parse error: no digits found in the string"
        );
    }
}
