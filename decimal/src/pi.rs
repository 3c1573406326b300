//! The constant π.

use crate::{atan, bigdec::BigDecimal, GUARD_DIGITS};
use bigdec_base::{RoundingMode, Sign};
use bigdec_int::BigUInt;

/// Known digits of π; queries at low precision are served from here
/// directly instead of running a series.
const PI_STR: &str = "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117067982148086513282306647093844609550582231725359408128481117450284102701938521105559644622948954930381\
96";
const PI_STR_DIGITS: usize = 201;

/// `C³/24` for the Chudnovsky series, `C = 640320`.
const CHUDNOVSKY_Q: u64 = 10_939_058_860_032_000;
const CHUDNOVSKY_A: u64 = 13_591_409;
const CHUDNOVSKY_B: u64 = 545_140_134;

/// π to `precision` significant digits, rounded half-even.
///
/// Precision 0 is clamped to a single digit, so `pi(0)` is `3`. Beyond the
/// embedded constant the Chudnovsky series is evaluated with binary
/// splitting, each term contributing about 14 digits.
///
/// # Examples
///
/// ```
/// # use bigdec_dec::pi;
/// assert_eq!(pi(10).to_string(), "3.141592654");
/// assert_eq!(pi(0).to_string(), "3");
/// ```
pub fn pi(precision: usize) -> BigDecimal {
    let prec = precision.max(1);
    if prec + GUARD_DIGITS <= PI_STR_DIGITS {
        return parse_pi().with_significant_digits(prec, RoundingMode::HalfEven);
    }
    pi_chudnovsky(prec)
}

fn parse_pi() -> BigDecimal {
    let digits: Vec<u8> = PI_STR
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
        .collect();
    debug_assert_eq!(digits.len(), PI_STR_DIGITS);
    BigDecimal::from_raw(
        Sign::Positive,
        BigUInt::from_decimal_digits(&digits),
        (PI_STR_DIGITS - 1) as i64,
    )
}

/// Chudnovsky with binary splitting: the partial sum over `[1, terms)` is
/// kept as an exact integer triple `(P, Q, T)` combined by
/// cross-multiplication, and
/// `π = Q·426880·√10005 / (A·Q + T)`.
fn pi_chudnovsky(prec: usize) -> BigDecimal {
    let wp = prec + GUARD_DIGITS;
    let terms = (wp / 14 + 2) as u64;
    let (_, q, t) = binary_split(1, terms);

    let denominator = &q * &BigDecimal::from(CHUDNOVSKY_A) + &t;
    let sqrt_10005 = BigDecimal::from(10_005u32).sqrt_unchecked(wp);
    let numerator =
        (&(&q * &BigDecimal::from(426_880u32)) * &sqrt_10005).with_significant_digits(wp, RoundingMode::HalfEven);
    numerator
        .div_prec(&denominator, wp)
        .with_significant_digits(prec, RoundingMode::HalfEven)
}

/// Exact `(P, Q, T)` for the term range `[a, b)`, split recursively at the
/// midpoint.
fn binary_split(a: u64, b: u64) -> (BigDecimal, BigDecimal, BigDecimal) {
    if b - a == 1 {
        let k = a;
        let p = BigDecimal::from(6 * k - 5)
            * BigDecimal::from(2 * k - 1)
            * BigDecimal::from(6 * k - 1);
        let k_dec = BigDecimal::from(k);
        let q = &(&k_dec * &k_dec) * &(&k_dec * &BigDecimal::from(CHUDNOVSKY_Q));
        let mut t = &p * &(BigDecimal::from(CHUDNOVSKY_A) + BigDecimal::from(CHUDNOVSKY_B) * &k_dec);
        if k % 2 == 1 {
            t = -t;
        }
        (p, q, t)
    } else {
        let mid = (a + b) / 2;
        let (p1, q1, t1) = binary_split(a, mid);
        let (p2, q2, t2) = binary_split(mid, b);
        let p = &p1 * &p2;
        let q = &q1 * &q2;
        let t = &(&t1 * &q2) + &(&p1 * &t2);
        (p, q, t)
    }
}

/// Machin's formula `π/4 = 4·arctan(1/5) - arctan(1/239)`, kept as a
/// slower cross-check for the Chudnovsky path.
pub fn pi_machin(precision: usize) -> BigDecimal {
    let prec = precision.max(1);
    let wp = prec + GUARD_DIGITS;
    let fifth = BigDecimal::from_raw(Sign::Positive, BigUInt::from(2u32), 1);
    let a5 = atan::atan_taylor(&fifth, wp);
    let inv239 = BigDecimal::one().div_prec(&BigDecimal::from(239u32), wp);
    let a239 = atan::atan_taylor(&inv239, wp);
    let quarter_pi = &(&a5 * &BigDecimal::from(4u32)) - &a239;
    (quarter_pi * BigDecimal::from(4u32)).with_significant_digits(prec, RoundingMode::HalfEven)
}
