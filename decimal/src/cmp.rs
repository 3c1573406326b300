//! Value comparison.
//!
//! Decimals compare by numeric value, not by representation: `0.3`,
//! `0.300` and `3E-1` are all equal. The order-of-magnitude shortcut
//! avoids materializing huge scale alignments like `1E+1000000` vs `1`.

use crate::bigdec::BigDecimal;
use bigdec_base::Sign;
use core::cmp::Ordering;

impl PartialEq for BigDecimal {
    #[inline]
    fn eq(&self, other: &BigDecimal) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for BigDecimal {}

impl Ord for BigDecimal {
    fn cmp(&self, other: &BigDecimal) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => return Ordering::Greater,
            (Sign::Negative, Sign::Positive) => return Ordering::Less,
            (Sign::Positive, Sign::Positive) => cmp_magnitude(self, other),
            (Sign::Negative, Sign::Negative) => cmp_magnitude(other, self),
        }
    }
}

impl PartialOrd for BigDecimal {
    #[inline]
    fn partial_cmp(&self, other: &BigDecimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn cmp_magnitude(lhs: &BigDecimal, rhs: &BigDecimal) -> Ordering {
    match (lhs.is_zero(), rhs.is_zero()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    match lhs.order().cmp(&rhs.order()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    // same order of magnitude: align the scales and compare coefficients
    let scale = lhs.scale.max(rhs.scale);
    let a = lhs.coeff.mul_pow10((scale - lhs.scale) as usize);
    let b = rhs.coeff.mul_pow10((scale - rhs.scale) as usize);
    a.cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_eq_ignores_scale() {
        assert_eq!(dec("0.3"), dec("0.300"));
        assert_eq!(dec("100"), dec("1E+2"));
        assert_eq!(dec("0"), dec("0.000"));
        assert_ne!(dec("0.3"), dec("0.31"));
    }

    #[test]
    fn test_ordering() {
        assert!(dec("1.5") < dec("2"));
        assert!(dec("-1.5") > dec("-2"));
        assert!(dec("-0.001") < dec("0"));
        assert!(dec("1E+10") > dec("9999999999"));
        assert!(dec("0.09999") < dec("0.1"));
        assert!(dec("12.5") > dec("1.25"));
    }

    #[test]
    fn test_order_shortcut() {
        // enormous scale difference must not allocate the alignment
        assert!(dec("1E+1000000000") > dec("2"));
        assert!(dec("1E-1000000000") < dec("2"));
    }
}
