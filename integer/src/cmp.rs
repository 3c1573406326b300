//! Comparisons.

use crate::ubig::BigUInt;
use core::cmp::Ordering;

impl Ord for BigUInt {
    fn cmp(&self, other: &BigUInt) -> Ordering {
        let lhs = self.words();
        let rhs = other.words();
        // the representation is normalized, so longer means larger
        match lhs.len().cmp(&rhs.len()) {
            Ordering::Equal => {
                for (a, b) in lhs.iter().rev().zip(rhs.iter().rev()) {
                    match a.cmp(b) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

impl PartialOrd for BigUInt {
    #[inline]
    fn partial_cmp(&self, other: &BigUInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
