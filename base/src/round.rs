//! Rounding modes for digit removal.

use crate::sign::Sign;

/// Strategy for discarding trailing decimal digits.
///
/// `Ceiling` and `Floor` are sign-relative directions; they are translated
/// to `Up`/`Down` with [RoundingMode::resolve] before any digit-level
/// rounding is performed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RoundingMode {
    /// Truncate toward zero.
    Down,
    /// Round away from zero whenever any discarded digit is non-zero.
    Up,
    /// Round to nearest; ties go away from zero.
    HalfUp,
    /// Round to nearest; ties go to the even neighbour (banker's rounding).
    HalfEven,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
}

impl RoundingMode {
    /// Translate the sign-relative modes into magnitude directions for an
    /// operand with the given sign. The other modes are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_base::{RoundingMode, Sign};
    /// assert_eq!(RoundingMode::Ceiling.resolve(Sign::Positive), RoundingMode::Up);
    /// assert_eq!(RoundingMode::Ceiling.resolve(Sign::Negative), RoundingMode::Down);
    /// assert_eq!(RoundingMode::HalfEven.resolve(Sign::Negative), RoundingMode::HalfEven);
    /// ```
    #[inline]
    pub const fn resolve(self, sign: Sign) -> RoundingMode {
        match (self, sign) {
            (RoundingMode::Ceiling, Sign::Positive) => RoundingMode::Up,
            (RoundingMode::Ceiling, Sign::Negative) => RoundingMode::Down,
            (RoundingMode::Floor, Sign::Positive) => RoundingMode::Down,
            (RoundingMode::Floor, Sign::Negative) => RoundingMode::Up,
            (mode, _) => mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(RoundingMode::Floor.resolve(Sign::Negative), RoundingMode::Up);
        assert_eq!(RoundingMode::Floor.resolve(Sign::Positive), RoundingMode::Down);
        assert_eq!(RoundingMode::Down.resolve(Sign::Negative), RoundingMode::Down);
        assert_eq!(RoundingMode::HalfUp.resolve(Sign::Positive), RoundingMode::HalfUp);
    }
}
