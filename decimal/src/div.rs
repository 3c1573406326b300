//! Division: correctly rounded true division, truncating division and
//! modulo.

use crate::{bigdec::BigDecimal, helper_macros, round, DEFAULT_PRECISION, GUARD_DIGITS};
use bigdec_base::{Error, RoundingMode, Sign};
use bigdec_int::BigUInt;
use core::ops::{Div, DivAssign, Rem, RemAssign};

impl BigDecimal {
    /// `self / rhs` rounded half-even to at most `max_prec` significant
    /// digits. Exact quotients are returned exactly, with the trailing
    /// zeros introduced by scaling stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let ten: BigDecimal = "10".parse()?;
    /// let four: BigDecimal = "4".parse()?;
    /// assert_eq!(ten.true_divide(&four, 28)?.to_string(), "2.5");
    ///
    /// let one: BigDecimal = "1".parse()?;
    /// let three: BigDecimal = "3".parse()?;
    /// assert_eq!(one.true_divide(&three, 10)?.to_string(), "0.3333333333");
    /// assert_eq!(one.true_divide(&BigDecimal::zero(), 28), Err(Error::DivByZero));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn true_divide(&self, rhs: &BigDecimal, max_prec: usize) -> Result<BigDecimal, Error> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        if max_prec == 0 {
            return Err(Error::Precision);
        }
        let sign = self.sign * rhs.sign;
        if self.is_zero() {
            return Ok(BigDecimal::from_raw(
                Sign::Positive,
                BigUInt::zero(),
                self.scale - rhs.scale,
            ));
        }

        let xd = self.coeff.digits();
        let yd = rhs.coeff.digits();

        // first try the division as-is; an exact quotient needs no scaling
        if xd >= yd {
            let (q, r) = self.coeff.div_rem(&rhs.coeff);
            if r.is_zero() {
                let scale = self.scale - rhs.scale;
                if q.digits() <= max_prec {
                    return Ok(BigDecimal::from_raw(sign, q, scale));
                }
                let excess = q.digits() - max_prec;
                let (q, trimmed) =
                    round::remove_trailing_digits(&q, excess, RoundingMode::HalfEven, true);
                return Ok(BigDecimal::from_raw(
                    sign,
                    q,
                    scale - excess as i64 - trimmed as i64,
                ));
            }
        }

        // scale the dividend so the quotient carries the requested digits
        // plus one limb of guard digits
        let k = (max_prec + GUARD_DIGITS) as i64 - (xd as i64 - yd as i64);
        let k = k.max(0) as usize;
        let scaled = self.coeff.mul_pow10(k);
        let (mut q, r) = scaled.div_rem(&rhs.coeff);
        let mut scale = self.scale + k as i64 - rhs.scale;

        if r.is_zero() {
            let tz = q.trailing_zeros();
            if tz > 0 {
                q = q.div_pow10(tz);
                scale -= tz as i64;
            }
        }

        let qd = q.digits();
        if qd > max_prec {
            let excess = qd - max_prec;
            let (rounded, trimmed) =
                round::remove_trailing_digits(&q, excess, RoundingMode::HalfEven, true);
            q = rounded;
            scale -= excess as i64 + trimmed as i64;
        }
        Ok(BigDecimal::from_raw(sign, q, scale))
    }

    /// Integer quotient of `self / rhs`, truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigdec_dec::{BigDecimal, Error};
    /// let a: BigDecimal = "7.5".parse()?;
    /// let b: BigDecimal = "2".parse()?;
    /// assert_eq!(a.truncate_divide(&b)?.to_string(), "3");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn truncate_divide(&self, rhs: &BigDecimal) -> Result<BigDecimal, Error> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        let scale = self.scale.max(rhs.scale);
        let a = self.coeff.mul_pow10((scale - self.scale) as usize);
        let b = rhs.coeff.mul_pow10((scale - rhs.scale) as usize);
        let q = &a / &b;
        Ok(BigDecimal::from_raw(self.sign * rhs.sign, q, 0))
    }

    /// `self - truncate_divide(self, rhs) · rhs`, exact at the wider of
    /// the two scales.
    pub fn truncate_modulo(&self, rhs: &BigDecimal) -> Result<BigDecimal, Error> {
        let q = self.truncate_divide(rhs)?;
        Ok(self - &(&q * rhs))
    }

    /// Internal division for paths where the divisor is known to be
    /// non-zero and the precision positive.
    #[inline]
    pub(crate) fn div_prec(&self, rhs: &BigDecimal, prec: usize) -> BigDecimal {
        match self.true_divide(rhs, prec) {
            Ok(q) => q,
            Err(_) => BigDecimal::panic_divide_by_0(),
        }
    }
}

impl Div<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// True division at [DEFAULT_PRECISION] significant digits.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: &BigDecimal) -> BigDecimal {
        self.div_prec(rhs, DEFAULT_PRECISION)
    }
}

impl Rem<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    /// Truncating modulo.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    fn rem(self, rhs: &BigDecimal) -> BigDecimal {
        match self.truncate_modulo(rhs) {
            Ok(r) => r,
            Err(_) => BigDecimal::panic_divide_by_0(),
        }
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Div for BigDecimal, div);
helper_macros::forward_binop_to_ref_ref!(impl Rem for BigDecimal, rem);
helper_macros::forward_binop_assign_by_take!(impl DivAssign for BigDecimal, div_assign, div);
helper_macros::forward_binop_assign_by_take!(impl RemAssign for BigDecimal, rem_assign, rem);
