//! Multiplication.

use crate::{
    add,
    buffer::Buffer,
    helper_macros,
    ubig::BigUInt,
    word::{DoubleWord, Word, RADIX},
};
use core::ops::{Mul, MulAssign};

/// Operand length (in limbs) up to which schoolbook multiplication is used;
/// above it Karatsuba splitting pays off.
pub(crate) const KARATSUBA_THRESHOLD: usize = 32;

impl Mul<&BigUInt> for &BigUInt {
    type Output = BigUInt;

    fn mul(self, rhs: &BigUInt) -> BigUInt {
        if self.is_zero() || rhs.is_zero() {
            return BigUInt::zero();
        }
        BigUInt::from_buffer(mul_slices(self.words(), rhs.words()))
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Mul for BigUInt, mul);
helper_macros::forward_binop_assign_by_take!(impl MulAssign for BigUInt, mul_assign, mul);

helper_macros::forward_binop_with_primitive!(impl Mul<u32> for BigUInt, mul);
helper_macros::forward_binop_with_primitive!(impl Mul<u64> for BigUInt, mul);
helper_macros::forward_binop_with_primitive!(impl Mul<usize> for BigUInt, mul);

fn mul_slices(lhs: &[Word], rhs: &[Word]) -> Buffer {
    if lhs.len().min(rhs.len()) <= KARATSUBA_THRESHOLD {
        mul_schoolbook(lhs, rhs)
    } else {
        mul_karatsuba(lhs, rhs)
    }
}

/// Multiply a limb slice by a single limb. The returned buffer always has
/// one more limb than the input (possibly zero).
pub(crate) fn mul_word(words: &[Word], mult: Word) -> Buffer {
    let mut buffer = Buffer::allocate(words.len() + 1);
    let mut carry: DoubleWord = 0;
    for &word in words {
        let t = word as DoubleWord * mult as DoubleWord + carry;
        buffer.push((t % RADIX) as Word);
        carry = t / RADIX;
    }
    buffer.push(carry as Word);
    buffer
}

/// O(n·m) multiplication, accumulating one product plus carries in a
/// DoubleWord at each step.
fn mul_schoolbook(lhs: &[Word], rhs: &[Word]) -> Buffer {
    let mut buffer = Buffer::allocate(lhs.len() + rhs.len());
    buffer.push_zeros(lhs.len() + rhs.len());
    for (i, &a) in lhs.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let mut carry: DoubleWord = 0;
        for (j, &b) in rhs.iter().enumerate() {
            let t = buffer[i + j] as DoubleWord + a as DoubleWord * b as DoubleWord + carry;
            buffer[i + j] = (t % RADIX) as Word;
            carry = t / RADIX;
        }
        let mut k = i + rhs.len();
        while carry != 0 {
            let t = buffer[k] as DoubleWord + carry;
            buffer[k] = (t % RADIX) as Word;
            carry = t / RADIX;
            k += 1;
        }
    }
    buffer
}

/// Karatsuba: split both operands at half the longer one's length, so that
/// `(a1·R^m + a0)(b1·R^m + b0)` needs three half-size products
/// `z0 = a0·b0`, `z2 = a1·b1` and `z1 = (a0+a1)(b0+b1) - z0 - z2`.
fn mul_karatsuba(lhs: &[Word], rhs: &[Word]) -> Buffer {
    let m = lhs.len().max(rhs.len()) / 2;
    let (a0, a1) = lhs.split_at(m.min(lhs.len()));
    let (b0, b1) = rhs.split_at(m.min(rhs.len()));

    let a0 = BigUInt::from_words(a0);
    let a1 = BigUInt::from_words(a1);
    let b0 = BigUInt::from_words(b0);
    let b1 = BigUInt::from_words(b1);

    let z0 = &a0 * &b0;
    let z2 = &a1 * &b1;
    let zm = (&a0 + &a1) * (&b0 + &b1);
    let z1 = {
        // zm >= z0 + z2, so neither subtraction can borrow
        let mut t = Buffer::from(zm.words());
        let borrow = add::sub_in_place(&mut t, z0.words());
        debug_assert!(!borrow);
        let borrow = add::sub_in_place(&mut t, z2.words());
        debug_assert!(!borrow);
        BigUInt::from_buffer(t)
    };

    let mut result = Buffer::allocate(lhs.len() + rhs.len() + 1);
    result.push_slice(z0.words());
    add_shifted(&mut result, z1.words(), m);
    add_shifted(&mut result, z2.words(), 2 * m);
    result
}

/// buffer += rhs · RADIX^shift
fn add_shifted(buffer: &mut Buffer, rhs: &[Word], shift: usize) {
    if rhs.len() == 1 && rhs[0] == 0 {
        return;
    }
    if buffer.len() < shift + rhs.len() {
        let grow = shift + rhs.len() - buffer.len();
        buffer.push_zeros(grow);
    }
    if add::add_in_place(&mut buffer[shift..], rhs) {
        buffer.push(1);
    }
}
