//! Word buffer.
//!
//! A thin wrapper over a limb vector with the operations the arithmetic
//! kernel needs. Limbs are ordered from least to most significant; the
//! buffer itself enforces no normalization, that is the job of
//! `BigUInt::from_buffer`.

use crate::word::Word;
use core::ops::{Deref, DerefMut};

/// Buffer of base-10⁹ limbs, least-significant first.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Buffer {
    words: Vec<Word>,
}

impl Buffer {
    /// Creates a `Buffer` with at least the specified capacity.
    #[inline]
    pub(crate) fn allocate(num_words: usize) -> Self {
        Buffer {
            words: Vec::with_capacity(num_words),
        }
    }

    /// Append a limb at the most-significant end.
    #[inline]
    pub(crate) fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Append `n` zero limbs at the most-significant end.
    #[inline]
    pub(crate) fn push_zeros(&mut self, n: usize) {
        self.words.resize(self.words.len() + n, 0);
    }

    /// Insert `n` zero limbs at the least-significant end, scaling the
    /// value by `RADIX^n`.
    pub(crate) fn push_zeros_front(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.words.reserve(n);
        self.words.splice(0..0, core::iter::repeat(0).take(n));
    }

    /// Append limbs by copying from a slice.
    #[inline]
    pub(crate) fn push_slice(&mut self, words: &[Word]) {
        self.words.extend_from_slice(words);
    }

    /// Pop most-significant zero limbs. The buffer may become empty.
    #[inline]
    pub(crate) fn pop_zeros(&mut self) {
        while let Some(0) = self.words.last() {
            self.words.pop();
        }
    }

    /// Truncate to `len` limbs, dropping the most-significant part.
    ///
    /// # Panics
    ///
    /// Panics if the current length is less than `len`.
    #[inline]
    pub(crate) fn truncate(&mut self, len: usize) {
        assert!(self.words.len() >= len);
        self.words.truncate(len);
    }

    /// Remove the `n` least-significant limbs, dividing the value by
    /// `RADIX^n`.
    #[inline]
    pub(crate) fn erase_front(&mut self, n: usize) {
        assert!(self.words.len() >= n);
        self.words.drain(..n);
    }
}

impl Deref for Buffer {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        &self.words
    }
}

impl DerefMut for Buffer {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }
}

impl From<&[Word]> for Buffer {
    #[inline]
    fn from(words: &[Word]) -> Self {
        Buffer {
            words: words.to_vec(),
        }
    }
}
