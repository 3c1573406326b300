//! Formatting.

use crate::ubig::BigUInt;
use core::fmt::{self, Write};

impl fmt::Display for BigUInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = self.words();
        let mut out = String::with_capacity(self.digits());
        // the top limb prints without padding, the rest as 9-digit groups
        write!(out, "{}", words[words.len() - 1])?;
        for &word in words[..words.len() - 1].iter().rev() {
            write!(out, "{:09}", word)?;
        }
        f.pad_integral(true, "", &out)
    }
}
