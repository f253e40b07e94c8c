//! Derived wager combinations.
//!
//! A completed selection maps each heart to its current digit and folds the
//! digits by place value. Display is fixed-width and zero-padded, so the
//! all-zero selections render as "00" / "000" / "0000" rather than "0".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric wager value derived from a completed selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    value: u32,
    width: u8,
}

impl Combination {
    /// Fold digits into a value by place value. `digits[0]` is the most
    /// significant digit; an all-zero sequence folds to 0 and relies on the
    /// fixed-width display for its padded rendering.
    pub fn from_digits(digits: &[u8]) -> Self {
        let value = digits
            .iter()
            .fold(0u32, |acc, &digit| acc * 10 + u32::from(digit));
        Self {
            value,
            width: digits.len() as u8,
        }
    }

    /// The numeric wager value.
    pub fn value(self) -> u32 {
        self.value
    }

    /// Display width in digits (2 for dozen/simple group, 3 hundred, 4 thousand).
    pub fn width(self) -> usize {
        self.width as usize
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width as usize)
    }
}
