//! Input vector type.
//!
//! Strong type for the 6-bit vector presented to the region of interest, so
//! that a raw byte with stray high bits can never reach the evaluator.

use std::fmt;

use super::constants::{DIN_MASK, DIN_N};
use super::error::HarnessError;

/// A 6-bit input vector for the region of interest.
///
/// Construction through [`InputVector::new`] or `TryFrom` rejects values
/// wider than `DIN_N` bits; [`InputVector::truncate`] masks instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputVector(u8);

impl InputVector {
    /// The all-zero vector a session starts with.
    pub const ZERO: Self = Self(0);

    /// The all-ones vector (`0b111111`).
    pub const ONES: Self = Self(DIN_MASK);

    /// Creates a vector, rejecting values that do not fit in `DIN_N` bits.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::VectorOutOfRange`] if `value > 0b111111`.
    pub fn new(value: u8) -> Result<Self, HarnessError> {
        if value & !DIN_MASK == 0 {
            Ok(Self(value))
        } else {
            Err(HarnessError::VectorOutOfRange {
                value: u64::from(value),
                width: DIN_N,
            })
        }
    }

    /// Creates a vector from the low `DIN_N` bits of `value`.
    #[inline(always)]
    pub const fn truncate(value: u8) -> Self {
        Self(value & DIN_MASK)
    }

    /// Returns the raw value (always below 64).
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns the truth-table row index for this vector.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns bit `n` of the vector; `n` counts from the least-significant bit.
    #[inline(always)]
    pub const fn bit(self, n: u32) -> bool {
        (self.0 >> n) & 1 != 0
    }

    /// Iterates the vector's bits most-significant first, the order in which
    /// they are shifted onto `serial_in`.
    pub fn msb_first(self) -> impl Iterator<Item = bool> {
        (0..DIN_N).rev().map(move |n| self.bit(n))
    }

    /// Iterates all 64 vectors in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..=DIN_MASK).map(Self)
    }
}

impl TryFrom<u8> for InputVector {
    type Error = HarnessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u64> for InputVector {
    type Error = HarnessError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::new(v).ok())
            .ok_or(HarnessError::VectorOutOfRange { value, width: DIN_N })
    }
}

impl From<InputVector> for u8 {
    fn from(v: InputVector) -> Self {
        v.0
    }
}

impl fmt::Display for InputVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#08b}", self.0)
    }
}
