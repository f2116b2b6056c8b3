//! Fixed-width synchronous shift register.
//!
//! Models a `N`-bit register that shifts left by one position per clock edge:
//! the incoming bit enters the least-significant (newest) slot and the
//! most-significant (oldest) bit falls off the top.
//!
//! ```text
//!   before:  [N-1] [N-2] ... [1] [0]
//!              |
//!              v (shifted out)
//!   after:   [N-2] ... [1] [0] [in]
//! ```
//!
//! All operations are by value: they return the next register contents and
//! never mutate `self`, so a tick can be computed entirely from old state.

use std::fmt;

/// An `N`-bit shift register (`1 <= N <= 64`).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShiftRegister<const N: u32> {
    bits: u64,
}

impl<const N: u32> ShiftRegister<N> {
    const MASK: u64 = if N >= 64 { u64::MAX } else { (1u64 << N) - 1 };

    /// Creates an all-zero register.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Creates a register holding the low `N` bits of `value`.
    pub const fn from_value(value: u64) -> Self {
        Self {
            bits: value & Self::MASK,
        }
    }

    /// Returns the register width in bits.
    pub const fn width(&self) -> u32 {
        N
    }

    /// Returns the register contents.
    #[inline(always)]
    pub const fn value(&self) -> u64 {
        self.bits
    }

    /// Returns the most-significant (oldest) bit.
    #[inline(always)]
    pub const fn msb(&self) -> bool {
        (self.bits >> (N - 1)) & 1 != 0
    }

    /// Returns the register after one shift with `bit` entering at the bottom.
    #[inline(always)]
    #[must_use]
    pub const fn shifted(self, bit: bool) -> Self {
        Self {
            bits: ((self.bits << 1) | bit as u64) & Self::MASK,
        }
    }

    /// Returns a register loaded in parallel with the low `N` bits of `value`.
    #[inline(always)]
    #[must_use]
    pub const fn loaded(self, value: u64) -> Self {
        Self::from_value(value)
    }
}

impl<const N: u32> fmt::Debug for ShiftRegister<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShiftRegister<{N}>({:0width$b})", self.bits, width = N as usize)
    }
}
