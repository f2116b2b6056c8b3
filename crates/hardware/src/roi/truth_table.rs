//! LUT6 truth table.
//!
//! The region of interest is a single six-input lookup table. Its behavior is
//! fully described by a 64-bit INIT word in which bit `i` holds the output for
//! input vector `i`. The word is fixed at `0x8000_DEAD_0000_0001`; nothing in
//! the fixture derives or mutates it at runtime.

use crate::common::InputVector;
use crate::common::constants::{LUT_INIT, TRUTH_TABLE_ENTRIES};

/// Immutable 64-entry truth table of the region of interest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TruthTable {
    init: u64,
}

impl TruthTable {
    /// The table programmed into the region of interest.
    pub const ROI: Self = Self { init: LUT_INIT };

    /// Returns the output bit for `vector`.
    ///
    /// Bit 0 of the INIT word is the output for input `0b000000`, bit 63 the
    /// output for `0b111111`.
    #[inline(always)]
    pub const fn lookup(&self, vector: InputVector) -> bool {
        (self.init >> vector.val()) & 1 != 0
    }

    /// Returns the raw INIT word.
    pub const fn init(&self) -> u64 {
        self.init
    }

    /// Number of input vectors mapping to `1`.
    pub const fn ones(&self) -> u32 {
        self.init.count_ones()
    }

    /// Number of rows in the table.
    pub const fn len(&self) -> usize {
        TRUTH_TABLE_ENTRIES
    }

    /// A LUT6 table always has rows; provided for API symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates `(vector, output)` pairs in ascending vector order.
    pub fn rows(&self) -> impl Iterator<Item = (InputVector, bool)> + '_ {
        InputVector::all().map(move |v| (v, self.lookup(v)))
    }
}

impl Default for TruthTable {
    fn default() -> Self {
        Self::ROI
    }
}
