//! Fixture-wide constants.
//!
//! This module defines the fixed shape of the ROI harness. It includes:
//! 1. **Register Widths:** Input and output shift-register widths.
//! 2. **Masks:** Width masks and top-bit positions derived from those widths.
//! 3. **Truth Table:** The INIT word of the region-of-interest LUT.
//! 4. **Simulation Limits:** Defaults for driver-side run caps.

/// Width of the input shift register and of the evaluator's input vector.
pub const DIN_N: u32 = 6;

/// Width of the output shift register.
pub const DOUT_N: u32 = 1;

/// Mask selecting the `DIN_N` valid bits of an input vector.
pub const DIN_MASK: u8 = (1 << DIN_N) - 1;

/// Number of distinct input vectors (rows of the truth table).
pub const TRUTH_TABLE_ENTRIES: usize = 1 << DIN_N;

/// INIT word of the region-of-interest LUT6.
///
/// Bit `i` is the output for input vector `i` (bit 0 is input `0b000000`).
pub const LUT_INIT: u64 = 0x8000_DEAD_0000_0001;

/// Default cap on the number of ticks a single stimulus run may take.
pub const DEFAULT_MAX_TICKS: u64 = 1_000_000;
