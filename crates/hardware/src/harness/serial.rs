//! Serial shift harness.
//!
//! Bridges a 1-bit serial interface to the ROI's 6-bit parallel interface
//! under one clock and one strobe line. Each rising edge:
//! 1. **Input path:** `din` shifts left and takes `serial_in` in its newest slot.
//! 2. **Output path (strobe low):** `dout` shifts in the bit that was at the top
//!    of `din` before this edge, a one-tick delayed echo of the input stream.
//! 3. **Latch (strobe high):** the freshly shifted `din` is latched as the ROI
//!    input, and `dout` is loaded with the ROI output for the vector latched
//!    before this edge.
//!
//! The next state is computed from a copy of the current one and swapped in
//! whole, so no partially updated register is ever observable.

use tracing::trace;

use crate::common::constants::{DIN_N, DOUT_N};
use crate::common::InputVector;
use crate::roi::{CombinationalBlock, FixedFunctionEvaluator};

use super::shift_register::ShiftRegister;

/// Input shift register of the harness.
pub type InputShiftRegister = ShiftRegister<DIN_N>;

/// Output shift register of the harness.
pub type OutputShiftRegister = ShiftRegister<DOUT_N>;

/// Complete register state of the harness at a clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HarnessState {
    /// Serial-to-parallel input register.
    pub din: InputShiftRegister,
    /// Parallel-to-serial output register.
    pub dout: OutputShiftRegister,
    /// Vector currently presented to the ROI.
    pub latched: InputVector,
}

impl HarnessState {
    /// The all-zero state a session starts in.
    pub const RESET: Self = Self {
        din: InputShiftRegister::new(),
        dout: OutputShiftRegister::new(),
        latched: InputVector::ZERO,
    };

    /// Computes the state after one clock edge.
    ///
    /// Every value on the right-hand side is read from `self`, the state
    /// before the edge.
    #[must_use]
    pub fn next<B: CombinationalBlock + ?Sized>(
        &self,
        block: &B,
        serial_in: bool,
        strobe: bool,
    ) -> Self {
        let din = self.din.shifted(serial_in);
        if strobe {
            Self {
                din,
                dout: self.dout.loaded(u64::from(block.evaluate(self.latched))),
                latched: InputVector::truncate(din.value() as u8),
            }
        } else {
            Self {
                din,
                dout: self.dout.shifted(self.din.msb()),
                latched: self.latched,
            }
        }
    }

    /// Returns the bit driven on `serial_out`: the top of the output register.
    #[inline(always)]
    pub const fn serial_out(&self) -> bool {
        self.dout.msb()
    }

    /// Returns the input register contents as a vector.
    pub const fn din_vector(&self) -> InputVector {
        InputVector::truncate(self.din.value() as u8)
    }
}

/// The serial shift harness wrapped around a combinational block.
///
/// Defaults to the ROI evaluator; tests substitute other blocks through the
/// [`CombinationalBlock`] seam.
#[derive(Clone, Debug, Default)]
pub struct SerialShiftHarness<B = FixedFunctionEvaluator> {
    state: HarnessState,
    block: B,
}

impl SerialShiftHarness<FixedFunctionEvaluator> {
    /// Creates a harness around the ROI with all registers zero.
    pub const fn new() -> Self {
        Self::with_block(FixedFunctionEvaluator::new())
    }
}

impl<B: CombinationalBlock> SerialShiftHarness<B> {
    /// Creates a harness around `block` with all registers zero.
    pub const fn with_block(block: B) -> Self {
        Self {
            state: HarnessState::RESET,
            block,
        }
    }

    /// Clocks the harness once and returns the sampled `serial_out`.
    ///
    /// # Arguments
    ///
    /// * `serial_in` - Bit presented on the serial input for this edge.
    /// * `strobe` - Latch/load control for this edge.
    ///
    /// # Returns
    ///
    /// The bit on `serial_out` after the edge has completed.
    pub fn advance(&mut self, serial_in: bool, strobe: bool) -> bool {
        let next = self.state.next(&self.block, serial_in, strobe);
        trace!(
            serial_in,
            strobe,
            din = next.din.value(),
            dout = next.dout.value(),
            latched = next.latched.val(),
            "harness edge"
        );
        self.state = next;
        next.serial_out()
    }

    /// Returns every register to zero, as at the start of a session.
    pub fn reset(&mut self) {
        self.state = HarnessState::RESET;
    }

    /// Returns a copy of the current register state.
    pub const fn state(&self) -> HarnessState {
        self.state
    }

    /// Returns the input shift register.
    pub const fn input_register(&self) -> InputShiftRegister {
        self.state.din
    }

    /// Returns the output shift register.
    pub const fn output_register(&self) -> OutputShiftRegister {
        self.state.dout
    }

    /// Returns the vector currently latched into the block.
    pub const fn latched(&self) -> InputVector {
        self.state.latched
    }

    /// Returns the bit currently driven on `serial_out`.
    pub const fn serial_out(&self) -> bool {
        self.state.serial_out()
    }

    /// Returns the block's combinational output for the latched vector.
    ///
    /// This is the bit the next strobe edge will load into the output register.
    pub fn block_output(&self) -> bool {
        self.block.evaluate(self.state.latched)
    }

    /// Returns the wrapped combinational block.
    pub const fn block(&self) -> &B {
        &self.block
    }
}
