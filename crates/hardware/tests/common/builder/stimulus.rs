use roi_harness_core::common::InputVector;
use roi_harness_core::sim::{Stimulus, TickInput};

/// Fluent builder for stimulus sequences.
///
/// Bits are given as `0`/`1` integers to keep test vectors readable.
#[derive(Default)]
pub struct StimulusBuilder {
    stimulus: Stimulus,
}

impl StimulusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift-only edges, one per element of `bits`.
    pub fn shift(mut self, bits: &[u8]) -> Self {
        self.stimulus
            .extend(bits.iter().map(|b| TickInput::shift(*b != 0)));
        self
    }

    /// A single edge with strobe asserted.
    pub fn strobe(mut self, serial_in: u8) -> Self {
        self.stimulus.push(TickInput::strobe(serial_in != 0));
        self
    }

    /// `n` shift-only edges with `serial_in` low.
    pub fn idle(mut self, n: usize) -> Self {
        self.stimulus
            .extend(std::iter::repeat_n(TickInput::shift(false), n));
        self
    }

    /// Six edges loading and latching `vector`.
    pub fn load(mut self, vector: u8) -> Self {
        self.stimulus.load_vector(InputVector::truncate(vector));
        self
    }

    pub fn build(self) -> Stimulus {
        self.stimulus
    }
}
