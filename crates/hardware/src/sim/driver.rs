//! Serial protocol helpers.
//!
//! The harness has no explicit modes; a driver composes edges into protocol
//! steps:
//! 1. **Load:** shift a vector in MSB-first, strobing on the last bit so the
//!    freshly shifted register is latched.
//! 2. **Unload:** a strobe edge loads the ROI's response to the latched vector
//!    into the output register, where it is sampled on `serial_out`.
//! 3. **Sweep:** every vector loaded back to back. Each load's strobe edge
//!    also unloads the response to the previous vector, so a full sweep costs
//!    `64 * 6 + 1` edges.

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::InputVector;
use crate::common::error::{HarnessError, Result};
use crate::roi::{CombinationalBlock, TruthTable};

use super::simulator::Simulator;

/// Outcome of an exhaustive serial sweep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// `(vector, serial response)` for every vector, in ascending order.
    pub responses: Vec<(u8, bool)>,
    /// Edges spent on the sweep.
    pub ticks: u64,
    /// Number of vectors whose response was `1`.
    pub ones: u32,
}

impl SweepReport {
    /// Packs the responses back into a 64-bit INIT word (bit `i` = vector `i`).
    pub fn init_word(&self) -> u64 {
        self.responses
            .iter()
            .filter(|(_, bit)| *bit)
            .fold(0, |acc, (v, _)| acc | (1u64 << v))
    }
}

impl<B: CombinationalBlock> Simulator<B> {
    /// Shifts `vector` in MSB-first and latches it on the last edge.
    ///
    /// # Returns
    ///
    /// `serial_out` after the latching edge: the block's response to the
    /// vector that was latched *before* this load.
    pub fn load_vector(&mut self, vector: InputVector) -> bool {
        let last = crate::common::DIN_N - 1;
        let mut serial_out = self.harness.serial_out();
        for (i, bit) in vector.msb_first().enumerate() {
            serial_out = self.tick(bit, i as u32 == last);
        }
        serial_out
    }

    /// Issues one strobe edge with the idle `serial_in` value.
    ///
    /// # Returns
    ///
    /// The block's response to the vector latched before this edge. The edge
    /// also latches the shifted input register, replacing that vector.
    pub fn unload(&mut self) -> bool {
        let idle = self.config.driver.idle_serial_in;
        self.tick(idle, true)
    }

    /// Loads `vector`, unloads it, and returns the serial response.
    pub fn evaluate_serial(&mut self, vector: InputVector) -> bool {
        let _ = self.load_vector(vector);
        self.unload()
    }

    /// Drives all 64 vectors through the serial interface and checks every
    /// response against the ROI truth table.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Mismatch`] for the first vector whose serial
    /// response disagrees with the table.
    pub fn sweep(&mut self) -> Result<SweepReport> {
        let reference = TruthTable::ROI;
        let start = self.stats.ticks;
        let mut responses = Vec::with_capacity(reference.len());
        let mut pending: Option<InputVector> = None;

        for vector in InputVector::all() {
            let observed = self.load_vector(vector);
            if let Some(prev) = pending {
                check(&reference, prev, observed)?;
                responses.push((prev.val(), observed));
            }
            pending = Some(vector);
        }
        if let Some(prev) = pending {
            let observed = self.unload();
            check(&reference, prev, observed)?;
            responses.push((prev.val(), observed));
        }

        let ones = responses.iter().filter(|(_, bit)| *bit).count() as u32;
        let ticks = self.stats.ticks - start;
        debug!(ticks, ones, "sweep complete");
        Ok(SweepReport {
            responses,
            ticks,
            ones,
        })
    }
}

fn check(reference: &TruthTable, vector: InputVector, observed: bool) -> Result<()> {
    let expected = reference.lookup(vector);
    if expected == observed {
        Ok(())
    } else {
        warn!(%vector, expected, observed, "serial response mismatch");
        Err(HarnessError::Mismatch {
            vector,
            expected,
            observed,
        })
    }
}
