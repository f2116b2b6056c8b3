//! Per-tick trace records.
//!
//! When tick tracing is enabled the simulator keeps one `TickRecord` per
//! clock edge. Records serialize to JSON so external drivers can diff a run
//! against a reference waveform.

use serde::Serialize;

use crate::harness::HarnessState;

/// Line values and register contents for one clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TickRecord {
    /// Zero-based edge index within the session.
    pub tick: u64,
    /// Bit driven on `serial_in`.
    pub serial_in: bool,
    /// Strobe value.
    pub strobe: bool,
    /// Input shift register after the edge.
    pub din: u8,
    /// Output shift register after the edge.
    pub dout: u8,
    /// Latched vector after the edge.
    pub latched: u8,
    /// Bit sampled on `serial_out` after the edge.
    pub serial_out: bool,
}

impl TickRecord {
    /// Builds a record from the inputs of an edge and the state it produced.
    pub const fn new(tick: u64, serial_in: bool, strobe: bool, after: &HarnessState) -> Self {
        Self {
            tick,
            serial_in,
            strobe,
            din: after.din.value() as u8,
            dout: after.dout.value() as u8,
            latched: after.latched.val(),
            serial_out: after.serial_out(),
        }
    }
}
