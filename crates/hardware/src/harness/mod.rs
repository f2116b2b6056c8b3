//! Serial shift-register harness around the region of interest.
//!
//! This module owns all sequential state of the fixture:
//! 1. **Registers:** A width-generic synchronous shift register.
//! 2. **Harness:** The load/latch/unload transition driven once per clock edge.

/// Serial harness state and transition.
pub mod serial;

/// Width-generic shift register.
pub mod shift_register;

pub use serial::{HarnessState, InputShiftRegister, OutputShiftRegister, SerialShiftHarness};
pub use shift_register::ShiftRegister;
