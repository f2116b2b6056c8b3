//! Common types and constants shared by the harness, the evaluator and the driver.
//!
//! This module provides the fundamental building blocks of the fixture:
//! 1. **Constants:** Register widths, masks and the LUT INIT word.
//! 2. **Input Vectors:** A strong type for 6-bit evaluator inputs.
//! 3. **Error Handling:** Driver-layer error taxonomy and `Result` alias.

/// Input vector type.
pub mod bits;

/// Fixture-wide constants.
pub mod constants;

/// Error types for the driver layer.
pub mod error;

pub use bits::InputVector;
pub use constants::{DIN_MASK, DIN_N, DOUT_N, LUT_INIT};
pub use error::{HarnessError, Result};
