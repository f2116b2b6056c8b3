//! ROI serial harness simulator library.
//!
//! This crate implements a cycle-accurate model of a serial shift-register
//! test fixture wrapped around a single LUT6 "region of interest":
//! 1. **Harness:** 6-bit input and 1-bit output shift registers plus the
//!    latched vector, advanced once per clock edge by `serial_in` and `strobe`.
//! 2. **ROI:** The fixed truth table `0x8000_DEAD_0000_0001` and its inert
//!    placement annotation.
//! 3. **Simulation:** Stimulus formats, the clocked driver, protocol helpers
//!    (load, unload, sweep) and per-tick tracing.
//! 4. **Support:** Configuration, statistics and the driver-layer error type.

/// Common types and constants (widths, input vectors, errors).
pub mod common;
/// Driver configuration (defaults and JSON-deserializable sections).
pub mod config;
/// Serial shift-register harness.
pub mod harness;
/// Region of interest (truth table, placement, evaluator).
pub mod roi;
/// Clocked simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The harness; construct with `SerialShiftHarness::new()`.
pub use crate::harness::SerialShiftHarness;
/// The ROI evaluator.
pub use crate::roi::FixedFunctionEvaluator;
/// Top-level simulator owning harness, stats and trace.
pub use crate::sim::Simulator;
