//! # Simulation Driver Tests
//!
//! Covers the pieces that sit outside the harness itself.
