//! Serial shift harness tests.


/// Property-based invariants over random edge sequences.
pub mod properties;
