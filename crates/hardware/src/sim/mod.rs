//! Simulation driver: stimulus, clocking, protocol helpers and tracing.
//!
//! Provides the external clocked driver around the harness and the formats
//! used to feed it and to record what it did.

pub mod driver;
pub mod simulator;
pub mod stimulus;
pub mod trace;

pub use driver::SweepReport;
pub use simulator::Simulator;
pub use stimulus::{Stimulus, TickInput};
pub use trace::TickRecord;
