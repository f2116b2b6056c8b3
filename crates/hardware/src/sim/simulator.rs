//! Simulator: owns the harness, its statistics and the optional tick trace.
//!
//! The simulator is the external clocked driver of the fixture. It applies
//! one `(serial_in, strobe)` pair per edge, strictly in order, and samples
//! `serial_out` after each edge completes.

use tracing::{debug, trace};

use crate::common::error::{HarnessError, Result};
use crate::config::Config;
use crate::harness::{HarnessState, SerialShiftHarness};
use crate::roi::{CombinationalBlock, FixedFunctionEvaluator};
use crate::stats::SimStats;

use super::stimulus::Stimulus;
use super::trace::TickRecord;

/// Top-level simulator: harness state plus driver-side bookkeeping.
#[derive(Debug)]
pub struct Simulator<B = FixedFunctionEvaluator> {
    pub(crate) harness: SerialShiftHarness<B>,
    pub(crate) stats: SimStats,
    pub(crate) config: Config,
    trace: Option<Vec<TickRecord>>,
}

impl Simulator<FixedFunctionEvaluator> {
    /// Creates a simulator around the ROI evaluator.
    pub fn new(config: &Config) -> Self {
        Self::with_block(FixedFunctionEvaluator::new(), config)
    }
}

impl Default for Simulator<FixedFunctionEvaluator> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl<B: CombinationalBlock> Simulator<B> {
    /// Creates a simulator around an arbitrary combinational block.
    pub fn with_block(block: B, config: &Config) -> Self {
        let record_trace = config.general.trace_ticks || cfg!(feature = "always-trace");
        Self {
            harness: SerialShiftHarness::with_block(block),
            stats: SimStats::default(),
            config: config.clone(),
            trace: record_trace.then(Vec::new),
        }
    }

    /// Applies one clock edge and returns the sampled `serial_out`.
    pub fn tick(&mut self, serial_in: bool, strobe: bool) -> bool {
        let before = self.harness.state();
        let serial_out = self.harness.advance(serial_in, strobe);
        let after = self.harness.state();

        if strobe && before.latched != after.latched {
            debug!(
                tick = self.stats.ticks,
                from = %before.latched,
                to = %after.latched,
                "latched new vector"
            );
        }
        if let Some(records) = self.trace.as_mut() {
            let record = TickRecord::new(self.stats.ticks, serial_in, strobe, &after);
            trace!(?record, "tick");
            records.push(record);
        }
        self.stats.record(serial_in, strobe, &before, &after);
        serial_out
    }

    /// Applies every edge of `stimulus` in order.
    ///
    /// # Returns
    ///
    /// The `serial_out` value sampled after each edge.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::TickLimitExceeded`] without applying any edge if
    /// the stimulus is longer than `general.max_ticks`.
    pub fn run(&mut self, stimulus: &Stimulus) -> Result<Vec<bool>> {
        let limit = self.config.general.max_ticks;
        if stimulus.len() as u64 > limit {
            return Err(HarnessError::TickLimitExceeded { limit });
        }
        debug!(ticks = stimulus.len(), "running stimulus");
        Ok(stimulus
            .ticks()
            .iter()
            .map(|t| self.tick(t.serial_in, t.strobe))
            .collect())
    }

    /// Returns the harness to its power-on state and clears statistics and trace.
    pub fn reset(&mut self) {
        self.harness.reset();
        self.stats = SimStats::default();
        if let Some(records) = self.trace.as_mut() {
            records.clear();
        }
    }

    /// Returns the recorded tick trace, if tracing is enabled.
    pub fn trace(&self) -> Option<&[TickRecord]> {
        self.trace.as_deref()
    }

    /// Returns the harness under test.
    pub const fn harness(&self) -> &SerialShiftHarness<B> {
        &self.harness
    }

    /// Returns the statistics for the current session.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Returns a copy of the harness register state.
    pub const fn state(&self) -> HarnessState {
        self.harness.state()
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
