//! Simulation statistics collection and reporting.
//!
//! This module tracks line and protocol activity of the harness. It provides:
//! 1. **Summary:** Total ticks and host-side tick rate.
//! 2. **Protocol:** Strobe edges and how often the latched vector actually changed.
//! 3. **Lines:** Ones driven on `serial_in`, ones and toggles seen on `serial_out`.

use std::fmt;
use std::time::Instant;

use crate::harness::HarnessState;

/// Simulation statistics for a harness session.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total clock edges applied.
    pub ticks: u64,
    /// Edges on which strobe was asserted.
    pub strobes: u64,
    /// Strobe edges that changed the latched vector.
    pub latch_changes: u64,
    /// Edges on which `serial_in` was 1.
    pub serial_in_ones: u64,
    /// Edges after which `serial_out` was 1.
    pub serial_out_ones: u64,
    /// Edges on which `serial_out` changed value.
    pub serial_out_toggles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            strobes: 0,
            latch_changes: 0,
            serial_in_ones: 0,
            serial_out_ones: 0,
            serial_out_toggles: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"protocol"`, `"lines"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "protocol", "lines"];

impl SimStats {
    /// Accounts for one clock edge.
    ///
    /// # Arguments
    ///
    /// * `serial_in` - Bit driven on the edge.
    /// * `strobe` - Strobe value on the edge.
    /// * `before` - Harness state before the edge.
    /// * `after` - Harness state after the edge.
    pub fn record(
        &mut self,
        serial_in: bool,
        strobe: bool,
        before: &HarnessState,
        after: &HarnessState,
    ) {
        self.ticks += 1;
        self.serial_in_ones += u64::from(serial_in);
        self.serial_out_ones += u64::from(after.serial_out());
        if before.serial_out() != after.serial_out() {
            self.serial_out_toggles += 1;
        }
        if strobe {
            self.strobes += 1;
            if before.latched != after.latched {
                self.latch_changes += 1;
            }
        }
    }

    /// Returns a printable report of the requested sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty
    /// slice selects all of them.
    pub const fn report<'a>(&'a self, sections: &'a [String]) -> StatsReport<'a> {
        StatsReport {
            stats: self,
            sections,
        }
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.report(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

/// Section-filtered view of [`SimStats`], rendered through `Display`.
#[derive(Clone, Copy, Debug)]
pub struct StatsReport<'a> {
    stats: &'a SimStats,
    sections: &'a [String],
}

impl StatsReport<'_> {
    fn wants(&self, section: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == section)
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "==========================================================";
        const SEP: &str = "----------------------------------------------------------";

        let s = self.stats;
        let seconds = s.start_time.elapsed().as_secs_f64();
        let ticks = s.ticks.max(1) as f64;
        let pct = |n: u64| (n as f64 / ticks) * 100.0;

        writeln!(f, "{RULE}\nROI SERIAL HARNESS STATISTICS\n{RULE}")?;
        if self.wants("summary") {
            let khz = if seconds > 0.0 {
                (s.ticks as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            writeln!(f, "host_seconds             {seconds:.4} s")?;
            writeln!(f, "sim_ticks                {}", s.ticks)?;
            writeln!(f, "sim_freq                 {khz:.2} kHz")?;
            writeln!(f, "{SEP}")?;
        }
        if self.wants("protocol") {
            writeln!(f, "PROTOCOL")?;
            writeln!(
                f,
                "  strobe.edges           {} ({:.2}%)",
                s.strobes,
                pct(s.strobes)
            )?;
            writeln!(f, "  latch.changes          {}", s.latch_changes)?;
            writeln!(f, "{SEP}")?;
        }
        if self.wants("lines") {
            writeln!(f, "LINES")?;
            writeln!(
                f,
                "  serial_in.ones         {} ({:.2}%)",
                s.serial_in_ones,
                pct(s.serial_in_ones)
            )?;
            writeln!(
                f,
                "  serial_out.ones        {} ({:.2}%)",
                s.serial_out_ones,
                pct(s.serial_out_ones)
            )?;
            writeln!(
                f,
                "  serial_out.toggles     {} ({:.2}%)",
                s.serial_out_toggles,
                pct(s.serial_out_toggles)
            )?;
        }
        writeln!(f, "{RULE}")
    }
}
