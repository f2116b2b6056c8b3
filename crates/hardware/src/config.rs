//! Configuration system for the harness simulation driver.
//!
//! The harness itself has no configuration: its widths, truth table and
//! placement are fixed. This module parameterizes the driver layer around it:
//! 1. **Defaults:** Baseline run caps and idle line values.
//! 2. **Structures:** General, driver and statistics sections.
//!
//! Configuration is supplied as JSON, or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::DEFAULT_MAX_TICKS;
use crate::common::error::Result;

/// Default configuration constants for the driver layer.
mod defaults {
    /// Maximum ticks a single stimulus run may take.
    pub const MAX_TICKS: u64 = super::DEFAULT_MAX_TICKS;

    /// Value driven on `serial_in` during unload and flush edges.
    pub const IDLE_SERIAL_IN: bool = false;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use roi_harness_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_ticks);
/// assert!(!config.driver.idle_serial_in);
/// ```
///
/// Deserializing from JSON, with omitted fields taking their defaults:
///
/// ```
/// use roi_harness_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_ticks": true, "max_ticks": 4096 },
///     "stats": { "sections": ["summary"] }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_ticks);
/// assert_eq!(config.general.max_ticks, 4096);
/// assert!(!config.driver.idle_serial_in);
/// assert_eq!(config.stats.sections, vec!["summary".to_string()]);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Serial protocol driver settings
    #[serde(default)]
    pub driver: DriverConfig,
    /// Statistics reporting settings
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Json`](crate::common::HarnessError::Json) if the
    /// text is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a JSON error if it
    /// does not describe a configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Record a per-tick trace and emit a `tracing` event for every edge
    #[serde(default)]
    pub trace_ticks: bool,

    /// Upper bound on ticks per stimulus run
    #[serde(default = "GeneralConfig::default_max_ticks")]
    pub max_ticks: u64,
}

impl GeneralConfig {
    /// Returns the default tick cap.
    fn default_max_ticks() -> u64 {
        defaults::MAX_TICKS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_ticks: false,
            max_ticks: defaults::MAX_TICKS,
        }
    }
}

/// Serial protocol driver settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Value driven on `serial_in` when the driver has no data to shift
    #[serde(default = "DriverConfig::default_idle_serial_in")]
    pub idle_serial_in: bool,
}

impl DriverConfig {
    /// Returns the default idle `serial_in` value.
    fn default_idle_serial_in() -> bool {
        defaults::IDLE_SERIAL_IN
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            idle_serial_in: defaults::IDLE_SERIAL_IN,
        }
    }
}

/// Statistics reporting settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsConfig {
    /// Sections to print (see [`STATS_SECTIONS`](crate::stats::STATS_SECTIONS)); empty prints all
    #[serde(default)]
    pub sections: Vec<String>,
}
