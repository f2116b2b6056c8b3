//! Error definitions for the simulation driver layer.
//!
//! The harness and the evaluator themselves are total: every combination of
//! `serial_in` and `strobe` is a valid tick. Errors only arise around them:
//! 1. **Value Conversion:** Integers too wide for an input vector.
//! 2. **Stimulus Input:** Malformed stimulus text or over-long runs.
//! 3. **Configuration:** JSON that does not describe a `Config`.
//! 4. **Verification:** A serial response that disagrees with the truth table.

use thiserror::Error;

use super::bits::InputVector;

/// Errors raised by the driver layer around the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A value does not fit in the `width`-bit input vector.
    #[error("value {value:#x} does not fit in a {width}-bit input vector")]
    VectorOutOfRange {
        /// The rejected value.
        value: u64,
        /// Width of the input vector in bits.
        width: u32,
    },

    /// A bit string contained something other than `0` or `1`.
    #[error("invalid bit character {0:?} (expected '0' or '1')")]
    InvalidBit(char),

    /// A stimulus text line could not be parsed.
    #[error("malformed stimulus at line {line}: {reason}")]
    MalformedStimulus {
        /// 1-based line number in the stimulus source.
        line: usize,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// A stimulus run would exceed the configured tick cap.
    #[error("stimulus exceeds the tick limit of {limit}")]
    TickLimitExceeded {
        /// The configured `general.max_ticks`.
        limit: u64,
    },

    /// The serial response for `vector` disagreed with the truth table.
    #[error("vector {vector}: expected serial_out={expected}, observed {observed}")]
    Mismatch {
        /// The vector whose response was checked.
        vector: InputVector,
        /// Truth-table value.
        expected: bool,
        /// Bit sampled on `serial_out`.
        observed: bool,
    },

    /// JSON configuration or stimulus could not be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A stimulus or configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results produced by the driver layer.
pub type Result<T> = std::result::Result<T, HarnessError>;
