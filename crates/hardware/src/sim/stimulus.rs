//! Stimulus sequences for the harness.
//!
//! A stimulus is the ordered list of `(serial_in, strobe)` pairs an external
//! driver applies, one per clock edge. Stimuli are built programmatically or
//! read from disk in one of two formats:
//! 1. **JSON:** an array of `{"serial_in": bool, "strobe": bool}` objects
//!    (`strobe` may be omitted).
//! 2. **Text:** one edge per line, `<serial_in> [<strobe>]` using `0`/`1`;
//!    blank lines and `#` comments are ignored.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::InputVector;
use crate::common::error::{HarnessError, Result};

/// Inputs applied on one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Bit on `serial_in`.
    pub serial_in: bool,
    /// Strobe value.
    #[serde(default)]
    pub strobe: bool,
}

impl TickInput {
    /// A shift-only edge.
    pub const fn shift(serial_in: bool) -> Self {
        Self {
            serial_in,
            strobe: false,
        }
    }

    /// An edge with strobe asserted.
    pub const fn strobe(serial_in: bool) -> Self {
        Self {
            serial_in,
            strobe: true,
        }
    }
}

/// An ordered sequence of tick inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stimulus {
    ticks: Vec<TickInput>,
}

impl Stimulus {
    /// Creates an empty stimulus.
    pub const fn new() -> Self {
        Self { ticks: Vec::new() }
    }

    /// Appends one edge.
    pub fn push(&mut self, input: TickInput) {
        self.ticks.push(input);
    }

    /// Appends the six edges that shift `vector` in MSB-first, raising strobe
    /// on the last one so the vector is latched.
    pub fn load_vector(&mut self, vector: InputVector) {
        let last = crate::common::DIN_N - 1;
        for (i, bit) in vector.msb_first().enumerate() {
            self.ticks.push(TickInput {
                serial_in: bit,
                strobe: i as u32 == last,
            });
        }
    }

    /// Builds a shift-only stimulus from a string of `0`/`1` characters.
    ///
    /// Underscores and whitespace are ignored, so `"10_0000"` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidBit`] for any other character.
    pub fn from_bits(bits: &str) -> Result<Self> {
        let ticks = bits
            .chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .map(|c| parse_bit(c).map(TickInput::shift))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { ticks })
    }

    /// Parses the JSON stimulus format.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Json`] if `json` is not an array of tick inputs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a stimulus file. Files ending in `.json` are parsed as JSON,
    /// everything else as the line-oriented text format.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error for
    /// malformed content.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            Self::from_json_str(&text)
        } else {
            text.parse()
        }
    }

    /// Returns the edges in order.
    pub fn ticks(&self) -> &[TickInput] {
        &self.ticks
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns `true` if the stimulus has no edges.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl FromStr for Stimulus {
    type Err = HarnessError;

    /// Parses the line-oriented text format.
    fn from_str(s: &str) -> Result<Self> {
        let mut ticks = Vec::new();
        for (idx, raw) in s.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            let mut fields = content.split_whitespace();
            let serial_in = parse_field(fields.next(), line, "serial_in")?;
            let strobe = match fields.next() {
                Some(tok) => parse_field(Some(tok), line, "strobe")?,
                None => false,
            };
            if let Some(extra) = fields.next() {
                return Err(HarnessError::MalformedStimulus {
                    line,
                    reason: format!("unexpected trailing field {extra:?}"),
                });
            }
            ticks.push(TickInput { serial_in, strobe });
        }
        Ok(Self { ticks })
    }
}

impl Extend<TickInput> for Stimulus {
    fn extend<T: IntoIterator<Item = TickInput>>(&mut self, iter: T) {
        self.ticks.extend(iter);
    }
}

impl FromIterator<TickInput> for Stimulus {
    fn from_iter<T: IntoIterator<Item = TickInput>>(iter: T) -> Self {
        Self {
            ticks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Stimulus {
    type Item = &'a TickInput;
    type IntoIter = std::slice::Iter<'a, TickInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.ticks.iter()
    }
}

fn parse_bit(c: char) -> Result<bool> {
    match c {
        '0' => Ok(false),
        '1' => Ok(true),
        other => Err(HarnessError::InvalidBit(other)),
    }
}

fn parse_field(tok: Option<&str>, line: usize, name: &str) -> Result<bool> {
    match tok {
        Some("0") => Ok(false),
        Some("1") => Ok(true),
        Some(other) => Err(HarnessError::MalformedStimulus {
            line,
            reason: format!("{name} must be 0 or 1, got {other:?}"),
        }),
        None => Err(HarnessError::MalformedStimulus {
            line,
            reason: format!("missing {name}"),
        }),
    }
}
