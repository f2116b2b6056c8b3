//! Placement annotation of the region of interest.
//!
//! Downstream place-and-route and bitstream tooling locates the ROI by its
//! placement attributes. They are carried here verbatim and exported for that
//! tooling, but nothing in this crate computes with them.

use std::fmt;

use serde::Serialize;

/// Physical site the ROI LUT is constrained to.
pub const ROI_LOCATION: &str = "SLICE_X16Y100";

/// A synthesis/implementation attribute attached to the ROI cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementFlag {
    /// Keep the cell through synthesis optimizations.
    Keep,
    /// Forbid implementation tools from modifying or removing the cell.
    DontTouch,
}

impl PlacementFlag {
    /// Returns the attribute name as written in the netlist.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Keep => "KEEP",
            Self::DontTouch => "DONT_TOUCH",
        }
    }
}

/// Opaque, immutable placement metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PlacementAnnotation {
    location: &'static str,
    flags: &'static [PlacementFlag],
}

impl PlacementAnnotation {
    /// The annotation attached to the ROI LUT.
    pub const ROI: Self = Self {
        location: ROI_LOCATION,
        flags: &[PlacementFlag::Keep, PlacementFlag::DontTouch],
    };

    /// Returns the `LOC` constraint string.
    pub const fn location(&self) -> &'static str {
        self.location
    }

    /// Returns the placement flags in declaration order.
    pub const fn flags(&self) -> &'static [PlacementFlag] {
        self.flags
    }

    /// Returns `true` if `flag` is present.
    pub fn has(&self, flag: PlacementFlag) -> bool {
        self.flags.contains(&flag)
    }
}

impl Default for PlacementAnnotation {
    fn default() -> Self {
        Self::ROI
    }
}

impl fmt::Display for PlacementAnnotation {
    /// Renders the annotation as a Verilog attribute instance,
    /// e.g. `(* KEEP, DONT_TOUCH, LOC = "SLICE_X16Y100" *)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(* ")?;
        for flag in self.flags {
            write!(f, "{}, ", flag.attribute())?;
        }
        write!(f, "LOC = \"{}\" *)", self.location)
    }
}
