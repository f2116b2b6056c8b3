//! Region of interest: the fixed-function block under test.
//!
//! 1. **Truth Table:** The LUT6 INIT word and row lookup.
//! 2. **Placement:** The inert `LOC`/flag annotation consumed by external tooling.
//! 3. **Evaluator:** The combinational seam and the ROI implementation of it.

/// Combinational seam and the ROI evaluator.
pub mod evaluator;

/// Placement annotation.
pub mod placement;

/// LUT6 truth table.
pub mod truth_table;

pub use evaluator::{CombinationalBlock, FixedFunctionEvaluator};
pub use placement::{PlacementAnnotation, PlacementFlag};
pub use truth_table::TruthTable;
