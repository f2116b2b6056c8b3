//! Fixed-function evaluator.
//!
//! This module provides the combinational side of the fixture:
//! 1. **Seam:** The `CombinationalBlock` trait the harness drives each strobe tick.
//! 2. **ROI:** `FixedFunctionEvaluator`, the LUT6 with its placement annotation.

use crate::common::InputVector;

use super::placement::PlacementAnnotation;
use super::truth_table::TruthTable;

/// A stateless combinational block with a 6-bit input and a 1-bit output.
///
/// Implementations must be pure: the same vector always yields the same bit.
pub trait CombinationalBlock {
    /// Returns the output bit for `vector`.
    fn evaluate(&self, vector: InputVector) -> bool;
}

/// The region of interest: a LUT6 evaluated from a fixed truth table.
///
/// The placement annotation rides along for external tooling and has no
/// influence on [`CombinationalBlock::evaluate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedFunctionEvaluator {
    table: TruthTable,
    placement: PlacementAnnotation,
}

impl FixedFunctionEvaluator {
    /// Creates the ROI evaluator with its fixed table and annotation.
    pub const fn new() -> Self {
        Self {
            table: TruthTable::ROI,
            placement: PlacementAnnotation::ROI,
        }
    }

    /// Returns the truth table.
    pub const fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Returns the placement annotation attached at construction.
    pub const fn placement(&self) -> &PlacementAnnotation {
        &self.placement
    }
}

impl CombinationalBlock for FixedFunctionEvaluator {
    #[inline(always)]
    fn evaluate(&self, vector: InputVector) -> bool {
        self.table.lookup(vector)
    }
}

impl<B: CombinationalBlock + ?Sized> CombinationalBlock for &B {
    fn evaluate(&self, vector: InputVector) -> bool {
        (**self).evaluate(vector)
    }
}
