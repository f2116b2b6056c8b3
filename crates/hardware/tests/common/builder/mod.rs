//! Builders for test inputs.

/// Fluent stimulus builder.
pub mod stimulus;
