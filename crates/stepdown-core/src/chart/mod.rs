//! Chart-related types and format constants.
//!
//! This module contains types for addressing one sub-chart inside a
//! StepMania `.sm` file:
//! - `Difficulty` - the difficulty names the tool knows about
//! - `ChartSelector` - (style, difficulty, steps) marker triple
//! - Format literal constants (`#NOTES:`, `#ATTACKS:;`, ...)

mod difficulty;
mod selector;

pub use difficulty::*;
pub use selector::*;
