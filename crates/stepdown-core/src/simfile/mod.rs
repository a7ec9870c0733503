//! `.sm` file structure parsing.
//!
//! This is deliberately not a full simfile parser: it only segments a file
//! into coarse sections and locates one sub-chart's body within a notes
//! section. Everything outside the targeted sub-chart passes through the
//! tool byte for byte.

mod locator;
mod section;

pub use locator::*;
pub use section::*;
