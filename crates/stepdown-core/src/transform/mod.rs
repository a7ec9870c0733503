//! Step-data transforms.
//!
//! - `simplify` - collapse a body's step rows to a sparse pattern
//! - `splice` - relocate and replace the body in the file text, or build
//!   and insert a whole new sub-chart block at the `#ATTACKS:;` anchor

mod simplify;
mod splice;

pub use simplify::*;
pub use splice::*;
