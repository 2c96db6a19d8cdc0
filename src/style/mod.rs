//! Style declaration primitives.
//!
//! - [`StyleValue`]: A value that may be a scalar, a responsive array, a
//!   nested declaration or explicitly undefined
//! - [`StyleObject`]: An insertion-ordered declaration with `assign` merge
//!   semantics (last writer per key wins)

mod object;
mod value;

pub use object::StyleObject;
pub use value::{format_number, StyleValue};
