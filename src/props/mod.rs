//! Style prop recognition and filtering.
//!
//! - [`StylePropertyTable`]: The "is this a style prop?" oracle, with the
//!   built-in [`SystemProps`] table
//! - [`style_props`] / [`classify`]: Order-preserving filters over a prop bag
//! - [`ShouldForwardProp`]: Which props reach the rendered element

mod classify;
mod forward;
mod table;

pub use classify::{classify, split_style_props, style_props};
pub use forward::{forwarded_props, DefaultForwarding, ShouldForwardProp};
pub use table::{PropConfig, PropKind, StylePropertyTable, SystemProps, Transform};
