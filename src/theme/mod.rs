//! Themes: token scales consumed by the compiler.
//!
//! - [`Theme`]: Token scales, breakpoints and reusable style declarations,
//!   loadable from JSON or YAML
//! - [`Breakpoint`]: A named minimum width used for responsive values

#[allow(clippy::module_inception)]
mod theme;

pub use theme::{Breakpoint, Theme};
