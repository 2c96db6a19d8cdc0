//! Turning merged declarations into engine-ready styles.
//!
//! The resolver only depends on the [`CssCompiler`] trait. [`SystemCompiler`]
//! is the built-in implementation that understands style props, theme
//! tokens, responsive values and pseudo props.

mod output;
mod responsive;
mod system;

pub use output::{to_kebab_case, CompiledStyle};
pub use system::SystemCompiler;

use crate::error::StyleError;
use crate::style::StyleObject;
use crate::theme::Theme;

/// Compiles a merged declaration against a theme.
///
/// Implementations must tolerate `Undefined` values (treating them as unset)
/// and nested declarations.
pub trait CssCompiler: Send + Sync {
    fn compile(
        &self,
        declaration: &StyleObject,
        theme: Option<&Theme>,
    ) -> Result<CompiledStyle, StyleError>;
}
