//! Layered style resolution.
//!
//! A [`StyleResolver`] is configured once per component definition with a
//! base style and a default element, then called once per render. Each call
//! merges five layers, lowest priority first:
//!
//! | Priority | Layer | Source |
//! |----------|-------|--------|
//! | 1 (lowest) | Element reset | [`CssReset`] for `as`, falling back to the configured element |
//! | 2 | Internal override | `__css` |
//! | 3 | Base style | [`BaseStyle`], computed variants see the full [`RenderProps`] |
//! | 4 | Style props | Style props from `rest`, with `Undefined` values removed |
//! | 5 (highest) | User override | `sx`, merged as-is |
//!
//! A key present in several layers takes the value of the highest one.
//! Absent layers contribute nothing. Only the style prop layer drops
//! `Undefined` values: an `Undefined` in `__css` or `sx` still overwrites
//! the layers below it and is left for the compiler to ignore.
//!
//! The merged declaration is compiled against the render's theme. When the
//! props carry a raw `css` object, it is returned untouched next to the
//! computed style so the caller can apply it separately.

mod base;
mod props;

pub use base::BaseStyle;
pub use props::RenderProps;

use std::sync::Arc;

use crate::compile::{CompiledStyle, CssCompiler, SystemCompiler};
use crate::error::StyleError;
use crate::props::{style_props, StylePropertyTable, SystemProps};
use crate::reset::{CssReset, ElementResets};
use crate::style::StyleObject;

/// Per-definition configuration captured by a [`StyleResolver`].
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    pub base_style: Option<BaseStyle>,
    /// Element used for the reset when the render props carry no `as`.
    pub element: Option<String>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_style(mut self, base_style: impl Into<BaseStyle>) -> Self {
        self.base_style = Some(base_style.into());
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

/// Result of resolving one render.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedStyle {
    /// The computed style alone.
    Single(CompiledStyle),
    /// The computed style followed by the raw `css` object, unchanged.
    WithRaw(CompiledStyle, StyleObject),
}

impl ResolvedStyle {
    pub fn computed(&self) -> &CompiledStyle {
        match self {
            ResolvedStyle::Single(style) | ResolvedStyle::WithRaw(style, _) => style,
        }
    }

    pub fn raw(&self) -> Option<&StyleObject> {
        match self {
            ResolvedStyle::Single(_) => None,
            ResolvedStyle::WithRaw(_, raw) => Some(raw),
        }
    }

    /// Serializes the computed style, then the raw fragment, scoped to `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = self.computed().to_css(selector);
        if let Some(raw) = self.raw() {
            css.push_str(&CompiledStyle::new(raw.clone()).to_css(selector));
        }
        css
    }
}

/// Merges style layers and compiles them for one render.
///
/// The options are fixed at construction; every [`resolve`](Self::resolve)
/// call works only on its own inputs, so a resolver can be shared freely
/// between threads and renders.
///
/// # Example
///
/// ```rust
/// use style_system::{RenderProps, ResolverOptions, StyleObject, StyleResolver, Theme};
///
/// let resolver = StyleResolver::new(
///     ResolverOptions::new().base_style(StyleObject::new().with("fontSize", "24px")),
/// );
///
/// let props = RenderProps::new()
///     .theme(Theme::new())
///     .sx(StyleObject::new().with("fontSize", "40px"));
///
/// let resolved = resolver.resolve(&props).unwrap();
/// assert_eq!(
///     resolved.computed().get("fontSize").and_then(|v| v.as_str()),
///     Some("40px")
/// );
/// ```
#[derive(Clone)]
pub struct StyleResolver {
    options: ResolverOptions,
    table: Arc<dyn StylePropertyTable>,
    reset: Arc<dyn CssReset>,
    compiler: Arc<dyn CssCompiler>,
}

impl StyleResolver {
    /// Creates a resolver with the built-in prop table, element resets and compiler.
    pub fn new(options: ResolverOptions) -> Self {
        Self {
            options,
            table: Arc::new(SystemProps),
            reset: Arc::new(ElementResets),
            compiler: Arc::new(SystemCompiler::new()),
        }
    }

    pub fn with_table(mut self, table: Arc<dyn StylePropertyTable>) -> Self {
        self.table = table;
        self
    }

    pub fn with_reset(mut self, reset: Arc<dyn CssReset>) -> Self {
        self.reset = reset;
        self
    }

    pub fn with_compiler(mut self, compiler: Arc<dyn CssCompiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Returns the element the reset is looked up for: `as` first, then the
    /// configured element.
    pub fn effective_element<'a>(&'a self, props: &'a RenderProps) -> Option<&'a str> {
        props
            .as_element
            .as_deref()
            .or(self.options.element.as_deref())
    }

    /// Builds the merged declaration without compiling it.
    pub fn merge(&self, props: &RenderProps) -> StyleObject {
        let element = self.effective_element(props);
        let mut merged = self.reset.reset_for(element);
        tracing::trace!(layer = "reset", element = ?element, keys = merged.len());

        if let Some(internal) = &props.internal_css {
            merged.assign(internal);
            tracing::trace!(layer = "__css", keys = internal.len());
        }

        if let Some(base) = &self.options.base_style {
            let base = base.resolve(props);
            merged.assign(&base);
            tracing::trace!(layer = "base", keys = base.len());
        }

        let styles = style_props(&props.rest, self.table.as_ref()).filter_undefined();
        merged.assign(&styles);
        tracing::trace!(layer = "style props", keys = styles.len());

        if let Some(sx) = &props.sx {
            merged.assign(sx);
            tracing::trace!(layer = "sx", keys = sx.len());
        }

        merged
    }

    /// Resolves the style for one render.
    ///
    /// # Errors
    ///
    /// Returns the compiler's error unchanged, e.g. [`StyleError::MissingTheme`]
    /// when the props carry no theme.
    pub fn resolve(&self, props: &RenderProps) -> Result<ResolvedStyle, StyleError> {
        let merged = self.merge(props);
        let computed = self.compiler.compile(&merged, props.theme.as_ref())?;
        tracing::debug!(
            element = ?self.effective_element(props),
            raw_css = props.css.is_some(),
            "resolved style"
        );

        Ok(match &props.css {
            Some(raw) => ResolvedStyle::WithRaw(computed, raw.clone()),
            None => ResolvedStyle::Single(computed),
        })
    }
}

impl std::fmt::Debug for StyleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleResolver")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
