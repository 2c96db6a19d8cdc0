//! # style-system
//!
//! Style prop resolution for component-based UI libraries.
//!
//! Components accept visual properties directly as props (`color`, `mt`,
//! `_hover`, ...). For every render this crate merges those props with a
//! per-element CSS reset, internal overrides, the component's base style and
//! the user's `sx` override in a fixed order, then compiles the result
//! against a theme.
//!
//! ## Quick start
//!
//! ```rust
//! use style_system::{styled, Component, RenderProps, StyleObject, StyledOptions, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::new()
//!     .scale("colors", json!({ "brand": { "500": "#3182ce" } }))
//!     .scale("space", json!({ "2": "0.5rem", "4": "1rem" }));
//!
//! let button = styled(
//!     Component::intrinsic("button"),
//!     StyledOptions::new().base_style(StyleObject::new().with("px", 4).with("py", 2)),
//! );
//!
//! let el = button
//!     .render(
//!         &RenderProps::new()
//!             .theme(theme)
//!             .prop("bg", "brand.500")
//!             .prop("type", "submit"),
//!     )
//!     .unwrap();
//!
//! let style = el.style.computed();
//! assert_eq!(style.get("background").and_then(|v| v.as_str()), Some("#3182ce"));
//! assert_eq!(style.get("paddingInlineStart").and_then(|v| v.as_str()), Some("1rem"));
//! assert!(el.attributes.contains_key("type"));
//! ```
//!
//! ## Precedence
//!
//! Lowest to highest: element reset, `__css`, base style, style props
//! (undefined values removed), `sx`. See [`resolver`] for the details.
//!
//! ## Modules
//!
//! - [`style`]: [`StyleValue`] and [`StyleObject`], the declaration types
//! - [`props`]: Style prop table, classification and forwarding policy
//! - [`reset`]: Per-element CSS resets
//! - [`compile`]: The compiler trait and the built-in [`SystemCompiler`]
//! - [`resolver`]: The layered [`StyleResolver`]
//! - [`theme`]: Themes, loadable from JSON/YAML
//! - [`styled`](mod@styled): Component construction on top of the resolver

pub mod compile;
mod error;
pub mod props;
pub mod reset;
pub mod resolver;
pub mod style;
pub mod styled;
pub mod theme;

pub use compile::{to_kebab_case, CompiledStyle, CssCompiler, SystemCompiler};
pub use error::StyleError;
pub use props::{
    classify, forwarded_props, split_style_props, style_props, DefaultForwarding, PropConfig,
    PropKind, ShouldForwardProp, StylePropertyTable, SystemProps, Transform,
};
pub use reset::{CssReset, ElementResets, NoReset};
pub use resolver::{BaseStyle, RenderProps, ResolvedStyle, ResolverOptions, StyleResolver};
pub use style::{StyleObject, StyleValue};
pub use styled::{styled, Component, StyledComponent, StyledElement, StyledOptions};
pub use theme::{Breakpoint, Theme};
