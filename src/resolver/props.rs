//! The per-render property bag.

use crate::style::{StyleObject, StyleValue};
use crate::theme::Theme;

/// Everything a component receives for one render.
///
/// The reserved props get their own fields; all other props stay in
/// `rest`, where the resolver looks for style props.
///
/// # Example
///
/// ```rust
/// use style_system::{RenderProps, StyleObject, Theme};
///
/// let props = RenderProps::new()
///     .theme(Theme::new())
///     .prop("color", "red.500")
///     .prop("onClick", "submit")
///     .sx(StyleObject::new().with("color", "blue.500"));
///
/// assert_eq!(props.rest.len(), 2);
/// assert!(props.sx.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderProps {
    /// Theme handed to the compiler.
    pub theme: Option<Theme>,
    /// Raw low-level styles (`css`), returned next to the computed style.
    pub css: Option<StyleObject>,
    /// Override supplied by internal composition layers (`__css`).
    pub internal_css: Option<StyleObject>,
    /// User override with the highest priority (`sx`).
    pub sx: Option<StyleObject>,
    /// Element override (`as`).
    pub as_element: Option<String>,
    /// All remaining props.
    pub rest: StyleObject,
}

impl RenderProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a flat prop bag on the reserved names `css`, `__css`, `sx`
    /// and `as`. A `theme` entry in the bag is ignored in favor of `theme`.
    ///
    /// Reserved entries of the wrong shape (an `sx` that is not an object,
    /// an `as` that is not a string) are treated as absent.
    pub fn from_object(bag: StyleObject, theme: Option<Theme>) -> Self {
        let mut props = RenderProps {
            theme,
            ..Default::default()
        };
        for (name, value) in bag {
            match name.as_str() {
                "css" => props.css = into_object(&name, value),
                "__css" => props.internal_css = into_object(&name, value),
                "sx" => props.sx = into_object(&name, value),
                "as" => props.as_element = value.as_str().map(str::to_string),
                "theme" => {}
                _ => props.rest.insert(name, value),
            }
        }
        props
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn css(mut self, css: StyleObject) -> Self {
        self.css = Some(css);
        self
    }

    pub fn internal_css(mut self, internal_css: StyleObject) -> Self {
        self.internal_css = Some(internal_css);
        self
    }

    pub fn sx(mut self, sx: StyleObject) -> Self {
        self.sx = Some(sx);
        self
    }

    pub fn as_element(mut self, element: impl Into<String>) -> Self {
        self.as_element = Some(element.into());
        self
    }

    /// Adds a non-reserved prop.
    pub fn prop<K: Into<String>, V: Into<StyleValue>>(mut self, name: K, value: V) -> Self {
        self.rest.insert(name, value);
        self
    }
}

fn into_object(name: &str, value: StyleValue) -> Option<StyleObject> {
    match value {
        StyleValue::Object(obj) => Some(obj),
        StyleValue::Undefined => None,
        other => {
            tracing::trace!(prop = name, kind = other.kind(), "ignoring non-object reserved prop");
            None
        }
    }
}
