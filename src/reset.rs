//! Per-element CSS resets, the lowest layer of every resolved style.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::style::StyleObject;

/// Looks up the baseline declaration for an element kind.
pub trait CssReset: Send + Sync {
    /// Returns the reset for `element`; empty when the element is absent or unknown.
    fn reset_for(&self, element: Option<&str>) -> StyleObject;
}

/// Applies no reset at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReset;

impl CssReset for NoReset {
    fn reset_for(&self, _element: Option<&str>) -> StyleObject {
        StyleObject::new()
    }
}

/// The built-in reset table for intrinsic HTML elements.
///
/// # Example
///
/// ```rust
/// use style_system::{CssReset, ElementResets};
///
/// let reset = ElementResets.reset_for(Some("button"));
/// assert!(reset.contains_key("cursor"));
/// assert!(ElementResets.reset_for(Some("my-widget")).is_empty());
/// assert!(ElementResets.reset_for(None).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementResets;

impl CssReset for ElementResets {
    fn reset_for(&self, element: Option<&str>) -> StyleObject {
        element
            .and_then(|tag| ELEMENT_RESETS.get(tag))
            .cloned()
            .unwrap_or_default()
    }
}

fn heading() -> StyleObject {
    StyleObject::new()
        .with("fontSize", "inherit")
        .with("fontWeight", "inherit")
        .with("margin", 0)
}

fn form_control() -> StyleObject {
    StyleObject::new()
        .with("font", "inherit")
        .with("color", "inherit")
        .with("margin", 0)
        .with("padding", 0)
        .with("borderWidth", 0)
        .with("backgroundColor", "transparent")
}

fn list() -> StyleObject {
    StyleObject::new()
        .with("listStyle", "none")
        .with("margin", 0)
        .with("padding", 0)
}

fn media() -> StyleObject {
    StyleObject::new()
        .with("display", "block")
        .with("maxWidth", "100%")
        .with("height", "auto")
}

static ELEMENT_RESETS: Lazy<HashMap<&'static str, StyleObject>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(
        "button",
        form_control()
            .with("cursor", "pointer")
            .with("lineHeight", "inherit")
            .with("textTransform", "none")
            .with("appearance", "button"),
    );
    for tag in ["input", "select", "textarea", "optgroup"] {
        table.insert(tag, form_control().with("lineHeight", "inherit"));
    }
    table.insert(
        "a",
        StyleObject::new()
            .with("backgroundColor", "transparent")
            .with("color", "inherit")
            .with("textDecoration", "inherit"),
    );
    for tag in ["ul", "ol", "menu"] {
        table.insert(tag, list());
    }
    for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        table.insert(tag, heading());
    }
    for tag in ["p", "blockquote", "figure", "pre", "dl", "dd"] {
        table.insert(tag, StyleObject::new().with("margin", 0));
    }
    for tag in ["img", "video", "canvas", "svg"] {
        table.insert(tag, media());
    }
    table.insert(
        "table",
        StyleObject::new()
            .with("borderCollapse", "collapse")
            .with("textIndent", 0),
    );
    table.insert(
        "hr",
        StyleObject::new()
            .with("height", 0)
            .with("color", "inherit")
            .with("borderTopWidth", "1px")
            .with("boxSizing", "content-box")
            .with("overflow", "visible"),
    );
    table.insert(
        "fieldset",
        StyleObject::new().with("margin", 0).with("padding", 0),
    );
    table.insert("legend", StyleObject::new().with("padding", 0));
    for tag in ["b", "strong"] {
        table.insert(tag, StyleObject::new().with("fontWeight", "bolder"));
    }
    for tag in ["code", "kbd", "samp"] {
        table.insert(
            tag,
            StyleObject::new()
                .with("fontFamily", "mono")
                .with("fontSize", "1em"),
        );
    }

    table
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_unknown_and_absent_elements_are_empty() {
        assert!(ElementResets.reset_for(None).is_empty());
        assert!(ElementResets.reset_for(Some("div")).is_empty());
        assert!(ElementResets.reset_for(Some("Card")).is_empty());
    }

    #[test]
    fn test_heading_reset() {
        let reset = ElementResets.reset_for(Some("h2"));
        assert_eq!(reset.get("fontSize"), Some(&StyleValue::from("inherit")));
        assert_eq!(reset.get("margin"), Some(&StyleValue::from(0)));
    }

    #[test]
    fn test_button_reset_extends_form_control() {
        let reset = ElementResets.reset_for(Some("button"));
        assert_eq!(reset.get("cursor"), Some(&StyleValue::from("pointer")));
        assert_eq!(reset.get("backgroundColor"), Some(&StyleValue::from("transparent")));
    }

    #[test]
    fn test_no_reset() {
        assert!(NoReset.reset_for(Some("button")).is_empty());
    }

    #[test]
    fn test_reset_returns_fresh_copy() {
        let mut first = ElementResets.reset_for(Some("a"));
        first.insert("color", "red");
        let second = ElementResets.reset_for(Some("a"));
        assert_eq!(second.get("color"), Some(&StyleValue::from("inherit")));
    }
}
