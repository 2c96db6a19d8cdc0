//! Base styles attached to a component definition.

use std::sync::Arc;

use crate::style::StyleObject;

use super::props::RenderProps;

type StyleFn = dyn Fn(&RenderProps) -> StyleObject + Send + Sync;

/// A component's default styles: fixed, or computed from the render props.
#[derive(Clone)]
pub enum BaseStyle {
    Static(StyleObject),
    /// Called with the full render props (theme, variants, ...) on every render.
    Computed(Arc<StyleFn>),
}

impl BaseStyle {
    /// Wraps a function of the render props.
    ///
    /// # Example
    ///
    /// ```rust
    /// use style_system::{BaseStyle, RenderProps, StyleObject};
    ///
    /// let base = BaseStyle::computed(|props: &RenderProps| {
    ///     let size = if props.rest.contains_key("compact") { 2 } else { 4 };
    ///     StyleObject::new().with("p", size)
    /// });
    ///
    /// let style = base.resolve(&RenderProps::new().prop("compact", true));
    /// assert_eq!(style.get("p").and_then(|v| v.as_number()), Some(2.0));
    /// ```
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&RenderProps) -> StyleObject + Send + Sync + 'static,
    {
        BaseStyle::Computed(Arc::new(f))
    }

    /// Produces the declaration for one render.
    pub fn resolve(&self, props: &RenderProps) -> StyleObject {
        match self {
            BaseStyle::Static(style) => style.clone(),
            BaseStyle::Computed(f) => f(props),
        }
    }
}

impl From<StyleObject> for BaseStyle {
    fn from(style: StyleObject) -> Self {
        BaseStyle::Static(style)
    }
}

impl std::fmt::Debug for BaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseStyle::Static(style) => f.debug_tuple("Static").field(style).finish(),
            BaseStyle::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_static_returns_copy() {
        let base = BaseStyle::from(StyleObject::new().with("color", "red"));
        let mut resolved = base.resolve(&RenderProps::new());
        resolved.insert("color", "blue");

        assert_eq!(
            base.resolve(&RenderProps::new()).get("color"),
            Some(&StyleValue::from("red"))
        );
    }

    #[test]
    fn test_computed_sees_theme() {
        use crate::theme::Theme;
        use serde_json::json;

        let base = BaseStyle::computed(|props| {
            let brand = props
                .theme
                .as_ref()
                .and_then(|t| t.token("colors", "brand"))
                .and_then(|v| v.as_str())
                .unwrap_or("black")
                .to_string();
            StyleObject::new().with("borderColor", brand)
        });

        let theme = Theme::new().scale("colors", json!({ "brand": "teal" }));
        let style = base.resolve(&RenderProps::new().theme(theme));
        assert_eq!(style.get("borderColor"), Some(&StyleValue::from("teal")));
    }

    #[test]
    fn test_debug_computed() {
        let base = BaseStyle::computed(|_| StyleObject::new());
        assert_eq!(format!("{:?}", base), "Computed(..)");
    }
}
