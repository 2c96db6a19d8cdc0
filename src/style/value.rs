//! Values stored in style declarations.

use serde::{Deserialize, Serialize};

use super::object::StyleObject;

/// A single value in a style declaration.
///
/// `Undefined` means "the key is present but not set". It is distinct from
/// an empty string and deserializes from `null`, so it survives a round trip
/// through JSON or YAML documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    #[default]
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    /// Responsive value: one entry per breakpoint, starting at the base.
    Array(Vec<StyleValue>),
    /// Nested declaration (pseudo selector, media query or breakpoint map).
    Object(StyleObject),
}

impl StyleValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, StyleValue::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            StyleValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[StyleValue]> {
        match self {
            StyleValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the key used to look this value up in a theme scale.
    ///
    /// Only strings and numbers can name a token.
    pub fn token_key(&self) -> Option<String> {
        match self {
            StyleValue::String(s) => Some(s.clone()),
            StyleValue::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }

    /// Renders a scalar value as CSS text. Returns `None` for everything else.
    pub fn to_css_text(&self) -> Option<String> {
        match self {
            StyleValue::String(s) => Some(s.clone()),
            StyleValue::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Undefined => "undefined",
            StyleValue::Bool(_) => "boolean",
            StyleValue::Number(_) => "number",
            StyleValue::String(_) => "string",
            StyleValue::Array(_) => "array",
            StyleValue::Object(_) => "object",
        }
    }
}

/// Formats a number the way CSS expects it: no trailing `.0` on integers.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    n.to_string()
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

impl From<&String> for StyleValue {
    fn from(s: &String) -> Self {
        StyleValue::String(s.clone())
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(n: $ty) -> Self {
                    StyleValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize, f32, f64);

impl From<StyleObject> for StyleValue {
    fn from(obj: StyleObject) -> Self {
        StyleValue::Object(obj)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(items: Vec<T>) -> Self {
        StyleValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => StyleValue::Undefined,
        }
    }
}

impl From<serde_json::Value> for StyleValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => StyleValue::Undefined,
            serde_json::Value::Bool(b) => StyleValue::Bool(b),
            serde_json::Value::Number(n) => StyleValue::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => StyleValue::String(s),
            serde_json::Value::Array(items) => {
                StyleValue::Array(items.into_iter().map(StyleValue::from).collect())
            }
            serde_json::Value::Object(map) => StyleValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, StyleValue::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_none_is_undefined() {
        let value: StyleValue = Option::<&str>::None.into();
        assert!(value.is_undefined());
    }

    #[test]
    fn test_number_css_text_drops_fraction() {
        assert_eq!(StyleValue::from(4).to_css_text().as_deref(), Some("4"));
        assert_eq!(StyleValue::from(0.5).to_css_text().as_deref(), Some("0.5"));
        assert_eq!(StyleValue::from(-0.0).to_css_text().as_deref(), Some("0"));
    }

    #[test]
    fn test_object_and_bool_have_no_css_text() {
        assert_eq!(StyleValue::from(true).to_css_text(), None);
        assert_eq!(StyleValue::from(StyleObject::new()).to_css_text(), None);
    }

    #[test]
    fn test_deserialize_null_as_undefined() {
        let value: StyleValue = serde_json::from_str("null").unwrap();
        assert!(value.is_undefined());
    }

    #[test]
    fn test_deserialize_nested() {
        let value: StyleValue =
            serde_json::from_str(r#"{"color": "red", "m": [1, 2]}"#).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("color"), Some(&StyleValue::from("red")));
        assert_eq!(
            obj.get("m"),
            Some(&StyleValue::Array(vec![1.into(), 2.into()]))
        );
    }

    #[test]
    fn test_from_json_value() {
        let value = StyleValue::from(serde_json::json!({"a": null, "b": 2}));
        let obj = value.as_object().unwrap();
        assert!(obj.get("a").unwrap().is_undefined());
        assert_eq!(obj.get("b").unwrap().as_number(), Some(2.0));
    }
}
