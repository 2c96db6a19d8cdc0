//! Theme tokens consulted while compiling style objects.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::StyleError;
use crate::style::{StyleObject, StyleValue};

/// A named breakpoint and the minimum width where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: String,
}

/// A theme: token scales, breakpoints and reusable style declarations.
///
/// The resolver treats the theme as opaque and only hands it to the
/// compiler. The compiler reads token scales (`colors`, `space`, `sizes`,
/// ...), `breakpoints`, `textStyles` and `layerStyles` from it.
///
/// Cloning is cheap: the token tree is shared.
///
/// # Example
///
/// ```rust
/// use style_system::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .scale("colors", json!({ "brand": { "500": "#2b6cb0" } }))
///     .scale("space", json!({ "4": "1rem" }));
///
/// assert_eq!(theme.token("colors", "brand.500"), Some(&json!("#2b6cb0")));
/// assert_eq!(theme.token("space", "4"), Some(&json!("1rem")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    tokens: Arc<Value>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(Value::Object(Map::new())),
        }
    }

    /// Creates a theme from a JSON value. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self, StyleError> {
        if !value.is_object() {
            return Err(StyleError::ThemeParse(
                "theme root must be a mapping".to_string(),
            ));
        }
        Ok(Self {
            tokens: Arc::new(value),
        })
    }

    /// Parses a theme from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Parses a theme from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    /// Loads a theme file, choosing the parser from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension
    /// or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| StyleError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let theme = match extension.as_deref() {
            Some("json") => Self::from_json(&read()?)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&read()?)?,
            _ => {
                return Err(StyleError::UnsupportedThemeFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    /// Sets a top-level entry, returning the updated theme for chaining.
    pub fn scale(mut self, name: &str, value: Value) -> Self {
        if let Value::Object(root) = Arc::make_mut(&mut self.tokens) {
            root.insert(name.to_string(), value);
        }
        self
    }

    /// Returns the raw token tree.
    pub fn as_value(&self) -> &Value {
        &self.tokens
    }

    /// Looks up a value by dotted path from the theme root.
    ///
    /// Segments index objects by key and arrays by position.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        walk(&self.tokens, path)
    }

    /// Looks up a token in a scale.
    ///
    /// A key is first tried verbatim (scales often use keys like `"0.5"`),
    /// then as a dotted path (`"red.500"`).
    pub fn token(&self, scale: &str, key: &str) -> Option<&Value> {
        let scale = self.get_path(scale)?;
        direct(scale, key).or_else(|| walk(scale, key))
    }

    /// Returns the configured breakpoints in declaration order.
    ///
    /// Accepts either a mapping (`{ base: 0em, md: 48em }`) or a list of
    /// widths; list entries are named by their index.
    pub fn breakpoints(&self) -> Vec<Breakpoint> {
        let Some(raw) = self.tokens.get("breakpoints") else {
            return Vec::new();
        };
        match raw {
            Value::Object(map) => map
                .iter()
                .filter_map(|(name, width)| {
                    scalar_text(width).map(|min_width| Breakpoint {
                        name: name.clone(),
                        min_width,
                    })
                })
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .filter_map(|(i, width)| {
                    scalar_text(width).map(|min_width| Breakpoint {
                        name: i.to_string(),
                        min_width,
                    })
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the declaration stored under `textStyles.<name>`.
    pub fn text_style(&self, name: &str) -> Option<StyleObject> {
        self.style_at("textStyles", name)
    }

    /// Returns the declaration stored under `layerStyles.<name>`.
    pub fn layer_style(&self, name: &str) -> Option<StyleObject> {
        self.style_at("layerStyles", name)
    }

    /// Returns the declaration found at `scale` + `key`, if it is a mapping.
    ///
    /// An empty `scale` makes `key` a path from the theme root.
    pub fn style_at(&self, scale: &str, key: &str) -> Option<StyleObject> {
        let value = if scale.is_empty() {
            self.get_path(key)?
        } else {
            self.token(scale, key)?
        };
        match StyleValue::from(value.clone()) {
            StyleValue::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

fn direct<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn walk<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |current, segment| direct(current, segment))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format!("{}px", n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_default_is_empty() {
        let theme = Theme::default();
        assert_eq!(theme.as_value(), &json!({}));
        assert!(theme.breakpoints().is_empty());
    }

    #[test]
    fn test_token_direct_key_before_path() {
        let theme = Theme::new().scale("space", json!({ "0.5": "0.125rem", "1": "0.25rem" }));
        assert_eq!(theme.token("space", "0.5"), Some(&json!("0.125rem")));
        assert_eq!(theme.token("space", "1"), Some(&json!("0.25rem")));
    }

    #[test]
    fn test_token_nested_path() {
        let theme = Theme::new().scale("colors", json!({ "red": { "500": "#e53e3e" } }));
        assert_eq!(theme.token("colors", "red.500"), Some(&json!("#e53e3e")));
        assert_eq!(theme.token("colors", "red.600"), None);
        assert_eq!(theme.token("missing", "red.500"), None);
    }

    #[test]
    fn test_token_array_scale() {
        let theme = Theme::new().scale("space", json!([0, 4, 8, 16]));
        assert_eq!(theme.token("space", "2"), Some(&json!(8)));
    }

    #[test]
    fn test_token_dotted_scale() {
        let theme = Theme::new().scale("transition", json!({ "duration": { "fast": "150ms" } }));
        assert_eq!(theme.token("transition.duration", "fast"), Some(&json!("150ms")));
    }

    #[test]
    fn test_breakpoints_from_mapping_keep_order() {
        let theme = Theme::from_yaml("breakpoints:\n  base: 0em\n  sm: 30em\n  md: 48em\n").unwrap();
        let names: Vec<String> = theme.breakpoints().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["base", "sm", "md"]);
    }

    #[test]
    fn test_breakpoints_from_list() {
        let theme = Theme::new().scale("breakpoints", json!(["0", 480, "768px"]));
        let bps = theme.breakpoints();
        assert_eq!(bps[1].min_width, "480px");
        assert_eq!(bps[2].name, "2");
    }

    #[test]
    fn test_text_style_lookup() {
        let theme = Theme::new().scale(
            "textStyles",
            json!({ "h1": { "fontSize": "4xl", "fontWeight": "bold" } }),
        );
        let h1 = theme.text_style("h1").unwrap();
        assert_eq!(h1.get("fontWeight"), Some(&StyleValue::from("bold")));
        assert!(theme.text_style("h2").is_none());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(matches!(
            Theme::from_value(json!([1, 2])),
            Err(StyleError::ThemeParse(_))
        ));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Theme::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_file_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "colors:\n  brand: '#123456'\n").unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.token("colors", "brand"), Some(&json!("#123456")));
    }

    #[test]
    fn test_from_file_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(
            Theme::from_file(&path),
            Err(StyleError::UnsupportedThemeFormat { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Theme::from_file("/nonexistent/theme.json");
        assert!(matches!(result, Err(StyleError::Io { .. })));
    }

    #[test]
    fn test_clone_shares_tokens() {
        let theme = Theme::new().scale("colors", json!({ "a": "b" }));
        let copy = theme.clone();
        assert_eq!(theme, copy);
        let changed = copy.scale("colors", json!({ "a": "c" }));
        assert_ne!(theme, changed);
    }
}
