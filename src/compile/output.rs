//! The compiled style artifact and its CSS text form.

use serde::Serialize;

use crate::style::{StyleObject, StyleValue};

/// A declaration after compilation: CSS property names, resolved tokens,
/// nested selectors and media queries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CompiledStyle {
    declaration: StyleObject,
}

impl CompiledStyle {
    pub fn new(declaration: StyleObject) -> Self {
        Self { declaration }
    }

    pub fn declaration(&self) -> &StyleObject {
        &self.declaration
    }

    pub fn into_declaration(self) -> StyleObject {
        self.declaration
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.declaration.get(property)
    }

    pub fn is_empty(&self) -> bool {
        self.declaration.is_empty()
    }

    /// Serializes the style as CSS rules scoped to `selector`.
    ///
    /// Nested keys containing `&` are expanded with the parent selector,
    /// other nested keys become descendant selectors, and `@` keys wrap
    /// their block in an at-rule.
    ///
    /// # Example
    ///
    /// ```rust
    /// use style_system::{CompiledStyle, StyleObject};
    ///
    /// let style = CompiledStyle::new(
    ///     StyleObject::new()
    ///         .with("backgroundColor", "red")
    ///         .with("&:hover", StyleObject::new().with("color", "white")),
    /// );
    /// assert_eq!(
    ///     style.to_css(".box"),
    ///     ".box{background-color:red;}.box:hover{color:white;}"
    /// );
    /// ```
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        write_rules(&mut out, selector, &self.declaration);
        out
    }
}

fn write_rules(out: &mut String, selector: &str, declaration: &StyleObject) {
    let mut body = String::new();
    let mut nested = Vec::new();

    for (key, value) in declaration.iter() {
        match value {
            StyleValue::Object(block) => nested.push((key, block)),
            other => {
                if let Some(text) = other.to_css_text() {
                    body.push_str(&to_kebab_case(key));
                    body.push(':');
                    body.push_str(&text);
                    body.push(';');
                }
            }
        }
    }

    if !body.is_empty() {
        out.push_str(selector);
        out.push('{');
        out.push_str(&body);
        out.push('}');
    }

    for (key, block) in nested {
        if key.starts_with('@') {
            let mut inner = String::new();
            write_rules(&mut inner, selector, block);
            if !inner.is_empty() {
                out.push_str(key);
                out.push('{');
                out.push_str(&inner);
                out.push('}');
            }
        } else {
            write_rules(out, &nest_selector(selector, key), block);
        }
    }
}

/// Combines a parent selector list with a nested selector list.
fn nest_selector(parent: &str, nested: &str) -> String {
    let mut combined = Vec::new();
    for child in split_selector_list(nested) {
        for outer in split_selector_list(parent) {
            if child.contains('&') {
                combined.push(child.replace('&', outer));
            } else {
                combined.push(format!("{} {}", outer, child));
            }
        }
    }
    combined.join(", ")
}

/// Splits a selector list on its top-level commas.
///
/// Commas inside `(...)`, `[...]` or quoted strings belong to a single
/// selector (`:is(.a, .b)`, `[data-x="a,b"]`).
fn split_selector_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' | '[' => depth += 1,
                ')' | ']' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(&list[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    parts.push(&list[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Converts a camelCase property name to its CSS spelling.
///
/// Vendor prefixes (`WebkitAppearance`, `msFlex`) gain a leading dash and
/// custom properties (`--brand`) are left alone.
pub fn to_kebab_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
