//! The default compiler: style props and theme tokens to CSS properties.

use std::sync::Arc;

use crate::error::StyleError;
use crate::props::{PropKind, StylePropertyTable, SystemProps, Transform};
use crate::style::{format_number, StyleObject, StyleValue};
use crate::theme::Theme;

use super::output::CompiledStyle;
use super::responsive::MediaQueries;
use super::CssCompiler;

/// How deep `textStyle`/`layerStyle`/`apply` lookups may nest before the
/// compiler assumes a cycle in the theme.
const MAX_THEME_STYLE_DEPTH: usize = 8;

/// Compiles declarations written with style props into plain CSS objects.
///
/// For each entry it:
///
/// 1. Drops `Undefined` values
/// 2. Expands aliases and shorthands (`bg`, `mx`, `boxSize`) to CSS properties
/// 3. Resolves theme tokens from the prop's scale (`colors`, `space`, ...)
/// 4. Normalizes numbers (`4` → `4px`, `0.5` → `50%` for sizes)
/// 5. Expands responsive arrays and breakpoint maps into media queries
/// 6. Places pseudo props under their selectors and recurses into nested blocks
///
/// Keys the property table does not know are passed through unchanged.
///
/// # Example
///
/// ```rust
/// use style_system::{CssCompiler, StyleObject, SystemCompiler, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new().scale("colors", json!({ "brand": "#2b6cb0" }));
/// let decl = StyleObject::new().with("bg", "brand").with("px", 4);
///
/// let compiled = SystemCompiler::new().compile(&decl, Some(&theme)).unwrap();
/// assert_eq!(compiled.to_css(".x"),
///     ".x{background:#2b6cb0;padding-inline-start:4px;padding-inline-end:4px;}");
/// ```
#[derive(Clone)]
pub struct SystemCompiler {
    table: Arc<dyn StylePropertyTable>,
}

#[derive(Clone, Copy)]
struct Context<'a> {
    theme: &'a Theme,
    media: &'a MediaQueries,
    depth: usize,
}

impl SystemCompiler {
    pub fn new() -> Self {
        Self::with_table(Arc::new(SystemProps))
    }

    /// Uses a custom style property table for alias expansion and token scales.
    pub fn with_table(table: Arc<dyn StylePropertyTable>) -> Self {
        Self { table }
    }

    fn compile_into(
        &self,
        out: &mut StyleObject,
        declaration: &StyleObject,
        ctx: Context<'_>,
    ) -> Result<(), StyleError> {
        for (key, value) in declaration.iter() {
            self.compile_entry(out, key, value, ctx)?;
        }
        Ok(())
    }

    fn compile_block(
        &self,
        declaration: &StyleObject,
        ctx: Context<'_>,
    ) -> Result<StyleObject, StyleError> {
        let mut block = StyleObject::new();
        self.compile_into(&mut block, declaration, ctx)?;
        Ok(block)
    }

    fn compile_entry(
        &self,
        out: &mut StyleObject,
        key: &str,
        value: &StyleValue,
        ctx: Context<'_>,
    ) -> Result<(), StyleError> {
        if value.is_undefined() {
            return Ok(());
        }

        match self.table.lookup(key) {
            Some(PropKind::Css(config)) => self.emit(
                out,
                key,
                Target {
                    properties: config.properties,
                    scale: config.scale,
                    transform: config.transform,
                },
                value,
                ctx,
            ),
            Some(PropKind::Pseudo(selector)) => match value {
                StyleValue::Object(nested) => {
                    let block = self.compile_block(nested, ctx)?;
                    merge_block(out, selector, block);
                    Ok(())
                }
                other => Err(StyleError::InvalidValue {
                    property: key.to_string(),
                    reason: format!("expected a nested declaration, found {}", other.kind()),
                }),
            },
            Some(PropKind::ThemeStyle(scale)) => {
                self.apply_theme_style(out, key, scale.unwrap_or(""), value, ctx)
            }
            None => self.emit(
                out,
                key,
                Target {
                    properties: &[key],
                    scale: None,
                    transform: Transform::None,
                },
                value,
                ctx,
            ),
        }
    }

    fn apply_theme_style(
        &self,
        out: &mut StyleObject,
        key: &str,
        scale: &str,
        value: &StyleValue,
        ctx: Context<'_>,
    ) -> Result<(), StyleError> {
        let Some(name) = value.token_key() else {
            return Err(StyleError::InvalidValue {
                property: key.to_string(),
                reason: format!("expected a theme style name, found {}", value.kind()),
            });
        };
        if ctx.depth >= MAX_THEME_STYLE_DEPTH {
            return Err(StyleError::InvalidValue {
                property: key.to_string(),
                reason: format!("theme style '{}' nests too deeply", name),
            });
        }

        match ctx.theme.style_at(scale, &name) {
            Some(style) => {
                let inner = Context {
                    depth: ctx.depth + 1,
                    ..ctx
                };
                self.compile_into(out, &style, inner)
            }
            None => {
                tracing::trace!(prop = key, name = %name, "theme style not found");
                Ok(())
            }
        }
    }

    /// Writes one value, which may be responsive or nested, to the target properties.
    fn emit(
        &self,
        out: &mut StyleObject,
        key: &str,
        target: Target<'_>,
        value: &StyleValue,
        ctx: Context<'_>,
    ) -> Result<(), StyleError> {
        match value {
            StyleValue::Undefined => Ok(()),
            StyleValue::Bool(_) => Err(StyleError::InvalidValue {
                property: key.to_string(),
                reason: "booleans are not CSS values".to_string(),
            }),
            StyleValue::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    match ctx.media.by_index(index) {
                        Some(query) => self.emit_at(out, key, target, item, query, ctx)?,
                        None => {
                            tracing::trace!(prop = key, index, "responsive value past last breakpoint");
                        }
                    }
                }
                Ok(())
            }
            StyleValue::Object(map) if ctx.media.is_breakpoint_object(map) => {
                for (name, item) in map.iter() {
                    if let Some(query) = ctx.media.by_name(name) {
                        self.emit_at(out, key, target, item, query, ctx)?;
                    }
                }
                Ok(())
            }
            StyleValue::Object(nested) => {
                let block = self.compile_block(nested, ctx)?;
                merge_block(out, key, block);
                Ok(())
            }
            scalar => {
                let resolved = resolve_scalar(scalar, target, ctx.theme);
                for property in target.properties {
                    out.insert(*property, resolved.clone());
                }
                Ok(())
            }
        }
    }

    fn emit_at(
        &self,
        out: &mut StyleObject,
        key: &str,
        target: Target<'_>,
        value: &StyleValue,
        query: Option<&str>,
        ctx: Context<'_>,
    ) -> Result<(), StyleError> {
        match query {
            None => self.emit(out, key, target, value, ctx),
            Some(query) => {
                let mut block = StyleObject::new();
                self.emit(&mut block, key, target, value, ctx)?;
                if !block.is_empty() {
                    merge_block(out, query, block);
                }
                Ok(())
            }
        }
    }
}

impl Default for SystemCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemCompiler").finish_non_exhaustive()
    }
}

impl CssCompiler for SystemCompiler {
    fn compile(
        &self,
        declaration: &StyleObject,
        theme: Option<&Theme>,
    ) -> Result<CompiledStyle, StyleError> {
        let theme = theme.ok_or(StyleError::MissingTheme)?;
        let media = MediaQueries::from_theme(theme);
        let ctx = Context {
            theme,
            media: &media,
            depth: 0,
        };

        let mut out = StyleObject::new();
        self.compile_into(&mut out, declaration, ctx)?;
        tracing::debug!(
            input = declaration.len(),
            output = out.len(),
            "compiled style object"
        );
        Ok(CompiledStyle::new(out))
    }
}

/// Where a prop's value ends up.
#[derive(Clone, Copy)]
struct Target<'a> {
    properties: &'a [&'a str],
    scale: Option<&'a str>,
    transform: Transform,
}

/// Merges a nested block into `out[key]`, extending an existing block.
fn merge_block(out: &mut StyleObject, key: &str, block: StyleObject) {
    if let Some(StyleValue::Object(existing)) = out.get_mut(key) {
        existing.assign(&block);
    } else {
        out.insert(key, block);
    }
}

fn resolve_scalar(value: &StyleValue, target: Target<'_>, theme: &Theme) -> StyleValue {
    if let (Some(scale), Some(key)) = (target.scale, value.token_key()) {
        if let Some(token) = theme.token(scale, &key) {
            return apply_transform(StyleValue::from(token.clone()), target.transform);
        }
        if target.transform == Transform::Negatable {
            if let Some(token) = key.strip_prefix('-').and_then(|abs| theme.token(scale, abs)) {
                return negate(apply_transform(StyleValue::from(token.clone()), target.transform));
            }
        }
    }
    apply_transform(value.clone(), target.transform)
}

/// Normalizes a number for its prop; other values are returned unchanged.
///
/// `Fraction` is symmetric around zero: `-1..=1` (except `0`) maps to a
/// percentage, anything outside to pixels.
fn apply_transform(value: StyleValue, transform: Transform) -> StyleValue {
    let StyleValue::Number(n) = value else {
        return value;
    };
    match transform {
        Transform::None => value,
        Transform::Px | Transform::Negatable => px(n),
        Transform::Fraction => {
            if n != 0.0 && n.abs() <= 1.0 {
                StyleValue::String(format!("{}%", format_number(n * 100.0)))
            } else {
                px(n)
            }
        }
    }
}

fn px(n: f64) -> StyleValue {
    if n == 0.0 {
        StyleValue::String("0".to_string())
    } else {
        StyleValue::String(format!("{}px", format_number(n)))
    }
}

fn negate(value: StyleValue) -> StyleValue {
    match value {
        StyleValue::Number(n) => StyleValue::Number(-n),
        StyleValue::String(s) if s == "0" => StyleValue::String(s),
        StyleValue::String(s) => match s.strip_prefix('-') {
            Some(positive) => StyleValue::String(positive.to_string()),
            None => StyleValue::String(format!("-{}", s)),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme() -> Theme {
        Theme::new()
            .scale("colors", json!({ "brand": "#2b6cb0", "red": { "500": "#e53e3e" } }))
            .scale("space", json!({ "1": "0.25rem", "4": "1rem", "px": "1px" }))
            .scale("sizes", json!({ "sm": "24rem" }))
            .scale("fontSizes", json!({ "xl": "1.25rem" }))
            .scale("breakpoints", json!({ "base": "0em", "md": "48em", "lg": "62em" }))
            .scale("textStyles", json!({ "caps": { "textTransform": "uppercase", "letterSpacing": "wide" } }))
            .scale("layerStyles", json!({ "card": { "bg": "brand", "textStyle": "caps" } }))
    }

    fn compile(decl: StyleObject) -> StyleObject {
        SystemCompiler::new()
            .compile(&decl, Some(&theme()))
            .unwrap()
            .into_declaration()
    }

    fn s(v: &str) -> StyleValue {
        StyleValue::from(v)
    }

    #[test]
    fn test_missing_theme_fails() {
        let result = SystemCompiler::new().compile(&StyleObject::new(), None);
        assert!(matches!(result, Err(StyleError::MissingTheme)));
    }

    #[test]
    fn test_tokens_and_aliases() {
        let out = compile(
            StyleObject::new()
                .with("color", "red.500")
                .with("bg", "brand")
                .with("m", 4),
        );
        assert_eq!(out.get("color"), Some(&s("#e53e3e")));
        assert_eq!(out.get("background"), Some(&s("#2b6cb0")));
        assert_eq!(out.get("margin"), Some(&s("1rem")));
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let out = compile(StyleObject::new().with("color", "tomato"));
        assert_eq!(out.get("color"), Some(&s("tomato")));
    }

    #[test]
    fn test_number_normalization() {
        let out = compile(
            StyleObject::new()
                .with("p", 3)
                .with("w", 0.5)
                .with("h", 200)
                .with("zIndex", 10)
                .with("mt", 0),
        );
        assert_eq!(out.get("padding"), Some(&s("3px")));
        assert_eq!(out.get("width"), Some(&s("50%")));
        assert_eq!(out.get("height"), Some(&s("200px")));
        assert_eq!(out.get("zIndex"), Some(&StyleValue::from(10)));
        assert_eq!(out.get("marginTop"), Some(&s("0")));
    }

    #[test]
    fn test_fraction_sign_handling() {
        let out = compile(
            StyleObject::new()
                .with("w", -0.5)
                .with("h", -2)
                .with("minW", 1)
                .with("maxW", 1.5),
        );
        assert_eq!(out.get("width"), Some(&s("-50%")));
        assert_eq!(out.get("height"), Some(&s("-2px")));
        assert_eq!(out.get("minWidth"), Some(&s("100%")));
        assert_eq!(out.get("maxWidth"), Some(&s("1.5px")));
    }

    #[test]
    fn test_negative_space_token() {
        let out = compile(StyleObject::new().with("mt", "-4").with("ml", "-px"));
        assert_eq!(out.get("marginTop"), Some(&s("-1rem")));
        assert_eq!(out.get("marginLeft"), Some(&s("-1px")));
    }

    #[test]
    fn test_negative_not_applied_to_padding() {
        let out = compile(StyleObject::new().with("p", "-4"));
        assert_eq!(out.get("padding"), Some(&s("-4")));
    }

    #[test]
    fn test_shorthand_expansion() {
        let out = compile(StyleObject::new().with("py", 2).with("boxSize", "sm"));
        assert_eq!(out.get("paddingTop"), Some(&s("2px")));
        assert_eq!(out.get("paddingBottom"), Some(&s("2px")));
        assert_eq!(out.get("width"), Some(&s("24rem")));
        assert_eq!(out.get("height"), Some(&s("24rem")));
    }

    #[test]
    fn test_undefined_dropped() {
        let out = compile(
            StyleObject::new()
                .with("color", StyleValue::Undefined)
                .with("bg", "brand"),
        );
        assert!(!out.contains_key("color"));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_responsive_array() {
        let out = compile(StyleObject::new().with("fontSize", vec!["xl", "2rem", "3rem", "4rem"]));
        assert_eq!(out.get("fontSize"), Some(&s("1.25rem")));

        let md = out
            .get("@media screen and (min-width: 48em)")
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(md.get("fontSize"), Some(&s("2rem")));

        let lg = out
            .get("@media screen and (min-width: 62em)")
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(lg.get("fontSize"), Some(&s("3rem")));
        // Past the last breakpoint: ignored.
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_responsive_array_skips_undefined_slots() {
        let out = compile(StyleObject::new().with(
            "color",
            StyleValue::Array(vec![StyleValue::Undefined, s("brand")]),
        ));
        assert!(!out.contains_key("color"));
        let md = out
            .get("@media screen and (min-width: 48em)")
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(md.get("color"), Some(&s("#2b6cb0")));
    }

    #[test]
    fn test_responsive_object_shares_media_block() {
        let out = compile(
            StyleObject::new()
                .with("w", StyleObject::new().with("base", 1).with("md", 0.5))
                .with("color", StyleObject::new().with("md", "brand")),
        );
        assert_eq!(out.get("width"), Some(&s("100%")));
        let md = out
            .get("@media screen and (min-width: 48em)")
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(md.get("width"), Some(&s("50%")));
        assert_eq!(md.get("color"), Some(&s("#2b6cb0")));
    }

    #[test]
    fn test_pseudo_props() {
        let out = compile(
            StyleObject::new().with("_hover", StyleObject::new().with("bg", "brand")),
        );
        let hover = out
            .get("&:hover, &[data-hover]")
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(hover.get("background"), Some(&s("#2b6cb0")));
    }

    #[test]
    fn test_color_mode_pseudo_props() {
        let compiled = SystemCompiler::new()
            .compile(
                &StyleObject::new()
                    .with("bg", "brand")
                    .with("_dark", StyleObject::new().with("bg", "red.500")),
                Some(&theme()),
            )
            .unwrap();
        assert_eq!(
            compiled.to_css(".card"),
            ".card{background:#2b6cb0;}\
             .dark .card, [data-theme=dark] .card, .card[data-theme=dark]{background:#e53e3e;}"
        );
    }

    #[test]
    fn test_pseudo_prop_requires_object() {
        let result = SystemCompiler::new()
            .compile(&StyleObject::new().with("_hover", "red"), Some(&theme()));
        assert!(matches!(result, Err(StyleError::InvalidValue { .. })));
    }

    #[test]
    fn test_nested_selector_passthrough() {
        let out = compile(
            StyleObject::new().with("& > p", StyleObject::new().with("mt", 1)),
        );
        let nested = out.get("& > p").and_then(|v| v.as_object()).unwrap();
        assert_eq!(nested.get("marginTop"), Some(&s("0.25rem")));
    }

    #[test]
    fn test_text_and_layer_styles() {
        let out = compile(StyleObject::new().with("layerStyle", "card"));
        assert_eq!(out.get("background"), Some(&s("#2b6cb0")));
        assert_eq!(out.get("textTransform"), Some(&s("uppercase")));
        assert_eq!(out.get("letterSpacing"), Some(&s("wide")));
    }

    #[test]
    fn test_apply_uses_root_path() {
        let out = compile(StyleObject::new().with("apply", "textStyles.caps"));
        assert_eq!(out.get("textTransform"), Some(&s("uppercase")));
    }

    #[test]
    fn test_unknown_text_style_ignored() {
        let out = compile(StyleObject::new().with("textStyle", "missing"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_cyclic_theme_style_fails() {
        let theme = Theme::new().scale("textStyles", json!({ "loop": { "textStyle": "loop" } }));
        let result = SystemCompiler::new()
            .compile(&StyleObject::new().with("textStyle", "loop"), Some(&theme));
        assert!(matches!(result, Err(StyleError::InvalidValue { .. })));
    }

    #[test]
    fn test_boolean_value_fails() {
        let result = SystemCompiler::new()
            .compile(&StyleObject::new().with("color", true), Some(&theme()));
        match result {
            Err(StyleError::InvalidValue { property, .. }) => assert_eq!(property, "color"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let out = compile(StyleObject::new().with("WebkitLineClamp", 3).with("--brand", "red"));
        assert_eq!(out.get("WebkitLineClamp"), Some(&StyleValue::from(3)));
        assert_eq!(out.get("--brand"), Some(&s("red")));
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(s("1rem")), s("-1rem"));
        assert_eq!(negate(s("-1rem")), s("1rem"));
        assert_eq!(negate(s("0")), s("0"));
        assert_eq!(negate(StyleValue::from(4)), StyleValue::from(-4));
    }
}
