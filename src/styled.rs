//! Component construction: a resolver plus a prop forwarding policy.

use std::sync::Arc;

use crate::error::StyleError;
use crate::props::{forwarded_props, DefaultForwarding, ShouldForwardProp};
use crate::resolver::{BaseStyle, RenderProps, ResolvedStyle, ResolverOptions, StyleResolver};
use crate::style::StyleObject;

/// What a styled component renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// A built-in element such as `div` or `button`.
    Intrinsic(String),
    /// A user-defined component, trusted to handle style props itself.
    Custom(String),
}

impl Component {
    pub fn intrinsic(tag: impl Into<String>) -> Self {
        Component::Intrinsic(tag.into())
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Component::Custom(name.into())
    }

    /// Classifies a name by convention: lowercase names are intrinsic elements.
    pub fn from_name(name: &str) -> Self {
        if name.starts_with(|c: char| c.is_ascii_lowercase()) {
            Component::intrinsic(name)
        } else {
            Component::custom(name)
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Intrinsic(name) | Component::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Component::Custom(_))
    }
}

/// Options for [`styled`].
#[derive(Clone, Default)]
pub struct StyledOptions {
    pub base_style: Option<BaseStyle>,
    /// Name for debugging and class name generation.
    pub label: Option<String>,
    /// Forwarding policy; [`DefaultForwarding`] when unset.
    pub should_forward_prop: Option<Arc<dyn ShouldForwardProp>>,
}

impl StyledOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_style(mut self, base_style: impl Into<BaseStyle>) -> Self {
        self.base_style = Some(base_style.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn should_forward_prop(mut self, policy: Arc<dyn ShouldForwardProp>) -> Self {
        self.should_forward_prop = Some(policy);
        self
    }
}

impl std::fmt::Debug for StyledOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyledOptions")
            .field("base_style", &self.base_style)
            .field("label", &self.label)
            .field("should_forward_prop", &self.should_forward_prop.is_some())
            .finish()
    }
}

/// A component definition with its styles resolved per render.
#[derive(Clone)]
pub struct StyledComponent {
    component: Component,
    label: Option<String>,
    resolver: StyleResolver,
    forward: Arc<dyn ShouldForwardProp>,
}

/// The output of one render: what to draw, how to style it, and which
/// props to hand to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledElement {
    pub element: Component,
    pub style: ResolvedStyle,
    pub attributes: StyleObject,
    pub label: Option<String>,
}

/// Wraps a component so it accepts style props, `sx`, `__css`, `css` and `as`.
///
/// The reset is looked up for intrinsic elements only.
///
/// # Example
///
/// ```rust
/// use style_system::{styled, Component, RenderProps, StyleObject, StyledOptions, Theme};
///
/// let button = styled(
///     Component::intrinsic("button"),
///     StyledOptions::new().base_style(StyleObject::new().with("px", 4)),
/// );
///
/// let el = button
///     .render(&RenderProps::new().theme(Theme::new()).prop("color", "red").prop("id", "ok"))
///     .unwrap();
///
/// assert_eq!(el.element.name(), "button");
/// assert!(el.attributes.contains_key("id"));
/// assert!(!el.attributes.contains_key("color"));
/// ```
pub fn styled(component: Component, options: StyledOptions) -> StyledComponent {
    let StyledOptions {
        base_style,
        label,
        should_forward_prop,
    } = options;

    let mut resolver_options = ResolverOptions::new();
    resolver_options.base_style = base_style;
    if let Component::Intrinsic(tag) = &component {
        resolver_options.element = Some(tag.clone());
    }

    StyledComponent {
        component,
        label,
        resolver: StyleResolver::new(resolver_options),
        forward: should_forward_prop.unwrap_or_else(|| Arc::new(DefaultForwarding::new())),
    }
}

impl StyledComponent {
    /// Replaces the resolver's collaborators while keeping its options.
    pub fn map_resolver(mut self, f: impl FnOnce(StyleResolver) -> StyleResolver) -> Self {
        self.resolver = f(self.resolver);
        self
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    /// Resolves styles and picks the forwarded props for one render.
    ///
    /// # Errors
    ///
    /// Returns the compiler's error unchanged.
    pub fn render(&self, props: &RenderProps) -> Result<StyledElement, StyleError> {
        let element = match &props.as_element {
            Some(name) => Component::from_name(name),
            None => self.component.clone(),
        };
        let style = self.resolver.resolve(props)?;
        let attributes = forwarded_props(&props.rest, self.forward.as_ref(), element.is_custom());

        Ok(StyledElement {
            element,
            style,
            attributes,
            label: self.label.clone(),
        })
    }
}

impl std::fmt::Debug for StyledComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyledComponent")
            .field("component", &self.component)
            .field("label", &self.label)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
