//! Deciding which props reach the rendered element.

use std::sync::Arc;

use crate::style::StyleObject;

use super::table::{StylePropertyTable, SystemProps};

/// Props consumed by the styling layer itself that are never style props.
const RESERVED_PROPS: &[&str] = &[
    "as",
    "__css",
    "css",
    "sx",
    "theme",
    "noOfLines",
    "focusBorderColor",
    "errorBorderColor",
];

/// HTML attributes that share a name with a style prop and are spelled
/// with an `html` prefix to reach the element.
const VALID_HTML_PROPS: &[&str] = &["htmlWidth", "htmlHeight", "htmlSize"];

/// Decides whether a prop is passed through to the rendered element.
pub trait ShouldForwardProp: Send + Sync {
    fn should_forward(&self, name: &str) -> bool;
}

impl<F> ShouldForwardProp for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn should_forward(&self, name: &str) -> bool {
        self(name)
    }
}

/// Forwards everything except style props and the styling layer's own props.
///
/// # Example
///
/// ```rust
/// use style_system::{DefaultForwarding, ShouldForwardProp};
///
/// let policy = DefaultForwarding::new();
/// assert!(policy.should_forward("onClick"));
/// assert!(policy.should_forward("htmlWidth"));
/// assert!(!policy.should_forward("color"));
/// assert!(!policy.should_forward("sx"));
/// ```
#[derive(Clone)]
pub struct DefaultForwarding {
    table: Arc<dyn StylePropertyTable>,
}

impl DefaultForwarding {
    pub fn new() -> Self {
        Self::with_table(Arc::new(SystemProps))
    }

    /// Uses a custom style property table to recognize style props.
    pub fn with_table(table: Arc<dyn StylePropertyTable>) -> Self {
        Self { table }
    }
}

impl Default for DefaultForwarding {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DefaultForwarding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultForwarding").finish_non_exhaustive()
    }
}

impl ShouldForwardProp for DefaultForwarding {
    fn should_forward(&self, name: &str) -> bool {
        if VALID_HTML_PROPS.contains(&name) {
            return true;
        }
        !(RESERVED_PROPS.contains(&name) || self.table.is_style_prop(name))
    }
}

/// Collects the props to hand to the rendered element.
///
/// Custom components receive every prop; intrinsic elements only the ones
/// the policy accepts.
pub fn forwarded_props(
    bag: &StyleObject,
    policy: &dyn ShouldForwardProp,
    custom_component: bool,
) -> StyleObject {
    if custom_component {
        return bag.clone();
    }
    bag.filter(|_, name| policy.should_forward(name))
}
