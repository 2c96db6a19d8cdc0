//! The style property table: which prop names are style props and how
//! their values become CSS.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// How a raw prop value is normalized after token lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Values are passed through untouched (`zIndex`, `opacity`, ...).
    None,
    /// Unitless numbers become pixel lengths.
    Px,
    /// Non-zero numbers with `|n| <= 1` become percentages (`-0.5` is
    /// `-50%`), all other numbers pixel lengths (`-2` is `-2px`).
    Fraction,
    /// Like [`Transform::Px`], and `"-<token>"` resolves to the negated token.
    Negatable,
}

/// A style prop that maps onto one or more CSS properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropConfig {
    /// CSS properties the prop expands to.
    pub properties: &'static [&'static str],
    /// Theme scale used to resolve tokens, if any.
    pub scale: Option<&'static str>,
    pub transform: Transform,
}

/// What a recognized style prop means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropKind {
    Css(PropConfig),
    /// A pseudo prop such as `_hover`; its value is a nested declaration
    /// placed under the given selector.
    Pseudo(&'static str),
    /// A prop whose value names a declaration stored in the theme.
    /// `None` means the value is a dotted path from the theme root.
    ThemeStyle(Option<&'static str>),
}

/// Read-only lookup service answering "is this name a style prop?".
///
/// Implementations are initialised once and shared between renders.
pub trait StylePropertyTable: Send + Sync {
    fn lookup(&self, name: &str) -> Option<&PropKind>;

    fn is_style_prop(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// The built-in table of system style props.
///
/// # Example
///
/// ```rust
/// use style_system::{StylePropertyTable, SystemProps};
///
/// assert!(SystemProps.is_style_prop("mx"));
/// assert!(SystemProps.is_style_prop("_hover"));
/// assert!(!SystemProps.is_style_prop("onClick"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProps;

impl StylePropertyTable for SystemProps {
    fn lookup(&self, name: &str) -> Option<&PropKind> {
        SYSTEM_PROPS.get(name)
    }
}

impl SystemProps {
    /// All prop names known to the built-in table, in no particular order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SYSTEM_PROPS.keys().copied()
    }
}

const SPACE: Option<&str> = Some("space");
const SIZES: Option<&str> = Some("sizes");
const COLORS: Option<&str> = Some("colors");

type Entry = (&'static [&'static str], &'static [&'static str], Option<&'static str>, Transform);

/// `(prop names, css properties, scale, transform)`.
///
/// An empty property list means the prop name is itself the CSS property.
const CSS_ENTRIES: &[Entry] = &[
    // space
    (&["margin", "m"], &["margin"], SPACE, Transform::Negatable),
    (&["marginTop", "mt"], &["marginTop"], SPACE, Transform::Negatable),
    (&["marginRight", "mr"], &["marginRight"], SPACE, Transform::Negatable),
    (&["marginBottom", "mb"], &["marginBottom"], SPACE, Transform::Negatable),
    (&["marginLeft", "ml"], &["marginLeft"], SPACE, Transform::Negatable),
    (&["marginStart", "ms"], &["marginInlineStart"], SPACE, Transform::Negatable),
    (&["marginEnd", "me"], &["marginInlineEnd"], SPACE, Transform::Negatable),
    (&["marginX", "mx"], &["marginInlineStart", "marginInlineEnd"], SPACE, Transform::Negatable),
    (&["marginY", "my"], &["marginTop", "marginBottom"], SPACE, Transform::Negatable),
    (&["padding", "p"], &["padding"], SPACE, Transform::Px),
    (&["paddingTop", "pt"], &["paddingTop"], SPACE, Transform::Px),
    (&["paddingRight", "pr"], &["paddingRight"], SPACE, Transform::Px),
    (&["paddingBottom", "pb"], &["paddingBottom"], SPACE, Transform::Px),
    (&["paddingLeft", "pl"], &["paddingLeft"], SPACE, Transform::Px),
    (&["paddingStart", "ps"], &["paddingInlineStart"], SPACE, Transform::Px),
    (&["paddingEnd", "pe"], &["paddingInlineEnd"], SPACE, Transform::Px),
    (&["paddingX", "px"], &["paddingInlineStart", "paddingInlineEnd"], SPACE, Transform::Px),
    (&["paddingY", "py"], &["paddingTop", "paddingBottom"], SPACE, Transform::Px),
    (&["gap", "gridGap"], &["gap"], SPACE, Transform::Px),
    (&["rowGap", "gridRowGap"], &["rowGap"], SPACE, Transform::Px),
    (&["columnGap", "gridColumnGap"], &["columnGap"], SPACE, Transform::Px),
    // position
    (&["position", "pos"], &["position"], None, Transform::None),
    (&["top"], &[], SPACE, Transform::Negatable),
    (&["right"], &[], SPACE, Transform::Negatable),
    (&["bottom"], &[], SPACE, Transform::Negatable),
    (&["left"], &[], SPACE, Transform::Negatable),
    (&["inset"], &[], SPACE, Transform::Negatable),
    (&["insetX"], &["left", "right"], SPACE, Transform::Negatable),
    (&["insetY"], &["top", "bottom"], SPACE, Transform::Negatable),
    (&["zIndex"], &[], Some("zIndices"), Transform::None),
    // color
    (&["color", "textColor"], &["color"], COLORS, Transform::None),
    (&["fill"], &[], COLORS, Transform::None),
    (&["stroke"], &[], COLORS, Transform::None),
    (&["caretColor"], &[], COLORS, Transform::None),
    (&["accentColor"], &[], COLORS, Transform::None),
    (&["outlineColor"], &[], COLORS, Transform::None),
    // background
    (&["background", "bg"], &["background"], COLORS, Transform::None),
    (&["backgroundColor", "bgColor"], &["backgroundColor"], COLORS, Transform::None),
    (&["backgroundImage", "bgImage", "bgImg"], &["backgroundImage"], None, Transform::None),
    (&["backgroundSize", "bgSize"], &["backgroundSize"], None, Transform::None),
    (&["backgroundPosition", "bgPosition", "bgPos"], &["backgroundPosition"], None, Transform::None),
    (&["backgroundRepeat", "bgRepeat"], &["backgroundRepeat"], None, Transform::None),
    (&["backgroundAttachment", "bgAttachment"], &["backgroundAttachment"], None, Transform::None),
    (&["backgroundClip", "bgClip"], &["backgroundClip"], None, Transform::None),
    // typography
    (&["fontFamily"], &[], Some("fonts"), Transform::None),
    (&["fontSize"], &[], Some("fontSizes"), Transform::Px),
    (&["fontWeight"], &[], Some("fontWeights"), Transform::None),
    (&["lineHeight"], &[], Some("lineHeights"), Transform::None),
    (&["letterSpacing"], &[], Some("letterSpacings"), Transform::None),
    (&["textAlign"], &[], None, Transform::None),
    (&["fontStyle"], &[], None, Transform::None),
    (&["textTransform"], &[], None, Transform::None),
    (&["textDecoration"], &[], None, Transform::None),
    (&["textOverflow"], &[], None, Transform::None),
    (&["textIndent"], &[], None, Transform::Px),
    (&["whiteSpace"], &[], None, Transform::None),
    (&["wordBreak"], &[], None, Transform::None),
    (&["overflowWrap"], &[], None, Transform::None),
    // layout
    (&["width", "w"], &["width"], SIZES, Transform::Fraction),
    (&["height", "h"], &["height"], SIZES, Transform::Fraction),
    (&["minWidth", "minW"], &["minWidth"], SIZES, Transform::Fraction),
    (&["maxWidth", "maxW"], &["maxWidth"], SIZES, Transform::Fraction),
    (&["minHeight", "minH"], &["minHeight"], SIZES, Transform::Fraction),
    (&["maxHeight", "maxH"], &["maxHeight"], SIZES, Transform::Fraction),
    (&["boxSize"], &["width", "height"], SIZES, Transform::Fraction),
    (&["display"], &[], None, Transform::None),
    (&["overflow"], &[], None, Transform::None),
    (&["overflowX"], &[], None, Transform::None),
    (&["overflowY"], &[], None, Transform::None),
    (&["verticalAlign"], &[], None, Transform::None),
    (&["boxSizing"], &[], None, Transform::None),
    (&["visibility"], &[], None, Transform::None),
    (&["float"], &[], None, Transform::None),
    (&["objectFit"], &[], None, Transform::None),
    (&["objectPosition"], &[], None, Transform::None),
    // flexbox
    (&["alignItems"], &[], None, Transform::None),
    (&["alignContent"], &[], None, Transform::None),
    (&["alignSelf"], &[], None, Transform::None),
    (&["justifyItems"], &[], None, Transform::None),
    (&["justifyContent"], &[], None, Transform::None),
    (&["justifySelf"], &[], None, Transform::None),
    (&["flexDirection", "flexDir"], &["flexDirection"], None, Transform::None),
    (&["flexWrap"], &[], None, Transform::None),
    (&["flex"], &[], None, Transform::None),
    (&["flexFlow"], &[], None, Transform::None),
    (&["flexGrow"], &[], None, Transform::None),
    (&["flexShrink"], &[], None, Transform::None),
    (&["flexBasis"], &[], SIZES, Transform::Fraction),
    (&["order"], &[], None, Transform::None),
    (&["placeItems"], &[], None, Transform::None),
    (&["placeContent"], &[], None, Transform::None),
    (&["placeSelf"], &[], None, Transform::None),
    // grid
    (&["gridTemplateColumns", "templateColumns"], &["gridTemplateColumns"], None, Transform::None),
    (&["gridTemplateRows", "templateRows"], &["gridTemplateRows"], None, Transform::None),
    (&["gridTemplateAreas", "templateAreas"], &["gridTemplateAreas"], None, Transform::None),
    (&["gridAutoFlow", "autoFlow"], &["gridAutoFlow"], None, Transform::None),
    (&["gridAutoColumns", "autoColumns"], &["gridAutoColumns"], None, Transform::None),
    (&["gridAutoRows", "autoRows"], &["gridAutoRows"], None, Transform::None),
    (&["gridColumn"], &[], None, Transform::None),
    (&["gridRow"], &[], None, Transform::None),
    (&["gridArea", "area"], &["gridArea"], None, Transform::None),
    (&["gridColumnStart", "colStart"], &["gridColumnStart"], None, Transform::None),
    (&["gridColumnEnd", "colEnd"], &["gridColumnEnd"], None, Transform::None),
    (&["gridRowStart", "rowStart"], &["gridRowStart"], None, Transform::None),
    (&["gridRowEnd", "rowEnd"], &["gridRowEnd"], None, Transform::None),
    // border
    (&["border"], &[], Some("borders"), Transform::None),
    (&["borderTop"], &[], Some("borders"), Transform::None),
    (&["borderRight"], &[], Some("borders"), Transform::None),
    (&["borderBottom"], &[], Some("borders"), Transform::None),
    (&["borderLeft"], &[], Some("borders"), Transform::None),
    (&["borderX"], &["borderLeft", "borderRight"], Some("borders"), Transform::None),
    (&["borderY"], &["borderTop", "borderBottom"], Some("borders"), Transform::None),
    (&["borderWidth"], &[], Some("borderWidths"), Transform::Px),
    (&["borderTopWidth"], &[], Some("borderWidths"), Transform::Px),
    (&["borderRightWidth"], &[], Some("borderWidths"), Transform::Px),
    (&["borderBottomWidth"], &[], Some("borderWidths"), Transform::Px),
    (&["borderLeftWidth"], &[], Some("borderWidths"), Transform::Px),
    (&["borderStyle"], &[], Some("borderStyles"), Transform::None),
    (&["borderColor"], &[], COLORS, Transform::None),
    (&["borderTopColor"], &[], COLORS, Transform::None),
    (&["borderRightColor"], &[], COLORS, Transform::None),
    (&["borderBottomColor"], &[], COLORS, Transform::None),
    (&["borderLeftColor"], &[], COLORS, Transform::None),
    (&["borderRadius", "rounded"], &["borderRadius"], Some("radii"), Transform::Px),
    (
        &["borderTopRadius", "roundedTop"],
        &["borderTopLeftRadius", "borderTopRightRadius"],
        Some("radii"),
        Transform::Px,
    ),
    (
        &["borderBottomRadius", "roundedBottom"],
        &["borderBottomLeftRadius", "borderBottomRightRadius"],
        Some("radii"),
        Transform::Px,
    ),
    (
        &["borderLeftRadius", "roundedLeft"],
        &["borderTopLeftRadius", "borderBottomLeftRadius"],
        Some("radii"),
        Transform::Px,
    ),
    (
        &["borderRightRadius", "roundedRight"],
        &["borderTopRightRadius", "borderBottomRightRadius"],
        Some("radii"),
        Transform::Px,
    ),
    (&["outline"], &[], None, Transform::None),
    (&["outlineWidth"], &[], Some("borderWidths"), Transform::Px),
    (&["outlineOffset"], &[], None, Transform::Px),
    // shadow
    (&["boxShadow", "shadow"], &["boxShadow"], Some("shadows"), Transform::None),
    (&["textShadow"], &[], Some("shadows"), Transform::None),
    // other visual properties
    (&["opacity"], &[], None, Transform::None),
    (&["cursor"], &[], None, Transform::None),
    (&["pointerEvents"], &[], None, Transform::None),
    (&["userSelect"], &[], None, Transform::None),
    (&["appearance"], &[], None, Transform::None),
    (&["resize"], &[], None, Transform::None),
    (&["transform"], &[], None, Transform::None),
    (&["transformOrigin"], &[], None, Transform::None),
    (&["transition"], &[], None, Transform::None),
    (&["transitionDuration"], &[], Some("transition.duration"), Transform::None),
    (&["transitionTimingFunction"], &[], Some("transition.easing"), Transform::None),
    (&["animation"], &[], None, Transform::None),
    (&["willChange"], &[], None, Transform::None),
    (&["filter"], &[], None, Transform::None),
    (&["backdropFilter"], &[], None, Transform::None),
    (&["mixBlendMode"], &[], None, Transform::None),
    (&["clipPath"], &[], None, Transform::None),
    (&["listStyleType"], &[], None, Transform::None),
    (&["listStylePosition"], &[], None, Transform::None),
    (&["listStyleImage"], &[], None, Transform::None),
];

/// `(prop name, selector)`. `&` stands for the styled element.
const PSEUDO_ENTRIES: &[(&str, &str)] = &[
    ("_hover", "&:hover, &[data-hover]"),
    ("_active", "&:active, &[data-active]"),
    ("_focus", "&:focus, &[data-focus]"),
    ("_focusVisible", "&:focus-visible"),
    ("_focusWithin", "&:focus-within"),
    ("_visited", "&:visited"),
    ("_disabled", "&:disabled, &[disabled], &[aria-disabled=true], &[data-disabled]"),
    ("_readOnly", "&[aria-readonly=true], &[readonly], &[data-readonly]"),
    ("_invalid", "&[aria-invalid=true], &[data-invalid]"),
    ("_checked", "&[aria-checked=true], &[data-checked]"),
    ("_selected", "&[aria-selected=true], &[data-selected]"),
    ("_expanded", "&[aria-expanded=true], &[data-expanded]"),
    ("_placeholder", "&::placeholder"),
    ("_before", "&::before"),
    ("_after", "&::after"),
    ("_first", "&:first-of-type"),
    ("_last", "&:last-of-type"),
    ("_odd", "&:nth-of-type(odd)"),
    ("_even", "&:nth-of-type(even)"),
    ("_groupHover", "[role=group]:hover &, [data-group]:hover &"),
    ("_dark", ".dark &, [data-theme=dark] &, &[data-theme=dark]"),
    ("_light", ".light &, [data-theme=light] &, &[data-theme=light]"),
];

static SYSTEM_PROPS: Lazy<HashMap<&'static str, PropKind>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for (names, properties, scale, transform) in CSS_ENTRIES {
        for name in *names {
            let properties: &'static [&'static str] = if properties.is_empty() {
                std::slice::from_ref(name)
            } else {
                *properties
            };
            table.insert(
                *name,
                PropKind::Css(PropConfig {
                    properties,
                    scale: *scale,
                    transform: *transform,
                }),
            );
        }
    }

    for (name, selector) in PSEUDO_ENTRIES {
        table.insert(*name, PropKind::Pseudo(*selector));
    }

    table.insert("textStyle", PropKind::ThemeStyle(Some("textStyles")));
    table.insert("layerStyle", PropKind::ThemeStyle(Some("layerStyles")));
    table.insert("apply", PropKind::ThemeStyle(None));

    table
});
