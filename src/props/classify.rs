//! Splitting a property bag into style props and everything else.

use crate::style::{StyleObject, StyleValue};

use super::table::StylePropertyTable;

/// Keeps the entries for which `predicate(value, name)` holds.
///
/// Surviving keys keep their insertion order; `bag` is not modified.
pub fn classify<F>(bag: &StyleObject, predicate: F) -> StyleObject
where
    F: FnMut(&StyleValue, &str) -> bool,
{
    bag.filter(predicate)
}

/// Returns the entries of `bag` whose names the table recognizes as style props.
///
/// # Example
///
/// ```rust
/// use style_system::{style_props, StyleObject, SystemProps};
///
/// let bag = StyleObject::new()
///     .with("onClick", "handler")
///     .with("mt", 4)
///     .with("id", "main");
///
/// let styles = style_props(&bag, &SystemProps);
/// assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["mt"]);
/// ```
pub fn style_props(bag: &StyleObject, table: &dyn StylePropertyTable) -> StyleObject {
    classify(bag, |_, name| table.is_style_prop(name))
}

/// Partitions `bag` into `(style props, other props)`.
pub fn split_style_props(
    bag: &StyleObject,
    table: &dyn StylePropertyTable,
) -> (StyleObject, StyleObject) {
    let mut styles = StyleObject::new();
    let mut others = StyleObject::new();
    for (name, value) in bag.iter() {
        if table.is_style_prop(name) {
            styles.insert(name, value.clone());
        } else {
            others.insert(name, value.clone());
        }
    }
    (styles, others)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::SystemProps;

    fn bag() -> StyleObject {
        StyleObject::new()
            .with("color", "red")
            .with("onClick", "handler")
            .with("px", 4)
            .with("data-testid", "box")
            .with("_hover", StyleObject::new().with("color", "blue"))
    }

    #[test]
    fn test_classify_with_custom_predicate() {
        let numbers = classify(&bag(), |value, _| value.as_number().is_some());
        assert_eq!(numbers.keys().collect::<Vec<_>>(), vec!["px"]);
    }

    #[test]
    fn test_style_props_keeps_order() {
        let styles = style_props(&bag(), &SystemProps);
        assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["color", "px", "_hover"]);
    }

    #[test]
    fn test_style_props_keeps_undefined_values() {
        let bag = StyleObject::new().with("color", StyleValue::Undefined);
        let styles = style_props(&bag, &SystemProps);
        assert!(styles.get("color").unwrap().is_undefined());
    }

    #[test]
    fn test_split_is_a_partition() {
        let input = bag();
        let (styles, others) = split_style_props(&input, &SystemProps);

        assert_eq!(styles.len() + others.len(), input.len());
        assert_eq!(others.keys().collect::<Vec<_>>(), vec!["onClick", "data-testid"]);
        assert_eq!(input.len(), 5);
    }

    #[test]
    fn test_custom_table() {
        struct OnlyColor;
        impl StylePropertyTable for OnlyColor {
            fn lookup(&self, _name: &str) -> Option<&crate::props::PropKind> {
                None
            }
            fn is_style_prop(&self, name: &str) -> bool {
                name == "color"
            }
        }

        let styles = style_props(&bag(), &OnlyColor);
        assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["color"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::props::SystemProps;
    use proptest::prelude::*;

    fn style_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(SystemProps::names().collect::<Vec<_>>())
    }

    fn other_name() -> impl Strategy<Value = String> {
        "on[A-Z][a-z]{1,8}|data-[a-z]{1,8}|aria-[a-z]{1,8}"
            .prop_filter("must not be a style prop", |name| !SystemProps.is_style_prop(name))
    }

    proptest! {
        #[test]
        fn split_matches_table_membership(
            styles in prop::collection::vec(style_name(), 0..12),
            others in prop::collection::vec(other_name(), 0..12),
        ) {
            let mut bag = StyleObject::new();
            for name in &styles {
                bag.insert(*name, 1);
            }
            for name in &others {
                bag.insert(name.as_str(), "x");
            }

            let (picked, rest) = split_style_props(&bag, &SystemProps);

            prop_assert_eq!(picked.len() + rest.len(), bag.len());
            for name in &styles {
                prop_assert!(picked.contains_key(name));
            }
            for name in &others {
                prop_assert!(rest.contains_key(name));
            }
            prop_assert_eq!(style_props(&bag, &SystemProps), picked);
        }
    }
}
