//! Insertion-ordered style declarations and their merge rules.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// A style declaration: property name to value, in insertion order.
///
/// The same type doubles as a generic property bag, since component props
/// and style declarations share one shape.
///
/// # Example
///
/// ```rust
/// use style_system::StyleObject;
///
/// let mut base = StyleObject::new().with("color", "red").with("fontSize", "24px");
/// let sx = StyleObject::new().with("fontSize", "40px");
///
/// base.assign(&sx);
/// assert_eq!(base.get("fontSize").and_then(|v| v.as_str()), Some("40px"));
/// assert_eq!(base.get("color").and_then(|v| v.as_str()), Some("red"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject(IndexMap<String, StyleValue>);

impl StyleObject {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Adds an entry, returning the updated object for chaining.
    pub fn with<K: Into<String>, V: Into<StyleValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry. An existing key keeps its position and takes the new value.
    pub fn insert<K: Into<String>, V: Into<StyleValue>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut StyleValue> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes an entry, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Copies every entry of `other` onto `self`.
    ///
    /// The last writer wins per key. Nested objects are replaced as a
    /// whole, never merged recursively, and `Undefined` values are copied
    /// like any other value.
    pub fn assign(&mut self, other: &StyleObject) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns a new object with the entries for which `predicate(value, key)` holds.
    ///
    /// Order of the surviving keys is preserved and `self` is left untouched.
    pub fn filter<F>(&self, mut predicate: F) -> StyleObject
    where
        F: FnMut(&StyleValue, &str) -> bool,
    {
        self.0
            .iter()
            .filter(|(k, v)| predicate(*v, k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns a copy without the entries whose value is `Undefined`.
    pub fn filter_undefined(&self) -> StyleObject {
        self.filter(|value, _| !value.is_undefined())
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleObject {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = indexmap::map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
