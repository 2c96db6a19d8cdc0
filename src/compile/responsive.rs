//! Breakpoint lookup for responsive values.

use crate::style::StyleObject;
use crate::theme::Theme;

/// Breakpoints in ascending order, each with the media query that scopes it.
///
/// The first entry is always the base breakpoint and has no media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaQueries {
    entries: Vec<(String, Option<String>)>,
}

impl MediaQueries {
    pub(crate) fn from_theme(theme: &Theme) -> Self {
        let breakpoints = theme.breakpoints();
        let has_base = breakpoints
            .first()
            .map(|bp| bp.name == "base" || is_zero_width(&bp.min_width))
            .unwrap_or(false);

        let mut entries = Vec::with_capacity(breakpoints.len() + 1);
        if !has_base {
            entries.push(("base".to_string(), None));
        }
        for (i, bp) in breakpoints.into_iter().enumerate() {
            let query = if i == 0 && has_base {
                None
            } else {
                Some(format!("@media screen and (min-width: {})", bp.min_width))
            };
            entries.push((bp.name, query));
        }
        Self { entries }
    }

    /// Media query for a responsive array position.
    ///
    /// `Some(None)` is the base, `None` a position past the last breakpoint.
    pub(crate) fn by_index(&self, index: usize) -> Option<Option<&str>> {
        self.entries.get(index).map(|(_, query)| query.as_deref())
    }

    /// Media query for a named breakpoint, with the same shape as [`Self::by_index`].
    pub(crate) fn by_name(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(bp, _)| bp == name)
            .map(|(_, query)| query.as_deref())
    }

    /// Returns `true` if every key of `obj` names a breakpoint.
    pub(crate) fn is_breakpoint_object(&self, obj: &StyleObject) -> bool {
        !obj.is_empty() && obj.keys().all(|key| self.by_name(key).is_some())
    }
}

fn is_zero_width(width: &str) -> bool {
    let digits = width.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    digits.parse::<f64>().map(|n| n == 0.0).unwrap_or(false)
}
