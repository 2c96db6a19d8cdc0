//! Errors produced while loading themes and compiling style objects.

use std::path::PathBuf;

/// Error returned when a theme cannot be loaded or a declaration cannot be compiled.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Compilation was attempted without a theme in the render props.
    #[error("no theme available while compiling styles")]
    MissingTheme,

    /// A value has a type the compiler cannot turn into CSS.
    #[error("invalid value for '{property}': {reason}")]
    InvalidValue { property: String, reason: String },

    /// A theme document could not be deserialized.
    #[error("failed to parse theme: {0}")]
    ThemeParse(String),

    /// A theme file could not be read.
    #[error("failed to read theme file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A theme file has an extension that is neither JSON nor YAML.
    #[error("unsupported theme format '{}': expected .json, .yaml or .yml", path.display())]
    UnsupportedThemeFormat { path: PathBuf },
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::ThemeParse(err.to_string())
    }
}

impl From<serde_yaml::Error> for StyleError {
    fn from(err: serde_yaml::Error) -> Self {
        StyleError::ThemeParse(err.to_string())
    }
}
