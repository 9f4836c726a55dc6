//! Error types for configuration loading and lookup.

use std::path::PathBuf;

/// Coarse classification of a [`ConfigError`].
///
/// Callers that only care about "missing file" vs "bad key" can match on this
/// instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Format,
    Type,
    Key,
    Parse,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not find {} in {}", candidates.join(" or "), dir.display())]
    DefaultNotFound { dir: PathBuf, candidates: Vec<String> },

    #[error(
        "Unsupported config extension '{ext}' for file {}: use yml/yaml or json",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf, ext: String },

    #[error("Invalid key path '{0}': segments must be non-empty")]
    InvalidKeyPath(String),

    #[error("Key '{key}' not found{}", at_path(path))]
    KeyNotFound { key: String, path: String },

    #[error("Cannot look up '{key}'{}: value is {found}, not a mapping", at_path(path))]
    NotAMapping { key: String, path: String, found: &'static str },

    #[error("Config root of {} is {found}, expected a mapping to merge", path.display())]
    RootNotMapping { path: PathBuf, found: &'static str },

    #[error("Invalid {format} in {}: {message}", path.display())]
    Parse { path: PathBuf, format: &'static str, message: String },

    #[error("Value at '{key}' has the wrong shape: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed reading config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn at_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" under '{path}'")
    }
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::DefaultNotFound { .. } => ErrorKind::NotFound,
            Self::UnsupportedFormat { .. } => ErrorKind::Format,
            Self::NotAMapping { .. } | Self::RootNotMapping { .. } => ErrorKind::Type,
            Self::KeyNotFound { .. } | Self::InvalidKeyPath(_) => ErrorKind::Key,
            Self::Parse { .. } | Self::Deserialize { .. } => ErrorKind::Parse,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Human-readable name of a value's variant, used in type errors.
pub(crate) fn variant_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}
