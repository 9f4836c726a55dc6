//! Where a resolver loads its configuration from.

use std::path::PathBuf;

/// Directory searched when no source is given, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = "config";
/// File name (without extension) searched when no source is given.
pub const DEFAULT_FILE_STEM: &str = "configuration";

/// The three ways a resolver can be fed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Discover `<config_dir>/<file_stem>.yml`, then `.json`.
    #[default]
    Default,
    /// A single YAML or JSON file.
    File(PathBuf),
    /// Several files, shallow-merged left to right (last one wins).
    Files(Vec<PathBuf>),
}

impl ConfigSource {
    /// True for `Default` and for sources that name nothing: an empty path or
    /// an empty file list. Those are loaded through default discovery.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Default => true,
            Self::File(path) => path.as_os_str().is_empty(),
            Self::Files(paths) => paths.is_empty(),
        }
    }
}

impl From<&str> for ConfigSource {
    fn from(path: &str) -> Self {
        Self::File(PathBuf::from(path))
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<Vec<PathBuf>> for ConfigSource {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Files(paths)
    }
}

impl From<Vec<&str>> for ConfigSource {
    fn from(paths: Vec<&str>) -> Self {
        Self::Files(paths.into_iter().map(PathBuf::from).collect())
    }
}

impl<T: Into<ConfigSource>> From<Option<T>> for ConfigSource {
    fn from(source: Option<T>) -> Self {
        source.map(Into::into).unwrap_or_default()
    }
}

/// Settings that control default discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    pub config_dir: PathBuf,
    pub file_stem: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }
}

impl ResolverOptions {
    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }
}
