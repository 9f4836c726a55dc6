//! Dotted-keyword lookup over a loaded configuration tree.
//!
//! A [`ConfigResolver`] holds two views of the same data:
//! - the *original* tree, exactly as loaded (and merged) at construction
//! - a *selection*, a sub-tree of the original used as the root for
//!   [`ConfigResolver::lookup`] and `resolver["key"]`
//!
//! [`ConfigResolver::get`] always starts from the original tree.
//!
//! ```no_run
//! use pathfinder::config::ConfigResolver;
//!
//! let mut config = ConfigResolver::from_file("config/pipeline.yml")?;
//! let raw_dir = config.get("paths.raw")?.clone();
//!
//! config.select(Some("paths"))?;
//! assert_eq!(config["raw"], raw_dir);
//! # Ok::<(), pathfinder::config::ConfigError>(())
//! ```

use super::error::{variant_name, ConfigError, ConfigResult};
use super::loader::{load_default, load_file};
use super::merge::merge_sources;
use super::path::{resolve, KeyPath};
use super::source::{ConfigSource, ResolverOptions};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::ops::Index;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConfigResolver {
    original: Value,
    selection: Option<KeyPath>,
}

impl ConfigResolver {
    /// Load from `source` using the default discovery options.
    pub fn new(source: impl Into<ConfigSource>) -> ConfigResult<Self> {
        Self::with_options(source, &ResolverOptions::default())
    }

    /// An absent or empty source (empty path, empty file list) falls back to
    /// default discovery.
    pub fn with_options(
        source: impl Into<ConfigSource>,
        options: &ResolverOptions,
    ) -> ConfigResult<Self> {
        let source = source.into();
        let tree = match source {
            _ if source.is_empty() => load_default(options)?.1,
            ConfigSource::File(path) => load_file(&path)?,
            ConfigSource::Files(paths) => load_many(paths)?,
            ConfigSource::Default => load_default(options)?.1,
        };
        Ok(Self::from_value(tree))
    }

    /// Discover `config/configuration.yml` (or `.json`) under the working directory.
    pub fn from_default() -> ConfigResult<Self> {
        Self::new(ConfigSource::Default)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::new(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Load every file and shallow-merge them; the last file wins on key collision.
    pub fn from_files<I, P>(paths: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths = paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        Self::new(ConfigSource::Files(paths))
    }

    pub fn from_value(tree: Value) -> Self {
        Self { original: tree, selection: None }
    }

    /// The full tree as loaded.
    pub fn original(&self) -> &Value {
        &self.original
    }

    /// Path of the current selection, `None` when the root is selected.
    pub fn selection(&self) -> Option<&KeyPath> {
        self.selection.as_ref()
    }

    /// The sub-tree lookups currently start from.
    pub fn selected(&self) -> &Value {
        let Some(path) = &self.selection else {
            return &self.original;
        };
        // `select` only stores paths that resolve, and the tree never changes.
        match resolve(&self.original, path) {
            Ok(value) => value,
            Err(e) => unreachable!("stored selection '{path}' no longer resolves: {e}"),
        }
    }

    /// Resolve `keyword` against the current selection.
    pub fn lookup(&self, keyword: &str) -> ConfigResult<&Value> {
        let path = KeyPath::parse(keyword)?;
        match &self.selection {
            Some(selected) => resolve(&self.original, &selected.join(&path)).map_err(|e| {
                relative_to(e, selected)
            }),
            None => resolve(&self.original, &path),
        }
    }

    /// Resolve `keyword` against the original tree, ignoring any selection.
    pub fn get(&self, keyword: &str) -> ConfigResult<&Value> {
        resolve(&self.original, &KeyPath::parse(keyword)?)
    }

    /// Resolve `keyword` inside the `section` sub-tree of the original tree.
    pub fn get_in(&self, section: &str, keyword: &str) -> ConfigResult<&Value> {
        let section = KeyPath::parse(section)?;
        let keyword = KeyPath::parse(keyword)?;
        resolve(&self.original, &section.join(&keyword))
    }

    /// [`lookup`](Self::lookup) and deserialize the result.
    pub fn lookup_as<T: DeserializeOwned>(&self, keyword: &str) -> ConfigResult<T> {
        deserialize(keyword, self.lookup(keyword)?)
    }

    /// [`get`](Self::get) and deserialize the result.
    pub fn get_as<T: DeserializeOwned>(&self, keyword: &str) -> ConfigResult<T> {
        deserialize(keyword, self.get(keyword)?)
    }

    /// Make the mapping at `path` the default root for lookups.
    ///
    /// `None` goes back to the root. The path is always resolved from the
    /// original tree, not from the current selection. On error the current
    /// selection is left as it was.
    pub fn select(&mut self, path: Option<&str>) -> ConfigResult<()> {
        let Some(path) = path else {
            tracing::trace!("Config selection reset to root");
            self.selection = None;
            return Ok(());
        };

        let path = KeyPath::parse(path)?;
        let target = resolve(&self.original, &path)?;
        if !target.is_object() {
            let segments = path.segments();
            return Err(ConfigError::NotAMapping {
                key: segments[segments.len() - 1].clone(),
                path: segments[..segments.len() - 1].join("."),
                found: variant_name(target),
            });
        }

        tracing::trace!("Config selection set to '{}'", path);
        self.selection = Some(path);
        Ok(())
    }
}

impl Index<&str> for ConfigResolver {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `keyword` does not resolve; use [`ConfigResolver::lookup`] to
    /// handle the error instead.
    fn index(&self, keyword: &str) -> &Value {
        match self.lookup(keyword) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

fn load_many(paths: Vec<PathBuf>) -> ConfigResult<Value> {
    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let value = load_file(&path)?;
        loaded.push((path, value));
    }
    merge_sources(loaded)
}

fn deserialize<T: DeserializeOwned>(keyword: &str, value: &Value) -> ConfigResult<T> {
    T::deserialize(value)
        .map_err(|source| ConfigError::Deserialize { key: keyword.to_string(), source })
}

/// Report a lookup error relative to the selection it started from.
fn relative_to(err: ConfigError, selection: &KeyPath) -> ConfigError {
    let prefix = selection.to_string();
    let strip = |path: String| match path.strip_prefix(&prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('.') => {
            rest.trim_start_matches('.').to_string()
        }
        _ => path,
    };
    match err {
        ConfigError::KeyNotFound { key, path } => {
            ConfigError::KeyNotFound { key, path: strip(path) }
        }
        ConfigError::NotAMapping { key, path, found } => {
            ConfigError::NotAMapping { key, path: strip(path), found }
        }
        other => other,
    }
}
