//! Config file loading

use super::error::{ConfigError, ConfigResult};
use super::source::ResolverOptions;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Structured-text formats a config file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Extensions tried, in order, during default discovery.
    pub const DISCOVERY_ORDER: [ConfigFormat; 2] = [ConfigFormat::Yaml, ConfigFormat::Json];

    /// Pick the format from the text after the file name's last `.`.
    ///
    /// Unlike [`Path::extension`], a bare dotfile such as `.yml` counts as
    /// having the extension `yml`.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        match ext {
            "yml" | "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                ext: other.to_string(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yml",
            Self::Json => "json",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    pub fn parse(self, content: &str, path: &Path) -> ConfigResult<Value> {
        let parse_err = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            format: self.name(),
            message,
        };
        match self {
            Self::Yaml => {
                // An empty document is a null tree, not an error.
                if content.trim().is_empty() {
                    return Ok(Value::Null);
                }
                serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))
            }
            Self::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        }
    }
}

/// Load one config file into a value tree.
///
/// The extension is checked before touching the filesystem, so an unsupported
/// extension is reported as such even when the file is also missing.
pub fn load_file(path: &Path) -> ConfigResult<Value> {
    let format = ConfigFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound { path: path.to_path_buf() }
        } else {
            ConfigError::Io { path: path.to_path_buf(), source }
        }
    })?;

    let value = format.parse(&content, path)?;
    tracing::debug!("Loaded {:?} config from {}", format, path.display());
    Ok(value)
}

/// Load `<config_dir>/<file_stem>.yml`, falling back to `.json`.
///
/// Only a missing file moves on to the next candidate; a candidate that exists
/// but fails to parse is returned as an error.
pub fn load_default(options: &ResolverOptions) -> ConfigResult<(PathBuf, Value)> {
    let candidates = default_candidates(options);

    for path in &candidates {
        match load_file(path) {
            Ok(value) => return Ok((path.clone(), value)),
            Err(ConfigError::NotFound { .. }) => {
                tracing::debug!("Default config candidate {} not found", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    Err(ConfigError::DefaultNotFound {
        dir: options.config_dir.clone(),
        candidates: candidates
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect(),
    })
}

fn default_candidates(options: &ResolverOptions) -> Vec<PathBuf> {
    ConfigFormat::DISCOVERY_ORDER
        .iter()
        .map(|format| {
            options.config_dir.join(format!("{}.{}", options.file_stem, format.extension()))
        })
        .collect()
}
