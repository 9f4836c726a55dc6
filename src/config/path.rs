//! Dotted keyword paths and descent through the value tree.

use super::error::{variant_name, ConfigError, ConfigResult};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A parsed dotted keyword such as `database.primary.host`.
///
/// Segments are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn parse(keyword: &str) -> ConfigResult<Self> {
        if keyword.is_empty() {
            return Err(ConfigError::InvalidKeyPath(keyword.to_string()));
        }
        let segments: Vec<String> = keyword.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidKeyPath(keyword.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Append `other` below this path.
    pub fn join(&self, other: &KeyPath) -> KeyPath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        KeyPath { segments }
    }
}

impl FromStr for KeyPath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Walk `path` down from `root` one key at a time.
///
/// Fails with `KeyNotFound` when a segment is absent and `NotAMapping` when a
/// non-final value is anything other than a mapping (sequences included).
pub fn resolve<'a>(root: &'a Value, path: &KeyPath) -> ConfigResult<&'a Value> {
    let mut current = root;
    for (depth, key) in path.segments.iter().enumerate() {
        let reached = || path.segments[..depth].join(".");
        let map = match current {
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::NotAMapping {
                    key: key.clone(),
                    path: reached(),
                    found: variant_name(other),
                })
            }
        };
        current = map
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound { key: key.clone(), path: reached() })?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorKind;
    use serde_json::json;

    fn path(s: &str) -> KeyPath {
        KeyPath::parse(s).expect("valid path")
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        for bad in ["", ".", "a..b", ".a", "a."] {
            let err = KeyPath::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Key, "{bad:?} should be rejected");
        }
        assert_eq!(path("a.b.c").segments(), ["a", "b", "c"]);
        assert_eq!(path("a.b.c").to_string(), "a.b.c");
    }

    #[test]
    fn test_join() {
        assert_eq!(path("a.b").join(&path("c")), path("a.b.c"));
    }

    #[test]
    fn test_resolve_nested() {
        let tree = json!({"x": {"y": {"z": 42}}});
        assert_eq!(resolve(&tree, &path("x.y.z")).unwrap(), &json!(42));
        assert_eq!(resolve(&tree, &path("x.y")).unwrap(), &json!({"z": 42}));
    }

    #[test]
    fn test_resolve_through_scalar_is_type_error() {
        let tree = json!({"x": {"y": 1}});
        let err = resolve(&tree, &path("x.y.z")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        match err {
            ConfigError::NotAMapping { key, path, found } => {
                assert_eq!(key, "z");
                assert_eq!(path, "x.y");
                assert_eq!(found, "a number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_does_not_index_sequences() {
        let tree = json!({"items": [1, 2, 3]});
        let err = resolve(&tree, &path("items.0")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_resolve_missing_key_reports_prefix() {
        let tree = json!({"x": {"y": 1}});
        match resolve(&tree, &path("x.w")).unwrap_err() {
            ConfigError::KeyNotFound { key, path } => {
                assert_eq!(key, "w");
                assert_eq!(path, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
