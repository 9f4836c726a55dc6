//! Shallow merge of several loaded config files.
//!
//! Only top-level keys take part: a key present in a later file replaces the
//! whole value from an earlier one, nested mappings included.

use super::error::{variant_name, ConfigError, ConfigResult};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Overwrite `base`'s top-level keys with `overlay`'s.
pub fn merge_shallow(
    mut base: Map<String, Value>,
    overlay: Map<String, Value>,
) -> Map<String, Value> {
    for (key, value) in overlay {
        if base.insert(key.clone(), value).is_some() {
            tracing::debug!("Config key '{}' overridden by later source", key);
        }
    }
    base
}

/// Merge loaded files in order, later files taking precedence.
///
/// Every root must be a mapping; an empty file (null root) contributes nothing.
pub fn merge_sources(sources: Vec<(PathBuf, Value)>) -> ConfigResult<Value> {
    let mut merged = Map::new();
    for (path, root) in sources {
        match root {
            Value::Object(map) => merged = merge_shallow(merged, map),
            Value::Null => {}
            other => {
                return Err(ConfigError::RootNotMapping { path, found: variant_name(&other) })
            }
        }
    }
    Ok(Value::Object(merged))
}
