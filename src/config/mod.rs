//! Configuration loading and dotted-path lookup
//!
//! Loads YAML or JSON config files (one, several merged, or a discovered
//! default) and answers `a.b.c` style lookups against the result.

pub mod error;
pub mod loader;
pub mod merge;
pub mod path;
pub mod resolver;
pub mod source;

pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use loader::{load_default, load_file, ConfigFormat};
pub use merge::{merge_shallow, merge_sources};
pub use path::{resolve, KeyPath};
pub use resolver::ConfigResolver;
pub use source::{ConfigSource, ResolverOptions, DEFAULT_CONFIG_DIR, DEFAULT_FILE_STEM};
