//! pathfinder: small helpers for ad-hoc data pipelines
//!
//! - [`config`]: load YAML/JSON config files and look values up by dotted
//!   keyword (`paths.raw.sales`), with multi-file merge and a selectable
//!   default sub-tree.
//! - [`clean`]: Portuguese month-name translation and special-character
//!   normalization for free-text fields.

pub mod clean;
pub mod config;

pub use clean::{normalize_string, translate_months, Case};
pub use config::{ConfigError, ConfigResolver, ConfigResult, ConfigSource, ResolverOptions};
