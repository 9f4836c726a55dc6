//! Shared CLI utilities.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Render a looked-up value for the terminal.
///
/// Scalars print bare (strings without quotes); mappings and sequences use
/// `format`.
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    let rendered = match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => match format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
        },
    };
    Ok(rendered)
}
