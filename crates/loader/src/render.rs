//! Plan Rendering

use crate::error::LoadError;
use alert_model::ReconcileResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialization used for printed plans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// YAML sequence
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(LoadError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Serialize the actions of a plan
pub fn render_plan(result: &ReconcileResult, format: OutputFormat) -> Result<String, LoadError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&result.actions)
            .map_err(|e| LoadError::Render(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&result.actions).map_err(|e| LoadError::Render(e.to_string()))
        }
    }
}
