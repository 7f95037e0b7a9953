//! Runtime Settings
//!
//! Layered from an optional settings file and `ALERTSYNC__*` environment
//! variables (e.g. `ALERTSYNC__RECONCILE__DUPLICATE_POLICY=reject`).

use config::{Config, ConfigError, Environment, File};
use loader::OutputFormat;
use reconciler::ReconcileConfig;
use serde::Deserialize;
use std::path::Path;

/// Log line layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Settings for one planner run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum level written to stderr
    pub log_level: String,
    pub log_format: LogFormat,
    /// Plan serialization
    pub format: OutputFormat,
    pub reconcile: ReconcileConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            format: OutputFormat::Json,
            reconcile: ReconcileConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings, reading `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(
                Environment::with_prefix("ALERTSYNC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
