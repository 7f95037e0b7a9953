//! Loader Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading inputs or rendering output
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Desired declaration is not valid YAML for the alert shape
    #[error("Invalid desired config (yaml): {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Current snapshot is not valid JSON for the alert shape
    #[error("Invalid current config (json): {0}")]
    Json(#[from] serde_json::Error),

    /// Plan could not be serialized
    #[error("Failed to render plan: {0}")]
    Render(String),

    /// Unknown output format name
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}
