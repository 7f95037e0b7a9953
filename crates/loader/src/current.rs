//! Current Alert Snapshot

use crate::error::LoadError;
use alert_model::{null_as_default, ObservedAlert};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Top-level shape of the live-system snapshot (an API listing)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentAlerts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ObservedAlert>,
}

/// Read the live-system snapshot from a JSON file
pub fn load_current_from_file(path: impl AsRef<Path>) -> Result<Vec<ObservedAlert>, LoadError> {
    let path = path.as_ref();
    debug!("Reading current alerts from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let alerts = load_current_from_str(&contents)?;
    info!("Loaded {} current alerts from {}", alerts.len(), path.display());
    Ok(alerts)
}

/// Parse the live-system snapshot from JSON text
pub fn load_current_from_str(json: &str) -> Result<Vec<ObservedAlert>, LoadError> {
    let current: CurrentAlerts = serde_json::from_str(json)?;
    Ok(current.results)
}
