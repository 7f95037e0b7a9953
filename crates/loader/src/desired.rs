//! Desired Alert Declaration

use crate::error::LoadError;
use alert_model::{null_as_default, AlertDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Top-level shape of the desired declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesiredAlerts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub alerts: Vec<AlertDefinition>,
}

/// Read the desired declaration from a YAML file
pub fn load_desired_from_file(path: impl AsRef<Path>) -> Result<Vec<AlertDefinition>, LoadError> {
    let path = path.as_ref();
    debug!("Reading desired alerts from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let alerts = load_desired_from_str(&contents)?;
    info!("Loaded {} desired alerts from {}", alerts.len(), path.display());
    Ok(alerts)
}

/// Parse the desired declaration from YAML text
pub fn load_desired_from_str(yaml: &str) -> Result<Vec<AlertDefinition>, LoadError> {
    // An empty document is an empty declaration
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let desired: DesiredAlerts = serde_yaml::from_str(yaml)?;
    Ok(desired.alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DESIRED: &str = r#"
alerts:
  - alertName: replication-lag
    enabled: true
    metricThreshold:
      metricName: OPLOG_REPLICATION_LAG_TIME
      operator: GREATER_THAN
      threshold: 30
      units: SECONDS
    notifications:
      - notificationType: GROUP
        delayMin: 0
        intervalMin: 60
  - alertName: disk-usage
    enabled: false
    metricThreshold:
      metricName: DISK_PARTITION_SPACE_USED_DATA
      operator: GREATER_THAN
      threshold: 85
      units: RAW
    notifications: []
"#;

    #[test]
    fn test_parse_desired() {
        let alerts = load_desired_from_str(DESIRED).unwrap();

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].name, "replication-lag");
        assert_eq!(alerts[0].metric_threshold.units, "SECONDS");
        assert_eq!(alerts[0].notifications[0].interval_min, 60);
        assert!(!alerts[1].enabled);
    }

    #[test]
    fn test_empty_document() {
        assert!(load_desired_from_str("").unwrap().is_empty());
        assert!(load_desired_from_str("alerts: []").unwrap().is_empty());
    }

    #[test]
    fn test_null_alerts() {
        assert!(load_desired_from_str("alerts: ~").unwrap().is_empty());
        assert!(load_desired_from_str("alerts:").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = load_desired_from_str("alerts: [unterminated").unwrap_err();
        assert!(matches!(err, LoadError::Yaml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DESIRED.as_bytes()).unwrap();

        let alerts = load_desired_from_file(file.path()).unwrap();
        assert_eq!(alerts.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_desired_from_file("/nonexistent/alerts.yaml").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/alerts.yaml"));
    }
}
