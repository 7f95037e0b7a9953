//! Alert Definitions

use crate::de::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Desired shape of one alerting rule.
///
/// Two definitions are the same alert state only when every field matches,
/// including the order of `notifications`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertDefinition {
    /// Unique key within a collection
    #[serde(deserialize_with = "null_as_default", rename = "alertName")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub metric_threshold: MetricThreshold,
    /// Notification rules, order is significant
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<NotificationRule>,
}

/// Threshold the alert fires on
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricThreshold {
    #[serde(deserialize_with = "null_as_default")]
    pub metric_name: String,
    /// Comparison operator, passed through verbatim (e.g. `ABOVE`)
    #[serde(deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub threshold: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub units: String,
}

/// One notification attached to an alert
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationRule {
    #[serde(deserialize_with = "null_as_default")]
    pub notification_type: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub notification_channel: String,
    /// Minutes to wait before the first notification
    #[serde(deserialize_with = "null_as_default")]
    pub delay_min: i64,
    /// Minutes between repeated notifications
    #[serde(deserialize_with = "null_as_default")]
    pub interval_min: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub notification_schedule: String,
}

/// Alert as reported by the live system.
///
/// Timestamps are informational and never take part in reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedAlert {
    /// System-assigned identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub definition: AlertDefinition,
}

impl AlertDefinition {
    /// Create a definition with no threshold and no notifications
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            ..Default::default()
        }
    }
}

impl ObservedAlert {
    /// Wrap a definition with its system-assigned identifier
    pub fn new(id: impl Into<String>, definition: AlertDefinition) -> Self {
        Self {
            id: id.into(),
            created: None,
            updated: None,
            definition,
        }
    }

    /// Name of the wrapped definition
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}
