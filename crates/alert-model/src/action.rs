//! Reconcile Actions

use crate::alert::AlertDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change an action applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Update,
    Delete,
}

impl ActionKind {
    /// All kinds, in the order their action groups are emitted
    pub const ALL: [ActionKind; 3] = [ActionKind::Create, ActionKind::Update, ActionKind::Delete];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Create => "create",
            ActionKind::Update => "update",
            ActionKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One change to apply to the live system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileAction {
    /// Fresh for creates, the observed identifier otherwise
    #[serde(rename = "alertID")]
    pub alert_id: String,
    pub action: ActionKind,
    /// Desired definition for create/update, observed definition for delete
    pub body: AlertDefinition,
}

impl ReconcileAction {
    /// Create an action for the alert with the given identifier
    pub fn new(alert_id: impl Into<String>, action: ActionKind, body: AlertDefinition) -> Self {
        Self {
            alert_id: alert_id.into(),
            action,
            body,
        }
    }

    /// Name of the alert this action touches
    pub fn name(&self) -> &str {
        &self.body.name
    }
}

/// Ordered output of one reconciliation: creates, then updates, then deletes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileResult {
    #[serde(rename = "reconcileActions")]
    pub actions: Vec<ReconcileAction>,
}

impl ReconcileResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the current state already matches the desired state
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Append an action after those already planned
    pub fn push(&mut self, action: ReconcileAction) {
        self.actions.push(action);
    }

    /// Actions in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, ReconcileAction> {
        self.actions.iter()
    }

    /// Actions of a single kind, in emission order
    pub fn of_kind(&self, kind: ActionKind) -> impl Iterator<Item = &ReconcileAction> {
        self.actions.iter().filter(move |a| a.action == kind)
    }
}

impl Extend<ReconcileAction> for ReconcileResult {
    fn extend<T: IntoIterator<Item = ReconcileAction>>(&mut self, iter: T) {
        self.actions.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ReconcileResult {
    type Item = &'a ReconcileAction;
    type IntoIter = std::slice::Iter<'a, ReconcileAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for ReconcileResult {
    type Item = ReconcileAction;
    type IntoIter = std::vec::IntoIter<ReconcileAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
