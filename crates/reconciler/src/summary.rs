//! Action Summary

use alert_model::{ActionKind, ReconcileResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Count of actions per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

impl Summary {
    /// Tally the actions of a result
    pub fn tally(result: &ReconcileResult) -> Self {
        let mut summary = Self::default();
        for action in result {
            match action.action {
                ActionKind::Create => summary.created += 1,
                ActionKind::Update => summary.updated += 1,
                ActionKind::Delete => summary.deleted += 1,
            }
        }
        summary
    }

    /// Number of actions of one kind
    pub fn count(&self, kind: ActionKind) -> usize {
        match kind {
            ActionKind::Create => self.created,
            ActionKind::Update => self.updated,
            ActionKind::Delete => self.deleted,
        }
    }

    /// Counts keyed by kind. Kinds with no actions are left out.
    pub fn counts(&self) -> BTreeMap<ActionKind, usize> {
        ActionKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Number of actions of any kind
    pub fn total(&self) -> usize {
        self.created + self.updated + self.deleted
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created:{},Deleted:{},Updated:{}",
            self.created, self.deleted, self.updated
        )
    }
}

/// Tally the actions of a result
pub fn summarize(result: &ReconcileResult) -> Summary {
    Summary::tally(result)
}
