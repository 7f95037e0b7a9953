//! Name Index
//!
//! Maps alert names to records so membership checks during a diff are O(1).

use crate::error::ReconcileError;
use alert_model::{AlertDefinition, ObservedAlert};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Records keyed by alert name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for AlertDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ObservedAlert {
    fn name(&self) -> &str {
        &self.definition.name
    }
}

/// Which input collection a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Desired,
    Current,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Desired => f.write_str("desired"),
            Collection::Current => f.write_str("current"),
        }
    }
}

/// What to do when a collection names the same alert twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one
    #[default]
    LastWriteWins,
    /// Fail with [`ReconcileError::DuplicateName`]
    Reject,
}

/// Name-keyed view over a collection of records.
///
/// Iteration follows the order in which each name first appeared. When a
/// name repeats under [`DuplicatePolicy::LastWriteWins`], the slot keeps its
/// original position but holds the later record.
#[derive(Debug, Clone)]
pub struct AlertIndex<'a, T> {
    order: Vec<&'a str>,
    entries: HashMap<&'a str, &'a T>,
}

impl<'a, T: Named> AlertIndex<'a, T> {
    /// Index records, later duplicates overwriting earlier ones
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
    {
        let records = records.into_iter();
        let mut index = Self::with_capacity(records.size_hint().0);
        for record in records {
            if let Some(previous) = index.insert(record) {
                debug!("Alert '{}' listed more than once, keeping the later entry", previous.name());
            }
        }
        index
    }

    /// Index records under the given duplicate policy
    pub fn with_policy<I>(
        records: I,
        policy: DuplicatePolicy,
        collection: Collection,
    ) -> Result<Self, ReconcileError>
    where
        I: IntoIterator<Item = &'a T>,
    {
        match policy {
            DuplicatePolicy::LastWriteWins => Ok(Self::build(records)),
            DuplicatePolicy::Reject => {
                let records = records.into_iter();
                let mut index = Self::with_capacity(records.size_hint().0);
                for record in records {
                    if index.insert(record).is_some() {
                        return Err(ReconcileError::DuplicateName {
                            collection,
                            name: record.name().to_string(),
                        });
                    }
                }
                Ok(index)
            }
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a record, returning the one it replaced
    fn insert(&mut self, record: &'a T) -> Option<&'a T> {
        let name = record.name();
        let previous = self.entries.insert(name, record);
        if previous.is_none() {
            self.order.push(name);
        }
        previous
    }
}

impl<'a, T> AlertIndex<'a, T> {
    /// Look up a record by name
    pub fn get(&self, name: &str) -> Option<&'a T> {
        self.entries.get(name).copied()
    }

    /// Whether a record with this name was indexed
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the source collection was empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a T)> + '_ {
        self.order.iter().map(move |name| (*name, self.entries[name]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(name: &str, threshold: i64) -> AlertDefinition {
        let mut definition = AlertDefinition::new(name);
        definition.metric_threshold.threshold = threshold;
        definition
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<AlertDefinition> = Vec::new();
        let index = AlertIndex::build(&records);
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn test_one_entry_per_name() {
        let records = vec![alert("a", 1), alert("b", 2), alert("c", 3)];
        let index = AlertIndex::build(&records);

        assert_eq!(index.len(), 3);
        assert!(index.contains("b"));
        assert!(!index.contains("d"));
        assert_eq!(index.get("c").unwrap().metric_threshold.threshold, 3);
    }

    #[test]
    fn test_last_write_wins() {
        let records = vec![alert("a", 1), alert("b", 2), alert("a", 9)];
        let index = AlertIndex::build(&records);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("a").unwrap().metric_threshold.threshold, 9);
        // Position of the first occurrence is kept
        let names: Vec<_> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_reject_policy() {
        let records = vec![alert("a", 1), alert("a", 2)];
        let err = AlertIndex::with_policy(&records, DuplicatePolicy::Reject, Collection::Desired)
            .unwrap_err();

        assert_eq!(
            err,
            ReconcileError::DuplicateName {
                collection: Collection::Desired,
                name: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_reject_policy_accepts_unique_names() {
        let records = vec![
            ObservedAlert::new("id-1", alert("a", 1)),
            ObservedAlert::new("id-2", alert("b", 1)),
        ];
        let index = AlertIndex::with_policy(&records, DuplicatePolicy::Reject, Collection::Current)
            .unwrap();
        assert_eq!(index.get("b").unwrap().id, "id-2");
    }

    #[test]
    fn test_iteration_follows_input_order() {
        let records = vec![alert("zeta", 0), alert("alpha", 0), alert("mid", 0)];
        let index = AlertIndex::build(&records);
        let names: Vec<_> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
