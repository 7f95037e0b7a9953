//! Reconciler Implementation

use crate::error::ReconcileError;
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::index::{AlertIndex, Collection, DuplicatePolicy};
use crate::summary::Summary;
use alert_model::{ActionKind, AlertDefinition, ObservedAlert, ReconcileAction, ReconcileResult};
use metrics::counter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Reconciler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Handling of repeated alert names within one collection
    pub duplicate_policy: DuplicatePolicy,
    /// Draws allowed per created alert before giving up on a fresh identifier
    pub max_id_attempts: usize,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::LastWriteWins,
            max_id_attempts: 16,
        }
    }
}

/// Reconciler owning its configuration and identifier source
pub struct Reconciler<G = RandomIdGenerator> {
    config: ReconcileConfig,
    ids: G,
}

impl Reconciler<RandomIdGenerator> {
    /// Create a reconciler minting random identifiers
    pub fn new(config: ReconcileConfig) -> Self {
        Self::with_generator(config, RandomIdGenerator::new())
    }
}

impl Default for Reconciler<RandomIdGenerator> {
    fn default() -> Self {
        Self::new(ReconcileConfig::default())
    }
}

impl<G: IdGenerator> Reconciler<G> {
    /// Create a reconciler with a caller-supplied identifier source
    pub fn with_generator(config: ReconcileConfig, ids: G) -> Self {
        debug!("Creating reconciler with config: {:?}", config);
        Self { config, ids }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Compute the actions that turn `current` into `desired`
    pub fn reconcile(
        &mut self,
        desired: &[AlertDefinition],
        current: &[ObservedAlert],
    ) -> Result<ReconcileResult, ReconcileError> {
        reconcile_with(&self.config, desired, current, &mut self.ids)
    }
}

/// Compute the actions that turn `current` into `desired` under the default
/// configuration (later duplicates win).
pub fn reconcile<G>(
    desired: &[AlertDefinition],
    current: &[ObservedAlert],
    ids: &mut G,
) -> Result<ReconcileResult, ReconcileError>
where
    G: IdGenerator + ?Sized,
{
    reconcile_with(&ReconcileConfig::default(), desired, current, ids)
}

fn reconcile_with<G>(
    config: &ReconcileConfig,
    desired: &[AlertDefinition],
    current: &[ObservedAlert],
    ids: &mut G,
) -> Result<ReconcileResult, ReconcileError>
where
    G: IdGenerator + ?Sized,
{
    info!(
        "Reconciling {} desired against {} current alerts",
        desired.len(),
        current.len()
    );

    let desired_by_name =
        AlertIndex::with_policy(desired, config.duplicate_policy, Collection::Desired)?;
    let mut minter = IdMinter::new(ids, current, config.max_id_attempts);

    // Initial provisioning: nothing to compare against
    if current.is_empty() {
        let mut result = ReconcileResult::new();
        for (_, alert) in desired_by_name.iter() {
            result.push(ReconcileAction::new(minter.mint()?, ActionKind::Create, alert.clone()));
        }
        record_metrics(&result);
        return Ok(result);
    }

    let current_by_name =
        AlertIndex::with_policy(current, config.duplicate_policy, Collection::Current)?;

    let mut result = ReconcileResult::new();
    result.extend(missing_actions(&desired_by_name, &current_by_name, &mut minter)?);
    result.extend(changed_actions(&desired_by_name, &current_by_name));
    result.extend(removed_actions(&desired_by_name, &current_by_name));

    record_metrics(&result);
    Ok(result)
}

/// Creates for names only the desired side knows
fn missing_actions<G>(
    desired: &AlertIndex<'_, AlertDefinition>,
    current: &AlertIndex<'_, ObservedAlert>,
    minter: &mut IdMinter<'_, G>,
) -> Result<Vec<ReconcileAction>, ReconcileError>
where
    G: IdGenerator + ?Sized,
{
    let mut actions = Vec::new();
    for (name, alert) in desired.iter() {
        if !current.contains(name) {
            let alert_id = minter.mint()?;
            debug!("Alert '{}' missing, creating as {}", name, alert_id);
            actions.push(ReconcileAction::new(alert_id, ActionKind::Create, alert.clone()));
        }
    }
    Ok(actions)
}

/// Updates for names on both sides whose definitions differ
fn changed_actions(
    desired: &AlertIndex<'_, AlertDefinition>,
    current: &AlertIndex<'_, ObservedAlert>,
) -> Vec<ReconcileAction> {
    desired
        .iter()
        .filter_map(|(name, alert)| {
            let observed = current.get(name)?;
            if observed.definition == *alert {
                return None;
            }
            debug!("Alert '{}' changed, updating {}", name, observed.id);
            Some(ReconcileAction::new(
                observed.id.clone(),
                ActionKind::Update,
                alert.clone(),
            ))
        })
        .collect()
}

/// Deletes for names only the current side knows
fn removed_actions(
    desired: &AlertIndex<'_, AlertDefinition>,
    current: &AlertIndex<'_, ObservedAlert>,
) -> Vec<ReconcileAction> {
    current
        .iter()
        .filter(|(name, _)| !desired.contains(name))
        .map(|(name, observed)| {
            debug!("Alert '{}' removed, deleting {}", name, observed.id);
            ReconcileAction::new(
                observed.id.clone(),
                ActionKind::Delete,
                observed.definition.clone(),
            )
        })
        .collect()
}

/// Draws identifiers that clash with neither the current collection nor
/// earlier draws of the same run
struct IdMinter<'g, G: ?Sized> {
    ids: &'g mut G,
    taken: HashSet<String>,
    max_attempts: usize,
}

impl<'g, G: IdGenerator + ?Sized> IdMinter<'g, G> {
    fn new(ids: &'g mut G, current: &[ObservedAlert], max_attempts: usize) -> Self {
        Self {
            ids,
            taken: current.iter().map(|alert| alert.id.clone()).collect(),
            max_attempts: max_attempts.max(1),
        }
    }

    fn mint(&mut self) -> Result<String, ReconcileError> {
        for attempt in 1..=self.max_attempts {
            let id = self.ids.next_id();
            if self.taken.insert(id.clone()) {
                return Ok(id);
            }
            warn!("Generated identifier {} already in use (attempt {})", id, attempt);
        }
        Err(ReconcileError::IdentifierExhausted {
            attempts: self.max_attempts,
        })
    }
}

fn record_metrics(result: &ReconcileResult) {
    let summary = Summary::tally(result);
    for kind in ActionKind::ALL {
        let count = summary.count(kind);
        if count > 0 {
            counter!("alertsync_actions_total", "kind" => kind.as_str()).increment(count as u64);
        }
    }
    info!("Reconcile plan ready: {}", summary);
}
