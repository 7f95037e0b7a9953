//! Alert Reconciliation
//!
//! Diffs a desired set of alert definitions against the alerts a live system
//! reports and produces the create/update/delete actions that bring the live
//! system in line.

mod error;
mod id;
mod index;
mod reconciler;
mod summary;

pub use error::ReconcileError;
pub use id::{from_fn, is_valid_id, FnIdGenerator, IdGenerator, RandomIdGenerator};
pub use index::{AlertIndex, Collection, DuplicatePolicy, Named};
pub use reconciler::{reconcile, ReconcileConfig, Reconciler};
pub use summary::{summarize, Summary};

pub use alert_model::{
    ActionKind, AlertDefinition, MetricThreshold, NotificationRule, ObservedAlert,
    ReconcileAction, ReconcileResult,
};
