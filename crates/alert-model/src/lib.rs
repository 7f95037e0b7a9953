//! Alert Data Model
//!
//! Shapes shared by the reconciler, the loaders, and the command-line front end.

mod action;
mod alert;
mod de;

pub use action::{ActionKind, ReconcileAction, ReconcileResult};
pub use alert::{AlertDefinition, MetricThreshold, NotificationRule, ObservedAlert};
pub use de::null_as_default;

/// Length of identifiers minted for newly created alerts
pub const ID_LENGTH: usize = 24;

/// Symbols identifiers are drawn from
pub const ID_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";
