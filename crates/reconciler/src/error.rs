//! Reconciliation Error Types

use crate::index::Collection;
use thiserror::Error;

/// Errors raised while reconciling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// Two records share a name and the duplicate policy rejects it
    #[error("Duplicate alert name '{name}' in {collection} alerts")]
    DuplicateName { collection: Collection, name: String },

    /// The generator kept returning identifiers that are already taken
    #[error("No fresh alert identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: usize },
}
