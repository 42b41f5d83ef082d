//! In-memory board store.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use shared_types::StoreError;
use tracing::warn;

use crate::tables::Tables;

/// Every table behind one lock. Cheap to share as `Arc<InMemoryBoardStore>`
/// and coerce into each port's trait object.
#[derive(Default)]
pub struct InMemoryBoardStore {
    pub(crate) tables: RwLock<Tables>,
    roles_unavailable: AtomicBool,
    audience_unavailable: AtomicBool,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make role and task-workspace lookups fail with `Unavailable`.
    pub fn set_roles_unavailable(&self, unavailable: bool) {
        self.roles_unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make audience queries fail with `Unavailable`. Mutations keep working.
    pub fn set_audience_unavailable(&self, unavailable: bool) {
        self.audience_unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub(crate) fn check_roles(&self) -> Result<(), StoreError> {
        if self.roles_unavailable.load(Ordering::SeqCst) {
            warn!("Role table unavailable");
            return Err(StoreError::Unavailable("role table unavailable".into()));
        }
        Ok(())
    }

    pub(crate) fn check_audience(&self) -> Result<(), StoreError> {
        if self.audience_unavailable.load(Ordering::SeqCst) {
            warn!("Audience queries unavailable");
            return Err(StoreError::Unavailable("audience queries unavailable".into()));
        }
        Ok(())
    }
}
