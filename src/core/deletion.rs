use crate::core::store::RecordStore;
use crate::db::kv::KvStore;
use crate::errors::AppResult;

/// Two-step "delete all" flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionFlow {
    #[default]
    Idle,
    ConfirmPending,
}

impl DeletionFlow {
    /// Open the confirmation prompt. Nothing is deleted yet.
    pub fn request(&mut self) {
        *self = DeletionFlow::ConfirmPending;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DeletionFlow::ConfirmPending)
    }

    /// Clear the store if a confirmation is pending. Returns whether the
    /// store was cleared. Clearing an empty store is fine.
    pub fn confirm<S: KvStore>(&mut self, store: &mut RecordStore, kv: &mut S) -> AppResult<bool> {
        if !self.is_pending() {
            return Ok(false);
        }

        let removed = store.len();
        store.clear(kv)?;
        *self = DeletionFlow::Idle;

        kv.audit("del", "all", &format!("Deleted {} driver record(s)", removed));
        Ok(true)
    }

    pub fn cancel(&mut self) {
        *self = DeletionFlow::Idle;
    }

    /// Interaction outside the prompt closes it like a cancel.
    pub fn dismiss(&mut self) {
        *self = DeletionFlow::Idle;
    }
}
