//! Update Status Use Case
//!
//! Replaces the status tag on an owned entry. No balance logic runs;
//! any tag is accepted at any time.

use std::sync::Arc;

use auth::domain::value_object::account_id::AccountId;

use crate::domain::entities::LedgerEntry;
use crate::domain::repository::LedgerRepository;
use crate::domain::value_objects::{EntryId, EntryStatus};
use crate::error::{LedgerError, LedgerResult};

/// Update status use case
pub struct UpdateStatusUseCase<L>
where
    L: LedgerRepository,
{
    repo: Arc<L>,
}

impl<L> UpdateStatusUseCase<L>
where
    L: LedgerRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        current: &AccountId,
        entry_id: EntryId,
        status: EntryStatus,
    ) -> LedgerResult<LedgerEntry> {
        let entry = self
            .repo
            .find_by_id(entry_id)
            .await?
            .ok_or(LedgerError::EntryNotFound)?;

        if !entry.is_owned_by(current) {
            return Err(LedgerError::NotOwner);
        }

        let updated = self
            .repo
            .update_status(entry_id, status)
            .await?
            .ok_or(LedgerError::EntryNotFound)?;

        tracing::info!(
            entry_id = %updated.entry_id,
            status = %updated.status,
            "Entry status updated"
        );

        Ok(updated)
    }
}
