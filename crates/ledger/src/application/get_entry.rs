//! Get Entry Use Case

use std::sync::Arc;

use auth::domain::value_object::account_id::AccountId;

use crate::domain::entities::LedgerEntry;
use crate::domain::repository::LedgerRepository;
use crate::domain::value_objects::EntryId;
use crate::error::{LedgerError, LedgerResult};

/// Get entry use case
pub struct GetEntryUseCase<L>
where
    L: LedgerRepository,
{
    repo: Arc<L>,
}

impl<L> GetEntryUseCase<L>
where
    L: LedgerRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// Load an entry, only for its owner
    pub async fn execute(
        &self,
        current: &AccountId,
        entry_id: EntryId,
    ) -> LedgerResult<LedgerEntry> {
        let entry = self
            .repo
            .find_by_id(entry_id)
            .await?
            .ok_or(LedgerError::EntryNotFound)?;

        if !entry.is_owned_by(current) {
            return Err(LedgerError::NotOwner);
        }

        Ok(entry)
    }
}
