//! List Entries Use Case

use std::sync::Arc;

use auth::domain::value_object::account_id::AccountId;

use crate::domain::entities::LedgerEntry;
use crate::domain::repository::LedgerRepository;
use crate::error::LedgerResult;

/// List entries use case
pub struct ListEntriesUseCase<L>
where
    L: LedgerRepository,
{
    repo: Arc<L>,
}

impl<L> ListEntriesUseCase<L>
where
    L: LedgerRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// All entries the account initiated, in insertion order
    pub async fn execute(&self, owner_id: &AccountId) -> LedgerResult<Vec<LedgerEntry>> {
        self.repo.list_for_owner(owner_id).await
    }
}
