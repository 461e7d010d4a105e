//! Repository Traits
//!
//! Interfaces for ledger persistence. Implementation is in the
//! infrastructure layer.

use auth::domain::value_object::{account_id::AccountId, user_name::UserName};
use rust_decimal::Decimal;

use crate::domain::entities::LedgerEntry;
use crate::domain::value_objects::{EntryId, EntryStatus};
use crate::error::LedgerResult;

/// Ledger repository trait
///
/// `execute_transfer` is one call by design: the existence/funds/self
/// checks are only meaningful while both account rows are locked, so
/// the whole validation-then-mutation sequence lives inside a single
/// storage transaction. Callers validate lock-free input (positive
/// amount, parseable recipient) before calling.
#[trait_variant::make(LedgerRepository: Send)]
pub trait LocalLedgerRepository {
    /// Atomically debit the sender, credit the recipient, and record
    /// the entry. Checks run in order, first failure wins:
    /// sender exists, sender covers the amount, recipient exists,
    /// sender is not the recipient. On any failure nothing is applied.
    async fn execute_transfer(
        &self,
        sender_id: &AccountId,
        recipient: &UserName,
        amount: Decimal,
        status: EntryStatus,
    ) -> LedgerResult<LedgerEntry>;

    /// Find an entry by ID
    async fn find_by_id(&self, entry_id: EntryId) -> LedgerResult<Option<LedgerEntry>>;

    /// All entries owned by an account, in insertion order
    async fn list_for_owner(&self, owner_id: &AccountId) -> LedgerResult<Vec<LedgerEntry>>;

    /// Replace the status tag only; returns None if the entry is gone
    async fn update_status(
        &self,
        entry_id: EntryId,
        status: EntryStatus,
    ) -> LedgerResult<Option<LedgerEntry>>;
}
