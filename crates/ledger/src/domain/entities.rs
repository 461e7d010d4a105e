//! Domain Entities

use auth::domain::value_object::account_id::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::value_objects::{EntryId, EntryStatus};

/// A single outbound balance movement
///
/// One entry per transfer, owned by the debited account. The
/// counterparty is a plain string label: the entry stays valid even if
/// the recipient account later disappears.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Storage-assigned monotonic identifier
    pub entry_id: EntryId,
    /// The account whose balance was debited
    pub owner_id: AccountId,
    /// Recipient username at transfer time, not a live reference
    pub counterparty: String,
    /// Transferred amount, always positive
    pub amount: Decimal,
    /// Classification tag, settable by the owner
    pub status: EntryStatus,
    /// Server-assigned creation time
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Whether `account_id` owns this entry
    pub fn is_owned_by(&self, account_id: &AccountId) -> bool {
        self.owner_id == *account_id
    }
}
