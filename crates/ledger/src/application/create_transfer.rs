//! Create Transfer Use Case
//!
//! Validates input and executes the atomic balance movement.

use std::sync::Arc;

use auth::domain::value_object::{account_id::AccountId, user_name::UserName};
use rust_decimal::Decimal;

use crate::domain::entities::LedgerEntry;
use crate::domain::repository::LedgerRepository;
use crate::domain::value_objects::EntryStatus;
use crate::error::{LedgerError, LedgerResult};

/// Maximum fractional digits on an amount
const AMOUNT_SCALE: u32 = 2;

/// Create transfer input
pub struct CreateTransferInput {
    pub recipient: String,
    pub amount: Decimal,
    pub status: EntryStatus,
}

/// Create transfer use case
pub struct CreateTransferUseCase<L>
where
    L: LedgerRepository,
{
    repo: Arc<L>,
}

impl<L> CreateTransferUseCase<L>
where
    L: LedgerRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        sender_id: &AccountId,
        input: CreateTransferInput,
    ) -> LedgerResult<LedgerEntry> {
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(
                "Transfer amount must be positive".to_string(),
            ));
        }
        if input.amount.normalize().scale() > AMOUNT_SCALE {
            return Err(LedgerError::Validation(format!(
                "Transfer amount supports at most {AMOUNT_SCALE} decimal places"
            )));
        }

        // A name that fails validation cannot belong to any account
        let recipient = UserName::new(&input.recipient)
            .map_err(|_| LedgerError::RecipientNotFound(input.recipient.clone()))?;

        let entry = self
            .repo
            .execute_transfer(sender_id, &recipient, input.amount, input.status)
            .await?;

        tracing::info!(
            entry_id = %entry.entry_id,
            owner_id = %entry.owner_id,
            counterparty = %entry.counterparty,
            amount = %entry.amount,
            "Transfer recorded"
        );

        Ok(entry)
    }
}
