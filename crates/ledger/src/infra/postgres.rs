//! PostgreSQL Repository Implementation
//!
//! The transfer runs in one transaction. Both account rows are locked
//! with a single ordered `SELECT ... FOR UPDATE` (deterministic lock
//! order, so two opposite-direction transfers cannot deadlock), the
//! business checks run under the locks, and every early error path
//! drops the transaction, which rolls it back.

use auth::domain::value_object::{account_id::AccountId, user_name::UserName};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::LedgerEntry;
use crate::domain::repository::LedgerRepository;
use crate::domain::value_objects::{EntryId, EntryStatus};
use crate::error::{LedgerError, LedgerResult};

/// PostgreSQL-backed ledger repository
#[derive(Clone)]
pub struct PgLedgerRepository {
    pool: PgPool,
}

impl PgLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ENTRY_COLUMNS: &str = r#"
    entry_id,
    owner_id,
    counterparty,
    amount,
    status,
    created_at
"#;

impl LedgerRepository for PgLedgerRepository {
    async fn execute_transfer(
        &self,
        sender_id: &AccountId,
        recipient: &UserName,
        amount: Decimal,
        status: EntryStatus,
    ) -> LedgerResult<LedgerEntry> {
        let mut tx = self.pool.begin().await?;

        // Lock every involved row in key order before reading balances
        let locked: Vec<AccountLockRow> = sqlx::query_as(
            r#"
            SELECT account_id, user_name_canonical, balance
            FROM accounts
            WHERE account_id = $1 OR user_name_canonical = $2
            ORDER BY account_id
            FOR UPDATE
            "#,
        )
        .bind(sender_id.as_uuid())
        .bind(recipient.canonical())
        .fetch_all(&mut *tx)
        .await?;

        let sender = locked
            .iter()
            .find(|row| row.account_id == *sender_id.as_uuid())
            .ok_or(LedgerError::SenderNotFound)?;

        if sender.balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        let recipient_row = locked
            .iter()
            .find(|row| row.user_name_canonical == recipient.canonical())
            .ok_or_else(|| LedgerError::RecipientNotFound(recipient.original().to_string()))?;

        if recipient_row.account_id == sender.account_id {
            return Err(LedgerError::SelfTransfer);
        }

        let now = Utc::now();

        sqlx::query(
            "UPDATE accounts SET balance = balance - $2, updated_at = $3 WHERE account_id = $1",
        )
        .bind(sender.account_id)
        .bind(amount)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE accounts SET balance = balance + $2, updated_at = $3 WHERE account_id = $1",
        )
        .bind(recipient_row.account_id)
        .bind(amount)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let row: EntryRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO ledger_entries (owner_id, counterparty, amount, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ENTRY_COLUMNS}
            "#,
        ))
        .bind(sender.account_id)
        .bind(recipient.original())
        .bind(amount)
        .bind(status.as_str())
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        row.into_entry()
    }

    async fn find_by_id(&self, entry_id: EntryId) -> LedgerResult<Option<LedgerEntry>> {
        let row = sqlx::query_as::<_, EntryRow>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM ledger_entries WHERE entry_id = $1",
        ))
        .bind(entry_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_entry()).transpose()
    }

    async fn list_for_owner(&self, owner_id: &AccountId) -> LedgerResult<Vec<LedgerEntry>> {
        let rows = sqlx::query_as::<_, EntryRow>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM ledger_entries WHERE owner_id = $1 ORDER BY entry_id",
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn update_status(
        &self,
        entry_id: EntryId,
        status: EntryStatus,
    ) -> LedgerResult<Option<LedgerEntry>> {
        let row = sqlx::query_as::<_, EntryRow>(&format!(
            r#"
            UPDATE ledger_entries SET status = $2
            WHERE entry_id = $1
            RETURNING {ENTRY_COLUMNS}
            "#,
        ))
        .bind(entry_id.value())
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_entry()).transpose()
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountLockRow {
    account_id: Uuid,
    user_name_canonical: String,
    balance: Decimal,
}

#[derive(sqlx::FromRow)]
struct EntryRow {
    entry_id: i64,
    owner_id: Uuid,
    counterparty: String,
    amount: Decimal,
    status: String,
    created_at: DateTime<Utc>,
}

impl EntryRow {
    fn into_entry(self) -> LedgerResult<LedgerEntry> {
        let status = self
            .status
            .parse::<EntryStatus>()
            .map_err(|e| LedgerError::Internal(e.to_string()))?;

        Ok(LedgerEntry {
            entry_id: EntryId::new(self.entry_id),
            owner_id: AccountId::from_uuid(self.owner_id),
            counterparty: self.counterparty,
            amount: self.amount,
            status,
            created_at: self.created_at,
        })
    }
}
