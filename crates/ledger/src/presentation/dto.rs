//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::LedgerEntry;
use crate::domain::value_objects::EntryStatus;

// ============================================================================
// Create transfer
// ============================================================================

/// Create transfer request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    pub recipient_user_name: String,
    pub amount: Decimal,
    /// Classification tag, defaults to "sent"
    #[serde(default)]
    pub status: EntryStatus,
}

// ============================================================================
// Update status
// ============================================================================

/// Update status request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: EntryStatus,
}

// ============================================================================
// Entry
// ============================================================================

/// Ledger entry response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i64,
    pub owner_id: String,
    pub counterparty: String,
    pub amount: Decimal,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&LedgerEntry> for EntryResponse {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            id: entry.entry_id.value(),
            owner_id: entry.owner_id.to_string(),
            counterparty: entry.counterparty.clone(),
            amount: entry.amount,
            status: entry.status,
            created_at: entry.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_status_defaults_to_sent() {
        let req: CreateTransferRequest =
            serde_json::from_str(r#"{"recipientUserName":"bob","amount":"250.00"}"#).unwrap();
        assert_eq!(req.status, EntryStatus::Sent);
        assert_eq!(req.amount, Decimal::new(250_00, 2));
    }

    #[test]
    fn test_create_request_accepts_explicit_status() {
        let req: CreateTransferRequest = serde_json::from_str(
            r#"{"recipientUserName":"bob","amount":"10.50","status":"paid"}"#,
        )
        .unwrap();
        assert_eq!(req.status, EntryStatus::Paid);
    }
}
