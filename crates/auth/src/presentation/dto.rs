//! API DTOs (Data Transfer Objects)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub secret: String,
    pub display_name: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub secret: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

// ============================================================================
// Account
// ============================================================================

/// Account response - never carries secret material
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub user_name: String,
    pub display_name: Option<String>,
    pub balance: Decimal,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id.to_string(),
            user_name: account.user_name.original().to_string(),
            display_name: account.display_name.clone(),
            balance: account.balance,
        }
    }
}
