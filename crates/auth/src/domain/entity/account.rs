//! Account Entity
//!
//! An identity holding login credentials and a monetary balance.

use chrono::{DateTime, Utc};
use platform::credential::SecretHash;
use rust_decimal::Decimal;

use crate::domain::value_object::{account_id::AccountId, user_name::UserName};

/// Account entity
///
/// The balance is mutated only by the transfer engine, inside its
/// storage transaction; entity code never changes it directly.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// User name (unique on canonical form, for login and transfers)
    pub user_name: UserName,
    /// Optional display name
    pub display_name: Option<String>,
    /// Keyed hash of the login secret; never serialized outward
    pub secret_hash: SecretHash,
    /// Fixed-point balance, two fractional digits, never negative
    pub balance: Decimal,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Opening balance credited to every new account
    pub fn opening_balance() -> Decimal {
        Decimal::new(1000_00, 2)
    }

    /// Create a new account with the opening balance
    pub fn new(user_name: UserName, secret_hash: SecretHash, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            user_name,
            display_name,
            secret_hash,
            balance: Self::opening_balance(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the balance covers a debit of `amount`
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}
