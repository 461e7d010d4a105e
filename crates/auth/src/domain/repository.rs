//! Repository Traits
//!
//! Interfaces for account persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{account_id::AccountId, user_name::UserName};
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account by user name (canonical form)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Account>>;

    /// Check if a user name is taken (canonical form)
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}
