//! Current Account Use Case
//!
//! Resolves a bearer token to the account it speaks for.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Current account use case
pub struct CurrentAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CurrentAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Verify the token and load the subject's account
    ///
    /// A tampered or expired token, an unparseable subject, and an
    /// account that no longer exists all fold to the same
    /// `Unauthorized`.
    pub async fn execute(&self, bearer_token: &str) -> AuthResult<Account> {
        let subject = self
            .config
            .token_service()
            .verify(bearer_token)
            .map_err(|_| AuthError::Unauthorized)?;

        let user_name = UserName::new(&subject).map_err(|_| AuthError::Unauthorized)?;

        self.repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::Unauthorized)
    }
}
