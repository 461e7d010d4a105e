//! Login Use Case
//!
//! Authenticates an account and issues a bearer token.

use std::sync::Arc;

use platform::credential::RawSecret;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub secret: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub access_token: String,
    /// Always "bearer"
    pub token_type: &'static str,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Authenticate and issue a token
    ///
    /// Every failure folds to `InvalidCredentials`: callers cannot
    /// tell an unknown username from a wrong secret.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let secret = RawSecret::new(input.secret).map_err(|_| AuthError::InvalidCredentials)?;
        if !self
            .config
            .credential_hasher()
            .verify(&secret, &account.secret_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self
            .config
            .token_service()
            .issue(account.user_name.original(), self.config.token_ttl);

        tracing::info!(
            account_id = %account.account_id,
            user_name = %account.user_name,
            "Login succeeded"
        );

        Ok(LoginOutput {
            access_token,
            token_type: "bearer",
        })
    }
}
