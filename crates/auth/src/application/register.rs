//! Register Use Case
//!
//! Creates a new account with the opening balance.

use std::sync::Arc;

use platform::credential::RawSecret;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Maximum display name length (in characters)
const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub secret: String,
    pub display_name: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<Account> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let secret =
            RawSecret::new(input.secret).map_err(|e| AuthError::Validation(e.to_string()))?;
        let secret_hash = self.config.credential_hasher().hash(&secret);

        let display_name = input
            .display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        if let Some(name) = &display_name {
            if name.chars().count() > DISPLAY_NAME_MAX_LENGTH {
                return Err(AuthError::Validation(format!(
                    "Display name must be at most {DISPLAY_NAME_MAX_LENGTH} characters"
                )));
            }
        }

        let account = Account::new(user_name, secret_hash, display_name);
        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            user_name = %account.user_name,
            "Account registered"
        );

        Ok(account)
    }
}
