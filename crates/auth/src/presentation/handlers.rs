//! HTTP Handlers

use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AccountResponse, LoginRequest, RegisterRequest, TokenResponse};
use crate::presentation::middleware::CurrentAccount;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/v1/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<AccountResponse>)>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: req.user_name,
        secret: req.secret,
        display_name: req.display_name,
    };

    let account = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/v1/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        user_name: req.user_name,
        secret: req.secret,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        access_token: output.access_token,
        token_type: output.token_type.to_string(),
    }))
}

// ============================================================================
// Current account
// ============================================================================

/// GET /api/v1/auth/me
///
/// The guard middleware has already resolved the account.
pub async fn me(
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
) -> AuthResult<Json<AccountResponse>> {
    Ok(Json(AccountResponse::from(&account)))
}
