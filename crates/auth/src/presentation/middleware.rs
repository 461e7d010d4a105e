//! Auth Middleware
//!
//! Bearer-token guard for protected routes: verifies the token,
//! resolves the account, and stashes it in request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::current_account::CurrentAccountUseCase;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::AuthError;

/// Guard state
#[derive(Clone)]
pub struct AuthGuardState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// The authenticated account, available to downstream handlers via
/// `Extension<CurrentAccount>`
#[derive(Clone)]
pub struct CurrentAccount(pub Account);

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Middleware that requires a valid bearer token
pub async fn require_account<R>(
    State(state): State<AuthGuardState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = bearer_token(req.headers()) else {
        return Err(AuthError::Unauthorized.into_response());
    };

    let use_case = CurrentAccountUseCase::new(state.repo.clone(), state.config.clone());

    let account = match use_case.execute(token).await {
        Ok(account) => account,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentAccount(account));

    Ok(next.run(req).await)
}
