//! Ledger Router
//!
//! Every route requires a bearer token; the guard state is built from
//! the auth crate's repository and config.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::AccountRepository;
use auth::infra::postgres::PgAccountRepository;
use auth::presentation::middleware::{AuthGuardState, require_account};

use crate::domain::repository::LedgerRepository;
use crate::infra::postgres::PgLedgerRepository;
use crate::presentation::handlers::{self, LedgerAppState};

/// Create the Ledger router with the PostgreSQL repositories
pub fn ledger_router(
    repo: PgLedgerRepository,
    account_repo: PgAccountRepository,
    config: AuthConfig,
) -> Router {
    ledger_router_generic(repo, account_repo, config)
}

/// Create a generic Ledger router for any repository implementations
pub fn ledger_router_generic<L, A>(repo: L, account_repo: A, config: AuthConfig) -> Router
where
    L: LedgerRepository + Clone + Send + Sync + 'static,
    A: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = LedgerAppState {
        repo: Arc::new(repo),
    };
    let guard = AuthGuardState {
        repo: Arc::new(account_repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_transfer::<L>).get(handlers::list_entries::<L>),
        )
        .route(
            "/{id}",
            get(handlers::get_entry::<L>).put(handlers::update_status::<L>),
        )
        .layer(middleware::from_fn_with_state(guard, require_account::<A>))
        .with_state(state)
}
