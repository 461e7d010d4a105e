//! HTTP Handlers
//!
//! Every route sits behind the auth bearer middleware; handlers read
//! the authenticated account from request extensions.

use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::presentation::middleware::CurrentAccount;

use crate::application::{
    CreateTransferInput, CreateTransferUseCase, GetEntryUseCase, ListEntriesUseCase,
    UpdateStatusUseCase,
};
use crate::domain::repository::LedgerRepository;
use crate::domain::value_objects::EntryId;
use crate::error::LedgerResult;
use crate::presentation::dto::{CreateTransferRequest, EntryResponse, UpdateStatusRequest};

/// Shared state for ledger handlers
#[derive(Clone)]
pub struct LedgerAppState<L>
where
    L: LedgerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<L>,
}

/// POST /api/v1/transactions
pub async fn create_transfer<L>(
    State(state): State<LedgerAppState<L>>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    Json(req): Json<CreateTransferRequest>,
) -> LedgerResult<(StatusCode, Json<EntryResponse>)>
where
    L: LedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateTransferUseCase::new(state.repo.clone());

    let input = CreateTransferInput {
        recipient: req.recipient_user_name,
        amount: req.amount,
        status: req.status,
    };

    let entry = use_case.execute(&account.account_id, input).await?;

    Ok((StatusCode::CREATED, Json(EntryResponse::from(&entry))))
}

/// GET /api/v1/transactions
pub async fn list_entries<L>(
    State(state): State<LedgerAppState<L>>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
) -> LedgerResult<Json<Vec<EntryResponse>>>
where
    L: LedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListEntriesUseCase::new(state.repo.clone());

    let entries = use_case.execute(&account.account_id).await?;

    Ok(Json(entries.iter().map(EntryResponse::from).collect()))
}

/// GET /api/v1/transactions/{id}
pub async fn get_entry<L>(
    State(state): State<LedgerAppState<L>>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    Path(id): Path<i64>,
) -> LedgerResult<Json<EntryResponse>>
where
    L: LedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetEntryUseCase::new(state.repo.clone());

    let entry = use_case.execute(&account.account_id, EntryId::new(id)).await?;

    Ok(Json(EntryResponse::from(&entry)))
}

/// PUT /api/v1/transactions/{id}
pub async fn update_status<L>(
    State(state): State<LedgerAppState<L>>,
    Extension(CurrentAccount(account)): Extension<CurrentAccount>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> LedgerResult<Json<EntryResponse>>
where
    L: LedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateStatusUseCase::new(state.repo.clone());

    let entry = use_case
        .execute(&account.account_id, EntryId::new(id), req.status)
        .await?;

    Ok(Json(EntryResponse::from(&entry)))
}
