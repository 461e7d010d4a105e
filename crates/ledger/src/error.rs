//! Ledger Error Types
//!
//! Ledger-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Ledger-specific result type alias
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-specific error variants
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Sender account does not exist
    #[error("Sender account not found")]
    SenderNotFound,

    /// Recipient username does not resolve to an account
    #[error("Recipient '{0}' not found")]
    RecipientNotFound(String),

    /// Sender balance does not cover the amount
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Sender and recipient are the same account
    #[error("Cannot send money to yourself")]
    SelfTransfer,

    /// Ledger entry does not exist
    #[error("Transaction not found")]
    EntryNotFound,

    /// Authenticated account does not own the entry
    #[error("Not authorized to access this transaction")]
    NotOwner,

    /// Input validation error
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The original API contract reports all three transfer
            // rejections as plain bad requests.
            LedgerError::RecipientNotFound(_)
            | LedgerError::InsufficientFunds
            | LedgerError::SelfTransfer
            | LedgerError::Validation(_) => StatusCode::BAD_REQUEST,
            LedgerError::SenderNotFound | LedgerError::EntryNotFound => StatusCode::NOT_FOUND,
            LedgerError::NotOwner => StatusCode::FORBIDDEN,
            LedgerError::Database(_) | LedgerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::RecipientNotFound(_)
            | LedgerError::InsufficientFunds
            | LedgerError::SelfTransfer
            | LedgerError::Validation(_) => ErrorKind::BadRequest,
            LedgerError::SenderNotFound | LedgerError::EntryNotFound => ErrorKind::NotFound,
            LedgerError::NotOwner => ErrorKind::Forbidden,
            LedgerError::Database(_) | LedgerError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            LedgerError::Database(e) => {
                tracing::error!(error = %e, "Ledger database error");
            }
            LedgerError::Internal(msg) => {
                tracing::error!(message = %msg, "Ledger internal error");
            }
            LedgerError::InsufficientFunds => {
                tracing::info!("Transfer rejected: insufficient funds");
            }
            _ => {
                tracing::debug!(error = %self, "Ledger error");
            }
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
