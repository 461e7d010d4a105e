//! Ledger (Transfer Engine) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Ledger entry entity, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Transfer Model
//! - A transfer debits the sender, credits the recipient, and records
//!   exactly one ledger entry, owned by the sender. The recipient side
//!   is deliberately not recorded.
//! - Validation and both balance mutations run inside one storage
//!   transaction with both account rows locked, so concurrent
//!   transfers against one sender serialize and can never overdraft.
//! - Entries are immutable except for their status tag, which the
//!   owner may set freely.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{LedgerError, LedgerResult};
pub use infra::postgres::PgLedgerRepository;
pub use presentation::router::ledger_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
