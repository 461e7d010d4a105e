//! Auth (Accounts & Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, value objects, token service, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Account registration with username + secret and an opening balance
//! - Login issuing signed, expiring bearer tokens
//! - Bearer middleware resolving the authenticated account for
//!   protected routes
//!
//! ## Security Model
//! - Secrets hashed with a keyed deterministic scheme (see
//!   `platform::credential` for the documented weakness)
//! - Tokens are HMAC-SHA-256 signed, verified with constant-time
//!   comparison, and expire absolutely
//! - Token verification failures are never differentiated to callers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::middleware::{AuthGuardState, CurrentAccount, require_account};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
