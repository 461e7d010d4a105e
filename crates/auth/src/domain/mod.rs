//! Domain Layer
//!
//! Contains the account entity, value objects, the token service, and
//! the repository trait.

pub mod entity;
pub mod repository;
pub mod token;
pub mod value_object;

// Re-exports
pub use entity::account::Account;
pub use repository::AccountRepository;
pub use token::{InvalidToken, TokenService};
pub use value_object::{account_id::AccountId, user_name::UserName};
