//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::LedgerEntry;
pub use repository::LedgerRepository;
pub use value_objects::{EntryId, EntryStatus};
