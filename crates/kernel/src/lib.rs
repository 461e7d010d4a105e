//! Shared Kernel - Domain-crossing minimal core
//!
//! The "smallest core" of vocabulary shared by every crate in the
//! workspace:
//! - Unified error type and result alias
//! - Error classification mapped to HTTP status codes
//! - Typed ID wrappers for entities
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
