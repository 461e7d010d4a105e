//! Platform - shared cryptographic and credential primitives
//!
//! Domain-agnostic building blocks used by the feature crates:
//! - `crypto` - hashing, message authentication, encodings
//! - `credential` - login secret policy, keyed hashing and verification
//!
//! Nothing in this crate knows about accounts, tokens, or HTTP.

pub mod credential;
pub mod crypto;
