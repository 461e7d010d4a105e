//! Login Secret Hashing and Verification
//!
//! Keyed, deterministic hashing for login secrets:
//! - hex(SHA-256(secret || key)) with one process-wide key
//! - Zeroization of the plaintext wrapper
//! - Constant-time verification
//! - Unicode NFKC normalization before policy checks
//!
//! ## Known weakness
//! Every secret is salted with the same process-wide key, so equal
//! plaintexts produce equal hashes and a leaked key permits offline
//! dictionary attacks against the whole table. Inherited from the
//! system this service is compatible with; callers must treat the key
//! as production secret material.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, sha256, to_hex};

// ============================================================================
// Constants
// ============================================================================

/// Minimum secret length (in characters)
pub const MIN_SECRET_LENGTH: usize = 6;

/// Maximum secret length (in characters)
pub const MAX_SECRET_LENGTH: usize = 100;

// ============================================================================
// Error Types
// ============================================================================

/// Secret policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretPolicyError {
    /// Secret is too short
    #[error("Secret must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Secret is too long
    #[error("Secret must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Secret contains control characters
    #[error("Secret contains invalid control characters")]
    InvalidCharacter,
}

// ============================================================================
// Raw Secret (Zeroized on drop)
// ============================================================================

/// Clear text login secret with automatic memory zeroization
///
/// Does not implement `Clone`; Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawSecret(String);

impl RawSecret {
    /// Create a new raw secret with policy validation
    ///
    /// Unicode is normalized using NFKC before validation. Length is
    /// counted in Unicode code points, not bytes.
    pub fn new(raw: String) -> Result<Self, SecretPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.chars().any(|c| c.is_control()) {
            return Err(SecretPolicyError::InvalidCharacter);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_SECRET_LENGTH {
            return Err(SecretPolicyError::TooShort {
                min: MIN_SECRET_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_SECRET_LENGTH {
            return Err(SecretPolicyError::TooLong {
                max: MAX_SECRET_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    /// Access the normalized plaintext
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawSecret(***)")
    }
}

// ============================================================================
// Secret Hash
// ============================================================================

/// Stored hash of a login secret (lowercase hex)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretHash(String);

impl SecretHash {
    /// Wrap a hash loaded from storage
    pub fn from_storage(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Credential Hasher
// ============================================================================

/// Keyed, deterministic secret hasher
///
/// Same plaintext + same process key always yields the same hash, so
/// verification is recompute-and-compare.
pub struct CredentialHasher {
    key: [u8; 32],
}

impl CredentialHasher {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Hash a secret for storage
    pub fn hash(&self, secret: &RawSecret) -> SecretHash {
        let mut input = Vec::with_capacity(secret.expose().len() + self.key.len());
        input.extend_from_slice(secret.expose().as_bytes());
        input.extend_from_slice(&self.key);
        let digest = sha256(&input);
        input.zeroize();
        SecretHash(to_hex(&digest))
    }

    /// Verify a secret against a stored hash
    pub fn verify(&self, secret: &RawSecret, stored: &SecretHash) -> bool {
        let computed = self.hash(secret);
        constant_time_eq(computed.as_str().as_bytes(), stored.as_str().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> RawSecret {
        RawSecret::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_policy_bounds() {
        assert!(matches!(
            RawSecret::new("short".to_string()),
            Err(SecretPolicyError::TooShort { min: 6, actual: 5 })
        ));
        assert!(RawSecret::new("sixchr".to_string()).is_ok());
        assert!(RawSecret::new("a".repeat(100)).is_ok());
        assert!(matches!(
            RawSecret::new("a".repeat(101)),
            Err(SecretPolicyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_policy_rejects_control_chars() {
        assert!(matches!(
            RawSecret::new("abc\u{0000}def".to_string()),
            Err(SecretPolicyError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = CredentialHasher::new([7u8; 32]);
        let a = hasher.hash(&secret("correct horse"));
        let b = hasher.hash(&secret("correct horse"));
        assert_eq!(a, b);
        // 32 bytes of SHA-256 as hex
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn test_hash_depends_on_key() {
        let a = CredentialHasher::new([1u8; 32]).hash(&secret("correct horse"));
        let b = CredentialHasher::new([2u8; 32]).hash(&secret("correct horse"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify() {
        let hasher = CredentialHasher::new([7u8; 32]);
        let stored = hasher.hash(&secret("correct horse"));
        assert!(hasher.verify(&secret("correct horse"), &stored));
        assert!(!hasher.verify(&secret("wrong horse"), &stored));
    }

    #[test]
    fn test_verify_from_storage_roundtrip() {
        let hasher = CredentialHasher::new([7u8; 32]);
        let stored = hasher.hash(&secret("correct horse"));
        let reloaded = SecretHash::from_storage(stored.as_str().to_string());
        assert!(hasher.verify(&secret("correct horse"), &reloaded));
    }

    #[test]
    fn test_nfkc_normalization_applies() {
        // U+FB01 (fi ligature) normalizes to "fi"
        let hasher = CredentialHasher::new([7u8; 32]);
        let ligature = hasher.hash(&secret("\u{FB01}nance"));
        let plain = hasher.hash(&secret("finance"));
        assert_eq!(ligature, plain);
    }

    #[test]
    fn test_debug_is_redacted() {
        let s = secret("correct horse");
        assert_eq!(format!("{:?}", s), "RawSecret(***)");
    }
}
