//! Application Configuration
//!
//! Configuration for the Auth application layer, constructed once at
//! process start and passed by reference into everything that needs
//! it. There is no ambient global.

use std::time::Duration;

use platform::credential::CredentialHasher;

use crate::domain::token::TokenService;

/// Auth application configuration
///
/// `secret_key` feeds BOTH credential hashing and token signing. Using
/// one key for two purposes is a weakness inherited from the system
/// this API is compatible with: rotating the key invalidates every
/// stored hash as well as every outstanding token.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide secret key (32 bytes)
    pub secret_key: [u8; 32],
    /// Bearer token lifetime
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: [0u8; 32],
            token_ttl: Duration::from_secs(30 * 60), // 30 minutes
        }
    }
}

impl AuthConfig {
    /// Create config with a random secret key (for development)
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret_key = [0u8; 32];
        secret_key.copy_from_slice(&bytes);
        Self {
            secret_key,
            ..Default::default()
        }
    }

    /// Development config
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Credential hasher keyed with the process secret
    pub fn credential_hasher(&self) -> CredentialHasher {
        CredentialHasher::new(self.secret_key)
    }

    /// Token service keyed with the process secret
    pub fn token_service(&self) -> TokenService {
        TokenService::new(self.secret_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_thirty_minutes() {
        assert_eq!(AuthConfig::default().token_ttl, Duration::from_secs(1800));
    }

    #[test]
    fn test_random_secret_is_not_zeroed() {
        let config = AuthConfig::with_random_secret();
        assert_ne!(config.secret_key, [0u8; 32]);
    }

    #[test]
    fn test_hasher_and_tokens_share_the_key() {
        // Both services derive from the same configured key, so a
        // token minted here verifies against a service built from the
        // same config.
        let config = AuthConfig::with_random_secret();
        let token = config
            .token_service()
            .issue("alice", Duration::from_secs(60));
        assert_eq!(config.token_service().verify(&token).unwrap(), "alice");
    }
}
