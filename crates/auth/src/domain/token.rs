//! Bearer Token Service
//!
//! Self-contained signed-token scheme: three dot-separated, unpadded
//! URL-safe base64 segments (header, payload, signature). The signature
//! is HMAC-SHA-256 over `header.payload` with the process-wide secret
//! key; the payload carries the subject (`sub`) and an absolute expiry
//! in epoch seconds (`exp`).
//!
//! Verification requirements:
//! - exactly three segments
//! - signature recomputation matches via constant-time comparison
//! - payload decodes (base64 with or without padding, then JSON)
//! - `exp > now` (a token with `exp == now` is already expired)
//!
//! Callers only ever see [`InvalidToken`]. The reason a token was
//! rejected (structure, signature, payload, expiry) is logged at debug
//! level and never surfaced across the trust boundary.

use std::time::Duration;

use chrono::Utc;
use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};
use serde::{Deserialize, Serialize};

/// Fixed header descriptor, first token segment
const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Undifferentiated verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidToken;

impl std::fmt::Display for InvalidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid or expired token")
    }
}

impl std::error::Error for InvalidToken {}

/// Internal rejection reason, for debug logging only
#[derive(Debug)]
enum TokenDefect {
    /// Not three dot-separated segments
    Structure,
    /// Signature segment does not decode or does not match
    Signature,
    /// Payload segment does not decode to the expected claims
    Payload,
    /// `exp` is at or before the verification time
    Expired,
}

/// Token payload claims
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Issues and verifies signed, expiring bearer tokens
pub struct TokenService {
    secret: [u8; 32],
}

impl TokenService {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue a token binding `subject` until now + `ttl`
    pub fn issue(&self, subject: &str, ttl: Duration) -> String {
        let exp = Utc::now().timestamp() + ttl.as_secs() as i64;
        self.issue_with_expiry(subject, exp)
    }

    fn issue_with_expiry(&self, subject: &str, exp: i64) -> String {
        let claims = Claims {
            sub: subject.to_string(),
            exp,
        };
        let header = to_base64url(TOKEN_HEADER.as_bytes());
        let payload = to_base64url(
            &serde_json::to_vec(&claims).expect("claims always serialize to JSON"),
        );
        let message = format!("{}.{}", header, payload);
        let signature = hmac_sha256(&self.secret, message.as_bytes());
        format!("{}.{}", message, to_base64url(&signature))
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<String, InvalidToken> {
        let now = Utc::now().timestamp();
        match self.inspect(token, now) {
            Ok(claims) => Ok(claims.sub),
            Err(defect) => {
                tracing::debug!(defect = ?defect, "Token rejected");
                Err(InvalidToken)
            }
        }
    }

    fn inspect(&self, token: &str, now: i64) -> Result<Claims, TokenDefect> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenDefect::Structure);
        };

        // Signature first: nothing in the payload is trusted until the
        // MAC over `header.payload` checks out.
        let message = format!("{}.{}", header, payload);
        let expected = hmac_sha256(&self.secret, message.as_bytes());
        let received = from_base64url(signature).map_err(|_| TokenDefect::Signature)?;
        if !constant_time_eq(&expected, &received) {
            return Err(TokenDefect::Signature);
        }

        let payload_bytes = from_base64url(payload).map_err(|_| TokenDefect::Payload)?;
        let claims: Claims =
            serde_json::from_slice(&payload_bytes).map_err(|_| TokenDefect::Payload)?;

        if claims.exp <= now {
            return Err(TokenDefect::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    fn service() -> TokenService {
        TokenService::new([42u8; 32])
    }

    #[test]
    fn test_round_trip() {
        let tokens = service();
        let token = tokens.issue("alice", HOUR);
        assert_eq!(tokens.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_token_shape() {
        let token = service().issue("alice", HOUR);
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);
        // Unpadded URL-safe base64 throughout
        assert!(!token.contains('='));
        assert_eq!(
            from_base64url(segments[0]).unwrap(),
            TOKEN_HEADER.as_bytes()
        );
    }

    #[test]
    fn test_zero_ttl_is_already_expired() {
        let tokens = service();
        let token = tokens.issue("alice", Duration::ZERO);
        assert_eq!(tokens.verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let tokens = service();
        let now = Utc::now().timestamp();
        // exp == now: expired
        let token = tokens.issue_with_expiry("alice", now);
        assert!(matches!(
            tokens.inspect(&token, now),
            Err(TokenDefect::Expired)
        ));
        // exp == now + 1: still valid
        let token = tokens.issue_with_expiry("alice", now + 1);
        assert!(tokens.inspect(&token, now).is_ok());
    }

    #[test]
    fn test_signature_bit_flip_rejected() {
        let tokens = service();
        let token = tokens.issue("alice", HOUR);
        let (message, signature) = token.rsplit_once('.').unwrap();

        let mut sig_bytes = from_base64url(signature).unwrap();
        for (i, bit) in [(0, 0x01u8), (10, 0x80u8), (31, 0x10u8)] {
            sig_bytes[i] ^= bit;
            let tampered = format!("{}.{}", message, to_base64url(&sig_bytes));
            assert_eq!(tokens.verify(&tampered), Err(InvalidToken));
            sig_bytes[i] ^= bit; // restore
        }
    }

    #[test]
    fn test_reencoded_payload_rejected() {
        // Editing the expiry and re-encoding the payload invalidates
        // the signature.
        let tokens = service();
        let token = tokens.issue("alice", Duration::ZERO);
        let segments: Vec<&str> = token.split('.').collect();

        let mut claims: serde_json::Value =
            serde_json::from_slice(&from_base64url(segments[1]).unwrap()).unwrap();
        claims["exp"] = serde_json::json!(Utc::now().timestamp() + 9999);
        let doctored = format!(
            "{}.{}.{}",
            segments[0],
            to_base64url(claims.to_string().as_bytes()),
            segments[2]
        );
        assert_eq!(tokens.verify(&doctored), Err(InvalidToken));
    }

    #[test]
    fn test_wrong_segment_count_rejected() {
        let tokens = service();
        let token = tokens.issue("alice", HOUR);
        assert_eq!(tokens.verify(""), Err(InvalidToken));
        assert_eq!(tokens.verify("onlyonesegment"), Err(InvalidToken));
        assert_eq!(tokens.verify(&token[..token.rfind('.').unwrap()]), Err(InvalidToken));
        assert_eq!(tokens.verify(&format!("{}.extra", token)), Err(InvalidToken));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = TokenService::new([1u8; 32]).issue("alice", HOUR);
        assert_eq!(TokenService::new([2u8; 32]).verify(&token), Err(InvalidToken));
    }

    #[test]
    fn test_padded_signature_segment_accepted() {
        // A 32-byte signature encodes to 43 chars; a padded encoder
        // would emit a trailing '='. Verification tolerates it.
        let tokens = service();
        let token = tokens.issue("alice", HOUR);
        assert_eq!(tokens.verify(&format!("{}=", token)).unwrap(), "alice");
    }
}
