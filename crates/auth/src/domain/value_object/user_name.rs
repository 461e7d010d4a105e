//! User Name Value Object
//!
//! ユーザー名は、口座を識別するための公開識別子（ハンドル）。
//! ログイン、表示、送金先の指定に使用される。
//!
//! ## 設計方針
//! - ASCII 英数字と `_` `-` のみ許可
//! - 大文字入力は受け付けるが、canonical（正規形）は小文字
//! - NFKC正規化 → 検証 → 小文字化 の順で処理
//!
//! ## 不変条件
//! - 長さ: 3〜50文字（正規化後）
//! - 一意性は canonical 形で判定する

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNameError {
    /// User name is empty after normalization
    #[error("Username cannot be empty")]
    Empty,

    /// User name is too short
    #[error("Username must be at least {min} characters (got {length})")]
    TooShort { length: usize, min: usize },

    /// User name is too long
    #[error("Username must be at most {max} characters (got {length})")]
    TooLong { length: usize, max: usize },

    /// User name contains a character outside [a-zA-Z0-9_-]
    #[error("Username may only contain letters, numbers, underscores, and hyphens")]
    InvalidCharacter(char),
}

// ============================================================================
// User Name
// ============================================================================

/// Validated user name
///
/// Keeps the original (display) form alongside the canonical
/// (lowercase) form used for uniqueness and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Validate and construct a user name
    ///
    /// Processing order: NFKC normalization, charset/length checks,
    /// lowercasing for the canonical form.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();

        if normalized.is_empty() {
            return Err(UserNameError::Empty);
        }

        if let Some(bad) = normalized
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(UserNameError::InvalidCharacter(bad));
        }

        let length = normalized.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        let canonical = normalized.to_ascii_lowercase();
        Ok(Self {
            original: normalized,
            canonical,
        })
    }

    /// The form the user typed (after NFKC), for display and storage
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for uniqueness and lookups
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["abc", "alice", "Bob-42", "under_score", "A1-b2_C3"] {
            assert!(UserName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_canonical_is_lowercase() {
        let name = UserName::new("AliceSmith").unwrap();
        assert_eq!(name.original(), "AliceSmith");
        assert_eq!(name.canonical(), "alicesmith");
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            UserName::new("ab"),
            Err(UserNameError::TooShort { length: 2, min: 3 })
        ));
        assert!(UserName::new("a".repeat(50)).is_ok());
        assert!(matches!(
            UserName::new("a".repeat(51)),
            Err(UserNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(
            UserName::new("alice smith"),
            Err(UserNameError::InvalidCharacter(' '))
        );
        assert_eq!(
            UserName::new("alice@bank"),
            Err(UserNameError::InvalidCharacter('@'))
        );
        assert!(UserName::new("日本語ユーザー").is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
    }

    #[test]
    fn test_nfkc_fullwidth_digits_become_ascii() {
        // Full-width "１２３" normalizes to ASCII digits under NFKC
        let name = UserName::new("user１２３").unwrap();
        assert_eq!(name.canonical(), "user123");
    }
}
