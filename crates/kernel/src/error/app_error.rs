//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// 各クレートのドメインエラー（AuthError、LedgerError）は HTTP 境界で
/// この型に畳み込まれてからレスポンスになります。`message` はそのまま
/// クライアントへ返るため、内部情報を含めてはいけません。
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::bad_request("Insufficient funds");
/// assert_eq!(err.status_code(), 400);
/// assert_eq!(err.message(), "Insufficient funds");
/// ```
pub struct AppError {
    /// エラー種別（HTTP ステータスコードへのマッピングを持つ）
    kind: ErrorKind,
    /// クライアントに返るメッセージ
    message: Cow<'static, str>,
    /// 元のエラー。ログとデバッグ専用で、レスポンスには含まれない
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 種別とメッセージからエラーを作成
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// 元のエラーを添付（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// クライアント向けメッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// サーバーエラー（ログ必須）かどうか
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    /// クライアントエラーかどうか
    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

// ============================================================================
// Convenience constructors, one per ErrorKind
// ============================================================================

macro_rules! constructor {
    ($(#[$doc:meta] $name:ident => $kind:ident),* $(,)?) => {
        impl AppError {
            $(
                #[$doc]
                #[inline]
                pub fn $name(message: impl Into<Cow<'static, str>>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )*
        }
    };
}

constructor! {
    /// 400 Bad Request エラー
    bad_request => BadRequest,
    /// 401 Unauthorized エラー
    unauthorized => Unauthorized,
    /// 403 Forbidden エラー
    forbidden => Forbidden,
    /// 404 Not Found エラー
    not_found => NotFound,
    /// 409 Conflict エラー
    conflict => Conflict,
    /// 422 Unprocessable Entity エラー
    unprocessable => UnprocessableEntity,
    /// 500 Internal Server Error
    internal => InternalServerError,
    /// 503 Service Unavailable エラー
    service_unavailable => ServiceUnavailable,
}

// ============================================================================
// std trait implementations
// ============================================================================

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_matching_kind() {
        let cases: [(AppError, u16); 8] = [
            (AppError::bad_request("m"), 400),
            (AppError::unauthorized("m"), 401),
            (AppError::forbidden("m"), 403),
            (AppError::not_found("m"), 404),
            (AppError::conflict("m"), 409),
            (AppError::unprocessable("m"), 422),
            (AppError::internal("m"), 500),
            (AppError::service_unavailable("m"), 503),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
            assert_eq!(err.kind().status_code(), status);
        }
    }

    #[test]
    fn message_and_display_carry_the_client_text() {
        let err = AppError::bad_request("Cannot send money to yourself");
        assert_eq!(err.message(), "Cannot send money to yourself");
        assert_eq!(
            err.to_string(),
            "[Bad Request] Cannot send money to yourself"
        );
    }

    #[test]
    fn source_chain_is_preserved() {
        let inner = std::io::Error::other("connection reset");
        let err = AppError::service_unavailable("Database unavailable").with_source(inner);

        let source = err.source().expect("source attached");
        assert!(source.to_string().contains("connection reset"));

        // Debug includes the source; Display stays client-facing
        assert!(format!("{err:?}").contains("connection reset"));
        assert!(!err.to_string().contains("connection reset"));
    }

    #[test]
    fn static_and_owned_messages_both_accepted() {
        let owned = AppError::not_found(format!("Transaction {} not found", 7));
        assert_eq!(owned.message(), "Transaction 7 not found");
        assert!(!AppError::not_found("gone").is_server_error());
        assert!(AppError::internal("boom").is_server_error());
    }
}
