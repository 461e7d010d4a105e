//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// このサービスが境界で返すエラー分類だけを列挙します。各バリアントは
/// HTTP ステータスコードに 1:1 でマッピングされます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::BadRequest;
/// assert_eq!(kind.status_code(), 400);
/// assert_eq!(kind.as_str(), "Bad Request");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: 入力が受理できない（残高不足・自己送金を含む）
    BadRequest,
    /// 401 - Unauthorized: 資格情報またはトークンが無効
    Unauthorized,
    /// 403 - Forbidden: 認証済みだがリソースの所有者ではない
    Forbidden,
    /// 404 - Not Found: 口座または取引が存在しない
    NotFound,
    /// 409 - Conflict: 同時リクエストによる一意制約・整合性の衝突
    Conflict,
    /// 422 - Unprocessable Entity: 形式は正しいが意味的に処理できない
    UnprocessableEntity,
    /// 500 - Internal Server Error: サーバー内部の予期しない失敗
    InternalServerError,
    /// 503 - Service Unavailable: データベース等の依存先が利用不可
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// サーバー側のエラー（5xx）かどうかを判定
    ///
    /// ログに記録すべきエラーはこちら側です。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InternalServerError | ErrorKind::ServiceUnavailable
        )
    }

    /// クライアント側のエラー（4xx）かどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        !self.is_server_error()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ErrorKind; 8] = [
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::NotFound,
        ErrorKind::Conflict,
        ErrorKind::UnprocessableEntity,
        ErrorKind::InternalServerError,
        ErrorKind::ServiceUnavailable,
    ];

    #[test]
    fn every_kind_maps_to_a_distinct_status() {
        let mut seen = std::collections::HashSet::new();
        for kind in ALL_KINDS {
            assert!(seen.insert(kind.status_code()), "{kind} reuses a status");
        }
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
    }

    #[test]
    fn server_and_client_sides_partition_the_kinds() {
        for kind in ALL_KINDS {
            assert_ne!(kind.is_server_error(), kind.is_client_error());
            assert_eq!(kind.is_server_error(), kind.status_code() >= 500);
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
        assert_eq!(
            ErrorKind::UnprocessableEntity.to_string(),
            ErrorKind::UnprocessableEntity.as_str()
        );
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::InternalServerError).unwrap(),
            "\"INTERNAL_SERVER_ERROR\""
        );
    }
}
