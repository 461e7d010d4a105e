//! Error conversions - From implementations for common error types
//!
//! Lets infrastructure code use `?` on library errors and get a
//! sensibly-classified [`AppError`] back.

use super::app_error::AppError;
use super::kind::ErrorKind;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

/// sqlx エラーの変換
///
/// このスキーマが実際に起こし得る Postgres エラークラスだけを分類
/// します。一意制約（ユーザー名の競合登録）と CHECK 制約（残高・金額）
/// は Conflict、直列化失敗とデッドロックはリトライ可能な Conflict、
/// リソース枯渇は ServiceUnavailable。
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let classified = match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted")
            }
            sqlx::Error::Io(_) => AppError::service_unavailable("Database connection error"),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // Class 23 — Integrity Constraint Violation
                Some("23502") => AppError::bad_request("Required field is null"),
                Some("23503") => AppError::conflict("Foreign key violation"),
                Some("23505") => AppError::conflict("Duplicate key value"),
                Some("23514") => AppError::conflict("Check constraint violation"),
                // Class 40 — Transaction Rollback (serialization/deadlock)
                Some("40001") | Some("40P01") => {
                    AppError::conflict("Transaction conflict, retry the request")
                }
                // Class 53 — Insufficient Resources
                Some("53000") | Some("53100") | Some("53200") | Some("53300") => {
                    AppError::service_unavailable("Database resource exhausted")
                }
                _ => AppError::internal("Database error"),
            },
            _ => AppError::internal("Database error"),
        };
        classified.with_source(err)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_errors_classify_by_io_kind() {
        let missing: AppError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let denied: AppError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(denied.kind(), ErrorKind::Forbidden);

        let other: AppError = std::io::Error::other("disk on fire").into();
        assert_eq!(other.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn parse_failures_are_client_errors() {
        let err: AppError = "not-a-number".parse::<i64>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.source().is_some());
    }

    #[test]
    fn json_syntax_errors_are_bad_requests() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = parse.into();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.message().starts_with("JSON parse error"));
    }
}
