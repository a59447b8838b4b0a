use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use cartshare_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::DuplicateRequest => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate_request",
            "friend request already sent",
        ),
        DomainError::NoSuchRequest => json_error(
            StatusCode::BAD_REQUEST,
            "no_such_request",
            "no friend request from this user",
        ),
        DomainError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::Storage(msg) => {
            // Storage detail stays in the logs, never in the response.
            tracing::error!(detail = %msg, "storage error");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", "internal error")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
