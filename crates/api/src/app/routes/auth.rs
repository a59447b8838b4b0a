//! Registration and login.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use cartshare_auth::{self as auth, UserAccount, UserDirectory};
use cartshare_core::EmailAddress;

use crate::app::errors::{domain_error_to_response, json_error};
use crate::app::{dto, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let email = match EmailAddress::parse(&body.email) {
        Ok(e) => e,
        Err(e) => return domain_error_to_response(e),
    };
    if body.password.is_empty() {
        return json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "password must not be empty",
        );
    }

    let password_hash = match auth::hash_password(&body.password) {
        Ok(h) => h,
        Err(e) => {
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "hash_error", e.to_string());
        }
    };

    let account = UserAccount::new(email, password_hash, Utc::now());
    let user_id = account.id;
    if let Err(e) = services.directory.create(account) {
        return domain_error_to_response(e);
    }

    tracing::info!(user_id = %user_id, "user registered");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": user_id.to_string() })),
    )
        .into_response()
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    // One failure shape for unknown email and wrong password alike.
    let rejected = || {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_credentials",
            "email or password is incorrect",
        )
    };

    let Ok(email) = EmailAddress::parse(&body.email) else {
        return rejected();
    };

    let account = match services.directory.find_by_email(&email) {
        Ok(Some(account)) => account,
        Ok(None) => return rejected(),
        Err(e) => return domain_error_to_response(e),
    };

    match auth::verify_password(&body.password, &account.password_hash) {
        Ok(true) => {}
        Ok(false) => return rejected(),
        Err(e) => {
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "hash_error", e.to_string());
        }
    }

    match services.tokens.issue(account.id, Utc::now()) {
        Ok(token) => (StatusCode::OK, Json(serde_json::json!({ "token": token }))).into_response(),
        Err(e) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "token_error", e.to_string()),
    }
}
