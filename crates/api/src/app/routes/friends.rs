//! Friend-graph routes: send/accept requests, list pending and friends.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use cartshare_core::{EmailAddress, UserId};

use crate::app::errors::{domain_error_to_response, json_error};
use crate::app::{dto, services::AppServices};
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/send-friend-request", post(send_friend_request))
        .route("/accept-friend-request", post(accept_friend_request))
        .route("/friend-requests", get(list_friend_requests))
        .route("/friends", get(list_friends))
}

pub async fn send_friend_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<dto::SendFriendRequestRequest>,
) -> axum::response::Response {
    let email = match EmailAddress::parse(&body.friend_email) {
        Ok(e) => e,
        Err(e) => return domain_error_to_response(e),
    };

    match services.graph.send_request(user.user_id(), &email) {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "friend request sent" })),
        )
            .into_response(),
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn accept_friend_request(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<dto::AcceptFriendRequestRequest>,
) -> axum::response::Response {
    let requester: UserId = match body.friend_id.parse() {
        Ok(v) => v,
        Err(_) => return json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid friend id"),
    };

    match services.graph.accept_request(user.user_id(), requester) {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "friend request accepted" })),
        )
            .into_response(),
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn list_friend_requests(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
) -> axum::response::Response {
    match services.graph.pending_requests(user.user_id()) {
        Ok(profiles) => {
            let items: Vec<_> = profiles.iter().map(dto::profile_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!(items))).into_response()
        }
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn list_friends(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
) -> axum::response::Response {
    match services.graph.friends(user.user_id()) {
        Ok(profiles) => {
            let items: Vec<_> = profiles.iter().map(dto::profile_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!(items))).into_response()
        }
        Err(e) => domain_error_to_response(e),
    }
}
