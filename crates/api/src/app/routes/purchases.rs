//! Purchase routes: the network feed, visibility toggle, and the commerce
//! ingestion webhook.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use cartshare_auth::UserDirectory;
use cartshare_core::{EmailAddress, PurchaseId};

use crate::app::errors::{domain_error_to_response, json_error};
use crate::app::{dto, services::AppServices};
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/network-purchases", get(network_purchases))
        .route("/purchases/:id/visibility", patch(toggle_visibility))
}

/// The webhook stays outside the auth middleware: the upstream commerce
/// platform is an unauthenticated event source (a known gap carried over
/// from the original, not to be silently fixed here).
pub fn webhook_router() -> Router {
    Router::new().route("/woocommerce-webhook", post(commerce_webhook))
}

pub async fn network_purchases(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
) -> axum::response::Response {
    match services.feed.build_feed(user.user_id()) {
        Ok(entries) => {
            let items: Vec<_> = entries.iter().map(dto::feed_entry_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!(items))).into_response()
        }
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn toggle_visibility(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let purchase_id: PurchaseId = match id.parse() {
        Ok(v) => v,
        Err(_) => return json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid purchase id"),
    };

    match services.ledger.toggle_visibility(user.user_id(), purchase_id) {
        Ok(purchase) => (StatusCode::OK, Json(dto::purchase_to_json(&purchase))).into_response(),
        Err(e) => domain_error_to_response(e),
    }
}

pub async fn commerce_webhook(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CommerceOrderWebhook>,
) -> axum::response::Response {
    tracing::info!(
        email = %body.billing.email,
        items = body.line_items.len(),
        "received commerce webhook"
    );

    let email = match EmailAddress::parse(&body.billing.email) {
        Ok(e) => e,
        Err(e) => return domain_error_to_response(e),
    };

    let owner = match services.directory.find_by_email(&email) {
        Ok(Some(account)) => account.id,
        Ok(None) => return domain_error_to_response(cartshare_core::DomainError::NotFound),
        Err(e) => return domain_error_to_response(e),
    };

    // The batch commits as a whole: a bad line item rejects the order
    // without recording anything.
    let items: Vec<&str> = body.line_items.iter().map(|line| line.name.as_str()).collect();
    let recorded: Vec<_> = match services.ledger.record_batch(owner, &items) {
        Ok(purchases) => purchases.iter().map(dto::purchase_to_json).collect(),
        Err(e) => return domain_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "recorded": recorded.len(),
            "purchases": recorded,
        })),
    )
        .into_response()
}
