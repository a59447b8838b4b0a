use serde::Deserialize;
use serde_json::json;

use cartshare_auth::UserProfile;
use cartshare_feed::FeedEntry;
use cartshare_purchases::Purchase;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Field names stay camelCase to match the original wire contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFriendRequestRequest {
    pub friend_email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptFriendRequestRequest {
    pub friend_id: String,
}

/// The slice of a WooCommerce order payload this service reads.
#[derive(Debug, Deserialize)]
pub struct CommerceOrderWebhook {
    pub billing: BillingDetails,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
}

#[derive(Debug, Deserialize)]
pub struct BillingDetails {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineItem {
    pub name: String,
}

// -------------------------
// Response mapping
// -------------------------

pub fn profile_to_json(profile: &UserProfile) -> serde_json::Value {
    json!({
        "id": profile.id.to_string(),
        "email": profile.email.as_str(),
    })
}

pub fn purchase_to_json(purchase: &Purchase) -> serde_json::Value {
    json!({
        "id": purchase.id.to_string(),
        "item": purchase.item,
        "visible": purchase.visible,
    })
}

pub fn feed_entry_to_json(entry: &FeedEntry) -> serde_json::Value {
    let mut value = purchase_to_json(&entry.purchase);
    value["friend"] = profile_to_json(&entry.friend);
    value
}
