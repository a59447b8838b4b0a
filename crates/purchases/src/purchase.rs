//! The purchase record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartshare_core::{DomainError, DomainResult, PurchaseId, UserId};

/// A purchase owned by one user.
///
/// Created by an external ingestion event (the commerce webhook), visible by
/// default, and mutated only by the owner's visibility toggle. Never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub owner: UserId,
    /// Opaque item descriptor from the commerce payload.
    pub item: String,
    pub visible: bool,
    pub recorded_at: DateTime<Utc>,
}

impl Purchase {
    /// A fresh visible purchase. Fails `Validation` on a blank item.
    pub fn record(owner: UserId, item: &str, now: DateTime<Utc>) -> DomainResult<Self> {
        let item = item.trim();
        if item.is_empty() {
            return Err(DomainError::validation("purchase item must not be blank"));
        }
        Ok(Self {
            id: PurchaseId::new(),
            owner,
            item: item.to_string(),
            visible: true,
            recorded_at: now,
        })
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_visible_by_default() {
        let p = Purchase::record(UserId::new(), "Widget", Utc::now()).unwrap();
        assert!(p.visible);
        assert_eq!(p.item, "Widget");
    }

    #[test]
    fn trims_item_descriptor() {
        let p = Purchase::record(UserId::new(), "  Widget ", Utc::now()).unwrap();
        assert_eq!(p.item, "Widget");
    }

    #[test]
    fn rejects_blank_item() {
        assert!(matches!(
            Purchase::record(UserId::new(), "   ", Utc::now()).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn double_toggle_restores_prior_state() {
        let mut p = Purchase::record(UserId::new(), "Widget", Utc::now()).unwrap();
        p.toggle();
        assert!(!p.visible);
        p.toggle();
        assert!(p.visible);
    }
}
