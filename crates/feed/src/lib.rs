//! `cartshare-feed` — the network purchase feed.
//!
//! Purely a read-time composition of the friend graph and the purchase
//! ledger; nothing here mutates state.

use serde::{Deserialize, Serialize};

use cartshare_auth::{UserDirectory, UserProfile};
use cartshare_core::{DomainResult, UserId};
use cartshare_purchases::{Purchase, PurchaseLedger, PurchaseStore};
use cartshare_social::{FriendGraph, RelationshipStore};

/// One feed row: a friend's visible purchase, attributed to that friend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub friend: UserProfile,
    pub purchase: Purchase,
}

/// Builds the visibility-scoped feed of a viewer's friends' purchases.
pub struct FeedAggregator<RS, D, PS> {
    graph: FriendGraph<RS, D>,
    ledger: PurchaseLedger<PS>,
}

impl<RS, D, PS> FeedAggregator<RS, D, PS>
where
    RS: RelationshipStore,
    D: UserDirectory,
    PS: PurchaseStore,
{
    pub fn new(graph: FriendGraph<RS, D>, ledger: PurchaseLedger<PS>) -> Self {
        Self { graph, ledger }
    }

    /// The feed for `viewer`: each confirmed friend's purchases with
    /// `visible = true`, concatenated in friend order then per-friend
    /// insertion order. Never contains the viewer's own purchases —
    /// friendship is irreflexive, so the viewer is never in the friend set.
    pub fn build_feed(&self, viewer: UserId) -> DomainResult<Vec<FeedEntry>> {
        let mut feed = Vec::new();

        for friend in self.graph.friends(viewer)? {
            for purchase in self.ledger.purchases_of(friend.id)? {
                if purchase.visible {
                    feed.push(FeedEntry {
                        friend: friend.clone(),
                        purchase,
                    });
                }
            }
        }

        Ok(feed)
    }
}
