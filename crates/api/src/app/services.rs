//! Service wiring shared by all route handlers.

use std::sync::Arc;

use cartshare_auth::Hs256TokenCodec;
use cartshare_feed::FeedAggregator;
use cartshare_infra::{InMemoryPurchaseStore, InMemoryRelationshipStore, InMemoryUserDirectory};
use cartshare_purchases::PurchaseLedger;
use cartshare_social::FriendGraph;

type Relationships = Arc<InMemoryRelationshipStore>;
type Directory = Arc<InMemoryUserDirectory>;
type Purchases = Arc<InMemoryPurchaseStore>;

/// The engines, wired over shared in-memory stores.
///
/// The stores are behind `Arc`, so the graph, the ledger, and the feed
/// aggregator all observe the same state.
pub struct AppServices {
    pub directory: Directory,
    pub graph: FriendGraph<Relationships, Directory>,
    pub ledger: PurchaseLedger<Purchases>,
    pub feed: FeedAggregator<Relationships, Directory, Purchases>,
    pub tokens: Arc<Hs256TokenCodec>,
}

impl AppServices {
    /// In-memory wiring (dev/test; also the only backend for now).
    pub fn in_memory(tokens: Arc<Hs256TokenCodec>) -> Self {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let relationships = Arc::new(InMemoryRelationshipStore::new());
        let purchases = Arc::new(InMemoryPurchaseStore::new());

        Self {
            directory: directory.clone(),
            graph: FriendGraph::new(relationships.clone(), directory.clone()),
            ledger: PurchaseLedger::new(purchases.clone()),
            feed: FeedAggregator::new(
                FriendGraph::new(relationships, directory),
                PurchaseLedger::new(purchases),
            ),
            tokens,
        }
    }
}
