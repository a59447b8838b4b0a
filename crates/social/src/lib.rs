//! `cartshare-social` — the friend graph engine.
//!
//! Friend requests and confirmed friendships are a single kind of record: a
//! [`Relationship`] keyed by the unordered pair of users, tagged Pending or
//! Accepted. Symmetry is therefore structural (one record serves both sides)
//! and acceptance is one atomic record transition, never a dual write.

pub mod graph;
pub mod relationship;
pub mod store;

pub use graph::FriendGraph;
pub use relationship::{PairKey, Relationship, RelationshipStatus};
pub use store::{MutateRecord, RelationshipStore};
