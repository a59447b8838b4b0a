//! Repository abstraction for relationship records.

use std::sync::Arc;

use cartshare_core::{DomainResult, UserId};

use crate::relationship::{PairKey, Relationship};

/// Closure applied to the current record of a pair under `mutate`.
///
/// Receives the stored record (if any) and returns the record to persist.
pub type MutateRecord<'a> = &'a mut dyn FnMut(Option<Relationship>) -> DomainResult<Relationship>;

/// Storage for relationship records, keyed by [`PairKey`].
///
/// `mutate` is the unit of atomicity: implementations must run the closure
/// and persist its result as a single step, serialized with all other
/// mutators of the same pair, and persist nothing when the closure errors.
/// This is what keeps a racing send/accept from half-committing.
pub trait RelationshipStore: Send + Sync {
    fn mutate(&self, pair: PairKey, f: MutateRecord<'_>) -> DomainResult<Relationship>;

    /// Snapshot of every record containing `user`, ordered by creation time.
    fn involving(&self, user: UserId) -> DomainResult<Vec<Relationship>>;
}

impl<S> RelationshipStore for Arc<S>
where
    S: RelationshipStore + ?Sized,
{
    fn mutate(&self, pair: PairKey, f: MutateRecord<'_>) -> DomainResult<Relationship> {
        (**self).mutate(pair, f)
    }

    fn involving(&self, user: UserId) -> DomainResult<Vec<Relationship>> {
        (**self).involving(user)
    }
}
