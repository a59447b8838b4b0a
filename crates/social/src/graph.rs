//! The friend graph engine: request/accept/query operations.

use chrono::Utc;

use cartshare_auth::{UserDirectory, UserProfile};
use cartshare_core::{DomainError, DomainResult, EmailAddress, UserId};

use crate::relationship::{PairKey, Relationship, RelationshipStatus};
use crate::store::RelationshipStore;

/// Friend-graph operations over an injected store and identity directory.
///
/// All mutations go through [`RelationshipStore::mutate`], so every
/// state transition is atomic with respect to concurrent mutators of the
/// same pair.
pub struct FriendGraph<S, D> {
    store: S,
    directory: D,
}

impl<S, D> FriendGraph<S, D>
where
    S: RelationshipStore,
    D: UserDirectory,
{
    pub fn new(store: S, directory: D) -> Self {
        Self { store, directory }
    }

    /// Send a friend request from `requester` to the user behind `target_email`.
    ///
    /// Fails with `NotFound` if the email resolves to nobody, `Validation` on
    /// a self-request, `DuplicateRequest` if a request is already pending for
    /// the pair, and `Conflict` if the two users are already friends.
    pub fn send_request(
        &self,
        requester: UserId,
        target_email: &EmailAddress,
    ) -> DomainResult<Relationship> {
        let target = self
            .directory
            .find_by_email(target_email)?
            .ok_or(DomainError::NotFound)?;

        let pair = PairKey::new(requester, target.id)?;
        let pending = Relationship::pending(requester, target.id, Utc::now())?;

        self.store.mutate(pair, &mut |current| match current {
            None => Ok(pending.clone()),
            Some(existing) if existing.status() == RelationshipStatus::Pending => {
                Err(DomainError::DuplicateRequest)
            }
            Some(_) => Err(DomainError::conflict("users are already friends")),
        })
    }

    /// Accept the pending request from `requester` addressed to `accepter`.
    ///
    /// The Pending → Accepted transition happens inside one `mutate` call:
    /// observers either see the request still pending or the friendship on
    /// both sides, never an in-between state.
    pub fn accept_request(
        &self,
        accepter: UserId,
        requester: UserId,
    ) -> DomainResult<Relationship> {
        // A self-accept cannot name a real request.
        let pair = PairKey::new(accepter, requester).map_err(|_| DomainError::NoSuchRequest)?;
        let now = Utc::now();

        self.store.mutate(pair, &mut |current| match current {
            Some(mut rel) => {
                rel.accept(accepter, now)?;
                Ok(rel)
            }
            None => Err(DomainError::NoSuchRequest),
        })
    }

    /// Profiles of users with a request pending for `user`, oldest first.
    pub fn pending_requests(&self, user: UserId) -> DomainResult<Vec<UserProfile>> {
        let mut pending: Vec<Relationship> = self
            .store
            .involving(user)?
            .into_iter()
            .filter(|r| r.status() == RelationshipStatus::Pending && r.target() == user)
            .collect();
        pending.sort_by_key(Relationship::created_at);

        pending
            .iter()
            .map(|r| self.profile_of(r.requester()))
            .collect()
    }

    /// Profiles of `user`'s confirmed friends, in acceptance order.
    pub fn friends(&self, user: UserId) -> DomainResult<Vec<UserProfile>> {
        let mut accepted: Vec<Relationship> = self
            .store
            .involving(user)?
            .into_iter()
            .filter(|r| r.status() == RelationshipStatus::Accepted)
            .collect();
        accepted.sort_by_key(Relationship::updated_at);

        accepted
            .iter()
            .filter_map(|r| r.other(user))
            .map(|id| self.profile_of(id))
            .collect()
    }

    fn profile_of(&self, id: UserId) -> DomainResult<UserProfile> {
        // A relationship referencing an unknown user means the stores
        // disagree; surface it as a storage failure, not a caller error.
        self.directory
            .get(id)?
            .map(|account| account.profile())
            .ok_or_else(|| DomainError::storage(format!("user {id} missing from directory")))
    }
}
