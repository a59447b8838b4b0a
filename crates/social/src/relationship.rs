//! Relationship records: one per unordered user pair.
//!
//! # Invariants
//! - A pair never contains the same user twice (irreflexive by construction).
//! - `requester` is always a member of the pair.
//! - The only transition is Pending → Accepted; Accepted is terminal.
//!   There is no Rejected state and no unfriend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartshare_core::{DomainError, DomainResult, UserId};

/// Canonical unordered pair of distinct users.
///
/// `new(a, b)` and `new(b, a)` produce the same key, so one map slot covers
/// both directions of a relationship.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    lo: UserId,
    hi: UserId,
}

impl PairKey {
    pub fn new(a: UserId, b: UserId) -> DomainResult<Self> {
        if a == b {
            return Err(DomainError::validation(
                "a relationship requires two distinct users",
            ));
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { lo, hi })
    }

    pub fn members(&self) -> (UserId, UserId) {
        (self.lo, self.hi)
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.lo == user || self.hi == user
    }
}

/// Lifecycle of a relationship record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipStatus {
    /// A friend request from `requester`, awaiting the other member.
    Pending,
    /// Confirmed mutual friendship (terminal).
    Accepted,
}

/// A friend request or confirmed friendship between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pair: PairKey,
    requester: UserId,
    status: RelationshipStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Relationship {
    /// A fresh pending request from `requester` to `target`.
    pub fn pending(requester: UserId, target: UserId, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            pair: PairKey::new(requester, target)?,
            requester,
            status: RelationshipStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn pair(&self) -> PairKey {
        self.pair
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    /// The member the request was addressed to.
    pub fn target(&self) -> UserId {
        let (lo, hi) = self.pair.members();
        if self.requester == lo { hi } else { lo }
    }

    pub fn status(&self) -> RelationshipStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the last transition (acceptance time once Accepted).
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The member of the pair that is not `user`, if `user` belongs to it.
    pub fn other(&self, user: UserId) -> Option<UserId> {
        let (lo, hi) = self.pair.members();
        if user == lo {
            Some(hi)
        } else if user == hi {
            Some(lo)
        } else {
            None
        }
    }

    /// Transition Pending → Accepted.
    ///
    /// Fails with `NoSuchRequest` unless this record is a pending request
    /// addressed to `accepter`. Nothing is mutated on failure.
    pub fn accept(&mut self, accepter: UserId, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != RelationshipStatus::Pending || self.target() != accepter {
            return Err(DomainError::NoSuchRequest);
        }
        self.status = RelationshipStatus::Accepted;
        self.updated_at = now;
        Ok(())
    }
}
