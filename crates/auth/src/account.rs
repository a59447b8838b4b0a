//! User accounts and the identity-store abstraction.
//!
//! # Invariants
//! - Emails are unique across the directory (enforced at `create`).
//! - Accounts are never deleted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartshare_core::{DomainResult, EmailAddress, UserId};

/// A stored user account. The `password_hash` is opaque here; hashing and
/// verification live in [`crate::password`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(email: EmailAddress, password_hash: String, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash,
            created_at: now,
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Display projection of an account, safe to hand to other users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: EmailAddress,
}

/// Identity store: resolves emails and ids to accounts.
pub trait UserDirectory: Send + Sync {
    /// Insert a new account. Fails with `Conflict` if the email is taken.
    fn create(&self, account: UserAccount) -> DomainResult<()>;

    fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<UserAccount>>;

    fn get(&self, id: UserId) -> DomainResult<Option<UserAccount>>;
}

impl<D> UserDirectory for Arc<D>
where
    D: UserDirectory + ?Sized,
{
    fn create(&self, account: UserAccount) -> DomainResult<()> {
        (**self).create(account)
    }

    fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<UserAccount>> {
        (**self).find_by_email(email)
    }

    fn get(&self, id: UserId) -> DomainResult<Option<UserAccount>> {
        (**self).get(id)
    }
}
