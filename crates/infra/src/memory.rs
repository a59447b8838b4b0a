//! In-memory store implementations for dev and tests.
//!
//! Each store guards its records with one `RwLock`; mutating operations hold
//! the write side for the whole read-modify-write, which serializes racing
//! mutators of the same record. A poisoned lock surfaces as
//! `DomainError::Storage` rather than a panic.

use std::collections::HashMap;
use std::sync::RwLock;

use cartshare_auth::{UserAccount, UserDirectory};
use cartshare_core::{DomainError, DomainResult, EmailAddress, PurchaseId, UserId};
use cartshare_purchases::{MutatePurchase, Purchase, PurchaseStore};
use cartshare_social::{MutateRecord, PairKey, Relationship, RelationshipStore};

fn poisoned(which: &str) -> DomainError {
    DomainError::storage(format!("{which} lock poisoned"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Relationships
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory relationship store, one slot per user pair.
#[derive(Debug, Default)]
pub struct InMemoryRelationshipStore {
    records: RwLock<HashMap<PairKey, Relationship>>,
}

impl InMemoryRelationshipStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RelationshipStore for InMemoryRelationshipStore {
    fn mutate(&self, pair: PairKey, f: MutateRecord<'_>) -> DomainResult<Relationship> {
        let mut records = self
            .records
            .write()
            .map_err(|_| poisoned("relationship store"))?;

        // The closure runs under the write lock: the transition and its
        // precondition check are one atomic unit.
        let next = f(records.get(&pair).cloned())?;
        records.insert(pair, next.clone());
        Ok(next)
    }

    fn involving(&self, user: UserId) -> DomainResult<Vec<Relationship>> {
        let records = self
            .records
            .read()
            .map_err(|_| poisoned("relationship store"))?;

        let mut out: Vec<Relationship> = records
            .values()
            .filter(|r| r.pair().contains(user))
            .cloned()
            .collect();
        // Map iteration order is arbitrary; pin down creation order with the
        // pair as tie-breaker.
        out.sort_by_key(|r| (r.created_at(), r.pair().members()));
        Ok(out)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Purchases
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory purchase store; the backing Vec preserves insertion order.
#[derive(Debug, Default)]
pub struct InMemoryPurchaseStore {
    records: RwLock<Vec<Purchase>>,
}

impl InMemoryPurchaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PurchaseStore for InMemoryPurchaseStore {
    fn append(&self, purchase: Purchase) -> DomainResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned("purchase store"))?;
        records.push(purchase);
        Ok(())
    }

    fn get(&self, id: PurchaseId) -> DomainResult<Option<Purchase>> {
        let records = self.records.read().map_err(|_| poisoned("purchase store"))?;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    fn update(&self, id: PurchaseId, f: MutatePurchase<'_>) -> DomainResult<Purchase> {
        let mut records = self.records.write().map_err(|_| poisoned("purchase store"))?;
        let slot = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;

        // Run the closure against a scratch copy so a failing closure leaves
        // the stored record untouched.
        let mut scratch = slot.clone();
        f(&mut scratch)?;
        *slot = scratch.clone();
        Ok(scratch)
    }

    fn owned_by(&self, owner: UserId) -> DomainResult<Vec<Purchase>> {
        let records = self.records.read().map_err(|_| poisoned("purchase store"))?;
        Ok(records.iter().filter(|p| p.owner == owner).cloned().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User directory
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct DirectoryInner {
    by_id: HashMap<UserId, UserAccount>,
    by_email: HashMap<EmailAddress, UserId>,
}

/// In-memory identity store with a unique-email index.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    inner: RwLock<DirectoryInner>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn create(&self, account: UserAccount) -> DomainResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned("user directory"))?;

        if inner.by_email.contains_key(&account.email) {
            return Err(DomainError::conflict("email already registered"));
        }
        inner.by_email.insert(account.email.clone(), account.id);
        inner.by_id.insert(account.id, account);
        Ok(())
    }

    fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<UserAccount>> {
        let inner = self.inner.read().map_err(|_| poisoned("user directory"))?;
        Ok(inner
            .by_email
            .get(email)
            .and_then(|id| inner.by_id.get(id))
            .cloned())
    }

    fn get(&self, id: UserId) -> DomainResult<Option<UserAccount>> {
        let inner = self.inner.read().map_err(|_| poisoned("user directory"))?;
        Ok(inner.by_id.get(&id).cloned())
    }
}
