//! Repository abstraction for purchase records.

use std::sync::Arc;

use cartshare_core::{DomainResult, PurchaseId, UserId};

use crate::purchase::Purchase;

/// Closure applied to a stored purchase under `update`.
pub type MutatePurchase<'a> = &'a mut dyn FnMut(&mut Purchase) -> DomainResult<()>;

/// Storage for purchase records.
///
/// `update` is atomic: the closure runs against the stored record serialized
/// with other mutators, and nothing is persisted when it errors. `owned_by`
/// returns a user's purchases in insertion order.
pub trait PurchaseStore: Send + Sync {
    fn append(&self, purchase: Purchase) -> DomainResult<()>;

    fn get(&self, id: PurchaseId) -> DomainResult<Option<Purchase>>;

    /// Apply `f` to the record with `id`, returning the updated record.
    /// Fails with `NotFound` when no such record exists.
    fn update(&self, id: PurchaseId, f: MutatePurchase<'_>) -> DomainResult<Purchase>;

    fn owned_by(&self, owner: UserId) -> DomainResult<Vec<Purchase>>;
}

impl<S> PurchaseStore for Arc<S>
where
    S: PurchaseStore + ?Sized,
{
    fn append(&self, purchase: Purchase) -> DomainResult<()> {
        (**self).append(purchase)
    }

    fn get(&self, id: PurchaseId) -> DomainResult<Option<Purchase>> {
        (**self).get(id)
    }

    fn update(&self, id: PurchaseId, f: MutatePurchase<'_>) -> DomainResult<Purchase> {
        (**self).update(id, f)
    }

    fn owned_by(&self, owner: UserId) -> DomainResult<Vec<Purchase>> {
        (**self).owned_by(owner)
    }
}
