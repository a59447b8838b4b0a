//! The purchase visibility ledger: record, toggle, list.

use chrono::Utc;

use cartshare_core::{DomainError, DomainResult, PurchaseId, UserId};

use crate::purchase::Purchase;
use crate::store::PurchaseStore;

/// Purchase operations over an injected store.
pub struct PurchaseLedger<S> {
    store: S,
}

impl<S> PurchaseLedger<S>
where
    S: PurchaseStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a purchase for `owner`, visible by default.
    ///
    /// Driven by the commerce ingestion event, never by the end user.
    pub fn record(&self, owner: UserId, item: &str) -> DomainResult<Purchase> {
        let purchase = Purchase::record(owner, item, Utc::now())?;
        self.store.append(purchase.clone())?;
        Ok(purchase)
    }

    /// Record one purchase per item, all or nothing.
    ///
    /// Every item is validated before anything is appended, so a bad line in
    /// an ingestion batch leaves the ledger untouched. All records in the
    /// batch share one timestamp.
    pub fn record_batch(&self, owner: UserId, items: &[&str]) -> DomainResult<Vec<Purchase>> {
        let now = Utc::now();
        let mut purchases = Vec::with_capacity(items.len());
        for item in items {
            purchases.push(Purchase::record(owner, item, now)?);
        }
        for purchase in &purchases {
            self.store.append(purchase.clone())?;
        }
        Ok(purchases)
    }

    /// Flip the visibility flag of `actor`'s own purchase.
    ///
    /// `NotFound` if no purchase has this id; `Forbidden` if it exists but
    /// belongs to someone else. The ownership check runs inside the store's
    /// atomic update, so a non-owner can never flip the flag.
    pub fn toggle_visibility(&self, actor: UserId, id: PurchaseId) -> DomainResult<Purchase> {
        self.store.update(id, &mut |purchase| {
            if purchase.owner != actor {
                return Err(DomainError::Forbidden);
            }
            purchase.toggle();
            Ok(())
        })
    }

    /// All of `owner`'s purchases, hidden ones included, in insertion order.
    pub fn purchases_of(&self, owner: UserId) -> DomainResult<Vec<Purchase>> {
        self.store.owned_by(owner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::store::MutatePurchase;

    #[derive(Default)]
    struct VecStore {
        rows: Mutex<Vec<Purchase>>,
    }

    impl PurchaseStore for VecStore {
        fn append(&self, purchase: Purchase) -> DomainResult<()> {
            self.rows.lock().unwrap().push(purchase);
            Ok(())
        }

        fn get(&self, id: PurchaseId) -> DomainResult<Option<Purchase>> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        fn update(&self, id: PurchaseId, f: MutatePurchase<'_>) -> DomainResult<Purchase> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(DomainError::NotFound)?;
            f(row)?;
            Ok(row.clone())
        }

        fn owned_by(&self, owner: UserId) -> DomainResult<Vec<Purchase>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.owner == owner)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn batch_records_every_item_in_order() {
        let ledger = PurchaseLedger::new(VecStore::default());
        let owner = UserId::new();

        let recorded = ledger.record_batch(owner, &["Widget", "Gadget"]).unwrap();
        assert_eq!(recorded.len(), 2);

        let items: Vec<_> = ledger
            .purchases_of(owner)
            .unwrap()
            .into_iter()
            .map(|p| p.item)
            .collect();
        assert_eq!(items, vec!["Widget", "Gadget"]);
    }

    #[test]
    fn batch_with_blank_item_records_nothing() {
        let ledger = PurchaseLedger::new(VecStore::default());
        let owner = UserId::new();

        let err = ledger.record_batch(owner, &["Widget", "   "]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(ledger.purchases_of(owner).unwrap().is_empty());
    }
}
