//! `cartshare-purchases` — per-user purchase records with a visibility flag.

pub mod ledger;
pub mod purchase;
pub mod store;

pub use ledger::PurchaseLedger;
pub use purchase::Purchase;
pub use store::{MutatePurchase, PurchaseStore};
