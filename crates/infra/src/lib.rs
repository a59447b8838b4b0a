//! Infrastructure layer: repository implementations.
//!
//! Currently in-memory only; a persistent backend slots in behind the same
//! store traits without touching the engines.

pub mod memory;

mod integration_tests;

pub use memory::{InMemoryPurchaseStore, InMemoryRelationshipStore, InMemoryUserDirectory};
