//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Transport concerns belong in the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested resource was not found (target email, friend id, purchase id).
    #[error("not found")]
    NotFound,

    /// A friend request for this pair of users is already pending.
    #[error("friend request already pending")]
    DuplicateRequest,

    /// Accept was attempted with no matching pending request.
    #[error("no pending friend request from that user")]
    NoSuchRequest,

    /// The acting identity does not own the targeted resource.
    #[error("forbidden")]
    Forbidden,

    /// A conflict occurred (e.g. duplicate registration email, already friends).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A value failed validation (e.g. malformed email, blank item).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backing store failed (e.g. poisoned lock). Not a caller mistake.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
