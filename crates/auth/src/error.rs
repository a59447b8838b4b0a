//! Authentication error model.

use thiserror::Error;

/// Failures at the authentication boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The presented token could not be verified.
    #[error("invalid token")]
    InvalidToken,

    /// The presented token is outside its validity window.
    #[error("token has expired")]
    Expired,

    /// Unknown email or wrong password. Deliberately a single variant so the
    /// caller cannot distinguish which half was wrong.
    #[error("email or password is incorrect")]
    InvalidCredentials,

    /// Password hashing machinery failed (not a caller mistake).
    #[error("credential hashing failed: {0}")]
    Hash(String),
}
