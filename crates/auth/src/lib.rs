//! `cartshare-auth` — authentication/identity boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it holds the
//! identity-store abstraction, credential hashing, and token issue/verify.
//! The rest of the system trusts the `UserId` resolved here as the acting user.

pub mod account;
pub mod claims;
pub mod error;
pub mod password;
pub mod token;

pub use account::{UserAccount, UserDirectory, UserProfile};
pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use token::{Hs256TokenCodec, TokenVerifier};
