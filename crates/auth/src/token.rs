//! Token issue/verify: HS256 JWTs over [`AccessClaims`].
//!
//! Signature verification is delegated to `jsonwebtoken`; the time window is
//! then checked by the deterministic [`validate_claims`] so its edge cases
//! stay unit-testable without real keys.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use cartshare_core::UserId;

use crate::claims::{AccessClaims, TokenValidationError, validate_claims};
use crate::error::AuthError;

/// Verifies an opaque bearer token into resolved claims.
///
/// Object-safe so the HTTP middleware can hold an `Arc<dyn TokenVerifier>`.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, AuthError>;
}

/// HS256 issuer/verifier sharing one symmetric secret.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for `user_id`, valid for the configured TTL from `now`.
    pub fn issue(&self, user_id: UserId, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = AccessClaims::new(user_id, now, self.ttl);
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| AuthError::InvalidToken)
    }
}

impl TokenVerifier for Hs256TokenCodec {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, AuthError> {
        // Signature-only decode; the time window is validated below so that
        // expiry maps to a distinct error.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        validate_claims(&data.claims, now).map_err(|e| match e {
            TokenValidationError::Expired => AuthError::Expired,
            TokenValidationError::NotYetValid | TokenValidationError::InvalidTimeWindow => {
                AuthError::InvalidToken
            }
        })?;

        Ok(data.claims)
    }
}
