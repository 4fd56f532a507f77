//! Session token authority (HMAC-SHA256 JWTs).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::{Identity, SessionClaims, TokenValidationError, validate_claims};

/// Lifetime of a session token, in seconds (7 days).
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, malformed token, wrong algorithm, undecodable claims.
    #[error("invalid token: {0}")]
    Invalid(String),

    /// Signature was fine but the claims are outside their validity window.
    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("failed to sign token: {0}")]
    Encoding(String),
}

/// Issues and verifies stateless session tokens.
///
/// `now` is passed explicitly so expiry is deterministic under test.
pub trait TokenAuthority: Send + Sync {
    fn issue(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError>;

    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError>;
}

/// HS256 token authority over a process-wide shared secret.
pub struct Hs256TokenAuthority {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256TokenAuthority {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_ttl(secret, Duration::seconds(SESSION_TTL_SECS))
    }

    pub fn with_ttl(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        let secret = secret.as_ref();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    fn validation() -> Validation {
        // Expiry is checked by `validate_claims` against the caller's clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }
}

impl core::fmt::Debug for Hs256TokenAuthority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256TokenAuthority")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenAuthority for Hs256TokenAuthority {
    fn issue(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = SessionClaims::new(identity, now, self.ttl);
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &Self::validation())
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
