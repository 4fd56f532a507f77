use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use evently_core::UserId;

use crate::{Identity, Role};

/// Session token claims.
///
/// Timestamps are seconds since the Unix epoch (`iat`/`exp`), the same shape
/// any JWT library expects, so tokens stay interoperable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: UserId,
    pub email: String,
    pub role: Role,

    /// Issued-at timestamp.
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Expiration timestamp.
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl SessionClaims {
    pub fn new(identity: &Identity, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            role: identity.role.clone(),
            issued_at: now.timestamp(),
            expires_at: (now + ttl).timestamp(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.id.clone(), self.email.clone(), self.role.clone())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims against `now`.
///
/// Note: this validates the *claims* only. Signature verification happens in
/// [`crate::TokenAuthority::verify`] before this is called.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    let now = now.timestamp();
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
