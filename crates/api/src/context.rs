use evently_auth::{Identity, Role, SessionClaims};
use evently_core::UserId;

/// Principal context for a request (verified identity + role).
///
/// Inserted by the authenticate gate; handlers behind it can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    identity: Identity,
}

impl PrincipalContext {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn user_id(&self) -> &UserId {
        &self.identity.id
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }

    pub fn role(&self) -> &Role {
        &self.identity.role
    }
}

impl From<SessionClaims> for PrincipalContext {
    fn from(claims: SessionClaims) -> Self {
        Self::new(claims.identity())
    }
}
