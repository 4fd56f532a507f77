use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use evently_auth::TokenAuthority;
use evently_core::require_fields;

use crate::records::{NewUser, PublicUser, User};
use crate::store::DocumentStore;

use super::ServiceError;

/// A freshly authenticated session: who, plus the bearer token to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: PublicUser,
    pub token: String,
}

/// Signup and login.
pub struct CredentialService {
    store: Arc<DocumentStore>,
    tokens: Arc<dyn TokenAuthority>,
}

impl CredentialService {
    pub fn new(store: Arc<DocumentStore>, tokens: Arc<dyn TokenAuthority>) -> Self {
        Self { store, tokens }
    }

    /// Create an account and sign the caller in.
    ///
    /// The uniqueness check and the append run in the same critical section.
    pub fn signup(&self, new: NewUser, now: DateTime<Utc>) -> Result<Session, ServiceError> {
        let user = self
            .store
            .update(|doc| doc.insert_user(new).map_err(ServiceError::from))?;

        tracing::info!(user_id = %user.id, role = %user.role, "user signed up");
        self.session_for(&user, now)
    }

    /// Exact email + password match against the current store.
    pub fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Session, ServiceError> {
        require_fields(&[("email", email), ("password", password)])?;
        let (email, password) = (email.unwrap_or_default(), password.unwrap_or_default());

        let doc = self.store.read();
        let user = doc
            .find_by_credentials(email, password)
            .ok_or(ServiceError::InvalidCredentials)?;

        tracing::debug!(user_id = %user.id, "user logged in");
        self.session_for(user, now)
    }

    fn session_for(&self, user: &User, now: DateTime<Utc>) -> Result<Session, ServiceError> {
        let token = self.tokens.issue(&user.identity(), now)?;
        Ok(Session {
            user: user.public(),
            token,
        })
    }
}
