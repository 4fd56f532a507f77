use std::sync::Arc;

use evently_core::{DomainError, UserId};

use crate::records::{NewUser, PublicUser, UserPatch};
use crate::store::DocumentStore;

use super::ServiceError;

/// Admin-side user management plus self-lookup.
///
/// Everything returned is the public projection.
pub struct UserService {
    store: Arc<DocumentStore>,
}

impl UserService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<PublicUser> {
        self.store.read().users.iter().map(|u| u.public()).collect()
    }

    pub fn get(&self, id: &UserId) -> Result<PublicUser, ServiceError> {
        self.store
            .read()
            .user(id)
            .map(|u| u.public())
            .ok_or_else(|| DomainError::not_found().into())
    }

    pub fn create(&self, new: NewUser) -> Result<PublicUser, ServiceError> {
        let user = self
            .store
            .update(|doc| doc.insert_user(new).map_err(ServiceError::from))?;
        tracing::info!(user_id = %user.id, role = %user.role, "user created");
        Ok(user.public())
    }

    pub fn update(&self, id: &UserId, patch: UserPatch) -> Result<PublicUser, ServiceError> {
        let user = self
            .store
            .update(|doc| doc.update_user(id, patch).map_err(ServiceError::from))?;
        Ok(user.public())
    }

    pub fn delete(&self, id: &UserId) -> Result<PublicUser, ServiceError> {
        let removed = self
            .store
            .update(|doc| doc.remove_user(id).map_err(ServiceError::from))?;
        tracing::info!(user_id = %removed.id, "user deleted");
        Ok(removed.public())
    }
}
