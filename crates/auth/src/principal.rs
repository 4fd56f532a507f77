use serde::{Deserialize, Serialize};

use evently_core::UserId;

use crate::Role;

/// Identity of an authenticated user, as carried inside a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}
