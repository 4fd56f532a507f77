use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role attached to a user account.
///
/// Roles are opaque strings at this layer. Exactly one value (`admin`) is
/// privileged; every other value is treated identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

/// Closed privilege classification derived from a [`Role`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Privilege {
    Admin,
    Unprivileged,
}

impl Role {
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against `admin`.
    pub fn privilege(&self) -> Privilege {
        if self.as_str() == Self::ADMIN.as_str() {
            Privilege::Admin
        } else {
            Privilege::Unprivileged
        }
    }

    pub fn is_admin(&self) -> bool {
        self.privilege() == Privilege::Admin
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_admin_is_privileged() {
        assert_eq!(Role::new("admin").privilege(), Privilege::Admin);
        assert_eq!(Role::new("Admin").privilege(), Privilege::Unprivileged);
        assert_eq!(Role::new("user").privilege(), Privilege::Unprivileged);
        assert_eq!(Role::new("superuser").privilege(), Privilege::Unprivileged);
        assert!(!Role::new("").is_admin());
    }

    #[test]
    fn role_serializes_as_plain_string() {
        let json = serde_json::to_string(&Role::new("editor")).unwrap();
        assert_eq!(json, "\"editor\"");
        let back: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back, Role::ADMIN);
    }
}
