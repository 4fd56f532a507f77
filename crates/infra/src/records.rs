//! Persisted record shapes (users, events) and their create/patch inputs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use evently_auth::{Identity, Role};
use evently_core::{DomainResult, Entity, EventId, UserId, require_fields};

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// Stored user account.
///
/// The password is kept and compared as plaintext; it never leaves the store
/// except through [`User::public`], which strips it.
///
/// Decoding never rejects a JSON object: missing fields load blank, scalar
/// fields of another JSON type load as their text, and unknown keys are kept
/// in `extra` so a rewrite of the document does not drop them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub id: UserId,
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub password: String,
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub role: Role,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public projection of a [`User`] (no password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.id.clone(), self.email.clone(), self.role.clone())
    }

    /// Overwrite every field the patch carries; leave the rest untouched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(role) = patch.role {
            self.role = Role::from(role);
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Validated input for creating a user (signup or admin creation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    /// All three fields are required and must be non-empty.
    pub fn validate(
        email: Option<String>,
        password: Option<String>,
        role: Option<String>,
    ) -> DomainResult<Self> {
        require_fields(&[
            ("email", email.as_deref()),
            ("password", password.as_deref()),
            ("role", role.as_deref()),
        ])?;

        Ok(Self {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
            role: Role::from(role.unwrap_or_default()),
        })
    }

    pub(crate) fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
            role: self.role,
            extra: Map::new(),
        }
    }
}

/// Partial update for a user: `None` (absent or JSON `null`) means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Stored event listing. Decodes as leniently as [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub id: EventId,
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default = "lenient::blank", deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> &EventId {
        &self.id
    }
}

/// Validated input for creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl NewEvent {
    /// `title` and `image` are required; `description` defaults to empty.
    pub fn validate(
        title: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> DomainResult<Self> {
        require_fields(&[("title", title.as_deref()), ("image", image.as_deref())])?;

        Ok(Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            image: image.unwrap_or_default(),
        })
    }

    pub(crate) fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            extra: Map::new(),
        }
    }
}

/// Partial update for an event: `None` (absent or JSON `null`) means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Field decoders for records read back from disk.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings as-is, `null` as empty, any other value as its JSON text.
    pub fn text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: From<String>,
    {
        let text = match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        Ok(T::from(text))
    }

    pub fn blank<T: From<String>>() -> T {
        T::from(String::new())
    }
}
