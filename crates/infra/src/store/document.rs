//! The persisted aggregate and the field-level operations on it.
//!
//! Every operation here is pure over an in-memory [`Document`]; persistence is
//! the caller's job (see [`super::DocumentStore::update`]).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use evently_core::{DomainError, DomainResult, EventId, UserId, find_index};

use crate::records::{Event, EventPatch, NewEvent, NewUser, User, UserPatch};

/// The whole persisted state: every user and every event.
///
/// Top-level keys other than `users` and `events` are carried in `extra` and
/// written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "collection")]
    pub users: Vec<User>,
    #[serde(default, deserialize_with = "collection")]
    pub events: Vec<Event>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decode a stored collection entry by entry, so one entry that is not a
/// record (a bare number, a string) is skipped instead of failing the rest.
fn collection<'de, D, R>(deserializer: D) -> Result<Vec<R>, D::Error>
where
    D: Deserializer<'de>,
    R: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        _ => {
            tracing::warn!("stored collection is not an array; ignoring it");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping stored entry that is not a record");
                None
            }
        })
        .collect())
}

impl Document {
    // ── users ────────────────────────────────────────────────────────────────

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    fn email_taken(&self, email: &str, except: Option<&UserId>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(&u.id) != except)
    }

    /// Append a new user, enforcing case-sensitive email uniqueness.
    pub fn insert_user(&mut self, new: NewUser) -> DomainResult<User> {
        if self.email_taken(&new.email, None) {
            return Err(DomainError::conflict("User exists"));
        }

        let user = new.into_user(UserId::new());
        self.users.push(user.clone());
        Ok(user)
    }

    /// Exact email + plaintext password match.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    pub fn update_user(&mut self, id: &UserId, patch: UserPatch) -> DomainResult<User> {
        let idx = find_index(&self.users, id).ok_or(DomainError::NotFound)?;

        if let Some(email) = patch.email.as_deref() {
            if self.email_taken(email, Some(id)) {
                return Err(DomainError::conflict("User exists"));
            }
        }

        let user = &mut self.users[idx];
        user.apply(patch);
        Ok(user.clone())
    }

    pub fn remove_user(&mut self, id: &UserId) -> DomainResult<User> {
        let idx = find_index(&self.users, id).ok_or(DomainError::NotFound)?;
        Ok(self.users.remove(idx))
    }

    // ── events ───────────────────────────────────────────────────────────────

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Newest first: events are inserted at the head.
    pub fn insert_event(&mut self, new: NewEvent) -> Event {
        let event = new.into_event(EventId::new());
        self.events.insert(0, event.clone());
        event
    }

    pub fn update_event(&mut self, id: &EventId, patch: EventPatch) -> DomainResult<Event> {
        let idx = find_index(&self.events, id).ok_or(DomainError::NotFound)?;
        let event = &mut self.events[idx];
        event.apply(patch);
        Ok(event.clone())
    }

    pub fn remove_event(&mut self, id: &EventId) -> DomainResult<Event> {
        let idx = find_index(&self.events, id).ok_or(DomainError::NotFound)?;
        Ok(self.events.remove(idx))
    }
}
