use std::sync::Arc;

use evently_core::{DomainError, EventId};

use crate::records::{Event, EventPatch, NewEvent};
use crate::store::DocumentStore;

use super::ServiceError;

pub struct EventService {
    store: Arc<DocumentStore>,
}

impl EventService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Newest first.
    pub fn list(&self) -> Vec<Event> {
        self.store.read().events
    }

    pub fn get(&self, id: &EventId) -> Result<Event, ServiceError> {
        self.store
            .read()
            .event(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found().into())
    }

    pub fn create(&self, new: NewEvent) -> Result<Event, ServiceError> {
        let event = self
            .store
            .update(|doc| Ok::<_, ServiceError>(doc.insert_event(new)))?;
        tracing::info!(event_id = %event.id, "event created");
        Ok(event)
    }

    pub fn update(&self, id: &EventId, patch: EventPatch) -> Result<Event, ServiceError> {
        self.store
            .update(|doc| doc.update_event(id, patch).map_err(ServiceError::from))
    }

    pub fn delete(&self, id: &EventId) -> Result<Event, ServiceError> {
        let removed = self
            .store
            .update(|doc| doc.remove_event(id).map_err(ServiceError::from))?;
        tracing::info!(event_id = %removed.id, "event deleted");
        Ok(removed)
    }
}
