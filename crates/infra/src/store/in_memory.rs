use std::sync::{PoisonError, RwLock};

use super::r#trait::{Store, StoreError};
use super::Document;

/// In-memory document store.
///
/// Intended for tests/dev. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RwLock<Document>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

impl Store for InMemoryStore {
    fn load(&self) -> Document {
        self.document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.write().unwrap_or_else(PoisonError::into_inner) = document.clone();
        Ok(())
    }
}
