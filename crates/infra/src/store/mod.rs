//! Single-document persistence.
//!
//! All state lives in one [`Document`]. Handlers never touch a backend
//! directly: they go through [`DocumentStore`], which serializes every
//! read-modify-write cycle behind one lock so concurrent requests cannot
//! clobber each other's writes.

pub mod document;
pub mod in_memory;
pub mod json_file;
pub mod r#trait;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use document::Document;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::{Store, StoreError};

/// Exclusive critical section around a [`Store`] backend.
pub struct DocumentStore {
    backend: Box<dyn Store>,
    lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(backend: impl Store + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The lock protects no in-memory data, so a panicked holder leaves
        // nothing inconsistent behind.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current document.
    pub fn read(&self) -> Document {
        let _guard = self.guard();
        self.backend.load()
    }

    /// Load, mutate, save, all under the lock.
    ///
    /// If `apply` fails nothing is written.
    pub fn update<T, E>(&self, apply: impl FnOnce(&mut Document) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.guard();
        let mut document = self.backend.load();
        let out = apply(&mut document)?;
        self.backend.save(&document)?;
        Ok(out)
    }
}

impl core::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DocumentStore").finish_non_exhaustive()
    }
}
