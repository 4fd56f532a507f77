use thiserror::Error;

use std::sync::Arc;

use super::Document;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-document persistence boundary.
///
/// `load` never fails: a backend that cannot produce a document (missing or
/// unreadable data) must hand back [`Document::default`]. `save` replaces the
/// entire persisted document.
pub trait Store: Send + Sync {
    fn load(&self) -> Document;

    fn save(&self, document: &Document) -> Result<(), StoreError>;
}

impl<S> Store for Arc<S>
where
    S: Store + ?Sized,
{
    fn load(&self) -> Document {
        (**self).load()
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        (**self).save(document)
    }
}
