use std::io::ErrorKind;
use std::path::PathBuf;

use super::r#trait::{Store, StoreError};
use super::Document;

/// Durable store backed by a single pretty-printed JSON file.
///
/// Reads are fail-open: a missing or unreadable file, or one that is not a
/// JSON object, loads as an empty document. A syntactically valid document
/// always loads; individual odd records are handled by [`Document`]'s own
/// decoding. Writes go to a sibling temp file first and are renamed
/// over the target, so a crash mid-write never leaves a truncated document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Document {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "data file absent; starting empty");
                return Document::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "data file unreadable; treating as empty");
                return Document::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "data file corrupt; treating as empty");
                Document::default()
            }
        }
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();
        std::fs::write(&temp, json)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
