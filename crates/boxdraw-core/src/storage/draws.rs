//! Persistence of the shape collection in a single storage slot.

use super::{Storage, StorageError, StorageResult};
use crate::shapes::ShapeCollection;
use std::sync::Arc;

/// Slot that holds the persisted shapes.
pub const DRAWS_KEY: &str = "draws";

/// Reads and writes a [`ShapeCollection`] as JSON in one storage slot.
pub struct DrawsStore<S: Storage> {
    /// Storage backend.
    storage: Arc<S>,
    /// Slot key.
    key: String,
}

impl<S: Storage> DrawsStore<S> {
    /// Store shapes under [`DRAWS_KEY`].
    pub fn new(storage: Arc<S>) -> Self {
        Self::with_key(storage, DRAWS_KEY)
    }

    /// Store shapes under a custom slot key.
    pub fn with_key(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Serialize `draws` and overwrite the slot with it.
    pub fn save(&self, draws: &ShapeCollection) -> StorageResult<()> {
        let json = serde_json::to_string(draws)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(&self.key, &json)
    }

    /// Read the slot back.
    ///
    /// Returns `Ok(None)` if nothing has been saved yet. Data that does not
    /// decode is an error; no partial recovery is attempted.
    pub fn load(&self) -> StorageResult<Option<ShapeCollection>> {
        let Some(json) = self.storage.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StorageError::Serialization(format!("Failed to parse {}: {}", self.key, e)))
    }

    /// Slot key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}
