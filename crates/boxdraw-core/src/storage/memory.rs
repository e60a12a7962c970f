//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let slots = self.slots.read().map_err(|e| {
            StorageError::Other(format!("Lock error: {}", e))
        })?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut slots = self.slots.write().map_err(|e| {
            StorageError::Other(format!("Lock error: {}", e))
        })?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut slots = self.slots.write().map_err(|e| {
            StorageError::Other(format!("Lock error: {}", e))
        })?;
        slots.remove(key);
        Ok(())
    }
}
