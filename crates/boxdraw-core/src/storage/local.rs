//! Browser localStorage implementation for WebAssembly.

use super::{Storage, StorageError, StorageResult};
use web_sys::Storage as WebStorage;

/// Storage backed by `window.localStorage`.
///
/// Note: This is intentionally not Send/Sync since WASM is single-threaded
/// and the browser storage handle is not thread-safe.
pub struct LocalStorage {
    inner: WebStorage,
}

impl LocalStorage {
    /// Open the page's localStorage.
    pub fn new() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Other("No window object".to_string()))?;

        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Other(format!("localStorage error: {:?}", e)))?
            .ok_or_else(|| StorageError::Other("localStorage not available".to_string()))?;

        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Io(format!("Get error: {:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Fails when the origin's quota is exhausted.
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Io(format!("Set error: {:?}", e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::Io(format!("Remove error: {:?}", e)))
    }
}
