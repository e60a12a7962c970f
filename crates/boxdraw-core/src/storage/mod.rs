//! Storage abstraction for persistence.
//!
//! The drawing surface keeps its shapes in a single key-value slot. The
//! [`Storage`] trait is that slot store; [`DrawsStore`] reads and writes the
//! shape collection through it.

mod draws;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod local;

pub use draws::{DrawsStore, DRAWS_KEY};
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for key-value slot backends.
///
/// Values are text. Writing a key fully replaces its previous value.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    /// Read a slot. `Ok(None)` if nothing was ever written to it.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a slot, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Empty a slot. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Trait for key-value slot backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    /// Read a slot. `Ok(None)` if nothing was ever written to it.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a slot, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Empty a slot. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
