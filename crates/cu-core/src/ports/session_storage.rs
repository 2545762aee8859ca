use crate::ports::errors::StorageError;

/// Tab-scoped key/value storage (the `sessionStorage` contract).
///
/// Calls are synchronous and may fail at any time, e.g. when the backend is
/// disabled or full. Callers decide how to degrade.
pub trait SessionStoragePort: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
