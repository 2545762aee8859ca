use cu_core::ports::{SessionStoragePort, StorageError};

/// Storage that refuses every operation, like a browser with session
/// storage turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSessionStorage;

impl SessionStoragePort for DisabledSessionStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
