use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use cu_core::ports::{SessionStoragePort, StorageError};

/// Process-local key/value storage, living as long as the process.
///
/// An optional quota bounds the total byte size of keys plus values,
/// mirroring the per-origin limit of browser storage.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    items: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            quota: Some(quota_bytes),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|_| StorageError::Backend("storage lock poisoned".to_string()))
    }
}

fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

impl SessionStoragePort for InMemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.lock()?;

        if let Some(quota) = self.quota {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| entry_size(k, v))
                .sum();
            let used = others + entry_size(key, value);
            if used > quota {
                debug!(used, quota, "session storage write rejected");
                return Err(StorageError::QuotaExceeded { used, quota });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
