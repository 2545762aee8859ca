use std::sync::Arc;

use tracing::{debug, warn};

use cu_core::ports::SessionStoragePort;
use cu_core::user::UserRecord;

/// Storage key holding the JSON-encoded [`UserRecord`].
pub const SESSION_USER_KEY: &str = "connectu_user";

const CHECK_KEY: &str = "__connectu_test__";

/// Reads and writes the single user record for the current session.
///
/// Availability is checked once at construction. Neither `load` nor `save`
/// ever returns an error: storage failures degrade to "no record" and
/// "not saved" respectively.
pub struct SessionStore {
    storage: Arc<dyn SessionStoragePort>,
    available: bool,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStoragePort>) -> Self {
        let available = accepts_writes(storage.as_ref());
        if available {
            debug!("session storage available");
        } else {
            warn!("session storage unavailable, user records will not persist");
        }
        Self { storage, available }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Load the stored record, if any.
    pub fn load(&self) -> Option<UserRecord> {
        if !self.available {
            return None;
        }

        let raw = match self.storage.get_item(SESSION_USER_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read stored user");
                return None;
            }
        };

        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "stored user is not a valid record, ignoring it");
                None
            }
        }
    }

    /// Persist `record`, replacing any previous one.
    ///
    /// Returns `false` when the record was not written.
    pub fn save(&self, record: &UserRecord) -> bool {
        if !self.available {
            debug!("skipping save, session storage unavailable");
            return false;
        }

        let encoded = match serde_json::to_string(record) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to encode user record");
                return false;
            }
        };

        match self.storage.set_item(SESSION_USER_KEY, &encoded) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to store user record");
                false
            }
        }
    }

    /// Drop the stored record so a later `load` cannot return it.
    pub fn clear(&self) {
        if !self.available {
            return;
        }

        if let Err(err) = self.storage.remove_item(SESSION_USER_KEY) {
            warn!(error = %err, "failed to remove stored user record");
        }
    }
}

fn accepts_writes(storage: &dyn SessionStoragePort) -> bool {
    storage
        .set_item(CHECK_KEY, CHECK_KEY)
        .and_then(|()| storage.remove_item(CHECK_KEY))
        .is_ok()
}
