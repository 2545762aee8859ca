//! Session-scoped persistence of the signed-up user.

mod store;

pub use store::{SessionStore, SESSION_USER_KEY};
