//! Infrastructure adapters for the ConnectU ports.
//!
//! - `storage`: session storage backends
//! - `security`: argon2 password hashing
//! - `profile`: HTTP profile picture lookup

pub mod profile;
pub mod security;
pub mod storage;

pub use profile::HttpProfilePictureLookup;
pub use security::Argon2PasswordHasher;
pub use storage::{DisabledSessionStorage, InMemorySessionStorage};
