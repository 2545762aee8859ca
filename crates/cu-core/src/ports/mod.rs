//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the browser-like storage, the hashing backend and the network.

pub mod errors;
pub mod password_hasher;
pub mod profile_picture;
pub mod session_storage;

pub use errors::{PasswordHashError, ProfilePictureError, StorageError};
pub use password_hasher::PasswordHasherPort;
pub use profile_picture::ProfilePicturePort;
pub use session_storage::SessionStoragePort;
