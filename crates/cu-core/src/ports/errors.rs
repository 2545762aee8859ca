use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,

    #[error("session storage quota exceeded ({used} of {quota} bytes)")]
    QuotaExceeded { used: usize, quota: usize },

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

#[derive(Debug, Error)]
pub enum ProfilePictureError {
    #[error("profile picture request failed: {0}")]
    Http(String),

    #[error("profile picture lookup timed out")]
    Timeout,
}
