use async_trait::async_trait;

use crate::ports::errors::ProfilePictureError;

/// Best-effort lookup of a public profile picture.
///
/// This is an optional enrichment: callers treat every error as "no picture".
#[async_trait]
pub trait ProfilePicturePort: Send + Sync {
    /// Resolve the image URL for a profile page, `Ok(None)` if the page has none.
    async fn lookup(&self, profile_url: &str) -> Result<Option<String>, ProfilePictureError>;
}
