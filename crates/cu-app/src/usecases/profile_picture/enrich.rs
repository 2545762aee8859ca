use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info_span, warn, Instrument};

use cu_core::ports::ProfilePicturePort;
use cu_core::user::UserProfile;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_millis(4000);

/// Best-effort avatar lookup for a signed-up user.
///
/// 头像获取失败时静默返回 `None`，不影响页面状态。
pub struct EnrichProfilePicture {
    port: Arc<dyn ProfilePicturePort>,
    timeout: Duration,
}

impl EnrichProfilePicture {
    pub fn new(port: Arc<dyn ProfilePicturePort>, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    /// Resolve the avatar URL, or `None` when there is nothing to show.
    pub async fn execute(&self, profile: &UserProfile) -> Option<String> {
        let url = profile.linkedin_url.as_deref()?;
        if !is_linkedin_profile(url) {
            debug!("profile url is not a linkedin profile, skipping avatar lookup");
            return None;
        }

        let span = info_span!("usecase.profile_picture.execute");
        async {
            match tokio::time::timeout(self.timeout, self.port.lookup(url)).await {
                Ok(Ok(Some(image))) => {
                    debug!("profile picture resolved");
                    Some(image)
                }
                Ok(Ok(None)) => {
                    debug!("profile page has no picture");
                    None
                }
                Ok(Err(err)) => {
                    warn!(error = %err, "profile picture lookup failed");
                    None
                }
                Err(_) => {
                    warn!(
                        timeout_ms = self.timeout_ms(),
                        "profile picture lookup timed out"
                    );
                    None
                }
            }
        }
        .instrument(span)
        .await
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// `true` for http(s) URLs on `linkedin.com` or one of its subdomains.
pub fn is_linkedin_profile(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    let Some(rest) = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
    else {
        return false;
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();

    host == "linkedin.com" || host.ends_with(".linkedin.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use cu_core::ports::ProfilePictureError;
    use cu_core::user::DateOfBirth;

    mockall::mock! {
        Lookup {}
        #[async_trait]
        impl ProfilePicturePort for Lookup {
            async fn lookup(&self, profile_url: &str) -> Result<Option<String>, ProfilePictureError>;
        }
    }

    struct SlowLookup;

    #[async_trait]
    impl ProfilePicturePort for SlowLookup {
        async fn lookup(&self, _profile_url: &str) -> Result<Option<String>, ProfilePictureError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Some("https://media.licdn.com/late.jpg".into()))
        }
    }

    fn profile(linkedin_url: Option<&str>) -> UserProfile {
        UserProfile {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@school.edu".into(),
            school: "University of Toronto".into(),
            dob: DateOfBirth::from_ymd(2001, 5, 4).unwrap(),
            linkedin_url: linkedin_url.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn resolves_picture_for_linkedin_profile() {
        let mut lookup = MockLookup::new();
        lookup
            .expect_lookup()
            .with(mockall::predicate::eq("https://www.linkedin.com/in/janedoe"))
            .times(1)
            .returning(|_| Ok(Some("https://media.licdn.com/jane.jpg".into())));

        let usecase = EnrichProfilePicture::new(Arc::new(lookup), DEFAULT_LOOKUP_TIMEOUT);
        let image = usecase
            .execute(&profile(Some("https://www.linkedin.com/in/janedoe")))
            .await;

        assert_eq!(image.as_deref(), Some("https://media.licdn.com/jane.jpg"));
    }

    #[tokio::test]
    async fn skips_lookup_without_linkedin_url() {
        let mut lookup = MockLookup::new();
        lookup.expect_lookup().never();
        let usecase = EnrichProfilePicture::new(Arc::new(lookup), DEFAULT_LOOKUP_TIMEOUT);

        assert_eq!(usecase.execute(&profile(None)).await, None);
        assert_eq!(
            usecase
                .execute(&profile(Some("https://example.com/in/janedoe")))
                .await,
            None
        );
    }

    #[tokio::test]
    async fn lookup_error_hides_avatar() {
        let mut lookup = MockLookup::new();
        lookup
            .expect_lookup()
            .returning(|_| Err(ProfilePictureError::Http("502 Bad Gateway".into())));
        let usecase = EnrichProfilePicture::new(Arc::new(lookup), DEFAULT_LOOKUP_TIMEOUT);

        let image = usecase
            .execute(&profile(Some("https://linkedin.com/in/janedoe")))
            .await;
        assert_eq!(image, None);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_lookup_times_out() {
        let usecase = EnrichProfilePicture::new(Arc::new(SlowLookup), Duration::from_millis(500));

        let image = usecase
            .execute(&profile(Some("https://www.linkedin.com/in/janedoe")))
            .await;
        assert_eq!(image, None);
    }

    #[test]
    fn oversized_timeout_saturates_in_logs() {
        let enrich = EnrichProfilePicture::new(Arc::new(SlowLookup), Duration::MAX);
        assert_eq!(enrich.timeout_ms(), u64::MAX);

        let enrich = EnrichProfilePicture::new(Arc::new(SlowLookup), DEFAULT_LOOKUP_TIMEOUT);
        assert_eq!(enrich.timeout_ms(), 4000);
    }

    #[test]
    fn recognises_linkedin_hosts() {
        assert!(is_linkedin_profile("https://www.linkedin.com/in/janedoe"));
        assert!(is_linkedin_profile("http://linkedin.com/in/janedoe"));
        assert!(is_linkedin_profile("HTTPS://CA.LINKEDIN.COM/in/janedoe?trk=x"));
        assert!(!is_linkedin_profile("https://notlinkedin.com/in/janedoe"));
        assert!(!is_linkedin_profile("https://linkedin.com.evil.io/in/janedoe"));
        assert!(!is_linkedin_profile("linkedin.com/in/janedoe"));
        assert!(!is_linkedin_profile("ftp://linkedin.com/in/janedoe"));
    }
}
