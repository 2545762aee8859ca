//! # Dependency Injection / 依赖注入模块
//!
//! The only place that knows about `cu-infra` and `cu-app` at the same time.
//! It turns the raw [`AppConfig`] facts into policy ([`ShellSettings`]) and
//! picks the concrete adapters behind each port.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use cu_app::usecases::profile_picture::DEFAULT_LOOKUP_TIMEOUT;
use cu_core::config::AppConfig;
use cu_core::navigation::{EntryView, DEFAULT_TILE_STAGGER};
use cu_core::ports::{PasswordHasherPort, ProfilePicturePort, SessionStoragePort};
use cu_infra::{
    Argon2PasswordHasher, DisabledSessionStorage, HttpProfilePictureLookup, InMemorySessionStorage,
};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Unknown storage backend: {0}")]
    UnknownStorageBackend(String),

    #[error("Unknown entry view: {0}")]
    UnknownEntryView(String),

    #[error("Unknown learn-more target: {0}")]
    UnknownLearnMoreTarget(String),

    #[error("Brochure target selected but no brochure_url configured")]
    MissingBrochureUrl,

    #[error("Profile picture lookup initialization failed: {0}")]
    ProfilePictureInit(String),
}

/// What "Learn more" does on the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnMoreTarget {
    Signup,
    Brochure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Disabled,
}

/// Profile picture lookup policy, present only when enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePictureSettings {
    pub proxy_endpoint: Option<String>,
    pub timeout: Duration,
}

/// Resolved runtime policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    pub entry_view: EntryView,
    pub learn_more: LearnMoreTarget,
    pub brochure_url: Option<String>,
    pub reduced_motion: bool,
    pub tile_stagger: Duration,
    pub storage_backend: StorageBackend,
    pub storage_quota_bytes: Option<usize>,
    pub profile_picture: Option<ProfilePictureSettings>,
}

impl ShellSettings {
    /// Apply policy defaults to the config facts.
    pub fn from_config(config: &AppConfig) -> WiringResult<Self> {
        let entry_view = match config.entry_view.trim() {
            "" => EntryView::default(),
            name => EntryView::from_name(name)
                .ok_or_else(|| WiringError::UnknownEntryView(name.to_string()))?,
        };

        let brochure_url = Some(config.brochure_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let learn_more = match config.learn_more_target.trim() {
            "" | "signup" => LearnMoreTarget::Signup,
            "brochure" => LearnMoreTarget::Brochure(
                brochure_url.clone().ok_or(WiringError::MissingBrochureUrl)?,
            ),
            other => return Err(WiringError::UnknownLearnMoreTarget(other.to_string())),
        };

        let storage_backend = match config.storage_backend.trim() {
            "" | "memory" => StorageBackend::Memory,
            "disabled" => StorageBackend::Disabled,
            other => return Err(WiringError::UnknownStorageBackend(other.to_string())),
        };

        let tile_stagger = match config.tile_stagger_ms {
            0 => DEFAULT_TILE_STAGGER,
            ms => Duration::from_millis(ms),
        };

        let profile_picture = config.profile_picture_enabled.then(|| ProfilePictureSettings {
            proxy_endpoint: Some(config.profile_picture_proxy.trim())
                .filter(|endpoint| !endpoint.is_empty())
                .map(str::to_string),
            timeout: match config.profile_picture_timeout_ms {
                0 => DEFAULT_LOOKUP_TIMEOUT,
                ms => Duration::from_millis(ms),
            },
        });

        Ok(Self {
            entry_view,
            learn_more,
            brochure_url,
            reduced_motion: config.reduced_motion,
            tile_stagger,
            storage_backend,
            storage_quota_bytes: usize::try_from(config.storage_quota_bytes)
                .ok()
                .filter(|quota| *quota > 0),
            profile_picture,
        })
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            entry_view: EntryView::Welcome,
            learn_more: LearnMoreTarget::Signup,
            brochure_url: None,
            reduced_motion: false,
            tile_stagger: DEFAULT_TILE_STAGGER,
            storage_backend: StorageBackend::Memory,
            storage_quota_bytes: None,
            profile_picture: None,
        }
    }
}

/// Port implementations handed to the application layer.
pub struct AppDeps {
    pub session_storage: Arc<dyn SessionStoragePort>,
    pub password_hasher: Arc<dyn PasswordHasherPort>,
    pub profile_picture: Option<Arc<dyn ProfilePicturePort>>,
}

/// Create all adapters for the given settings.
pub fn wire_dependencies(settings: &ShellSettings) -> WiringResult<AppDeps> {
    let session_storage: Arc<dyn SessionStoragePort> =
        match (settings.storage_backend, settings.storage_quota_bytes) {
            (StorageBackend::Disabled, _) => Arc::new(DisabledSessionStorage),
            (StorageBackend::Memory, Some(quota)) => {
                Arc::new(InMemorySessionStorage::with_quota(quota))
            }
            (StorageBackend::Memory, None) => Arc::new(InMemorySessionStorage::new()),
        };
    info!(backend = ?settings.storage_backend, quota = ?settings.storage_quota_bytes, "session storage wired");

    let profile_picture = match &settings.profile_picture {
        Some(picture) => {
            let lookup = HttpProfilePictureLookup::new(
                picture.proxy_endpoint.as_deref(),
                picture.timeout,
            )
            .map_err(|err| WiringError::ProfilePictureInit(format!("{err:#}")))?;
            debug!(proxy = ?picture.proxy_endpoint, "profile picture lookup wired");
            Some(Arc::new(lookup) as Arc<dyn ProfilePicturePort>)
        }
        None => None,
    };

    Ok(AppDeps {
        session_storage,
        password_hasher: Arc::new(Argon2PasswordHasher::new()),
        profile_picture,
    })
}
