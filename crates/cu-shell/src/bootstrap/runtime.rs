//! Assembled application runtime shared by every command.

use std::sync::{Arc, RwLock};

use anyhow::Context;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info_span, Instrument};

use cu_app::{AuthFlowController, EnrichProfilePicture, Navigation, SessionStore};
use cu_core::config::AppConfig;
use cu_core::user::UserProfile;

use crate::bootstrap::wiring::{wire_dependencies, ShellSettings};

/// Latest avatar lookup result.
///
/// Each request bumps `generation`; a result is only published if no newer
/// request was made in the meantime.
#[derive(Debug, Default)]
struct AvatarSlot {
    generation: u64,
    url: Option<String>,
}

pub struct AppRuntime {
    settings: ShellSettings,
    controller: Mutex<AuthFlowController>,
    enrich_profile_picture: Option<Arc<EnrichProfilePicture>>,
    avatar: Arc<RwLock<AvatarSlot>>,
}

impl AppRuntime {
    pub fn new(
        settings: ShellSettings,
        controller: AuthFlowController,
        enrich_profile_picture: Option<EnrichProfilePicture>,
    ) -> Self {
        Self {
            settings,
            controller: Mutex::new(controller),
            enrich_profile_picture: enrich_profile_picture.map(Arc::new),
            avatar: Arc::new(RwLock::new(AvatarSlot::default())),
        }
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub async fn controller(&self) -> MutexGuard<'_, AuthFlowController> {
        self.controller.lock().await
    }

    /// Enter the configured entry view (or main, for a returning user).
    pub async fn start(&self) -> Navigation {
        let mut controller = self.controller().await;
        let navigation = controller.start(self.settings.entry_view);
        if let Some(user) = controller.current_user() {
            self.refresh_avatar(user.profile().clone());
        }
        navigation
    }

    /// Current avatar URL, `None` while pending or when the lookup failed.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .read()
            .map(|slot| slot.url.clone())
            .unwrap_or_default()
    }

    /// Clear the avatar and, if enabled, start a background lookup for
    /// `profile`. Never blocks the caller.
    pub fn refresh_avatar(&self, profile: UserProfile) {
        let generation = match self.avatar.write() {
            Ok(mut slot) => {
                slot.generation += 1;
                slot.url = None;
                slot.generation
            }
            Err(_) => return,
        };

        let Some(enrich) = self.enrich_profile_picture.clone() else {
            return;
        };
        if profile.linkedin_url.is_none() {
            return;
        }

        let slot = self.avatar.clone();
        let span = info_span!("runtime.refresh_avatar", generation);
        tokio::spawn(
            async move {
                let url = enrich.execute(&profile).await;
                if let Ok(mut slot) = slot.write() {
                    if slot.generation == generation {
                        slot.url = url;
                    } else {
                        debug!("discarding stale avatar result");
                    }
                }
            }
            .instrument(span),
        );
    }
}

/// Build the runtime from configuration facts.
pub fn create_runtime(config: &AppConfig) -> anyhow::Result<Arc<AppRuntime>> {
    let settings =
        ShellSettings::from_config(config).context("Failed to resolve runtime settings")?;
    let deps = wire_dependencies(&settings).context("Failed to wire dependencies")?;

    let controller = AuthFlowController::new(
        SessionStore::new(deps.session_storage),
        deps.password_hasher,
    );
    let enrich = match (&settings.profile_picture, deps.profile_picture) {
        (Some(picture), Some(port)) => Some(EnrichProfilePicture::new(port, picture.timeout)),
        _ => None,
    };

    Ok(Arc::new(AppRuntime::new(settings, controller, enrich)))
}
