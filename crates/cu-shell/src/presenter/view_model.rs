use serde::Serialize;

use cu_app::{AuthFlowController, Navigation};
use cu_core::catalogue::MAIN_TILES;
use cu_core::navigation::{RevealPlan, ViewState};
use cu_core::user::UserRecord;

use crate::bootstrap::wiring::ShellSettings;

/// Visibility of one screen. Hidden screens are also `aria-hidden`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenVisibility {
    pub view: ViewState,
    pub shown: bool,
    pub aria_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub display_name: String,
    pub email: String,
    pub school: String,
}

impl From<&UserRecord> for UserSummary {
    fn from(record: &UserRecord) -> Self {
        Self {
            display_name: record.profile().display_name(),
            email: record.email().to_string(),
            school: record.profile().school.clone(),
        }
    }
}

/// Everything the page needs to render after a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub view: ViewState,
    pub screens: Vec<ScreenVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_external: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signin_prefill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub storage_available: bool,
}

/// Build the view model for the controller's current state.
///
/// `navigation` is the outcome of the command that just ran, if it moved
/// the flow; its actions decide the reveal plan and external link.
pub fn present(
    controller: &AuthFlowController,
    settings: &ShellSettings,
    navigation: Option<&Navigation>,
    alert: Option<String>,
    avatar_url: Option<String>,
) -> ViewModel {
    let view = controller.view();
    let screens = ViewState::ALL
        .iter()
        .map(|candidate| ScreenVisibility {
            view: *candidate,
            shown: *candidate == view,
            aria_hidden: *candidate != view,
        })
        .collect();

    let reveal = navigation
        .filter(|nav| nav.reveals_tiles())
        .map(|_| RevealPlan::for_tiles(&MAIN_TILES, settings.reduced_motion, settings.tile_stagger));

    let user = controller.current_user();

    ViewModel {
        view,
        screens,
        alert,
        reveal,
        open_external: navigation.and_then(|nav| nav.external_url()).map(str::to_string),
        user: user.as_ref().map(UserSummary::from),
        signin_prefill: controller
            .signin_view()
            .and_then(|signin| signin.prefill_email.clone()),
        avatar_url: avatar_url.filter(|_| view == ViewState::Main),
        storage_available: controller.session_available(),
    }
}
