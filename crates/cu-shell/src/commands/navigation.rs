//! Navigation commands
//! 页面切换命令

use tracing::{info_span, Instrument};

use cu_app::Navigation;

use crate::bootstrap::wiring::LearnMoreTarget;
use crate::bootstrap::AppRuntime;
use crate::commands::dto::Reply;
use crate::presenter::present;

async fn render(runtime: &AppRuntime, navigation: Option<&Navigation>) -> Reply {
    let controller = runtime.controller().await;
    Reply::View(present(
        &controller,
        runtime.settings(),
        navigation,
        None,
        runtime.avatar_url(),
    ))
}

/// Enter the first view. Emitted once when the shell starts.
pub async fn start(runtime: &AppRuntime) -> Reply {
    let span = info_span!("command.navigation.start");
    async {
        let navigation = runtime.start().await;
        render(runtime, Some(&navigation)).await
    }
    .instrument(span)
    .await
}

/// Current view without moving.
pub async fn state(runtime: &AppRuntime) -> Reply {
    let span = info_span!("command.navigation.state");
    render(runtime, None).instrument(span).await
}

/// "Learn more": signup form or brochure, depending on configuration.
pub async fn learn_more(runtime: &AppRuntime) -> Reply {
    let span = info_span!("command.navigation.learn_more");
    async {
        let navigation = match &runtime.settings().learn_more {
            LearnMoreTarget::Signup => runtime.controller().await.learn_more(),
            LearnMoreTarget::Brochure(url) => runtime.controller().await.open_brochure(url.clone()),
        };
        render(runtime, Some(&navigation)).await
    }
    .instrument(span)
    .await
}

/// Open the configured brochure link.
pub async fn brochure(runtime: &AppRuntime) -> Reply {
    let span = info_span!("command.navigation.brochure");
    async {
        let Some(url) = runtime.settings().brochure_url.clone() else {
            return Reply::Error {
                message: "No brochure is configured".to_string(),
            };
        };
        let navigation = runtime.controller().await.open_brochure(url);
        render(runtime, Some(&navigation)).await
    }
    .instrument(span)
    .await
}

pub async fn sign_in(runtime: &AppRuntime) -> Reply {
    let span = info_span!("command.navigation.sign_in");
    async {
        let navigation = runtime.controller().await.sign_in();
        render(runtime, Some(&navigation)).await
    }
    .instrument(span)
    .await
}

pub async fn back(runtime: &AppRuntime) -> Reply {
    let span = info_span!("command.navigation.back");
    async {
        let navigation = runtime.controller().await.back();
        render(runtime, Some(&navigation)).await
    }
    .instrument(span)
    .await
}
