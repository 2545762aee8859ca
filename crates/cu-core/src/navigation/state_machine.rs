//! View state machine.
//!
//! Defines a pure state transition function for the signup funnel views.

use serde::{Deserialize, Serialize};

use crate::navigation::EntryView;

/// Visible screen.
///
/// 当前可见的页面，同一时刻只有一个。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Landing screen.
    Welcome,
    /// Signup form.
    Signup,
    /// Sign-in form, built on first use.
    Signin,
    /// Main content tiles.
    Main,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [
        ViewState::Welcome,
        ViewState::Signup,
        ViewState::Signin,
        ViewState::Main,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Welcome => "welcome",
            ViewState::Signup => "signup",
            ViewState::Signin => "signin",
            ViewState::Main => "main",
        }
    }
}

/// Events that drive navigation. All of them are user-triggered.
///
/// 驱动页面切换的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// "Learn more" on the welcome screen.
    LearnMore,
    /// "Learn more" when it is configured to open the external brochure.
    OpenBrochure { url: String },
    /// "Sign in" on the welcome screen.
    SignIn,
    /// Back button.
    Back,
    /// Signup form validated and stored.
    SignupSucceeded,
    /// Sign-in credentials matched.
    SigninSucceeded,
}

/// Side-effects produced by transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewAction {
    /// Build the sign-in view if it does not exist yet.
    EnsureSigninView,
    /// Run the staggered tile reveal on the main view.
    RevealTiles,
    /// Hand the URL to an external collaborator.
    OpenExternal { url: String },
}

/// Pure view state machine.
///
/// 纯状态机：不包含副作用。
pub struct ViewStateMachine;

impl ViewStateMachine {
    /// Initial view for a page load.
    ///
    /// A stored user skips straight to `Main`; otherwise the entry point decides.
    pub fn initial(has_stored_user: bool, entry: EntryView) -> (ViewState, Vec<ViewAction>) {
        if has_stored_user {
            return (ViewState::Main, vec![ViewAction::RevealTiles]);
        }
        (entry.view(), Vec::new())
    }

    pub fn transition(state: ViewState, event: ViewEvent) -> (ViewState, Vec<ViewAction>) {
        match (state, event) {
            (_, ViewEvent::SignupSucceeded) | (_, ViewEvent::SigninSucceeded) => {
                (ViewState::Main, vec![ViewAction::RevealTiles])
            }
            (ViewState::Welcome, ViewEvent::LearnMore) => (ViewState::Signup, Vec::new()),
            (ViewState::Welcome, ViewEvent::OpenBrochure { url }) => {
                (ViewState::Welcome, vec![ViewAction::OpenExternal { url }])
            }
            (ViewState::Welcome, ViewEvent::SignIn) => {
                (ViewState::Signin, vec![ViewAction::EnsureSigninView])
            }
            (ViewState::Signup, ViewEvent::Back) | (ViewState::Signin, ViewEvent::Back) => {
                (ViewState::Welcome, Vec::new())
            }
            (ViewState::Main, ViewEvent::Back) => (ViewState::Signup, Vec::new()),
            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(state = ?state, event = ?_event, "view event ignored");
                (state, Vec::new())
            }
        }
    }
}
