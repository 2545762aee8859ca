use cu_core::navigation::ViewState;
use cu_core::user::UserRecord;

/// Sign-in screen state, built the first time the screen is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigninView {
    /// Email of the signed-up user at construction time, if any.
    pub prefill_email: Option<String>,
}

/// Navigation context owned by the controller.
///
/// Holds what would otherwise be page-level globals: the visible view, the
/// lazily created sign-in view, and a transient user record used when session
/// storage refused the write.
#[derive(Debug, Clone)]
pub struct NavigationContext {
    view: ViewState,
    signin_view: Option<SigninView>,
    transient_user: Option<UserRecord>,
}

impl NavigationContext {
    pub fn new(initial_view: ViewState) -> Self {
        Self {
            view: initial_view,
            signin_view: None,
            transient_user: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    pub fn signin_view(&self) -> Option<&SigninView> {
        self.signin_view.as_ref()
    }

    /// Build the sign-in view unless it already exists.
    ///
    /// Returns `true` when this call constructed it.
    pub fn ensure_signin_view(&mut self, build: impl FnOnce() -> SigninView) -> bool {
        if self.signin_view.is_some() {
            return false;
        }
        self.signin_view = Some(build());
        true
    }

    pub fn transient_user(&self) -> Option<&UserRecord> {
        self.transient_user.as_ref()
    }

    pub fn remember_transient_user(&mut self, record: UserRecord) {
        self.transient_user = Some(record);
    }

    pub fn clear_transient_user(&mut self) {
        self.transient_user = None;
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new(ViewState::Welcome)
    }
}
