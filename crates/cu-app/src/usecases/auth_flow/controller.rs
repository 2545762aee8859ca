//! Signup/sign-in controller.
//!
//! Drives the pure [`ViewStateMachine`] and executes the actions it emits
//! against an explicit [`NavigationContext`].

use std::sync::Arc;

use tracing::{debug, info, info_span, warn};

use cu_core::navigation::{EntryView, ViewAction, ViewEvent, ViewState, ViewStateMachine};
use cu_core::ports::PasswordHasherPort;
use cu_core::security::SecretString;
use cu_core::signup::SignupForm;
use cu_core::user::UserRecord;

use crate::context::{NavigationContext, SigninView};
use crate::session::SessionStore;
use crate::usecases::auth_flow::credentials::{prepare_signup, verify_signin, VerifiedSignin};
use crate::usecases::auth_flow::AuthFlowError;

/// Result of a navigation step.
///
/// `actions` only carries what the presentation layer has to perform
/// (tile reveal, external links). Actions the controller can run itself
/// are already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub view: ViewState,
    pub actions: Vec<ViewAction>,
}

impl Navigation {
    pub fn reveals_tiles(&self) -> bool {
        self.actions.contains(&ViewAction::RevealTiles)
    }

    pub fn external_url(&self) -> Option<&str> {
        self.actions.iter().find_map(|action| match action {
            ViewAction::OpenExternal { url } => Some(url.as_str()),
            _ => None,
        })
    }
}

/// An accepted signup: where the flow went and the record it created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupAccepted {
    pub navigation: Navigation,
    pub record: UserRecord,
}

pub struct AuthFlowController {
    context: NavigationContext,
    session: SessionStore,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl AuthFlowController {
    pub fn new(session: SessionStore, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self {
            context: NavigationContext::default(),
            session,
            hasher,
        }
    }

    /// Pick the first view: main when a user is already stored, otherwise
    /// the requested entry view.
    pub fn start(&mut self, entry: EntryView) -> Navigation {
        let span = info_span!("usecase.auth_flow.start", entry = ?entry);
        let _enter = span.enter();

        let has_user = self.current_user().is_some();
        let (view, actions) = ViewStateMachine::initial(has_user, entry);
        info!(view = ?view, has_user, "initial view selected");
        self.context.set_view(view);
        self.execute_actions(actions)
    }

    pub fn learn_more(&mut self) -> Navigation {
        self.dispatch(ViewEvent::LearnMore)
    }

    pub fn open_brochure(&mut self, url: impl Into<String>) -> Navigation {
        self.dispatch(ViewEvent::OpenBrochure { url: url.into() })
    }

    pub fn sign_in(&mut self) -> Navigation {
        self.dispatch(ViewEvent::SignIn)
    }

    pub fn back(&mut self) -> Navigation {
        self.dispatch(ViewEvent::Back)
    }

    /// Validate and store a signup, then enter the main view.
    ///
    /// On validation failure the current view is kept.
    pub fn submit_signup(&mut self, form: SignupForm) -> Result<SignupAccepted, AuthFlowError> {
        let record = prepare_signup(form, self.hasher.as_ref())?;
        Ok(self.accept_signup(record))
    }

    /// Make `record` the current user and enter the main view.
    ///
    /// The newest signup always wins. When it cannot be persisted, any
    /// older stored record is dropped and `record` is kept for this run.
    pub fn accept_signup(&mut self, record: UserRecord) -> SignupAccepted {
        let span = info_span!("usecase.auth_flow.accept_signup");
        let _enter = span.enter();

        if self.session.save(&record) {
            self.context.clear_transient_user();
        } else {
            warn!("user record not persisted, keeping it for this run only");
            self.session.clear();
            self.context.remember_transient_user(record.clone());
        }

        SignupAccepted {
            navigation: self.dispatch(ViewEvent::SignupSucceeded),
            record,
        }
    }

    /// Check credentials against the current record.
    pub fn submit_signin(
        &mut self,
        email: &str,
        password: &SecretString,
    ) -> Result<Navigation, AuthFlowError> {
        let verified = verify_signin(self.current_user(), email, password, self.hasher.as_ref())?;
        Ok(self.complete_signin(verified))
    }

    /// Enter the main view after [`verify_signin`] succeeded.
    pub fn complete_signin(&mut self, _verified: VerifiedSignin) -> Navigation {
        debug!("sign-in accepted");
        self.dispatch(ViewEvent::SigninSucceeded)
    }

    /// The record of this run's newest signup, falling back to the stored one.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.context
            .transient_user()
            .cloned()
            .or_else(|| self.session.load())
    }

    pub fn password_hasher(&self) -> Arc<dyn PasswordHasherPort> {
        self.hasher.clone()
    }

    pub fn view(&self) -> ViewState {
        self.context.view()
    }

    pub fn signin_view(&self) -> Option<&SigninView> {
        self.context.signin_view()
    }

    pub fn session_available(&self) -> bool {
        self.session.is_available()
    }

    fn dispatch(&mut self, event: ViewEvent) -> Navigation {
        let span = info_span!("usecase.auth_flow.dispatch", event = ?event);
        let _enter = span.enter();

        let from = self.context.view();
        let event_name = format!("{:?}", event);
        let (next, actions) = ViewStateMachine::transition(from, event);
        info!(from = ?from, to = ?next, event = %event_name, "view state transition");
        self.context.set_view(next);
        self.execute_actions(actions)
    }

    fn execute_actions(&mut self, actions: Vec<ViewAction>) -> Navigation {
        let mut pending = Vec::new();
        for action in actions {
            debug!(?action, "auth flow executing action");
            match action {
                ViewAction::EnsureSigninView => {
                    let prefill_email = self.current_user().map(|user| user.email().to_string());
                    if self
                        .context
                        .ensure_signin_view(|| SigninView { prefill_email })
                    {
                        debug!("sign-in view constructed");
                    }
                }
                ViewAction::RevealTiles | ViewAction::OpenExternal { .. } => pending.push(action),
            }
        }

        Navigation {
            view: self.context.view(),
            actions: pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cu_core::ports::{PasswordHashError, SessionStoragePort};
    use cu_core::user::PasswordHash;
    use cu_infra::storage::{DisabledSessionStorage, InMemorySessionStorage};

    use crate::session::SESSION_USER_KEY;

    /// Reversible fake hasher.
    struct PlainHasher;

    impl PasswordHasherPort for PlainHasher {
        fn hash(&self, password: &SecretString) -> Result<PasswordHash, PasswordHashError> {
            Ok(PasswordHash::new(format!("plain${}", password.expose())))
        }

        fn verify(
            &self,
            password: &SecretString,
            hash: &PasswordHash,
        ) -> Result<bool, PasswordHashError> {
            match hash.as_str().strip_prefix("plain$") {
                Some(stored) => Ok(stored == password.expose()),
                None => Err(PasswordHashError::MalformedHash("missing prefix".into())),
            }
        }
    }

    struct FailingHasher;

    impl PasswordHasherPort for FailingHasher {
        fn hash(&self, _password: &SecretString) -> Result<PasswordHash, PasswordHashError> {
            Err(PasswordHashError::Hash("no memory".into()))
        }

        fn verify(
            &self,
            _password: &SecretString,
            _hash: &PasswordHash,
        ) -> Result<bool, PasswordHashError> {
            Ok(false)
        }
    }

    fn controller_with(storage: Arc<dyn SessionStoragePort>) -> AuthFlowController {
        AuthFlowController::new(SessionStore::new(storage), Arc::new(PlainHasher))
    }

    fn controller() -> AuthFlowController {
        controller_with(Arc::new(InMemorySessionStorage::new()))
    }

    fn jane_form() -> SignupForm {
        SignupForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@school.edu".into(),
            password: "longenough".into(),
            confirm_password: "longenough".into(),
            dob_day: "29".into(),
            dob_month: "2".into(),
            dob_year: "2024".into(),
            school_select: "University of Toronto".into(),
            school_custom: String::new(),
            linkedin_url: None,
        }
    }

    fn john_form(linkedin_url: Option<String>) -> SignupForm {
        SignupForm {
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "john@school.edu".into(),
            password: "anotherpass".into(),
            confirm_password: "anotherpass".into(),
            dob_day: "12".into(),
            dob_month: "7".into(),
            dob_year: "2003".into(),
            school_select: "Western University".into(),
            school_custom: String::new(),
            linkedin_url,
        }
    }

    fn long_linkedin_url() -> String {
        format!("https://www.linkedin.com/in/{}", "j".repeat(300))
    }

    fn return_to_signin(flow: &mut AuthFlowController) {
        flow.back();
        flow.back();
        flow.sign_in();
    }

    #[test]
    fn start_without_user_shows_entry_view() {
        let mut flow = controller();
        let nav = flow.start(EntryView::Welcome);
        assert_eq!(nav.view, ViewState::Welcome);
        assert!(nav.actions.is_empty());

        let mut flow = controller();
        assert_eq!(flow.start(EntryView::Signup).view, ViewState::Signup);
    }

    #[test]
    fn start_with_stored_user_shows_main() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let mut first = controller_with(storage.clone());
        first.start(EntryView::Welcome);
        first.learn_more();
        first.submit_signup(jane_form()).unwrap();

        let mut reloaded = controller_with(storage);
        let nav = reloaded.start(EntryView::Welcome);
        assert_eq!(nav.view, ViewState::Main);
        assert!(nav.reveals_tiles());
    }

    #[test]
    fn welcome_navigation() {
        let mut flow = controller();
        flow.start(EntryView::Welcome);

        assert_eq!(flow.learn_more().view, ViewState::Signup);
        assert_eq!(flow.back().view, ViewState::Welcome);
        assert_eq!(flow.sign_in().view, ViewState::Signin);
        assert_eq!(flow.back().view, ViewState::Welcome);
    }

    #[test]
    fn brochure_stays_on_welcome_and_requests_link() {
        let mut flow = controller();
        flow.start(EntryView::Welcome);

        let nav = flow.open_brochure("https://connectu.example/brochure.pdf");
        assert_eq!(nav.view, ViewState::Welcome);
        assert_eq!(nav.external_url(), Some("https://connectu.example/brochure.pdf"));
    }

    #[test]
    fn signin_view_is_built_lazily_once() {
        let mut flow = controller();
        flow.start(EntryView::Welcome);
        assert!(flow.signin_view().is_none());

        let nav = flow.sign_in();
        assert!(nav.actions.is_empty());
        assert_eq!(flow.signin_view(), Some(&SigninView { prefill_email: None }));

        flow.back();
        flow.learn_more();
        flow.submit_signup(jane_form()).unwrap();
        flow.back();
        flow.back();
        flow.sign_in();

        // Built on first visit, not rebuilt after signup.
        assert_eq!(flow.signin_view(), Some(&SigninView { prefill_email: None }));
    }

    #[test]
    fn invalid_signup_keeps_view_and_reports_message() {
        let mut flow = controller();
        flow.start(EntryView::Welcome);
        flow.learn_more();

        let mut form = jane_form();
        form.confirm_password = "different1".into();
        let err = flow.submit_signup(form).unwrap_err();

        assert_eq!(err.user_message(), "Passwords do not match");
        assert_eq!(flow.view(), ViewState::Signup);
        assert!(flow.current_user().is_none());
    }

    #[test]
    fn leap_day_signup_enters_main() {
        let mut flow = controller();
        flow.start(EntryView::Signup);

        let accepted = flow.submit_signup(jane_form()).unwrap();
        assert_eq!(accepted.navigation.view, ViewState::Main);
        assert!(accepted.navigation.reveals_tiles());

        let user = flow.current_user().unwrap();
        assert_eq!(user, accepted.record);
        assert_eq!(user.profile().dob.to_string(), "2024-02-29");
        assert_ne!(user.password_hash().as_str(), "longenough");
    }

    #[test]
    fn stored_record_never_contains_plaintext_password() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let mut flow = controller_with(storage.clone());
        flow.start(EntryView::Signup);
        flow.submit_signup(jane_form()).unwrap();

        let raw = storage.get_item(SESSION_USER_KEY).unwrap().unwrap();
        assert!(raw.contains("\"passwordHash\""));
        assert!(!raw.contains("\"password\""));
    }

    #[test]
    fn unavailable_storage_keeps_transient_user() {
        let mut flow = controller_with(Arc::new(DisabledSessionStorage));
        flow.start(EntryView::Signup);

        assert!(!flow.session_available());
        let accepted = flow.submit_signup(jane_form()).unwrap();
        assert_eq!(accepted.navigation.view, ViewState::Main);
        assert_eq!(flow.current_user().unwrap().email(), "jane@school.edu");

        flow.back();
        flow.back();
        flow.sign_in();
        let nav = flow
            .submit_signin("jane@school.edu", &SecretString::from("longenough"))
            .unwrap();
        assert_eq!(nav.view, ViewState::Main);
    }

    #[test]
    fn quota_failure_keeps_transient_user() {
        let mut flow = controller_with(Arc::new(InMemorySessionStorage::with_quota(64)));
        flow.start(EntryView::Signup);

        assert!(flow.session_available());
        flow.submit_signup(jane_form()).unwrap();
        assert_eq!(flow.current_user().unwrap().email(), "jane@school.edu");
    }

    #[test]
    fn newer_signup_replaces_stored_record() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let mut flow = controller_with(storage.clone());
        flow.start(EntryView::Signup);
        flow.submit_signup(jane_form()).unwrap();

        flow.back();
        flow.learn_more();
        let accepted = flow.submit_signup(john_form(None)).unwrap();
        assert_eq!(accepted.record.email(), "john@school.edu");

        let raw = storage.get_item(SESSION_USER_KEY).unwrap().unwrap();
        assert_eq!(raw, serde_json::to_string(&accepted.record).unwrap());
        assert_eq!(flow.current_user(), Some(accepted.record));

        return_to_signin(&mut flow);
        assert!(flow
            .submit_signin("jane@school.edu", &SecretString::from("longenough"))
            .is_err());
        let nav = flow
            .submit_signin("john@school.edu", &SecretString::from("anotherpass"))
            .unwrap();
        assert_eq!(nav.view, ViewState::Main);
    }

    #[test]
    fn refused_save_of_newer_signup_supersedes_stored_record() {
        // Room for Jane's record, not for John's long profile url.
        let storage = Arc::new(InMemorySessionStorage::with_quota(400));
        let mut flow = controller_with(storage.clone());
        flow.start(EntryView::Signup);
        flow.submit_signup(jane_form()).unwrap();
        assert!(storage.get_item(SESSION_USER_KEY).unwrap().is_some());

        flow.back();
        flow.learn_more();
        let accepted = flow
            .submit_signup(john_form(Some(long_linkedin_url())))
            .unwrap();
        assert_eq!(accepted.navigation.view, ViewState::Main);
        assert_eq!(accepted.record.email(), "john@school.edu");

        assert_eq!(storage.get_item(SESSION_USER_KEY).unwrap(), None);
        assert_eq!(flow.current_user(), Some(accepted.record));

        return_to_signin(&mut flow);
        let err = flow
            .submit_signin("jane@school.edu", &SecretString::from("longenough"))
            .unwrap_err();
        assert!(matches!(err, AuthFlowError::InvalidCredentials));
        let nav = flow
            .submit_signin("john@school.edu", &SecretString::from("anotherpass"))
            .unwrap();
        assert_eq!(nav.view, ViewState::Main);
    }

    #[test]
    fn split_signup_matches_submit_signup() {
        let mut flow = controller();
        flow.start(EntryView::Signup);

        let record = prepare_signup(jane_form(), flow.password_hasher().as_ref()).unwrap();
        assert_eq!(flow.view(), ViewState::Signup);
        assert!(flow.current_user().is_none());

        let accepted = flow.accept_signup(record.clone());
        assert_eq!(accepted.record, record);
        assert_eq!(accepted.navigation.view, ViewState::Main);
        assert_eq!(flow.current_user(), Some(record));
    }

    #[test]
    fn split_signin_matches_submit_signin() {
        let mut flow = controller();
        flow.start(EntryView::Signup);
        flow.submit_signup(jane_form()).unwrap();
        return_to_signin(&mut flow);

        let hasher = flow.password_hasher();
        let rejected = verify_signin(
            flow.current_user(),
            "jane@school.edu",
            &SecretString::from("wrong-pass"),
            hasher.as_ref(),
        );
        assert!(matches!(rejected, Err(AuthFlowError::InvalidCredentials)));

        let verified = verify_signin(
            flow.current_user(),
            "jane@school.edu",
            &SecretString::from("longenough"),
            hasher.as_ref(),
        )
        .unwrap();
        assert_eq!(verified.record().email(), "jane@school.edu");
        assert_eq!(flow.view(), ViewState::Signin);
        assert_eq!(flow.complete_signin(verified).view, ViewState::Main);
    }

    #[test]
    fn signin_with_matching_credentials_enters_main() {
        let mut flow = controller();
        flow.start(EntryView::Signup);
        flow.submit_signup(jane_form()).unwrap();
        flow.back();
        flow.back();
        flow.sign_in();

        let nav = flow
            .submit_signin("jane@school.edu", &SecretString::from("longenough"))
            .unwrap();
        assert_eq!(nav.view, ViewState::Main);
        assert!(nav.reveals_tiles());
    }

    #[test]
    fn signin_failures_share_one_message() {
        let mut flow = controller();
        flow.start(EntryView::Signup);
        flow.submit_signup(jane_form()).unwrap();
        flow.back();
        flow.back();
        flow.sign_in();

        let wrong_email = flow
            .submit_signin("JANE@school.edu", &SecretString::from("longenough"))
            .unwrap_err();
        let wrong_password = flow
            .submit_signin("jane@school.edu", &SecretString::from("longenougH"))
            .unwrap_err();

        assert_eq!(wrong_email.user_message(), "Invalid email or password");
        assert_eq!(wrong_password.user_message(), wrong_email.user_message());
        assert_eq!(flow.view(), ViewState::Signin);
    }

    #[test]
    fn signin_without_user_is_rejected() {
        let mut flow = controller();
        flow.start(EntryView::Welcome);
        flow.sign_in();

        let err = flow
            .submit_signin("jane@school.edu", &SecretString::from("longenough"))
            .unwrap_err();
        assert!(matches!(err, AuthFlowError::InvalidCredentials));
    }

    #[test]
    fn unreadable_stored_hash_rejects_signin() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let mut flow = controller_with(storage.clone());
        flow.start(EntryView::Signup);
        flow.submit_signup(jane_form()).unwrap();

        let raw = storage.get_item(SESSION_USER_KEY).unwrap().unwrap();
        let tampered = raw.replace("plain$longenough", "garbage");
        storage.set_item(SESSION_USER_KEY, &tampered).unwrap();

        let err = flow
            .submit_signin("jane@school.edu", &SecretString::from("longenough"))
            .unwrap_err();
        assert!(matches!(err, AuthFlowError::InvalidCredentials));
    }

    #[test]
    fn hashing_failure_is_reported_and_nothing_is_stored() {
        let mut flow = AuthFlowController::new(
            SessionStore::new(Arc::new(InMemorySessionStorage::new())),
            Arc::new(FailingHasher),
        );
        flow.start(EntryView::Signup);

        let err = flow.submit_signup(jane_form()).unwrap_err();
        assert!(matches!(err, AuthFlowError::Hashing(_)));
        assert_eq!(flow.view(), ViewState::Signup);
        assert!(flow.current_user().is_none());
    }

    #[test]
    fn unmatched_event_keeps_view() {
        let mut flow = controller();
        flow.start(EntryView::Welcome);

        let nav = flow.back();
        assert_eq!(nav.view, ViewState::Welcome);
        assert!(nav.actions.is_empty());
    }
}
