//! ConnectU Application Orchestration Layer
//!
//! This crate contains the signup/sign-in use cases, the session store and
//! the explicit navigation context they share.

pub mod context;
pub mod session;
pub mod usecases;

pub use context::{NavigationContext, SigninView};
pub use session::{SessionStore, SESSION_USER_KEY};
pub use usecases::{
    prepare_signup, verify_signin, AuthFlowController, AuthFlowError, EnrichProfilePicture,
    Navigation, SignupAccepted, VerifiedSignin,
};
