mod controller;
mod credentials;
mod error;

pub use controller::{AuthFlowController, Navigation, SignupAccepted};
pub use credentials::{prepare_signup, verify_signin, VerifiedSignin};
pub use error::AuthFlowError;
