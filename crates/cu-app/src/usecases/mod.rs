pub mod auth_flow;
pub mod profile_picture;

pub use auth_flow::{
    prepare_signup, verify_signin, AuthFlowController, AuthFlowError, Navigation, SignupAccepted,
    VerifiedSignin,
};
pub use profile_picture::EnrichProfilePicture;
