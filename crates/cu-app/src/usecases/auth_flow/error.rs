use cu_core::ports::PasswordHashError;
use cu_core::signup::SignupValidationError;

/// Errors produced by the signup/sign-in flow.
#[derive(Debug, thiserror::Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Validation(#[from] SignupValidationError),

    /// Deliberately does not say which field was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hashing(#[from] PasswordHashError),
}

impl AuthFlowError {
    /// Message suitable for the blocking alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.message(),
            Self::InvalidCredentials => self.to_string(),
            Self::Hashing(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}
