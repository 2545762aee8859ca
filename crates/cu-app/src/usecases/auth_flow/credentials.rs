//! Password work that needs no controller state.
//!
//! Hashing and verifying are CPU-bound, so callers may run these on a
//! blocking thread and only take the controller afterwards to commit the
//! outcome with [`AuthFlowController::accept_signup`] or
//! [`AuthFlowController::complete_signin`].
//!
//! [`AuthFlowController::accept_signup`]: super::AuthFlowController::accept_signup
//! [`AuthFlowController::complete_signin`]: super::AuthFlowController::complete_signin

use tracing::{info, info_span, warn};

use cu_core::ports::{PasswordHashError, PasswordHasherPort};
use cu_core::security::SecretString;
use cu_core::signup::{validate_signup_payload, SignupForm};
use cu_core::user::UserRecord;

use crate::usecases::auth_flow::AuthFlowError;

/// Validate a signup form and hash its password into a new record.
pub fn prepare_signup(
    form: SignupForm,
    hasher: &dyn PasswordHasherPort,
) -> Result<UserRecord, AuthFlowError> {
    let span = info_span!("usecase.auth_flow.prepare_signup");
    let _enter = span.enter();

    let payload = form.into_payload();
    let validated = validate_signup_payload(&payload).map_err(|err| {
        info!(reason = %err, "signup rejected");
        AuthFlowError::Validation(err)
    })?;

    let password_hash = hasher.hash(&validated.password)?;
    Ok(UserRecord::new(validated.profile, password_hash))
}

/// Proof that a sign-in matched the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSignin {
    record: UserRecord,
}

impl VerifiedSignin {
    pub fn record(&self) -> &UserRecord {
        &self.record
    }
}

/// Check `email` and `password` against `record`.
///
/// Every mismatch, including a missing record or an unreadable stored
/// hash, is reported as [`AuthFlowError::InvalidCredentials`].
pub fn verify_signin(
    record: Option<UserRecord>,
    email: &str,
    password: &SecretString,
    hasher: &dyn PasswordHasherPort,
) -> Result<VerifiedSignin, AuthFlowError> {
    let span = info_span!("usecase.auth_flow.verify_signin");
    let _enter = span.enter();

    let Some(record) = record else {
        info!("sign-in attempted without a signed-up user");
        return Err(AuthFlowError::InvalidCredentials);
    };

    let email_matches = record.email() == email;
    let password_matches = match hasher.verify(password, record.password_hash()) {
        Ok(matches) => matches,
        Err(PasswordHashError::MalformedHash(reason)) => {
            warn!(%reason, "stored password hash is unreadable");
            false
        }
        Err(err) => return Err(err.into()),
    };

    if !(email_matches && password_matches) {
        info!("sign-in rejected");
        return Err(AuthFlowError::InvalidCredentials);
    }

    Ok(VerifiedSignin { record })
}
