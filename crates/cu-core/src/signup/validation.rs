use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::security::SecretString;
use crate::signup::calendar::days_in_month;
use crate::signup::SignupPayload;
use crate::user::{DateOfBirth, UserProfile};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reasons a signup payload is rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupValidationError {
    #[error("Please fill out all required fields before submitting.")]
    MissingRequiredFields,
    #[error("Please choose or enter your university.")]
    MissingSchool,
    #[error("Enter a valid school email address.")]
    InvalidEmail,
    #[error("Select a valid month for your birthday.")]
    InvalidMonth,
    #[error("Enter a 4-digit year for your birthday.")]
    InvalidYear,
    #[error("Enter a valid day for your birthday.")]
    InvalidDay,
    #[error("Day must be between 1 and {max_day} for the selected month.")]
    DayOutOfRange { max_day: u32 },
    #[error("Password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl SignupValidationError {
    /// User-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Successful validation output: the normalised profile plus the password
/// that still has to be hashed before anything is persisted.
#[derive(Debug)]
pub struct ValidatedSignup {
    pub profile: UserProfile,
    pub password: SecretString,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Validate a signup payload.
///
/// Rules are checked in a fixed order and the first failure is returned;
/// errors are never aggregated.
pub fn validate_signup_payload(
    payload: &SignupPayload,
) -> Result<ValidatedSignup, SignupValidationError> {
    if payload.first_name.is_empty() || payload.last_name.is_empty() || payload.email.is_empty() {
        return Err(SignupValidationError::MissingRequiredFields);
    }

    if payload.school.is_empty() {
        return Err(SignupValidationError::MissingSchool);
    }

    if !email_regex().is_match(&payload.email) {
        return Err(SignupValidationError::InvalidEmail);
    }

    let month = parse_digits(&payload.dob_month)
        .filter(|month| (1..=12).contains(month))
        .ok_or(SignupValidationError::InvalidMonth)?;

    let year = Some(payload.dob_year.as_str())
        .filter(|year| year.len() == 4)
        .and_then(parse_digits)
        .and_then(|year| i32::try_from(year).ok())
        .ok_or(SignupValidationError::InvalidYear)?;

    let day = parse_digits(&payload.dob_day)
        .filter(|day| *day >= 1)
        .ok_or(SignupValidationError::InvalidDay)?;

    let max_day = days_in_month(year, month).ok_or(SignupValidationError::InvalidMonth)?;
    if day > max_day {
        return Err(SignupValidationError::DayOutOfRange { max_day });
    }
    let dob = DateOfBirth::from_ymd(year, month, day)
        .ok_or(SignupValidationError::DayOutOfRange { max_day })?;

    if payload.password.char_len() < MIN_PASSWORD_LEN {
        return Err(SignupValidationError::PasswordTooShort {
            min_len: MIN_PASSWORD_LEN,
        });
    }

    if payload.password.expose() != payload.confirm_password.expose() {
        return Err(SignupValidationError::PasswordMismatch);
    }

    Ok(ValidatedSignup {
        profile: UserProfile {
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            email: payload.email.clone(),
            school: payload.school.clone(),
            dob,
            linkedin_url: payload.linkedin_url.clone(),
        },
        password: SecretString::new(payload.password.expose().to_string()),
    })
}
