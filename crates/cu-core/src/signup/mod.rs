//! Signup domain module.
//!
//! Field sanitizers, calendar helpers and the ordered payload validator used
//! by the signup form.

pub mod calendar;
mod form;
pub mod sanitize;
mod validation;

pub use calendar::{days_in_month, is_leap_year};
pub use form::{SignupForm, SignupPayload};
pub use sanitize::{sanitize_day, sanitize_year};
pub use validation::{
    validate_signup_payload, SignupValidationError, ValidatedSignup, MIN_PASSWORD_LEN,
};
