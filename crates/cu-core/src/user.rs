//! User record model.
//!
//! `UserRecord` is the single signup result kept for the current session.
//! It is replaced wholesale by a newer signup and never edited in place.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateOfBirthError {
    #[error("date of birth must be formatted as YYYY-MM-DD")]
    Format,
    #[error("date of birth is not a calendar date")]
    NotADate,
}

/// Calendar date of birth, serialized as zero-padded `YYYY-MM-DD`.
///
/// Construction goes through chrono, so the day always fits the month
/// (leap years included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn parse(value: &str) -> Result<Self, DateOfBirthError> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DateOfBirthError::Format);
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateOfBirthError::NotADate)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl From<DateOfBirth> for String {
    fn from(value: DateOfBirth) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for DateOfBirth {
    type Error = DateOfBirthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// PHC-formatted password hash (e.g. `$argon2id$v=19$...`).
///
/// The plaintext password is never stored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

/// Profile fields collected at signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub school: String,
    pub dob: DateOfBirth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Persisted signup result.
///
/// ## Invariants
/// - `dob` is a valid calendar date.
/// - `password_hash` is a PHC string produced by the configured hasher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(flatten)]
    profile: UserProfile,
    password_hash: PasswordHash,
}

impl UserRecord {
    pub fn new(profile: UserProfile, password_hash: PasswordHash) -> Self {
        Self {
            profile,
            password_hash,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
