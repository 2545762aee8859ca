use serde::{Deserialize, Serialize};

use cu_core::catalogue::Campus;
use cu_core::user::UserProfile;

use crate::presenter::ViewModel;

/// Outcome of signup validation, in the `{valid, data}` / `{valid, message}`
/// shape the form script expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationResultDto {
    Valid { valid: bool, data: UserProfile },
    Invalid { valid: bool, message: String },
}

impl ValidationResultDto {
    pub fn valid(data: UserProfile) -> Self {
        Self::Valid { valid: true, data }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            valid: false,
            message: message.into(),
        }
    }
}

/// Sign-in form as submitted.
#[derive(Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// One JSON line written per command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Reply {
    View(ViewModel),
    Signup {
        #[serde(skip_serializing_if = "Option::is_none")]
        validation: Option<ValidationResultDto>,
        view: ViewModel,
    },
    Sanitized {
        field: &'static str,
        value: String,
    },
    Schools {
        options: Vec<&'static str>,
    },
    School {
        query: String,
        campus: Option<Campus>,
    },
    Error {
        message: String,
    },
    Bye,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cu_core::user::DateOfBirth;
    use serde_json::json;

    #[test]
    fn validation_result_shapes() {
        let invalid = serde_json::to_value(ValidationResultDto::invalid("Passwords do not match"))
            .unwrap();
        assert_eq!(
            invalid,
            json!({"valid": false, "message": "Passwords do not match"})
        );

        let valid = serde_json::to_value(ValidationResultDto::valid(UserProfile {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@school.edu".into(),
            school: "University of Toronto".into(),
            dob: DateOfBirth::from_ymd(2024, 2, 29).unwrap(),
            linkedin_url: None,
        }))
        .unwrap();
        assert_eq!(valid["valid"], json!(true));
        assert_eq!(valid["data"]["dob"], json!("2024-02-29"));
        assert!(valid.get("message").is_none());
    }

    #[test]
    fn replies_are_tagged() {
        let reply = serde_json::to_value(Reply::Sanitized {
            field: "dobDay",
            value: "31".into(),
        })
        .unwrap();
        assert_eq!(reply, json!({"type": "sanitized", "field": "dobDay", "value": "31"}));

        assert_eq!(serde_json::to_value(Reply::Bye).unwrap(), json!({"type": "bye"}));
    }
}
