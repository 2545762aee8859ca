use std::fmt;

use serde::Deserialize;

use crate::security::SecretString;

/// Raw signup form as submitted by the rendered markup.
///
/// Field names follow the form contract (`firstName`, `schoolSelect`, ...).
/// Missing fields deserialize as empty strings.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub dob_day: String,
    pub dob_month: String,
    pub dob_year: String,
    pub school_select: String,
    pub school_custom: String,
    pub linkedin_url: Option<String>,
}

impl SignupForm {
    /// Collect the form into a payload.
    ///
    /// Every non-password field is trimmed. A custom school entry takes
    /// precedence over the selected one.
    pub fn into_payload(self) -> SignupPayload {
        let school_custom = self.school_custom.trim();
        let school = if school_custom.is_empty() {
            self.school_select.trim().to_string()
        } else {
            school_custom.to_string()
        };
        let linkedin_url = self
            .linkedin_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        SignupPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: SecretString::new(self.password),
            confirm_password: SecretString::new(self.confirm_password),
            dob_day: self.dob_day.trim().to_string(),
            dob_month: self.dob_month.trim().to_string(),
            dob_year: self.dob_year.trim().to_string(),
            school,
            linkedin_url,
        }
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("dob_day", &self.dob_day)
            .field("dob_month", &self.dob_month)
            .field("dob_year", &self.dob_year)
            .field("school_select", &self.school_select)
            .field("school_custom", &self.school_custom)
            .field("linkedin_url", &self.linkedin_url)
            .finish_non_exhaustive()
    }
}

/// Normalised signup input handed to the validator.
#[derive(Debug, Default)]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub dob_day: String,
    pub dob_month: String,
    pub dob_year: String,
    pub school: String,
    pub linkedin_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_school_overrides_selection() {
        let form = SignupForm {
            school_select: "University of Toronto".into(),
            school_custom: "  Sheridan College ".into(),
            ..Default::default()
        };
        assert_eq!(form.into_payload().school, "Sheridan College");
    }

    #[test]
    fn blank_custom_school_falls_back_to_selection() {
        let form = SignupForm {
            school_select: " Western University ".into(),
            school_custom: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.into_payload().school, "Western University");
    }

    #[test]
    fn trims_text_fields_but_not_passwords() {
        let form = SignupForm {
            first_name: " Jane ".into(),
            email: "jane@school.edu ".into(),
            password: " spaced pass ".into(),
            linkedin_url: Some("  ".into()),
            ..Default::default()
        };
        let payload = form.into_payload();
        assert_eq!(payload.first_name, "Jane");
        assert_eq!(payload.email, "jane@school.edu");
        assert_eq!(payload.password.expose(), " spaced pass ");
        assert_eq!(payload.linkedin_url, None);
    }

    #[test]
    fn deserializes_form_field_names() {
        let form: SignupForm = serde_json::from_str(
            r#"{"firstName":"Jane","dobDay":"29","schoolSelect":"Western University","linkedinUrl":"https://www.linkedin.com/in/jane"}"#,
        )
        .unwrap();
        assert_eq!(form.first_name, "Jane");
        assert_eq!(form.dob_day, "29");
        assert_eq!(form.school_select, "Western University");
        assert_eq!(form.last_name, "");
        assert_eq!(
            form.linkedin_url.as_deref(),
            Some("https://www.linkedin.com/in/jane")
        );
    }

    #[test]
    fn debug_output_omits_passwords() {
        let form = SignupForm {
            password: "hunter22hunter".into(),
            confirm_password: "hunter22hunter".into(),
            ..Default::default()
        };
        assert!(!format!("{form:?}").contains("hunter22hunter"));
    }
}
