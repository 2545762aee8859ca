//! Live input sanitizers for the birthday fields.

use cu_core::signup::{sanitize_day, sanitize_year};

use crate::commands::dto::Reply;

pub fn day(raw: &str) -> Reply {
    Reply::Sanitized {
        field: "dobDay",
        value: sanitize_day(raw),
    }
}

pub fn year(raw: &str) -> Reply {
    Reply::Sanitized {
        field: "dobYear",
        value: sanitize_year(raw),
    }
}
