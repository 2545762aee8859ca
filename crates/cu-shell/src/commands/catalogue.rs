//! University catalogue commands.

use cu_core::catalogue::{lookup_university, university_options};

use crate::commands::dto::Reply;

/// Options for the school select, in display order.
pub fn schools() -> Reply {
    Reply::Schools {
        options: university_options().to_vec(),
    }
}

/// Resolve a school name or alias (`uwo`, `uoft`, ...) to its campus.
pub fn school(query: &str) -> Reply {
    Reply::School {
        query: query.trim().to_string(),
        campus: lookup_university(query),
    }
}
