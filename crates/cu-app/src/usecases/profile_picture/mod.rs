mod enrich;

pub use enrich::{is_linkedin_profile, EnrichProfilePicture, DEFAULT_LOOKUP_TIMEOUT};
