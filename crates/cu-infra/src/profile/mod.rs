mod linkedin;

pub use linkedin::{extract_og_image, HttpProfilePictureLookup};
