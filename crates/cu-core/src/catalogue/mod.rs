//! Static catalogue data consumed by the forms and the main view.

mod tiles;
mod universities;

pub use tiles::{MainTile, MAIN_TILES};
pub use universities::{lookup_university, university_options, Campus, UNIVERSITY_OPTIONS};
