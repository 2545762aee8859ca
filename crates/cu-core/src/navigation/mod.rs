//! View navigation domain module.
//!
//! This module defines the view state machine types, the entry-point parser
//! and the tile reveal plan for the main view.

mod entry;
pub mod reveal;
pub mod state_machine;

pub use entry::EntryView;
pub use reveal::{RevealPlan, TileReveal, DEFAULT_TILE_STAGGER};
pub use state_machine::{ViewAction, ViewEvent, ViewState, ViewStateMachine};
