//! View models rendered by the shell.

mod view_model;

pub use view_model::{present, ScreenVisibility, UserSummary, ViewModel};
