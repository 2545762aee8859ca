use crate::navigation::ViewState;

/// Where a fresh visitor without a stored user starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryView {
    #[default]
    Welcome,
    Signup,
}

impl EntryView {
    pub fn view(self) -> ViewState {
        match self {
            EntryView::Welcome => ViewState::Welcome,
            EntryView::Signup => ViewState::Signup,
        }
    }

    /// Parse an entry name (`welcome` / `signup`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "welcome" => Some(EntryView::Welcome),
            "signup" => Some(EntryView::Signup),
            _ => None,
        }
    }

    /// Read the `view` parameter from a page query string such as
    /// `?view=signup&utm_source=poster`.
    ///
    /// Missing or unknown values fall back to `Welcome`.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "view")
            .and_then(|(_, value)| Self::from_name(value))
            .unwrap_or_default()
    }
}
