use serde::Serialize;

/// A content tile on the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MainTile {
    pub key: &'static str,
    pub title: &'static str,
    pub copy: &'static str,
}

/// Tiles in display (and reveal) order.
pub const MAIN_TILES: [MainTile; 4] = [
    MainTile {
        key: "education",
        title: "Education",
        copy: "Resources, classes, and learning paths.",
    },
    MainTile {
        key: "opportunities",
        title: "Opportunities",
        copy: "Jobs, internships, and scholarships.",
    },
    MainTile {
        key: "social",
        title: "Social Life",
        copy: "Events, clubs, and meetups.",
    },
    MainTile {
        key: "community",
        title: "Community",
        copy: "Forums, groups, and support networks.",
    },
];
