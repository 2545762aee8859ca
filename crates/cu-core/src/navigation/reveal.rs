//! Staggered reveal of the main view's content tiles.

use std::time::Duration;

use serde::Serialize;

use crate::catalogue::MainTile;

/// Delay between consecutive tiles.
pub const DEFAULT_TILE_STAGGER: Duration = Duration::from_millis(130);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileReveal {
    pub key: &'static str,
    pub delay_ms: u64,
}

/// How the tiles appear when `Main` is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "tiles", rename_all = "camelCase")]
pub enum RevealPlan {
    /// Reduced motion: everything is visible at once, no animation.
    Immediate,
    /// Tile `i` becomes visible after `i * stagger`.
    Staggered(Vec<TileReveal>),
}

impl RevealPlan {
    pub fn for_tiles(tiles: &[MainTile], reduced_motion: bool, stagger: Duration) -> Self {
        if reduced_motion {
            return RevealPlan::Immediate;
        }
        let step = u64::try_from(stagger.as_millis()).unwrap_or(u64::MAX);
        RevealPlan::Staggered(
            tiles
                .iter()
                .zip(0u64..)
                .map(|(tile, index)| TileReveal {
                    key: tile.key,
                    delay_ms: index.saturating_mul(step),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::MAIN_TILES;

    #[test]
    fn staggers_tiles_by_index() {
        let plan = RevealPlan::for_tiles(&MAIN_TILES, false, DEFAULT_TILE_STAGGER);
        let RevealPlan::Staggered(tiles) = plan else {
            panic!("expected staggered plan");
        };
        let delays: Vec<u64> = tiles.iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0, 130, 260, 390]);
        assert_eq!(tiles[0].key, "education");
    }

    #[test]
    fn reduced_motion_skips_animation() {
        assert_eq!(
            RevealPlan::for_tiles(&MAIN_TILES, true, DEFAULT_TILE_STAGGER),
            RevealPlan::Immediate
        );
    }
}
