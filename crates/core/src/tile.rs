//! Tile - one nuclide occupying one grid cell
//!
//! A tile is owned by exactly one grid cell at a time; moving it is a
//! remove-and-insert ownership transfer, never an aliased pointer.
//! `merged_from` is the sole arbiter of the one-fusion-per-move rule.

use nuclide_2048_types::Position;

use crate::elements::Nuclide;

/// Pre-merge state of one fusion parent, kept for presentation
/// (merge animations trace parents back to their origin cells)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeParent {
    pub position: Position,
    pub nuclide: Nuclide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub position: Position,
    pub nuclide: Nuclide,
    /// Set when this tile was produced by a fusion this move; a tile
    /// with this set absorbs no further fusion until the next move.
    pub merged_from: Option<[MergeParent; 2]>,
    /// Remaining turns until decay; `Some` iff the nuclide has a
    /// decay rule.
    pub turns_until_decay: Option<u32>,
    /// Position at the start of the current move; the engine's
    /// did-anything-move test compares it against the landing cell.
    pub previous_position: Option<Position>,
}

impl Tile {
    pub fn new(position: Position, nuclide: Nuclide) -> Self {
        Self {
            position,
            nuclide,
            merged_from: None,
            turns_until_decay: None,
            previous_position: None,
        }
    }

    /// Start-of-move reset: clear merge provenance, remember where
    /// the tile stands.
    pub fn prepare(&mut self) {
        self.merged_from = None;
        self.previous_position = Some(self.position);
    }

    pub fn update_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Decrement the decay countdown by one turn
    ///
    /// Returns true exactly when the countdown reaches zero on this
    /// tick; stable tiles always return false. Atomic per sweep: a
    /// tile decays at most once per move.
    pub fn tick_decay(&mut self) -> bool {
        match self.turns_until_decay {
            Some(turns) => {
                let remaining = turns.saturating_sub(1);
                self.turns_until_decay = Some(remaining);
                remaining == 0
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::HYDROGEN;

    #[test]
    fn test_prepare_clears_merge_and_saves_position() {
        let mut tile = Tile::new(Position::new(2, 3), HYDROGEN);
        tile.merged_from = Some([
            MergeParent {
                position: Position::new(0, 3),
                nuclide: HYDROGEN,
            },
            MergeParent {
                position: Position::new(2, 3),
                nuclide: HYDROGEN,
            },
        ]);

        tile.prepare();
        assert!(tile.merged_from.is_none());
        assert_eq!(tile.previous_position, Some(Position::new(2, 3)));
    }

    #[test]
    fn test_tick_decay_counts_down_to_expiry() {
        let mut tile = Tile::new(Position::new(0, 0), HYDROGEN);
        tile.turns_until_decay = Some(3);

        assert!(!tile.tick_decay());
        assert!(!tile.tick_decay());
        assert!(tile.tick_decay());
        assert_eq!(tile.turns_until_decay, Some(0));
    }

    #[test]
    fn test_tick_decay_noop_for_stable_tile() {
        let mut tile = Tile::new(Position::new(0, 0), HYDROGEN);
        assert!(!tile.tick_decay());
        assert_eq!(tile.turns_until_decay, None);
    }
}
