//! Game - move resolution, fusion, spawning and the decay sweep
//!
//! A turn is one call to [`Game::step`]. Tiles slide as far as they
//! can in the chosen direction; a tile that lands on a fusable
//! neighbour fuses into the product nuclide, at most once per tile
//! per turn. Only a turn that changed the board spawns a tile and
//! advances decay countdowns. A turn that moved nothing leaves the
//! game bit-for-bit unchanged, RNG included.

use nuclide_2048_types::{Direction, Position, LIGHT_SPAWN_PROBABILITY, START_TILES};

use crate::decay;
use crate::elements::{Nuclide, DEUTERON, HYDROGEN, WINNING_NUCLIDE};
use crate::fusion;
use crate::grid::Grid;
use crate::rng::GameRng;
use crate::scoring::point_value;
use crate::snapshot::{GameSnapshot, GridSnapshot, SnapshotError};
use crate::tile::{MergeParent, Tile};

/// What a single turn did to the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub moved: bool,
    pub fusions: u32,
    pub decays: u32,
}

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    score: f64,
    over: bool,
    won: bool,
    keep_playing: bool,
    winning_nuclide: Nuclide,
    rng: GameRng,
}

impl Game {
    /// Fresh game with the starting tiles already spawned
    pub fn new(size: u8, seed: u64) -> Self {
        let mut game = Self::empty(size, seed);
        for _ in 0..START_TILES {
            game.add_random_tile();
        }
        game
    }

    fn empty(size: u8, seed: u64) -> Self {
        Self {
            grid: Grid::new(size),
            score: 0.0,
            over: false,
            won: false,
            keep_playing: false,
            winning_nuclide: WINNING_NUCLIDE,
            rng: GameRng::new(seed),
        }
    }

    /// Rebuild a game from a saved snapshot
    ///
    /// Countdowns are not part of the snapshot, so every unstable
    /// tile gets a fresh one rolled from the restore seed.
    pub fn from_snapshot(snapshot: &GameSnapshot, seed: u64) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let mut game = Self::empty(snapshot.grid.size, seed);
        for (x, column) in snapshot.grid.cells.iter().enumerate() {
            for (y, cell) in column.iter().enumerate() {
                let Some(id) = cell else { continue };
                let nuclide = Nuclide::resolve(id)
                    .ok_or_else(|| SnapshotError::UnknownNuclide(id.clone()))?;
                let mut tile = Tile::new(Position::new(x as i8, y as i8), nuclide);
                tile.turns_until_decay = decay::roll_countdown(nuclide, &mut game.rng);
                game.grid.insert_tile(tile);
            }
        }
        game.score = snapshot.score;
        game.over = snapshot.over;
        game.won = snapshot.won;
        game.keep_playing = snapshot.keep_playing;
        Ok(game)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn winning_nuclide(&self) -> Nuclide {
        self.winning_nuclide
    }

    /// Won but not over, and the player chose to continue
    pub fn keep_playing(&mut self) {
        self.keep_playing = true;
    }

    /// True when no further moves are accepted
    pub fn is_terminated(&self) -> bool {
        self.over || (self.won && !self.keep_playing)
    }

    /// Resolve one turn in the given direction
    pub fn step(&mut self, direction: Direction) -> MoveResult {
        let mut result = MoveResult::default();
        if self.is_terminated() {
            return result;
        }

        let vector = direction.vector();
        let (xs, ys) = self.build_traversals(vector);

        self.prepare_tiles();

        for &x in &xs {
            for &y in &ys {
                let cell = Position::new(x, y);
                let Some(tile) = self.grid.cell_content(cell).copied() else {
                    continue;
                };
                let (farthest, next) = self.find_farthest_position(cell, vector);

                // The blocking tile is the fusion anchor; a tile that
                // already fused this turn cannot fuse again.
                let mut fused = None;
                if let Some(next_pos) = next {
                    if let Some(other) = self.grid.cell_content(next_pos).copied() {
                        if other.merged_from.is_none() {
                            if let Some(product) =
                                fusion::fuse(other.nuclide, tile.nuclide, &mut self.rng)
                            {
                                fused = Some((next_pos, other, product));
                            }
                        }
                    }
                }

                if let Some((next_pos, other, product)) = fused {
                    self.grid.remove_tile(cell);
                    self.grid.remove_tile(next_pos);

                    let mut merged = Tile::new(next_pos, product);
                    merged.merged_from = Some([
                        MergeParent {
                            position: cell,
                            nuclide: tile.nuclide,
                        },
                        MergeParent {
                            position: next_pos,
                            nuclide: other.nuclide,
                        },
                    ]);
                    merged.turns_until_decay = decay::roll_countdown(product, &mut self.rng);
                    self.grid.insert_tile(merged);

                    self.score += point_value(product);
                    if product == self.winning_nuclide {
                        self.won = true;
                    }
                    log::debug!("{} + {} fused into {} at {:?}", other.nuclide, tile.nuclide, product, next_pos);

                    result.fusions += 1;
                    result.moved = true;
                } else {
                    let mut moving = match self.grid.remove_tile(cell) {
                        Some(tile) => tile,
                        None => continue,
                    };
                    moving.update_position(farthest);
                    self.grid.insert_tile(moving);
                    // prepare() stamped previous_position at the start
                    // of the turn; the tile moved iff it changed.
                    if moving.previous_position != Some(moving.position) {
                        result.moved = true;
                    }
                }
            }
        }

        if result.moved {
            // Tiles spawned this turn sit out the decay sweep.
            let mut occupied = Vec::new();
            self.grid.each_cell(|x, y, tile| {
                if tile.is_some() {
                    occupied.push(Position::new(x, y));
                }
            });
            self.add_random_tile();
            result.decays = self.decay_sweep(&occupied);

            if !self.moves_available() {
                self.over = true;
            }
        }

        result
    }

    /// Spawn one light tile on a random empty cell
    ///
    /// The nuclide is drawn before the cell, so the spawn split is
    /// independent of board occupancy.
    fn add_random_tile(&mut self) {
        if !self.grid.cells_available() {
            return;
        }
        let nuclide = if self.rng.uniform() < LIGHT_SPAWN_PROBABILITY {
            HYDROGEN
        } else {
            DEUTERON
        };
        if let Some(pos) = self.grid.random_available_cell(&mut self.rng) {
            self.grid.insert_tile(Tile::new(pos, nuclide));
        }
    }

    /// Advance countdowns on the given cells and decay the expired ones
    fn decay_sweep(&mut self, occupied: &[Position]) -> u32 {
        let mut decays = 0;
        for &pos in occupied {
            let due = self
                .grid
                .cell_content_mut(pos)
                .map(|tile| tile.tick_decay())
                .unwrap_or(false);
            if !due {
                continue;
            }
            let Some(parent) = self.grid.remove_tile(pos) else {
                continue;
            };
            let Some(rule) = decay::rule_for(parent.nuclide) else {
                // A countdown without a rule cannot happen; restore and move on.
                self.grid.insert_tile(parent);
                continue;
            };

            let target = decay::pick_target(rule, &mut self.rng);
            let mut child = Tile::new(pos, target);
            child.turns_until_decay = decay::roll_countdown(target, &mut self.rng);
            self.grid.insert_tile(child);

            self.score += rule.score_delta;
            if target == self.winning_nuclide {
                self.won = true;
            }
            log::debug!("{} decayed into {} at {:?}", parent.nuclide, target, pos);
            decays += 1;
        }
        decays
    }

    fn prepare_tiles(&mut self) {
        for tile in self.grid.tiles_mut() {
            tile.prepare();
        }
    }

    /// Column and row visit order for a move direction
    ///
    /// Tiles nearest the destination edge resolve first, so a tile
    /// never slides into a cell a later tile still occupies.
    fn build_traversals(&self, vector: (i8, i8)) -> (Vec<i8>, Vec<i8>) {
        let mut xs: Vec<i8> = (0..self.grid.size() as i8).collect();
        let mut ys: Vec<i8> = (0..self.grid.size() as i8).collect();
        if vector.0 == 1 {
            xs.reverse();
        }
        if vector.1 == 1 {
            ys.reverse();
        }
        (xs, ys)
    }

    /// Last empty cell along the vector, plus the blocking cell if any
    fn find_farthest_position(
        &self,
        cell: Position,
        vector: (i8, i8),
    ) -> (Position, Option<Position>) {
        let mut previous = cell;
        let mut next = cell.translate(vector);
        while self.grid.cell_available(next) {
            previous = next;
            next = next.translate(vector);
        }
        let blocking = if self.grid.within_bounds(next) {
            Some(next)
        } else {
            None
        };
        (previous, blocking)
    }

    /// True when any move could still change the board
    pub fn moves_available(&self) -> bool {
        self.grid.cells_available() || self.tile_matches_available()
    }

    fn tile_matches_available(&self) -> bool {
        let size = self.grid.size() as i8;
        for y in 0..size {
            for x in 0..size {
                let pos = Position::new(x, y);
                let Some(tile) = self.grid.cell_content(pos) else {
                    continue;
                };
                for direction in Direction::all() {
                    let neighbour = pos.translate(direction.vector());
                    if let Some(other) = self.grid.cell_content(neighbour) {
                        if fusion::can_fuse(tile.nuclide, other.nuclide) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Snapshot of the current state, suitable for persistence
    pub fn serialize(&self) -> GameSnapshot {
        let size = self.grid.size();
        let mut cells = vec![vec![None; size as usize]; size as usize];
        self.grid.each_cell(|x, y, tile| {
            if let Some(tile) = tile {
                cells[x as usize][y as usize] = Some(tile.nuclide.id().to_string());
            }
        });
        GameSnapshot {
            grid: GridSnapshot { size, cells },
            score: self.score,
            over: self.over,
            won: self.won,
            keep_playing: self.keep_playing,
        }
    }

    #[cfg(test)]
    pub(crate) fn empty_for_test(size: u8, seed: u64) -> Self {
        Self::empty(size, seed)
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_over(&mut self, over: bool) {
        self.over = over;
    }
}
