//! Grid - the N x N board of optional tiles
//!
//! Flat `Vec` storage in row-major order (`y * size + x`), with a
//! bounds-checked index helper. A coordinate holds at most one tile,
//! and a tile's stored position always equals its cell; `insert_tile`
//! asserts the target cell is empty because violating that is a
//! caller bug, not a recoverable condition.

use nuclide_2048_types::Position;

use crate::rng::GameRng;
use crate::tile::Tile;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: u8,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid of the given side length
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Flat index for a coordinate, `None` if out of bounds
    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if self.within_bounds(pos) {
            Some(pos.y as usize * self.size as usize + pos.x as usize)
        } else {
            None
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size as i8 && pos.y >= 0 && pos.y < self.size as i8
    }

    /// Tile at a coordinate; `None` for empty cells and out-of-bounds
    /// coordinates alike (hot paths bounds-check first)
    pub fn cell_content(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).and_then(|idx| self.cells[idx].as_ref())
    }

    pub(crate) fn cell_content_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.index(pos).and_then(|idx| self.cells[idx].as_mut())
    }

    /// True iff the coordinate is in bounds and empty
    pub fn cell_available(&self, pos: Position) -> bool {
        matches!(self.index(pos).map(|idx| &self.cells[idx]), Some(None))
    }

    /// True iff any cell is empty
    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    /// All empty coordinates in traversal order
    pub fn available_cells(&self) -> Vec<Position> {
        let mut available = Vec::new();
        self.each_cell(|x, y, tile| {
            if tile.is_none() {
                available.push(Position::new(x, y));
            }
        });
        available
    }

    /// Uniformly random empty coordinate, `None` when the grid is
    /// full (callers check `cells_available` first)
    pub fn random_available_cell(&self, rng: &mut GameRng) -> Option<Position> {
        let available = self.available_cells();
        if available.is_empty() {
            return None;
        }
        Some(available[rng.index(available.len())])
    }

    /// Place a tile at its stored position
    ///
    /// The target cell must be empty; inserting over an existing tile
    /// is a broken invariant and panics.
    pub fn insert_tile(&mut self, tile: Tile) {
        let idx = self
            .index(tile.position)
            .unwrap_or_else(|| panic!("insert_tile out of bounds at {:?}", tile.position));
        assert!(
            self.cells[idx].is_none(),
            "insert_tile into occupied cell {:?}",
            tile.position
        );
        self.cells[idx] = Some(tile);
    }

    /// Clear the cell at a coordinate, returning the tile it held
    pub fn remove_tile(&mut self, pos: Position) -> Option<Tile> {
        self.index(pos).and_then(|idx| self.cells[idx].take())
    }

    /// Visit every cell in a fixed row-major order
    ///
    /// Deterministic and restartable; used for snapshotting and the
    /// decay sweep.
    pub fn each_cell(&self, mut visit: impl FnMut(i8, i8, Option<&Tile>)) {
        for y in 0..self.size as i8 {
            for x in 0..self.size as i8 {
                visit(x, y, self.cell_content(Position::new(x, y)));
            }
        }
    }

    /// Mutable pass over every occupied cell
    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.cells.iter_mut().flatten()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
