//! Shared types module - pure data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data with no external dependencies, making them
//! usable in any context (core simulation, adapters, host front ends).
//!
//! # Grid Dimensions
//!
//! The classic board is 4x4, indexed `(x, y)` with `x` running left to
//! right and `y` top to bottom, both in `[0, size)`.
//!
//! # Directions
//!
//! Moves arrive as one of four direction codes. Each maps to a unit
//! vector:
//!
//! | Direction | Vector |
//! |-----------|---------|
//! | `Up` | (0, -1) |
//! | `Right` | (1, 0) |
//! | `Down` | (0, 1) |
//! | `Left` | (-1, 0) |
//!
//! # Examples
//!
//! ```
//! use nuclide_2048_types::{Direction, Position, DEFAULT_GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir.vector(), (-1, 0));
//!
//! let pos = Position::new(1, 0).translate(dir.vector());
//! assert_eq!(pos, Position::new(0, 0));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Default grid side length (4x4 board)
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Number of tiles placed on a fresh board
pub const START_TILES: usize = 2;

/// Probability that a spawned tile is the light base nuclide
/// (Hydrogen); otherwise the heavier one (Deuteron) is placed.
pub const LIGHT_SPAWN_PROBABILITY: f64 = 0.9;

/// Persisted-state schema version, checked once at startup via
/// `Store::clear_if_outdated`.
pub const STATE_VERSION: u32 = 1;

/// A cell coordinate on the grid
///
/// Coordinates are signed so that direction vectors can be applied
/// freely during the farthest-cell walk; the grid itself rejects
/// anything outside `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Apply a direction vector, yielding the neighboring coordinate
    pub fn translate(self, (dx, dy): (i8, i8)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four move directions
///
/// External input sources deliver these as discrete events; the index
/// encoding (0=up, 1=right, 2=down, 3=left) matches the classic 2048
/// input protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in index order
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    }

    /// The unit vector tiles travel along for this direction
    pub fn vector(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Decode from the 0-3 wire index
    ///
    /// # Examples
    ///
    /// ```
    /// use nuclide_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_index(0), Some(Direction::Up));
    /// assert_eq!(Direction::from_index(3), Some(Direction::Left));
    /// assert_eq!(Direction::from_index(4), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Direction::Up.vector(), (0, -1));
        assert_eq!(Direction::Right.vector(), (1, 0));
        assert_eq!(Direction::Down.vector(), (0, 1));
        assert_eq!(Direction::Left.vector(), (-1, 0));
    }

    #[test]
    fn test_direction_index_roundtrip() {
        for (i, dir) in Direction::all().iter().enumerate() {
            assert_eq!(Direction::from_index(i as u8), Some(*dir));
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_direction_str_roundtrip() {
        for dir in Direction::all() {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("diagonal"), None);
    }

    #[test]
    fn test_position_translate() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.translate((0, -1)), Position::new(2, 1));
        assert_eq!(pos.translate((-1, 0)), Position::new(1, 2));
        // Translation may leave the grid; bounds are the grid's concern.
        assert_eq!(Position::new(0, 0).translate((-1, 0)), Position::new(-1, 0));
    }
}
