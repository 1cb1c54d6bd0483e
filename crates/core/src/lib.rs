//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole fusion-puzzle rule set: the grid,
//! move resolution, the fusion graph, the decay tables and the scoring
//! model. It has **zero dependencies** on UI, persistence, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game`]: Move resolution, spawning, and the per-turn decay sweep
//! - [`grid`]: N x N board of optional tiles
//! - [`elements`]: Nuclide identities, labels, and mass numbers
//! - [`fusion`]: The directed fusion graph and product selection
//! - [`decay`]: Decay rules, countdown sampling, and branching targets
//! - [`halflife`]: Mapping from physical half-lives to turn counts
//! - [`scoring`]: Per-nuclide point values
//! - [`rng`]: Seeded draws for spawns, candidates, and countdowns
//! - [`snapshot`]: Serializable game state for persistence
//!
//! # Game Rules
//!
//! Tiles slide as far as they can in the chosen direction. A tile that
//! lands on a fusable neighbour fuses into the product nuclide, at most
//! once per tile per turn. Each turn that changes the board spawns one
//! light tile and advances decay countdowns; unstable nuclides decay
//! into their daughters when their countdown expires. Producing 56Iron,
//! by fusion or by decay, wins the game.
//!
//! # Example
//!
//! ```
//! use nuclide_2048_core::Game;
//! use nuclide_2048_core::types::{Direction, DEFAULT_GRID_SIZE};
//!
//! let mut game = Game::new(DEFAULT_GRID_SIZE, 12345);
//! game.step(Direction::Left);
//! game.step(Direction::Up);
//! assert!(!game.is_over() || !game.moves_available());
//! ```

pub mod decay;
pub mod elements;
pub mod fusion;
pub mod game;
pub mod grid;
pub mod halflife;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tile;

pub use nuclide_2048_types as types;

// Re-export commonly used types for convenience
pub use elements::{Nuclide, DEUTERON, HYDROGEN, WINNING_NUCLIDE};
pub use game::{Game, MoveResult};
pub use grid::Grid;
pub use rng::GameRng;
pub use snapshot::{GameSnapshot, GridSnapshot, SnapshotError};
pub use tile::{MergeParent, Tile};
