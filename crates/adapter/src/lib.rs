//! Adapter - session lifecycle around the core engine
//!
//! The core engine knows nothing about files or screens. This crate
//! adds the two seams a real frontend needs:
//!
//! - [`store::Store`]: persistence for the in-progress game and the
//!   best score, with an in-memory and a JSON-file implementation
//! - [`actuate::ActuationSink`]: a push channel the manager sends a
//!   full [`actuate::ActuationFrame`] down after every effective move
//!
//! [`manager::GameManager`] ties them together: it restores a saved
//! game on startup (wiping saves written by older rules versions),
//! persists at every actuation point (setup, restart, and every move
//! that changed the board), clears the save when the game is lost,
//! and keeps the best score current.
//!
//! # Example
//!
//! ```
//! use nuclide_2048_adapter::{GameManager, MemoryStore, NullSink};
//! use nuclide_2048_adapter::core::types::{Direction, DEFAULT_GRID_SIZE};
//!
//! let mut manager = GameManager::new(
//!     DEFAULT_GRID_SIZE,
//!     42,
//!     MemoryStore::default(),
//!     NullSink,
//! );
//! manager.receive(Direction::Left);
//! ```

pub mod actuate;
pub mod manager;
pub mod store;

pub use nuclide_2048_core as core;
pub use nuclide_2048_types as types;

pub use actuate::{ActuationFrame, ActuationSink, NullSink, RecordingSink};
pub use manager::GameManager;
pub use store::{JsonFileStore, MemoryStore, Store};
