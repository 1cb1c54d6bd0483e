//! Nuclide 2048 (workspace facade crate).
//!
//! This package keeps a single `nuclide_2048::{core,adapter,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use nuclide_2048_adapter as adapter;
pub use nuclide_2048_core as core;
pub use nuclide_2048_types as types;
