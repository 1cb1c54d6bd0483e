//! Serializable game state
//!
//! The persisted layout stores grid cells as columns of nuclide ids,
//! indexed `[x][y]`, so snapshots written by other frontends of the
//! same game stay readable. Decay countdowns are not persisted; they
//! are re-rolled on restore.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::elements::Nuclide;

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("grid declares size {declared} but holds {actual} columns")]
    GridSize { declared: u8, actual: usize },
    #[error("unknown nuclide id {0:?}")]
    UnknownNuclide(String),
}

/// Grid cells as nested columns, `cells[x][y]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: u8,
    pub cells: Vec<Vec<Option<String>>>,
}

impl GridSnapshot {
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.cells.len() != self.size as usize {
            return Err(SnapshotError::GridSize {
                declared: self.size,
                actual: self.cells.len(),
            });
        }
        for column in &self.cells {
            if column.len() != self.size as usize {
                return Err(SnapshotError::GridSize {
                    declared: self.size,
                    actual: column.len(),
                });
            }
            for cell in column.iter().flatten() {
                if Nuclide::resolve(cell).is_none() {
                    return Err(SnapshotError::UnknownNuclide(cell.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Full game state at a moment between moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: GridSnapshot,
    pub score: f64,
    pub over: bool,
    pub won: bool,
    #[serde(rename = "keepPlaying")]
    pub keep_playing: bool,
}

impl GameSnapshot {
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.grid.validate()
    }
}
