//! Actuation - pushing game state at a frontend
//!
//! After every turn that changed something, the manager hands the
//! sink a complete [`ActuationFrame`]. Frontends render the frame
//! however they like; the manager never learns what a pixel is.

use nuclide_2048_core::{Game, GridSnapshot};

/// Everything a frontend needs to draw one state
#[derive(Debug, Clone, PartialEq)]
pub struct ActuationFrame {
    pub grid: GridSnapshot,
    pub score: f64,
    pub best_score: f64,
    pub over: bool,
    pub won: bool,
    /// No further moves accepted (lost, or won without continuing)
    pub terminated: bool,
}

impl ActuationFrame {
    pub fn from_game(game: &Game, best_score: f64) -> Self {
        let snapshot = game.serialize();
        Self {
            grid: snapshot.grid,
            score: snapshot.score,
            best_score,
            over: snapshot.over,
            won: snapshot.won,
            terminated: game.is_terminated(),
        }
    }
}

pub trait ActuationSink {
    fn actuate(&mut self, frame: &ActuationFrame);
}

/// Discards every frame; for headless use
#[derive(Debug, Default)]
pub struct NullSink;

impl ActuationSink for NullSink {
    fn actuate(&mut self, _frame: &ActuationFrame) {}
}

/// Keeps every frame it sees; for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<ActuationFrame>,
}

impl ActuationSink for RecordingSink {
    fn actuate(&mut self, frame: &ActuationFrame) {
        self.frames.push(frame.clone());
    }
}
