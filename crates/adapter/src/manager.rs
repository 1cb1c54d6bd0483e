//! GameManager - wires the engine to a store and a frontend sink
//!
//! The manager owns the session lifecycle: restore-or-start on
//! construction, save after every effective move, clear the save when
//! the game is lost, and track the best score across sessions.

use nuclide_2048_core::types::{Direction, STATE_VERSION};
use nuclide_2048_core::{Game, MoveResult};

use crate::actuate::{ActuationFrame, ActuationSink};
use crate::store::Store;

pub struct GameManager<S: Store, A: ActuationSink> {
    game: Game,
    store: S,
    sink: A,
    size: u8,
    seed: u64,
}

impl<S: Store, A: ActuationSink> GameManager<S, A> {
    /// Restore the saved game if one exists and still parses,
    /// otherwise start fresh
    pub fn new(size: u8, seed: u64, mut store: S, sink: A) -> Self {
        store.clear_if_outdated(STATE_VERSION);
        let game = match store.load() {
            Some(snapshot) => match Game::from_snapshot(&snapshot, seed) {
                Ok(game) => game,
                Err(err) => {
                    log::warn!("discarding saved game: {err}");
                    store.clear();
                    Game::new(size, seed)
                }
            },
            None => Game::new(size, seed),
        };

        let mut manager = Self {
            game,
            store,
            sink,
            size,
            seed,
        };
        manager.actuate();
        manager
    }

    /// Abandon the current game and start over
    pub fn restart(&mut self) {
        self.store.clear();
        self.seed = self.seed.wrapping_add(1);
        self.game = Game::new(self.size, self.seed);
        self.actuate();
    }

    /// Continue past the winning fusion
    pub fn keep_playing(&mut self) {
        self.game.keep_playing();
        self.actuate();
    }

    /// Apply one directional move
    ///
    /// A null move leaves the store and the sink untouched.
    pub fn receive(&mut self, direction: Direction) -> MoveResult {
        let result = self.game.step(direction);
        if result.moved {
            self.actuate();
        }
        result
    }

    /// Persist the current state and push it at the sink
    ///
    /// Every actuated state is also the saved state, so quitting at
    /// any point resumes exactly what was last shown.
    fn actuate(&mut self) {
        if self.game.score() > self.store.best_score() {
            self.store.set_best_score(self.game.score());
        }
        if self.game.is_over() {
            // A lost game is not worth resuming.
            self.store.clear();
        } else {
            self.store.save(&self.game.serialize());
        }
        let frame = ActuationFrame::from_game(&self.game, self.store.best_score());
        self.sink.actuate(&frame);
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn best_score(&self) -> f64 {
        self.store.best_score()
    }
}
