//! Persistence - saved games and best scores between sessions
//!
//! The [`Store`] trait is the seam between the manager and whatever
//! holds state: an in-memory map for tests, a JSON file on disk for
//! real sessions. Storage failures are logged and degrade to "no
//! saved game"; they never abort play.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use nuclide_2048_core::GameSnapshot;

pub trait Store {
    /// Saved game from the last session, if any
    fn load(&mut self) -> Option<GameSnapshot>;
    fn save(&mut self, snapshot: &GameSnapshot);
    /// Drop the saved game; the best score survives
    fn clear(&mut self);
    fn best_score(&self) -> f64;
    fn set_best_score(&mut self, score: f64);
    /// Wipe the saved game when it was written by a different rules
    /// version, keeping the best score
    fn clear_if_outdated(&mut self, version: u32);
}

impl<S: Store + ?Sized> Store for &mut S {
    fn load(&mut self) -> Option<GameSnapshot> {
        (**self).load()
    }

    fn save(&mut self, snapshot: &GameSnapshot) {
        (**self).save(snapshot)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn best_score(&self) -> f64 {
        (**self).best_score()
    }

    fn set_best_score(&mut self, score: f64) {
        (**self).set_best_score(score)
    }

    fn clear_if_outdated(&mut self, version: u32) {
        (**self).clear_if_outdated(version)
    }
}

/// Volatile store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Option<GameSnapshot>,
    best_score: f64,
    version: u32,
}

impl Store for MemoryStore {
    fn load(&mut self) -> Option<GameSnapshot> {
        self.state.clone()
    }

    fn save(&mut self, snapshot: &GameSnapshot) {
        self.state = Some(snapshot.clone());
    }

    fn clear(&mut self) {
        self.state = None;
    }

    fn best_score(&self) -> f64 {
        self.best_score
    }

    fn set_best_score(&mut self, score: f64) {
        self.best_score = score;
    }

    fn clear_if_outdated(&mut self, version: u32) {
        if self.version != version {
            self.state = None;
            self.version = version;
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    version: u32,
    best_score: f64,
    state: Option<GameSnapshot>,
}

/// Single-file JSON store
///
/// The whole persisted state lives in one document and is rewritten
/// on every mutation; game states are small enough that this is
/// cheaper than being clever.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    persisted: PersistedState,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let persisted = Self::read(&path).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable save file {}: {err:#}", path.display());
            PersistedState::default()
        });
        Self { path, persisted }
    }

    fn read(path: &Path) -> anyhow::Result<PersistedState> {
        if !path.exists() {
            return Ok(PersistedState::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    fn flush(&self) {
        if let Err(err) = self.try_flush() {
            log::warn!("could not write save file {}: {err:#}", self.path.display());
        }
    }

    fn try_flush(&self) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(&self.persisted)?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))
    }
}

impl Store for JsonFileStore {
    fn load(&mut self) -> Option<GameSnapshot> {
        self.persisted.state.clone()
    }

    fn save(&mut self, snapshot: &GameSnapshot) {
        self.persisted.state = Some(snapshot.clone());
        self.flush();
    }

    fn clear(&mut self) {
        self.persisted.state = None;
        self.flush();
    }

    fn best_score(&self) -> f64 {
        self.persisted.best_score
    }

    fn set_best_score(&mut self, score: f64) {
        self.persisted.best_score = score;
        self.flush();
    }

    fn clear_if_outdated(&mut self, version: u32) {
        if self.persisted.version != version {
            log::info!(
                "saved game is from rules version {}, wiping (now {version})",
                self.persisted.version
            );
            self.persisted.state = None;
            self.persisted.version = version;
            self.flush();
        }
    }
}
