//! High-score persistence: one decimal integer in a text file.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::entities::GameState;

/// Default file name, resolved against the working directory.
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {path} does not hold an integer: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<u32, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        text.trim().parse().map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn try_save(&self, score: u32) -> Result<(), StoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Stored high score, or `0` if the file is missing or unreadable.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => score,
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                0
            }
            Err(err) => {
                warn!(%err, "ignoring unreadable high score");
                0
            }
        }
    }

    /// Persist `score`; failures are logged and otherwise ignored.
    pub fn save(&self, score: u32) {
        if let Err(err) = self.try_save(score) {
            warn!(%err, "could not save high score");
        }
    }

    /// Save `state.high_score` if it beats `saved`, the last value written.
    /// Returns the new baseline to pass next time.
    pub fn persist_if_beaten(&self, saved: u32, state: &GameState) -> u32 {
        if state.high_score <= saved {
            return saved;
        }
        info!(high_score = state.high_score, path = %self.path.display(), "saving high score");
        self.save(state.high_score);
        state.high_score
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        HighScoreStore::new(DEFAULT_HIGH_SCORE_FILE)
    }
}
