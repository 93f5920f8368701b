use std::fs;
use std::io;
use std::path::PathBuf;

use log::error;

/// File-backed best-score record: one file, one base-10 integer string.
/// Storage failures are logged and otherwise ignored; the in-memory value
/// keeps working for the rest of the session.
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(contents) => contents.trim().parse().unwrap_or(0),
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                error!("failed to read high score from {}: {}", path.display(), err);
                0
            }
        };
        HighScoreStore { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a new best if `score` beats the stored one. Returns whether
    /// the record changed; calling again with the same score is a no-op.
    pub fn maybe_update(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }

        self.best = score;
        if let Err(err) = fs::write(&self.path, self.best.to_string()) {
            error!("failed to write high score to {}: {}", self.path.display(), err);
        }
        true
    }
}
