//! Save and load a complete game.
//!
//! A snapshot is pure data: the configuration, every entity, the turn state
//! and the die position. Loading runs no engine logic, so a resumed game
//! behaves exactly like the one that was saved.
//!
//! ```
//! use ankh_engine::core::GameSnapshot;
//! use ankh_engine::rules::Game;
//!
//! let mut game = Game::new();
//! game.set_up(2, &["Ross", "Smith"]).unwrap();
//! game.init().unwrap();
//!
//! let json = game.save_json().unwrap();
//! let resumed = Game::load_json(&json).unwrap();
//! assert_eq!(resumed.state(), game.state());
//! # let _ = GameSnapshot::VERSION;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::GameState;

/// Errors reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot binary error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("no game has been set up")]
    NoGame,
}

/// Serializable image of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub state: GameState,
}

impl GameSnapshot {
    /// Current format version.
    pub const VERSION: u32 = 1;

    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            version: Self::VERSION,
            state,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.checked()
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.checked()
    }

    fn checked(self) -> Result<Self, SnapshotError> {
        if self.version != Self::VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        Ok(self)
    }
}
