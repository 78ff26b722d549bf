//! Core engine types: players, configuration, errors, randomness, state and
//! snapshots.
//!
//! Everything else in the crate builds on `GameState`; the board, ledger and
//! card modules supply the entities it is made of.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use player::{is_valid_name, Color, Player, PlayerId, PlayerMap};
pub use rng::{Die, GameRng, GameRngState, RandomSource};
pub use snapshot::{GameSnapshot, SnapshotError};
pub use state::{GameEnd, GameState, GameStatus, TurnState};
