//! # ankh-engine
//!
//! Action resolution engine for an Ankh-Morpork territory-control board game.
//!
//! Players place minions, buildings and trouble markers on a fixed graph of
//! twelve areas, and play cards whose effects are made of discrete symbols.
//! Other players may interrupt an effect with a reactive card before it
//! commits.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every board and ledger operation checks
//!    everything first. A failed call changes nothing.
//!
//! 2. **Transactional effects**: the effect registry checkpoints the state
//!    before each effect (cheap with `im-rs` persistent collections) and
//!    restores it if the effect fails.
//!
//! 3. **Injected collaborators**: player decisions come from a
//!    `ChoiceProvider`, dice from a `RandomSource`. Neither is global.
//!
//! ## Modules
//!
//! - `core`: Player IDs, players, configuration, errors, dice, game state, snapshots
//! - `board`: Areas, adjacency graph, per-area occupancy
//! - `ledger`: Bank and troll/demon supply
//! - `cards`: Symbols, player cards, city area cards, personalities, random events, decks
//! - `effects`: Effect registry and effect functions
//! - `interrupt`: Reactive card offers
//! - `rules`: Choice providers and the turn coordinator

pub mod core;
pub mod board;
pub mod ledger;
pub mod cards;
pub mod effects;
pub mod interrupt;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Die, GameConfig, GameError, GameResult, GameRng, GameSnapshot, GameState, GameStatus,
    Player, PlayerId, PlayerMap, RandomSource, SnapshotError,
};

pub use crate::board::{AdjacencyGraph, Area, Board, BoardAreaState};

pub use crate::ledger::{Bank, Piece, Supply};

pub use crate::cards::{CityAreaCard, Personality, PlayerCard, RandomEvent, Reaction, Symbol, TextEffect};

pub use crate::effects::{EffectContext, EffectRegistry, Resolution};

pub use crate::interrupt::{InterruptOutcome, PendingEffect};

pub use crate::rules::{ChoiceProvider, Game, ScriptedChoices, TurnReport};
