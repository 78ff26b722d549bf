//! Engine error kinds.
//!
//! Every failure the engine can report is a distinct `GameError` variant so
//! a caller can render an actionable message. All of them are recoverable at
//! the turn coordinator boundary; none of them panic.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Area;
use crate::cards::{DeckKind, PlayerCard};
use crate::ledger::Piece;

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;

/// Errors surfaced by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("expected 2 to 4 players with one name each, got {count} players and {names} names")]
    InvalidPlayerCount { count: usize, names: usize },

    #[error("invalid player name '{0}': only letters, digits and '_' are allowed")]
    InvalidPlayerName(String),

    #[error("the {0} deck is exhausted")]
    DeckExhausted(DeckKind),

    #[error("{0} has no minions left in reserve")]
    NoMinionsAvailable(PlayerId),

    #[error("{player} has no minion in {area}")]
    NoMinionPresent { area: Area, player: PlayerId },

    #[error("insufficient funds: {needed} needed, {available} available")]
    InsufficientFunds { needed: u32, available: u32 },

    #[error("{0} has no buildings left in reserve")]
    NoBuildingsAvailable(PlayerId),

    #[error("a trouble marker in {0} blocks construction")]
    TroubleBlocksConstruction(Area),

    #[error("{0} already holds a building")]
    BuildingPresent(Area),

    #[error("no {0} left in the supply")]
    NoPiecesAvailable(Piece),

    #[error("no {piece} present in {area}")]
    NoPiecePresent { area: Area, piece: Piece },

    #[error("no legal target: {0}")]
    NoLegalTarget(&'static str),

    #[error("the {0} city card was already played this round")]
    AlreadyPlayedThisRound(Area),

    #[error("{player} already holds {capacity} cards")]
    HandFull { player: PlayerId, capacity: usize },

    #[error("{player} does not hold {card}")]
    CardNotHeld { player: PlayerId, card: PlayerCard },

    #[error("{0} is not in the draw pile")]
    CardUnavailable(PlayerCard),

    #[error("{player} does not hold the {area} city card")]
    CityCardNotHeld { player: PlayerId, area: Area },

    #[error("choice outside the offered candidates: {0}")]
    InvalidChoice(String),

    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl GameError {
    /// Shorthand for `InvalidStateTransition`.
    pub(crate) fn transition(message: impl Into<String>) -> Self {
        Self::InvalidStateTransition(message.into())
    }
}
