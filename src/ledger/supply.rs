//! Shared pools of neutral pieces.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameResult};

/// Neutral piece kinds drawn from the shared supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Troll,
    Demon,
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Troll => f.write_str("troll"),
            Piece::Demon => f.write_str("demon"),
        }
    }
}

/// Troll and demon pieces not currently on the board.
///
/// `available + on board == total` for each kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    trolls: u32,
    demons: u32,
}

impl Supply {
    #[must_use]
    pub fn new(trolls: u32, demons: u32) -> Self {
        Self { trolls, demons }
    }

    #[must_use]
    pub fn available(&self, piece: Piece) -> u32 {
        match piece {
            Piece::Troll => self.trolls,
            Piece::Demon => self.demons,
        }
    }

    fn count_mut(&mut self, piece: Piece) -> &mut u32 {
        match piece {
            Piece::Troll => &mut self.trolls,
            Piece::Demon => &mut self.demons,
        }
    }

    pub(crate) fn take(&mut self, piece: Piece) -> GameResult<()> {
        let count = self.count_mut(piece);
        if *count == 0 {
            return Err(GameError::NoPiecesAvailable(piece));
        }
        *count -= 1;
        Ok(())
    }

    pub(crate) fn give_back(&mut self, piece: Piece) {
        *self.count_mut(piece) += 1;
    }
}
