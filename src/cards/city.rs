//! City area cards, held by the owner of the building in that area.

use serde::{Deserialize, Serialize};

use crate::board::Area;

/// A held city area card and its once-per-round flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityAreaCard {
    area: Area,
    played_this_round: bool,
}

impl CityAreaCard {
    #[must_use]
    pub fn new(area: Area) -> Self {
        Self {
            area,
            played_this_round: false,
        }
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    #[must_use]
    pub fn played_this_round(&self) -> bool {
        self.played_this_round
    }

    /// Replayable cards ignore the once-per-round limit.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.area.is_replayable() || !self.played_this_round
    }

    pub(crate) fn mark_played(&mut self) {
        if !self.area.is_replayable() {
            self.played_this_round = true;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.played_this_round = false;
    }
}
