//! Board occupancy: the per-area state the registry owns.
//!
//! `Board` holds one `BoardAreaState` per area. Reads are public; writes are
//! crate-private and only reached through the validated operations on
//! [`GameState`](crate::core::GameState), which also keep player reserves and
//! the shared supply in step with the board.

use serde::{Deserialize, Serialize};

use super::area::{Area, AREA_COUNT};
use crate::core::{GameError, GameResult, PlayerId, PlayerMap};
use crate::ledger::Piece;

/// Occupancy of one area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAreaState {
    area: Area,
    minions: PlayerMap<u32>,
    building: Option<PlayerId>,
    trolls: u32,
    demons: u32,
    trouble: bool,
}

impl BoardAreaState {
    fn new(area: Area, player_count: usize) -> Self {
        Self {
            area,
            minions: PlayerMap::with_value(player_count, 0),
            building: None,
            trolls: 0,
            demons: 0,
            trouble: false,
        }
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Minions `player` has here.
    #[must_use]
    pub fn minions_of(&self, player: PlayerId) -> u32 {
        self.minions.get(player).copied().unwrap_or(0)
    }

    /// Minions of all players.
    #[must_use]
    pub fn minion_count(&self) -> u32 {
        self.minions.values().sum()
    }

    #[must_use]
    pub fn has_minion_of(&self, player: PlayerId) -> bool {
        self.minions_of(player) > 0
    }

    /// Whether any player other than `player` has a minion here.
    #[must_use]
    pub fn has_rival_minion(&self, player: PlayerId) -> bool {
        self.minions.iter().any(|(p, &n)| p != player && n > 0)
    }

    /// Players with at least one minion here, in seat order.
    pub fn minion_owners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.minions.iter().filter(|(_, &n)| n > 0).map(|(p, _)| p)
    }

    #[must_use]
    pub fn building_owner(&self) -> Option<PlayerId> {
        self.building
    }

    #[must_use]
    pub fn trolls(&self) -> u32 {
        self.trolls
    }

    #[must_use]
    pub fn demons(&self) -> u32 {
        self.demons
    }

    #[must_use]
    pub fn pieces(&self, piece: Piece) -> u32 {
        match piece {
            Piece::Troll => self.trolls,
            Piece::Demon => self.demons,
        }
    }

    #[must_use]
    pub fn has_trouble(&self) -> bool {
        self.trouble
    }

    /// No minion, building, troll or demon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minion_count() == 0 && self.building.is_none() && self.trolls == 0 && self.demons == 0
    }
}

/// The board registry, indexed by area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    areas: Vec<BoardAreaState>,
}

impl Board {
    /// An empty board for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            areas: Area::ALL
                .into_iter()
                .map(|area| BoardAreaState::new(area, player_count))
                .collect(),
        }
    }

    #[must_use]
    pub fn area(&self, area: Area) -> &BoardAreaState {
        &self.areas[area.index()]
    }

    /// Every area state, in code order.
    pub fn iter(&self) -> impl Iterator<Item = &BoardAreaState> {
        self.areas.iter()
    }

    /// Areas whose state satisfies `predicate`, in code order.
    pub fn areas_where<'a>(
        &'a self,
        mut predicate: impl FnMut(&BoardAreaState) -> bool + 'a,
    ) -> impl Iterator<Item = Area> + 'a {
        self.areas.iter().filter(move |s| predicate(s)).map(|s| s.area)
    }

    /// Minions `player` has on the whole board.
    #[must_use]
    pub fn minions_on_board(&self, player: PlayerId) -> u32 {
        self.areas.iter().map(|s| s.minions_of(player)).sum()
    }

    /// Areas holding a building owned by `player`.
    pub fn buildings_of(&self, player: PlayerId) -> impl Iterator<Item = Area> + '_ {
        self.areas_where(move |s| s.building == Some(player))
    }

    #[must_use]
    pub fn trouble_count(&self) -> usize {
        self.areas.iter().filter(|s| s.trouble).count()
    }

    /// Trolls or demons on the whole board.
    #[must_use]
    pub fn pieces_on_board(&self, piece: Piece) -> u32 {
        self.areas.iter().map(|s| s.pieces(piece)).sum()
    }

    fn state_mut(&mut self, area: Area) -> &mut BoardAreaState {
        &mut self.areas[area.index()]
    }

    // === Crate-private mutation ===

    pub(crate) fn put_minion(&mut self, area: Area, player: PlayerId) {
        if let Some(count) = self.state_mut(area).minions.get_mut(player) {
            *count += 1;
        }
    }

    pub(crate) fn lift_minion(&mut self, area: Area, player: PlayerId) -> GameResult<()> {
        match self.state_mut(area).minions.get_mut(player) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(GameError::NoMinionPresent { area, player }),
        }
    }

    pub(crate) fn raise_building(&mut self, area: Area, player: PlayerId) -> GameResult<()> {
        let state = self.state_mut(area);
        if state.building.is_some() {
            return Err(GameError::BuildingPresent(area));
        }
        state.building = Some(player);
        Ok(())
    }

    pub(crate) fn raze_building(&mut self, area: Area) -> GameResult<PlayerId> {
        self.state_mut(area)
            .building
            .take()
            .ok_or_else(|| GameError::transition(format!("{area} has no building")))
    }

    pub(crate) fn set_trouble(&mut self, area: Area, trouble: bool) -> GameResult<()> {
        let state = self.state_mut(area);
        if state.trouble == trouble {
            let verb = if trouble { "already has" } else { "has no" };
            return Err(GameError::transition(format!("{area} {verb} a trouble marker")));
        }
        state.trouble = trouble;
        Ok(())
    }

    pub(crate) fn put_piece(&mut self, area: Area, piece: Piece) {
        let state = self.state_mut(area);
        match piece {
            Piece::Troll => state.trolls += 1,
            Piece::Demon => state.demons += 1,
        }
    }

    pub(crate) fn lift_piece(&mut self, area: Area, piece: Piece) -> GameResult<()> {
        let state = self.state_mut(area);
        let count = match piece {
            Piece::Troll => &mut state.trolls,
            Piece::Demon => &mut state.demons,
        };
        if *count == 0 {
            return Err(GameError::NoPiecePresent { area, piece });
        }
        *count -= 1;
        Ok(())
    }
}
