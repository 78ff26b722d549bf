//! Effect targeting.
//!
//! Candidate sets are computed from the current state before anything is
//! mutated. An empty set is a `NoLegalTarget` failure; a non-empty set is
//! offered to the choice provider and the answer is checked against it.

use crate::board::{AdjacencyGraph, Area, BoardAreaState};
use crate::cards::PlayerCard;
use crate::core::{GameError, GameResult, GameState, PlayerId};
use crate::rules::ChoiceProvider;

/// Ask `player` to pick one of `candidates`.
///
/// Fails with `NoLegalTarget(what)` if there are none, and with
/// `InvalidChoice` if the answer was not offered.
pub fn select_area(
    choices: &mut dyn ChoiceProvider,
    player: PlayerId,
    candidates: &[Area],
    what: &'static str,
) -> GameResult<Area> {
    if candidates.is_empty() {
        return Err(GameError::NoLegalTarget(what));
    }
    let area = choices.choose_area(player, candidates);
    if !candidates.contains(&area) {
        return Err(GameError::InvalidChoice(format!("{area} is not a legal {what}")));
    }
    Ok(area)
}

/// Ask `player` to pick one of `candidates` cards.
pub fn select_card(
    choices: &mut dyn ChoiceProvider,
    player: PlayerId,
    candidates: &[PlayerCard],
    what: &'static str,
) -> GameResult<PlayerCard> {
    if candidates.is_empty() {
        return Err(GameError::NoLegalTarget(what));
    }
    let card = choices.choose_card(player, candidates);
    if !candidates.contains(&card) {
        return Err(GameError::InvalidChoice(format!("{card} is not a legal {what}")));
    }
    Ok(card)
}

/// Ask `player` to pick one of `candidates` players.
pub fn select_player(
    choices: &mut dyn ChoiceProvider,
    player: PlayerId,
    candidates: &[PlayerId],
    what: &'static str,
) -> GameResult<PlayerId> {
    if candidates.is_empty() {
        return Err(GameError::NoLegalTarget(what));
    }
    let chosen = choices.choose_player(player, candidates);
    if !candidates.contains(&chosen) {
        return Err(GameError::InvalidChoice(format!("{chosen} is not a legal {what}")));
    }
    Ok(chosen)
}

/// Areas whose occupancy satisfies `predicate`.
pub fn areas_where(
    state: &GameState,
    mut predicate: impl FnMut(&BoardAreaState) -> bool,
) -> Vec<Area> {
    state
        .board()
        .iter()
        .filter(|s| predicate(s))
        .map(BoardAreaState::area)
        .collect()
}

/// `area` and every area adjacent to it that satisfies `predicate`.
pub fn in_or_adjacent(
    state: &GameState,
    area: Area,
    mut predicate: impl FnMut(&BoardAreaState) -> bool,
) -> Vec<Area> {
    AdjacencyGraph::city()
        .neighbors(area, true)
        .into_iter()
        .filter(|&a| predicate(state.board().area(a)))
        .collect()
}

/// Where `player` may place a minion: any area holding one of their
/// minions or adjacent to one. With no minions on the board, anywhere.
#[must_use]
pub fn minion_placement_areas(state: &GameState, player: PlayerId) -> Vec<Area> {
    let occupied = areas_where(state, |s| s.has_minion_of(player));
    if occupied.is_empty() {
        return Area::ALL.to_vec();
    }
    let map = AdjacencyGraph::city();
    Area::ALL
        .into_iter()
        .filter(|&a| occupied.iter().any(|&o| map.is_in_or_adjacent(o, a)))
        .collect()
}

/// Other players with a minion in `area`.
#[must_use]
pub fn rivals_in(state: &GameState, area: Area, player: PlayerId) -> Vec<PlayerId> {
    state
        .board()
        .area(area)
        .minion_owners()
        .filter(|&p| p != player)
        .collect()
}
