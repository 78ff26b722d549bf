//! Symbol effects.
//!
//! Each function picks its targets from the current state, asks for a
//! choice, and only then mutates. Placement helpers shared with city cards,
//! text effects and interrupts live here too.

use log::debug;

use super::context::{EffectContext, Resolution};
use super::targeting::{
    areas_where, minion_placement_areas, rivals_in, select_area, select_player,
};
use crate::board::Area;
use crate::core::{GameError, GameResult, GameState, PlayerId};
use crate::interrupt::{offer, PendingEffect};
use crate::ledger::Piece;
use crate::rules::ChoiceProvider;

/// Place a minion from `player`'s reserve into `area`.
///
/// Placing into an area that already holds a minion adds a trouble marker
/// if there is none.
pub(crate) fn place_minion_in(state: &mut GameState, player: PlayerId, area: Area) -> GameResult<()> {
    let occupied = state.board().area(area).minion_count() > 0;
    state.add_minion(area, player)?;
    if occupied && !state.board().area(area).has_trouble() {
        state.add_trouble(area)?;
    }
    Ok(())
}

/// Move one of `player`'s minions from `from` to `to`.
pub(crate) fn move_minion(
    state: &mut GameState,
    player: PlayerId,
    from: Area,
    to: Area,
) -> GameResult<()> {
    state.remove_minion(from, player)?;
    place_minion_in(state, player, to)
}

/// Place a troll or demon; like a minion, it causes trouble in an occupied area.
pub(crate) fn place_piece_in(state: &mut GameState, area: Area, piece: Piece) -> GameResult<()> {
    let site = state.board().area(area);
    let occupied = site.minion_count() + site.trolls() + site.demons() > 0;
    state.place_piece(area, piece)?;
    if occupied && !state.board().area(area).has_trouble() {
        state.add_trouble(area)?;
    }
    Ok(())
}

pub fn place_minion(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let player = ctx.actor;
    if state.player(player).minions_in_reserve() == 0 {
        // Reserve empty: one minion is picked up from the board first.
        let own = areas_where(state, |s| s.has_minion_of(player));
        if own.is_empty() {
            return Err(GameError::NoMinionsAvailable(player));
        }
        let from = select_area(choices, player, &own, "area to take a minion from")?;
        state.remove_minion(from, player)?;
    }

    let candidates = minion_placement_areas(state, player);
    let area = select_area(choices, player, &candidates, "area to place a minion")?;
    place_minion_in(state, player, area)?;
    debug!("{player} placed a minion in {area}");
    Ok(Resolution::Completed)
}

pub fn place_building(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let player = ctx.actor;
    let builder = state.player(player);
    if builder.buildings_in_reserve() == 0 {
        return Err(GameError::NoBuildingsAvailable(player));
    }
    let money = builder.money();
    let candidates = areas_where(state, |s| {
        s.has_minion_of(player)
            && !s.has_trouble()
            && s.building_owner().is_none()
            && s.area().building_cost() <= money
    });
    let area = select_area(choices, player, &candidates, "area to build in")?;
    state.add_building(player, area)?;
    Ok(Resolution::Completed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Victim {
    Minion,
    Piece(Piece),
}

pub fn assassination(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let player = ctx.actor;
    let candidates = areas_where(state, |s| {
        s.has_trouble() && (s.has_rival_minion(player) || s.trolls() > 0 || s.demons() > 0)
    });
    let area = select_area(choices, player, &candidates, "area with trouble to assassinate in")?;

    let site = state.board().area(area);
    let mut victims = Vec::with_capacity(3);
    if site.has_rival_minion(player) {
        victims.push(Victim::Minion);
    }
    if site.trolls() > 0 {
        victims.push(Victim::Piece(Piece::Troll));
    }
    if site.demons() > 0 {
        victims.push(Victim::Piece(Piece::Demon));
    }

    let mut victim = victims[victims.len() - 1];
    for &candidate in &victims[..victims.len() - 1] {
        let prompt = match candidate {
            Victim::Minion => format!("Assassinate a minion in {area}?"),
            Victim::Piece(piece) => format!("Assassinate a {piece} in {area}?"),
        };
        if choices.ask_yes_no(player, &prompt) {
            victim = candidate;
            break;
        }
    }

    match victim {
        Victim::Minion => {
            let rivals = rivals_in(state, area, player);
            let target = select_player(choices, player, &rivals, "player to assassinate")?;
            let pending = PendingEffect::minion_removal(player, target, area);
            if let Some(interrupted) = offer(state, &pending, choices)?.interrupted() {
                return Ok(interrupted);
            }
            state.remove_minion(area, target)?;
            debug!("{player} assassinated a minion of {target} in {area}");
        }
        Victim::Piece(piece) => {
            state.remove_piece(area, piece)?;
            debug!("{player} assassinated a {piece} in {area}");
        }
    }
    state.remove_trouble(area)?;
    Ok(Resolution::Completed)
}

pub fn remove_trouble(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let candidates = areas_where(state, |s| s.has_trouble());
    let area = select_area(choices, ctx.actor, &candidates, "area with a trouble marker")?;
    state.remove_trouble(area)?;
    Ok(Resolution::Completed)
}

pub fn take_money(
    state: &mut GameState,
    ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let amount = ctx
        .card_money()
        .ok_or(GameError::NoLegalTarget("money amount on the card in play"))?;
    state.give_money_from_bank(ctx.actor, amount)?;
    Ok(Resolution::Completed)
}

pub fn random_event(
    state: &mut GameState,
    _ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    Ok(Resolution::Event(state.draw_random_event()?))
}

pub fn play_another_card(
    _state: &mut GameState,
    _ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    Ok(Resolution::PlayAnotherCard)
}
