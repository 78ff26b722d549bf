//! City area card effects.

use super::context::{EffectContext, Resolution};
use super::symbols::place_minion_in;
use super::targeting::{areas_where, in_or_adjacent, select_area, select_card};
use crate::board::{AdjacencyGraph, Area};
use crate::core::{GameError, GameResult, GameState};
use crate::rules::ChoiceProvider;

/// Pay to place a minion in `home` or an adjacent area.
fn recruit(
    home: Area,
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let player = ctx.actor;
    let cost = state.config().minion_cost;
    let recruiter = state.player(player);
    if !recruiter.has_money(cost) {
        return Err(GameError::InsufficientFunds {
            needed: cost,
            available: recruiter.money(),
        });
    }
    if recruiter.minions_in_reserve() == 0 {
        return Err(GameError::NoMinionsAvailable(player));
    }
    let candidates: Vec<Area> = AdjacencyGraph::city().neighbors(home, true).into_vec();
    let area = select_area(choices, player, &candidates, "area to place a minion")?;
    state.take_money_to_bank(player, cost)?;
    place_minion_in(state, player, area)?;
    Ok(Resolution::Completed)
}

fn income(amount: u32, state: &mut GameState, ctx: &EffectContext) -> GameResult<Resolution> {
    state.give_money_from_bank(ctx.actor, amount)?;
    Ok(Resolution::Completed)
}

pub fn dolly_sisters(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    recruit(Area::DollySisters, state, ctx, choices)
}

pub fn dimwell(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    recruit(Area::Dimwell, state, ctx, choices)
}

/// Draw a card, then discard one.
pub fn unreal_estate(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let player = ctx.actor;
    let capacity = state.config().hand_capacity + 1;
    state.draw_with_capacity(player, capacity)?;
    let hand: Vec<_> = state.player(player).hand().collect();
    let card = select_card(choices, player, &hand, "card to discard")?;
    state.discard_player_card(player, card)?;
    Ok(Resolution::Completed)
}

pub fn dragons_landing(
    state: &mut GameState,
    ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    income(2, state, ctx)
}

/// Small Gods only acts inside random events.
pub fn small_gods(
    _state: &mut GameState,
    _ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    Err(GameError::NoLegalTarget("random event to ignore"))
}

/// Discard a card to take $2.
pub fn the_scours(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let player = ctx.actor;
    let hand: Vec<_> = state.player(player).hand().collect();
    let card = select_card(choices, player, &hand, "card to discard")?;
    state.discard_player_card(player, card)?;
    income(2, state, ctx)
}

pub fn the_hippo(
    state: &mut GameState,
    ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    income(2, state, ctx)
}

/// Place a trouble marker in The Shades or next to it, where a minion is.
pub fn the_shades(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let candidates = in_or_adjacent(state, Area::TheShades, |s| {
        s.minion_count() > 0 && !s.has_trouble()
    });
    let area = select_area(choices, ctx.actor, &candidates, "area with a minion and no trouble")?;
    state.add_trouble(area)?;
    Ok(Resolution::Completed)
}

pub fn longwall(
    state: &mut GameState,
    ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    income(1, state, ctx)
}

/// Pay $2 to remove a trouble marker.
pub fn isle_of_gods(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    const FEE: u32 = 2;
    let player = ctx.actor;
    let candidates = areas_where(state, |s| s.has_trouble());
    if candidates.is_empty() {
        return Err(GameError::NoLegalTarget("area with a trouble marker"));
    }
    let money = state.player(player).money();
    if money < FEE {
        return Err(GameError::InsufficientFunds { needed: FEE, available: money });
    }
    let area = select_area(choices, player, &candidates, "area with a trouble marker")?;
    state.take_money_to_bank(player, FEE)?;
    state.remove_trouble(area)?;
    Ok(Resolution::Completed)
}

pub fn seven_sleepers(
    state: &mut GameState,
    ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    income(3, state, ctx)
}

pub fn nap_hill(
    state: &mut GameState,
    ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    income(1, state, ctx)
}
