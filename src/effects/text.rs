//! Card text effects.
//!
//! Text that harms other players is offered to them as an interrupt before
//! anything changes hands.

use log::debug;

use super::context::{EffectContext, Resolution};
use super::symbols::move_minion;
use super::targeting::{areas_where, rivals_in, select_area, select_player};
use crate::board::AdjacencyGraph;
use crate::cards::PlayerCard;
use crate::core::{GameError, GameResult, GameState, PlayerId, RandomSource};
use crate::interrupt::{offer, PendingEffect};
use crate::rules::ChoiceProvider;

/// Money taken by a winning gamble.
const GAMBLE_WINNINGS: u32 = 3;

fn card_in_play(ctx: &EffectContext) -> GameResult<PlayerCard> {
    ctx.card_in_play
        .ok_or(GameError::NoLegalTarget("card in play"))
}

/// Take the card's amount from every other player who can pay it.
pub fn tax_rivals(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let card = card_in_play(ctx)?;
    let amount = card.definition().money;
    let payers: Vec<PlayerId> = ctx
        .actor
        .others_in_turn_order(state.player_count())
        .filter(|&p| state.player(p).has_money(amount))
        .collect();
    if payers.is_empty() {
        return Ok(Resolution::Completed);
    }

    let pending = PendingEffect::card_text(ctx.actor, card, payers.iter().copied());
    if let Some(interrupted) = offer(state, &pending, choices)?.interrupted() {
        return Ok(interrupted);
    }
    for payer in payers {
        state.transfer_money(payer, ctx.actor, amount)?;
    }
    Ok(Resolution::Completed)
}

/// Roll the die: 5 or 6 takes $3 from a chosen player, 1 costs the actor a
/// minion, anything else does nothing.
pub fn gamble_on_die(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let card = card_in_play(ctx)?;
    let player = ctx.actor;
    let roll = state.die_mut().roll();
    debug!("{player} rolled {roll} for {card}");

    match roll {
        5 | 6 => {
            let marks: Vec<PlayerId> = player
                .others_in_turn_order(state.player_count())
                .filter(|&p| state.player(p).has_money(GAMBLE_WINNINGS))
                .collect();
            if marks.is_empty() {
                return Ok(Resolution::Completed);
            }
            let mark = select_player(choices, player, &marks, "player to take money from")?;
            let pending = PendingEffect::card_text(player, card, [mark]);
            if let Some(interrupted) = offer(state, &pending, choices)?.interrupted() {
                return Ok(interrupted);
            }
            state.transfer_money(mark, player, GAMBLE_WINNINGS)?;
        }
        1 => {
            let own = areas_where(state, |s| s.has_minion_of(player));
            if !own.is_empty() {
                let area = select_area(choices, player, &own, "area to lose a minion from")?;
                state.remove_minion(area, player)?;
            }
        }
        _ => {}
    }
    Ok(Resolution::Completed)
}

/// Move another player's minion to an adjacent area.
pub fn move_rival_minion(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let card = card_in_play(ctx)?;
    let player = ctx.actor;
    let candidates = areas_where(state, |s| s.has_rival_minion(player));
    let from = select_area(choices, player, &candidates, "area with a rival minion")?;
    let rivals = rivals_in(state, from, player);
    let owner = select_player(choices, player, &rivals, "player whose minion moves")?;
    let destinations = AdjacencyGraph::city().neighbors(from, false);
    let to = select_area(choices, player, &destinations, "adjacent area to move to")?;

    let pending = PendingEffect::card_text(player, card, [owner]);
    if let Some(interrupted) = offer(state, &pending, choices)?.interrupted() {
        return Ok(interrupted);
    }
    move_minion(state, owner, from, to)?;
    debug!("{player} moved a minion of {owner} from {from} to {to}");
    Ok(Resolution::Completed)
}

/// Borrow from the bank; each loan is charged at scoring.
pub fn take_loan(
    state: &mut GameState,
    ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    state.take_loan(ctx.actor)?;
    Ok(Resolution::Completed)
}
