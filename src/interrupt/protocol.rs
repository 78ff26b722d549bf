//! The interrupt offer loop.
//!
//! Before a harmful effect commits, every affected player other than the
//! actor is offered, in turn order starting after the actor, each reactive
//! card they hold that answers the effect. The first acceptance wins: its
//! card is discarded and the effect is cancelled or replaced. Nothing is
//! accepted automatically.

use log::info;

use super::reaction::{PendingEffect, PendingKind};
use crate::board::Area;
use crate::cards::{PlayerCard, Reaction};
use crate::core::{GameResult, GameState, PlayerId};
use crate::effects::symbols::move_minion;
use crate::effects::targeting::select_area;
use crate::effects::Resolution;
use crate::rules::ChoiceProvider;

/// Result of offering an interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptOutcome {
    /// Nobody reacted; the effect goes ahead.
    Proceed,
    /// The effect is cancelled.
    Cancelled { by: PlayerId, card: PlayerCard },
    /// The minion was moved to `to` instead of being removed.
    Replaced { by: PlayerId, card: PlayerCard, to: Area },
}

impl InterruptOutcome {
    /// The resolution an interrupted effect reports, or `None` to proceed.
    #[must_use]
    pub fn interrupted(self) -> Option<Resolution> {
        match self {
            InterruptOutcome::Proceed => None,
            InterruptOutcome::Cancelled { by, card } | InterruptOutcome::Replaced { by, card, .. } => {
                Some(Resolution::Interrupted { by, card })
            }
        }
    }
}

/// Offer `pending` to every eligible reaction holder.
pub fn offer(
    state: &mut GameState,
    pending: &PendingEffect,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<InterruptOutcome> {
    let description = pending.describe();

    for holder in pending.actor.others_in_turn_order(state.player_count()) {
        if !pending.is_affected(holder) {
            continue;
        }
        let reactive: Vec<(PlayerCard, Reaction)> = state
            .player(holder)
            .hand()
            .filter_map(|card| card.reaction().map(|r| (card, r)))
            .filter(|(_, r)| r.answers(&pending.kind))
            .collect();

        for (card, reaction) in reactive {
            let prompt = format!("{description}. Play {card} to {}?", reaction.verb());
            if !choices.ask_yes_no(holder, &prompt) {
                continue;
            }
            state.discard_player_card(holder, card)?;
            info!("{holder} interrupts with {card}: {description}");
            return match (reaction, pending.kind) {
                (Reaction::RelocateMinion, PendingKind::MinionRemoval { victim, area }) => {
                    let to = relocate(state, victim, area, choices)?;
                    Ok(InterruptOutcome::Replaced { by: holder, card, to })
                }
                _ => Ok(InterruptOutcome::Cancelled { by: holder, card }),
            };
        }
    }

    Ok(InterruptOutcome::Proceed)
}

fn relocate(
    state: &mut GameState,
    victim: PlayerId,
    from: Area,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Area> {
    let candidates: Vec<Area> = Area::ALL.into_iter().filter(|&a| a != from).collect();
    let to = select_area(choices, victim, &candidates, "area to move the minion to")?;
    move_minion(state, victim, from, to)?;
    Ok(to)
}
