//! What an effect function receives and returns.

use crate::cards::{PlayerCard, RandomEvent};
use crate::core::{GameResult, GameState, PlayerId};
use crate::rules::ChoiceProvider;

/// Who is resolving an effect and which card put it in motion.
///
/// Passed to every effect call; nothing about the card in play is kept in
/// shared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectContext {
    pub actor: PlayerId,
    pub card_in_play: Option<PlayerCard>,
}

impl EffectContext {
    /// Context for a player card being played.
    #[must_use]
    pub fn card(actor: PlayerId, card: PlayerCard) -> Self {
        Self {
            actor,
            card_in_play: Some(card),
        }
    }

    /// Context with no card in play (city cards, direct calls).
    #[must_use]
    pub fn bare(actor: PlayerId) -> Self {
        Self {
            actor,
            card_in_play: None,
        }
    }

    /// The `TakeMoney` amount printed on the card in play.
    #[must_use]
    pub fn card_money(&self) -> Option<u32> {
        self.card_in_play
            .map(|card| card.definition().money)
            .filter(|&money| money > 0)
    }
}

/// How an effect finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Completed,
    /// Another player's reaction cancelled or replaced the effect.
    Interrupted { by: PlayerId, card: PlayerCard },
    /// The actor may play one more card this turn.
    PlayAnotherCard,
    /// A random event was drawn. The registry resolves and discards it
    /// before reporting this.
    Event(RandomEvent),
}

/// Signature shared by every registered effect.
pub type EffectFn =
    fn(&mut GameState, &EffectContext, &mut dyn ChoiceProvider) -> GameResult<Resolution>;
