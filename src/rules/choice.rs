//! Player decisions.
//!
//! Every decision the engine needs (optional symbols, interrupt offers,
//! targets) goes through a [`ChoiceProvider`]. Answers are untrusted: the
//! engine checks each one against the candidates it offered.
//!
//! [`ScriptedChoices`] answers from pre-loaded queues and is what tests and
//! benchmarks drive the engine with.

use std::collections::VecDeque;

use crate::board::Area;
use crate::cards::PlayerCard;
use crate::core::PlayerId;

/// Source of player decisions.
///
/// Candidate slices passed to the `choose_*` methods are never empty.
pub trait ChoiceProvider {
    /// Ask `player` a yes/no question.
    fn ask_yes_no(&mut self, player: PlayerId, prompt: &str) -> bool;

    /// Ask `player` to pick a card.
    fn choose_card(&mut self, player: PlayerId, candidates: &[PlayerCard]) -> PlayerCard;

    /// Ask `player` to pick an area.
    fn choose_area(&mut self, player: PlayerId, candidates: &[Area]) -> Area;

    /// Ask `player` to pick another player.
    fn choose_player(&mut self, player: PlayerId, candidates: &[PlayerId]) -> PlayerId;
}

/// A `ChoiceProvider` that replays queued answers.
///
/// When a queue runs dry, yes/no questions get the default answer (`false`
/// unless built with [`ScriptedChoices::always_yes`]) and picks get the first
/// candidate. Queued answers are returned as-is, even if not among the
/// candidates.
///
/// ```
/// use ankh_engine::board::Area;
/// use ankh_engine::core::PlayerId;
/// use ankh_engine::rules::{ChoiceProvider, ScriptedChoices};
///
/// let mut choices = ScriptedChoices::new().with_yes_no([true]).with_areas([Area::Dimwell]);
/// let p = PlayerId::new(0);
/// assert!(choices.ask_yes_no(p, "place a minion?"));
/// assert!(!choices.ask_yes_no(p, "again?"));
/// assert_eq!(choices.choose_area(p, &[Area::TheShades, Area::Dimwell]), Area::Dimwell);
/// assert_eq!(choices.choose_area(p, &[Area::TheShades]), Area::TheShades);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    yes_no: VecDeque<bool>,
    cards: VecDeque<PlayerCard>,
    areas: VecDeque<Area>,
    players: VecDeque<PlayerId>,
    default_answer: bool,
    prompts: Vec<(PlayerId, String)>,
}

impl ScriptedChoices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every unscripted yes/no question with yes.
    #[must_use]
    pub fn always_yes() -> Self {
        Self {
            default_answer: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_yes_no(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.yes_no.extend(answers);
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = PlayerCard>) -> Self {
        self.cards.extend(cards);
        self
    }

    #[must_use]
    pub fn with_areas(mut self, areas: impl IntoIterator<Item = Area>) -> Self {
        self.areas.extend(areas);
        self
    }

    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = PlayerId>) -> Self {
        self.players.extend(players);
        self
    }

    /// Yes/no questions asked so far, with who was asked.
    #[must_use]
    pub fn prompts(&self) -> &[(PlayerId, String)] {
        &self.prompts
    }

    /// Whether every queued answer has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.yes_no.is_empty()
            && self.cards.is_empty()
            && self.areas.is_empty()
            && self.players.is_empty()
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn ask_yes_no(&mut self, player: PlayerId, prompt: &str) -> bool {
        self.prompts.push((player, prompt.to_string()));
        self.yes_no.pop_front().unwrap_or(self.default_answer)
    }

    fn choose_card(&mut self, _player: PlayerId, candidates: &[PlayerCard]) -> PlayerCard {
        self.cards.pop_front().unwrap_or_else(|| candidates[0])
    }

    fn choose_area(&mut self, _player: PlayerId, candidates: &[Area]) -> Area {
        self.areas.pop_front().unwrap_or_else(|| candidates[0])
    }

    fn choose_player(&mut self, _player: PlayerId, candidates: &[PlayerId]) -> PlayerId {
        self.players.pop_front().unwrap_or_else(|| candidates[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks() {
        let mut choices = ScriptedChoices::new();
        let p = PlayerId::new(1);
        assert!(!choices.ask_yes_no(p, "?"));
        assert_eq!(
            choices.choose_card(p, &[PlayerCard::Ruby, PlayerCard::Hex]),
            PlayerCard::Ruby
        );
        assert_eq!(
            choices.choose_player(p, &[PlayerId::new(2), PlayerId::new(0)]),
            PlayerId::new(2)
        );
        assert!(ScriptedChoices::always_yes().ask_yes_no(p, "?"));
    }

    #[test]
    fn test_records_prompts() {
        let mut choices = ScriptedChoices::new().with_yes_no([true, false]);
        choices.ask_yes_no(PlayerId::new(0), "first");
        choices.ask_yes_no(PlayerId::new(1), "second");
        assert_eq!(choices.prompts().len(), 2);
        assert_eq!(choices.prompts()[1], (PlayerId::new(1), "second".to_string()));
        assert!(choices.is_exhausted());
    }

    #[test]
    fn test_scripted_answers_are_not_filtered() {
        let mut choices = ScriptedChoices::new().with_areas([Area::NapHill]);
        assert_eq!(choices.choose_area(PlayerId::new(0), &[Area::Dimwell]), Area::NapHill);
    }
}
