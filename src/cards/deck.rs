//! Draw and discard piles.
//!
//! Piles are persistent vectors so checkpointing the game state before an
//! effect shares structure instead of copying every card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameResult, GameRng};

/// Which deck a pile belongs to; used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Personality,
    PlayerCards,
    RandomEvents,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Personality => f.write_str("personality"),
            DeckKind::PlayerCards => f.write_str("player card"),
            DeckKind::RandomEvents => f.write_str("random event"),
        }
    }
}

/// A draw pile (top = front) and its discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<T: Clone> {
    kind: DeckKind,
    draw_pile: Vector<T>,
    discard_pile: Vector<T>,
}

impl<T: Clone + PartialEq> Deck<T> {
    /// A deck whose draw pile is `cards` in order.
    pub fn new(kind: DeckKind, cards: impl IntoIterator<Item = T>) -> Self {
        Self {
            kind,
            draw_pile: cards.into_iter().collect(),
            discard_pile: Vector::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Draw pile, top first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &T> {
        self.draw_pile.iter()
    }

    /// Discard pile, oldest first.
    pub fn discard_pile(&self) -> impl Iterator<Item = &T> {
        self.discard_pile.iter()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.draw_pile.front()
    }

    pub(crate) fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<T> = self.draw_pile.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.draw_pile = cards.into_iter().collect();
    }

    /// Take the top card.
    pub(crate) fn draw(&mut self) -> GameResult<T> {
        self.draw_pile
            .pop_front()
            .ok_or(GameError::DeckExhausted(self.kind))
    }

    /// Take the top card, first shuffling the discards back in if the draw pile is empty.
    pub(crate) fn draw_or_reshuffle(&mut self, rng: &mut GameRng) -> GameResult<T> {
        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            self.draw_pile = std::mem::take(&mut self.discard_pile);
            self.shuffle(rng);
        }
        self.draw()
    }

    /// Remove a specific card from the draw pile.
    pub(crate) fn take(&mut self, card: &T) -> Option<T> {
        let index = self.draw_pile.index_of(card)?;
        Some(self.draw_pile.remove(index))
    }

    pub(crate) fn discard(&mut self, card: T) {
        self.discard_pile.push_back(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_until_exhausted() {
        let mut deck = Deck::new(DeckKind::Personality, [1, 2]);
        assert_eq!(deck.peek(), Some(&1));
        assert_eq!(deck.draw(), Ok(1));
        assert_eq!(deck.draw(), Ok(2));
        assert_eq!(deck.peek(), None);
        assert_eq!(deck.draw(), Err(GameError::DeckExhausted(DeckKind::Personality)));
    }

    #[test]
    fn test_reshuffle_discards() {
        let mut rng = GameRng::new(5);
        let mut deck = Deck::new(DeckKind::RandomEvents, [7]);
        let card = deck.draw_or_reshuffle(&mut rng).unwrap();
        deck.discard(card);
        assert!(deck.is_empty());
        assert_eq!(deck.draw_or_reshuffle(&mut rng), Ok(7));
        assert_eq!(deck.discard_pile().count(), 0);
    }

    #[test]
    fn test_take_specific_card() {
        let mut deck = Deck::new(DeckKind::PlayerCards, ['a', 'b', 'c']);
        assert_eq!(deck.take(&'b'), Some('b'));
        assert_eq!(deck.take(&'b'), None);
        assert_eq!(deck.draw_pile().copied().collect::<Vec<_>>(), vec!['a', 'c']);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut rng = GameRng::new(11);
        let mut deck = Deck::new(DeckKind::PlayerCards, 0..24);
        deck.shuffle(&mut rng);
        let mut cards: Vec<_> = deck.draw_pile().copied().collect();
        assert_ne!(cards, (0..24).collect::<Vec<_>>());
        cards.sort_unstable();
        assert_eq!(cards, (0..24).collect::<Vec<_>>());
    }
}
