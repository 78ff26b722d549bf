//! Card symbols: the atomic effects printed on player cards.

use serde::{Deserialize, Serialize};

/// An effect tag on a player card, resolved independently of the card text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    PlaceMinion,
    PlaceBuilding,
    Assassination,
    RemoveTrouble,
    TakeMoney,
    RandomEvent,
    PlayAnotherCard,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::PlaceMinion,
        Symbol::PlaceBuilding,
        Symbol::Assassination,
        Symbol::RemoveTrouble,
        Symbol::TakeMoney,
        Symbol::RandomEvent,
        Symbol::PlayAnotherCard,
    ];

    /// Mandatory symbols always resolve; the rest are offered to the player.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Symbol::RandomEvent)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::PlaceMinion => "place a minion",
            Symbol::PlaceBuilding => "place a building",
            Symbol::Assassination => "assassination",
            Symbol::RemoveTrouble => "remove one trouble marker",
            Symbol::TakeMoney => "take money",
            Symbol::RandomEvent => "random event",
            Symbol::PlayAnotherCard => "play another card",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_random_event_is_mandatory() {
        let mandatory: Vec<_> = Symbol::ALL.into_iter().filter(|s| s.is_mandatory()).collect();
        assert_eq!(mandatory, vec![Symbol::RandomEvent]);
    }
}
