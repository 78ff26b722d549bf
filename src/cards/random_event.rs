//! Random event cards, drawn whenever a random event symbol resolves.

use serde::{Deserialize, Serialize};

/// A random event. Effects live in the effect registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RandomEvent {
    /// Remove every piece from one rolled area.
    Dragon,
    /// Remove the building in one rolled area.
    Explosion,
    /// Place a troll in each of three rolled areas.
    Trolls,
    /// Place a demon in each of four rolled areas.
    Demons,
    /// Each player in turn removes a minion in a rolled area.
    MysteriousMurders,
    /// Ends the game if enough trouble markers are on the board.
    Riots,
    /// Every building costs its owner $2 or is removed.
    Subsidence,
    /// Discard the top five cards of the draw pile.
    Fog,
}

impl RandomEvent {
    pub const ALL: [RandomEvent; 8] = [
        RandomEvent::Dragon,
        RandomEvent::Explosion,
        RandomEvent::Trolls,
        RandomEvent::Demons,
        RandomEvent::MysteriousMurders,
        RandomEvent::Riots,
        RandomEvent::Subsidence,
        RandomEvent::Fog,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RandomEvent::Dragon => "The Dragon",
            RandomEvent::Explosion => "Explosion",
            RandomEvent::Trolls => "Trolls",
            RandomEvent::Demons => "Demons from the Dungeon Dimensions",
            RandomEvent::MysteriousMurders => "Mysterious Murders",
            RandomEvent::Riots => "Riots",
            RandomEvent::Subsidence => "Subsidence",
            RandomEvent::Fog => "Fog",
        }
    }
}

impl std::fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
