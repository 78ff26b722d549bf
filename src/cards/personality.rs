//! Personality cards, dealt one per player at the start of the game.

use serde::{Deserialize, Serialize};

/// A secret personality. Assigned once and never changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Personality {
    LordVetinari,
    LordSelachii,
    LordRust,
    LordDeWorde,
    DragonKingOfArms,
    Chrysoprase,
    CommanderVimes,
}

impl Personality {
    pub const ALL: [Personality; 7] = [
        Personality::LordVetinari,
        Personality::LordSelachii,
        Personality::LordRust,
        Personality::LordDeWorde,
        Personality::DragonKingOfArms,
        Personality::Chrysoprase,
        Personality::CommanderVimes,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Personality::LordVetinari => "Lord Vetinari",
            Personality::LordSelachii => "Lord Selachii",
            Personality::LordRust => "Lord Rust",
            Personality::LordDeWorde => "Lord de Worde",
            Personality::DragonKingOfArms => "Dragon King of Arms",
            Personality::Chrysoprase => "Chrysoprase",
            Personality::CommanderVimes => "Commander Vimes",
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
