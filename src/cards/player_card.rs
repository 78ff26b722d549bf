//! Player cards: the deck players draw from and play on their turn.
//!
//! Each card is a variant of [`PlayerCard`] with static data in a
//! [`CardDefinition`]: ordered symbols, whether the text resolves before the
//! symbols, the money amount the `TakeMoney` symbol pays, an optional text
//! effect and an optional reaction capability.
//!
//! ## Example
//!
//! ```
//! use ankh_engine::cards::{PlayerCard, Reaction, Symbol};
//!
//! let gaspode = PlayerCard::Gaspode.definition();
//! assert_eq!(gaspode.symbols, &[Symbol::PlaceMinion]);
//! assert_eq!(gaspode.reaction, Some(Reaction::ShieldMinion));
//! ```

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Card text effects. Amounts come from the card or the game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEffect {
    /// Take the card's amount from every other player who can pay it.
    TaxRivals,
    /// Roll the die: 5-6 take $3 from a chosen player, 1 lose one of your minions.
    GambleOnDie,
    /// Move another player's minion to an adjacent area.
    MoveRivalMinion,
    /// Take a loan from the bank, repaid with a penalty at scoring.
    TakeLoan,
}

impl TextEffect {
    pub const ALL: [TextEffect; 4] = [
        TextEffect::TaxRivals,
        TextEffect::GambleOnDie,
        TextEffect::MoveRivalMinion,
        TextEffect::TakeLoan,
    ];
}

/// Capability tag for cards that can interrupt another player's effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    /// Cancel the removal of one of your minions.
    ShieldMinion,
    /// Move one of your minions elsewhere instead of having it removed.
    RelocateMinion,
    /// Cancel the text of a card that affects you.
    CancelText,
}

/// Static data of a player card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDefinition {
    pub name: &'static str,
    /// Symbols in resolution order.
    pub symbols: &'static [Symbol],
    /// Resolve the text before the symbols.
    pub text_first: bool,
    /// Amount paid by the `TakeMoney` symbol and used by `TaxRivals`.
    pub money: u32,
    pub text: Option<TextEffect>,
    pub reaction: Option<Reaction>,
}

impl CardDefinition {
    const fn symbols(name: &'static str, symbols: &'static [Symbol]) -> Self {
        Self {
            name,
            symbols,
            text_first: false,
            money: 0,
            text: None,
            reaction: None,
        }
    }

    const fn money(mut self, money: u32) -> Self {
        self.money = money;
        self
    }

    const fn text(mut self, text: TextEffect) -> Self {
        self.text = Some(text);
        self
    }

    const fn text_first(mut self) -> Self {
        self.text_first = true;
        self
    }

    const fn reaction(mut self, reaction: Reaction) -> Self {
        self.reaction = Some(reaction);
        self
    }
}

/// A player card. Each card exists once in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerCard {
    InigoSkimmer,
    Gaspode,
    TheFreshStartClub,
    WallaceSonky,
    MrBoggis,
    HereNNow,
    FoulOleRon,
    MrBent,
    TheBankOfAnkhMorpork,
    TheDuckman,
    SergeantCheeryLittlebottom,
    TheBeggarsGuild,
    RosiePalm,
    Ruby,
    DrCruces,
    TheAgonyAunts,
    TheDysk,
    HarryKing,
    TheFoolsGuild,
    Hex,
    TheMendedDrum,
    Librarian,
    MrsCake,
    CaptainCarrot,
}

use Symbol::{
    Assassination, PlaceBuilding, PlaceMinion, PlayAnotherCard, RandomEvent, RemoveTrouble,
    TakeMoney,
};

impl PlayerCard {
    /// The standard deck.
    pub const ALL: [PlayerCard; 24] = [
        PlayerCard::InigoSkimmer,
        PlayerCard::Gaspode,
        PlayerCard::TheFreshStartClub,
        PlayerCard::WallaceSonky,
        PlayerCard::MrBoggis,
        PlayerCard::HereNNow,
        PlayerCard::FoulOleRon,
        PlayerCard::MrBent,
        PlayerCard::TheBankOfAnkhMorpork,
        PlayerCard::TheDuckman,
        PlayerCard::SergeantCheeryLittlebottom,
        PlayerCard::TheBeggarsGuild,
        PlayerCard::RosiePalm,
        PlayerCard::Ruby,
        PlayerCard::DrCruces,
        PlayerCard::TheAgonyAunts,
        PlayerCard::TheDysk,
        PlayerCard::HarryKing,
        PlayerCard::TheFoolsGuild,
        PlayerCard::Hex,
        PlayerCard::TheMendedDrum,
        PlayerCard::Librarian,
        PlayerCard::MrsCake,
        PlayerCard::CaptainCarrot,
    ];

    #[must_use]
    pub const fn definition(self) -> CardDefinition {
        match self {
            PlayerCard::InigoSkimmer => {
                CardDefinition::symbols("Inigo Skimmer", &[Assassination, TakeMoney]).money(2)
            }
            PlayerCard::Gaspode => CardDefinition::symbols("Gaspode", &[PlaceMinion])
                .reaction(Reaction::ShieldMinion),
            PlayerCard::TheFreshStartClub => {
                CardDefinition::symbols("The Fresh Start Club", &[PlaceMinion])
                    .reaction(Reaction::RelocateMinion)
            }
            PlayerCard::WallaceSonky => CardDefinition::symbols("Wallace Sonky", &[PlaceMinion])
                .reaction(Reaction::CancelText),
            PlayerCard::MrBoggis => CardDefinition::symbols("Mr Boggis", &[PlaceMinion])
                .money(2)
                .text(TextEffect::TaxRivals)
                .text_first(),
            PlayerCard::HereNNow => CardDefinition::symbols("Here'n'Now", &[PlaceMinion])
                .text(TextEffect::GambleOnDie)
                .text_first(),
            PlayerCard::FoulOleRon => CardDefinition::symbols("Foul Ole Ron", &[PlayAnotherCard])
                .text(TextEffect::MoveRivalMinion)
                .text_first(),
            PlayerCard::MrBent => CardDefinition::symbols("Mr Bent", &[PlayAnotherCard])
                .text(TextEffect::TakeLoan)
                .text_first(),
            PlayerCard::TheBankOfAnkhMorpork => {
                CardDefinition::symbols("The Bank of Ankh-Morpork", &[PlayAnotherCard])
                    .text(TextEffect::TakeLoan)
                    .text_first()
            }
            PlayerCard::TheDuckman => CardDefinition::symbols("The Duckman", &[RemoveTrouble])
                .text(TextEffect::MoveRivalMinion)
                .text_first(),
            PlayerCard::SergeantCheeryLittlebottom => CardDefinition::symbols(
                "Sergeant Cheery Littlebottom",
                &[PlaceMinion, TakeMoney],
            )
            .money(2),
            PlayerCard::TheBeggarsGuild => {
                CardDefinition::symbols("The Beggars' Guild", &[PlaceBuilding, PlaceMinion])
            }
            PlayerCard::RosiePalm => {
                CardDefinition::symbols("Rosie Palm", &[PlaceMinion, PlaceBuilding])
            }
            PlayerCard::Ruby => CardDefinition::symbols("Ruby", &[PlaceMinion, RemoveTrouble]),
            PlayerCard::DrCruces => {
                CardDefinition::symbols("Dr Cruces", &[Assassination, TakeMoney]).money(3)
            }
            PlayerCard::TheAgonyAunts => CardDefinition::symbols(
                "The Agony Aunts",
                &[Assassination, TakeMoney, PlaceMinion],
            )
            .money(2),
            PlayerCard::TheDysk => {
                CardDefinition::symbols("The Dysk", &[PlaceBuilding, RemoveTrouble])
            }
            PlayerCard::HarryKing => {
                CardDefinition::symbols("Harry King", &[PlaceMinion, TakeMoney]).money(2)
            }
            PlayerCard::TheFoolsGuild => {
                CardDefinition::symbols("The Fools' Guild", &[RandomEvent, PlaceMinion])
            }
            PlayerCard::Hex => CardDefinition::symbols("Hex", &[RandomEvent, TakeMoney]).money(3),
            PlayerCard::TheMendedDrum => {
                CardDefinition::symbols("The Mended Drum", &[PlaceBuilding, TakeMoney]).money(2)
            }
            PlayerCard::Librarian => CardDefinition::symbols("Librarian", &[TakeMoney]).money(4),
            PlayerCard::MrsCake => {
                CardDefinition::symbols("Mrs Cake", &[TakeMoney, PlaceBuilding]).money(2)
            }
            PlayerCard::CaptainCarrot => CardDefinition::symbols(
                "Captain Carrot",
                &[PlaceMinion, RemoveTrouble, TakeMoney],
            )
            .money(1),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    #[must_use]
    pub fn reaction(self) -> Option<Reaction> {
        self.definition().reaction
    }
}

impl std::fmt::Display for PlayerCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
