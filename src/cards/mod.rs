//! Cards: player cards and their symbols, city area cards, personalities,
//! random events and the piles they are drawn from.
//!
//! ## Key Types
//!
//! - `PlayerCard`: the 24 playable cards; static data via `CardDefinition`
//! - `Symbol`: atomic effect tags printed on player cards
//! - `TextEffect` / `Reaction`: card text and interrupt capability tags
//! - `CityAreaCard`: held by a building's owner, once per round
//! - `Deck`: draw pile plus discard pile

pub mod city;
pub mod deck;
pub mod personality;
pub mod player_card;
pub mod random_event;
pub mod symbol;

pub use city::CityAreaCard;
pub use deck::{Deck, DeckKind};
pub use personality::Personality;
pub use player_card::{CardDefinition, PlayerCard, Reaction, TextEffect};
pub use random_event::RandomEvent;
pub use symbol::Symbol;
