//! Game configuration.
//!
//! Every rule constant the engine consults lives here so tests can shrink
//! pools, decks and balances without touching engine code. The defaults are
//! the standard game.
//!
//! ```
//! use ankh_engine::core::GameConfig;
//!
//! let config = GameConfig::default().with_seed(7).with_hand_capacity(3);
//! assert_eq!(config.hand_capacity, 3);
//! assert_eq!(config.total_minions, 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Area;
use crate::cards::{Personality, PlayerCard};

/// Game-wide configuration. Stored in every snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minions each player owns (reserve + board).
    pub total_minions: u32,

    /// Buildings each player owns (reserve + board).
    pub total_buildings: u32,

    /// Cards a hand is refilled to at the end of a turn.
    pub hand_capacity: usize,

    /// Money each player receives from the bank at `init`.
    pub starting_money: u32,

    /// Bank balance at setup. Bank plus all player money always equals this.
    pub bank_balance: u32,

    /// Areas seeded with one minion per player and a trouble marker.
    pub starting_areas: Vec<Area>,

    /// Shared troll pool.
    pub total_trolls: u32,

    /// Shared demon pool.
    pub total_demons: u32,

    /// Money paid out by a loan card.
    pub loan_amount: u32,

    /// Net-worth penalty per outstanding loan at scoring.
    pub loan_penalty: u32,

    /// Price of placing a minion through a city card.
    pub minion_cost: u32,

    /// Trouble markers on the board that make the Riots event end the game.
    pub riot_threshold: usize,

    /// Seed for deck shuffles and the default die.
    pub seed: u64,

    /// Personality deck contents.
    pub personalities: Vec<Personality>,

    /// Player card deck contents. Duplicates are dropped at setup.
    pub player_cards: Vec<PlayerCard>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_minions: 12,
            total_buildings: 6,
            hand_capacity: 5,
            starting_money: 10,
            bank_balance: 120,
            starting_areas: vec![Area::TheShades, Area::TheScours, Area::DollySisters],
            total_trolls: 3,
            total_demons: 4,
            loan_amount: 10,
            loan_penalty: 12,
            minion_cost: 3,
            riot_threshold: 8,
            seed: 0,
            personalities: Personality::ALL.to_vec(),
            player_cards: PlayerCard::ALL.to_vec(),
        }
    }
}

impl GameConfig {
    /// Set the seed for shuffles and the default die.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_starting_money(mut self, money: u32) -> Self {
        self.starting_money = money;
        self
    }

    #[must_use]
    pub fn with_bank_balance(mut self, balance: u32) -> Self {
        self.bank_balance = balance;
        self
    }

    /// Set the per-player minion and building pools.
    #[must_use]
    pub fn with_pieces(mut self, minions: u32, buildings: u32) -> Self {
        self.total_minions = minions;
        self.total_buildings = buildings;
        self
    }

    #[must_use]
    pub fn with_starting_areas(mut self, areas: impl Into<Vec<Area>>) -> Self {
        self.starting_areas = areas.into();
        self
    }

    /// Set the shared troll and demon pools.
    #[must_use]
    pub fn with_supply(mut self, trolls: u32, demons: u32) -> Self {
        self.total_trolls = trolls;
        self.total_demons = demons;
        self
    }

    #[must_use]
    pub fn with_personalities(mut self, personalities: impl Into<Vec<Personality>>) -> Self {
        self.personalities = personalities.into();
        self
    }

    #[must_use]
    pub fn with_player_cards(mut self, cards: impl Into<Vec<PlayerCard>>) -> Self {
        self.player_cards = cards.into();
        self
    }

    #[must_use]
    pub fn with_riot_threshold(mut self, threshold: usize) -> Self {
        self.riot_threshold = threshold;
        self
    }
}
