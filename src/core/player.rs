//! Players: seat identifiers, per-player storage and the player record.
//!
//! ## PlayerId
//!
//! Seat index (0-based) in turn order. A seat maps to exactly one `Color`,
//! which is the player's identity on the board.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexable by
//! `PlayerId`. Used for board occupancy counts and the player table.
//!
//! ## Player
//!
//! Money, piece reserves, hand and city area cards. Mutation goes through
//! crate-private methods so only the engine's validated operations can
//! change a player.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{GameError, GameResult};
use crate::board::Area;
use crate::cards::{CityAreaCard, Personality, PlayerCard};

/// Seat identifier; also the position in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use ankh_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat that plays after this one.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Every other seat, in turn order starting with the one after `self`.
    ///
    /// ```
    /// use ankh_engine::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::new(1).others_in_turn_order(3).collect();
    /// assert_eq!(order, vec![PlayerId::new(2), PlayerId::new(0)]);
    /// ```
    pub fn others_in_turn_order(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = self.index();
        (1..player_count).map(move |offset| PlayerId(((start + offset) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Piece color. Assigned by seat and never changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Color for a seat index; seats beyond the fourth have no color.
    #[must_use]
    pub const fn for_seat(seat: usize) -> Option<Self> {
        match seat {
            0 => Some(Self::Red),
            1 => Some(Self::Yellow),
            2 => Some(Self::Green),
            3 => Some(Self::Blue),
            _ => None,
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use ankh_engine::core::{PlayerId, PlayerMap};
///
/// let mut minions: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// minions[PlayerId::new(1)] += 2;
/// assert_eq!(minions[PlayerId::new(1)], 2);
/// assert_eq!(minions.values().sum::<u32>(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Build a map from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's entry, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's entry, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data.iter_mut().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the entries in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over the entries in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Check a player name: letters, digits and underscores only, not empty.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A seated player.
///
/// Reserve counts satisfy `reserve + pieces on board == total` at all times;
/// the board registry is the only code that moves pieces in or out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: Color,
    money: u32,
    minions_in_reserve: u32,
    buildings_in_reserve: u32,
    personality: Option<Personality>,
    hand: OrdSet<PlayerCard>,
    city_cards: Vec<CityAreaCard>,
    loans: u32,
}

impl Player {
    /// Seat a new player with full reserves and no money.
    pub(crate) fn new(
        id: PlayerId,
        name: impl Into<String>,
        color: Color,
        total_minions: u32,
        total_buildings: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            money: 0,
            minions_in_reserve: total_minions,
            buildings_in_reserve: total_buildings,
            personality: None,
            hand: OrdSet::new(),
            city_cards: Vec::new(),
            loans: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn money(&self) -> u32 {
        self.money
    }

    #[must_use]
    pub fn has_money(&self, amount: u32) -> bool {
        self.money >= amount
    }

    #[must_use]
    pub fn minions_in_reserve(&self) -> u32 {
        self.minions_in_reserve
    }

    #[must_use]
    pub fn buildings_in_reserve(&self) -> u32 {
        self.buildings_in_reserve
    }

    #[must_use]
    pub fn personality(&self) -> Option<Personality> {
        self.personality
    }

    /// Cards in hand, in card order.
    pub fn hand(&self) -> impl Iterator<Item = PlayerCard> + '_ {
        self.hand.iter().copied()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn holds(&self, card: PlayerCard) -> bool {
        self.hand.contains(&card)
    }

    #[must_use]
    pub fn city_cards(&self) -> &[CityAreaCard] {
        &self.city_cards
    }

    #[must_use]
    pub fn city_card(&self, area: Area) -> Option<&CityAreaCard> {
        self.city_cards.iter().find(|c| c.area() == area)
    }

    /// Number of outstanding loans.
    #[must_use]
    pub fn loans(&self) -> u32 {
        self.loans
    }

    // === Crate-private mutation ===

    pub(crate) fn set_personality(&mut self, personality: Personality) -> GameResult<()> {
        if self.personality.is_some() {
            return Err(GameError::transition(format!("{} already has a personality", self.id)));
        }
        self.personality = Some(personality);
        Ok(())
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.money += amount;
    }

    pub(crate) fn debit(&mut self, amount: u32) -> GameResult<()> {
        if self.money < amount {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    pub(crate) fn take_minion(&mut self) -> GameResult<()> {
        if self.minions_in_reserve == 0 {
            return Err(GameError::NoMinionsAvailable(self.id));
        }
        self.minions_in_reserve -= 1;
        Ok(())
    }

    pub(crate) fn return_minion(&mut self) {
        self.minions_in_reserve += 1;
    }

    pub(crate) fn take_building(&mut self) -> GameResult<()> {
        if self.buildings_in_reserve == 0 {
            return Err(GameError::NoBuildingsAvailable(self.id));
        }
        self.buildings_in_reserve -= 1;
        Ok(())
    }

    pub(crate) fn return_building(&mut self) {
        self.buildings_in_reserve += 1;
    }

    pub(crate) fn add_card(&mut self, card: PlayerCard, capacity: usize) -> GameResult<()> {
        if self.hand.contains(&card) {
            return Err(GameError::transition(format!("{} already holds {card}", self.id)));
        }
        if self.hand.len() >= capacity {
            return Err(GameError::HandFull { player: self.id, capacity });
        }
        self.hand.insert(card);
        Ok(())
    }

    pub(crate) fn remove_card(&mut self, card: PlayerCard) -> GameResult<()> {
        self.hand
            .remove(&card)
            .map(|_| ())
            .ok_or(GameError::CardNotHeld { player: self.id, card })
    }

    pub(crate) fn add_city_card(&mut self, area: Area) {
        if self.city_card(area).is_none() {
            self.city_cards.push(CityAreaCard::new(area));
        }
    }

    pub(crate) fn remove_city_card(&mut self, area: Area) {
        self.city_cards.retain(|c| c.area() != area);
    }

    pub(crate) fn city_card_mut(&mut self, area: Area) -> Option<&mut CityAreaCard> {
        self.city_cards.iter_mut().find(|c| c.area() == area)
    }

    pub(crate) fn reset_city_cards(&mut self) {
        for card in &mut self.city_cards {
            card.reset();
        }
    }

    pub(crate) fn add_loan(&mut self) {
        self.loans += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(PlayerId::new(0), "Ross", Color::Red, 12, 6)
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 0");
        assert_eq!(p0.next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    }

    #[test]
    fn test_others_in_turn_order() {
        let order: Vec<_> = PlayerId::new(3).others_in_turn_order(4).collect();
        assert_eq!(order, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);

        let none: Vec<_> = PlayerId::new(0).others_in_turn_order(1).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_color_for_seat() {
        assert_eq!(Color::for_seat(0), Some(Color::Red));
        assert_eq!(Color::for_seat(3), Some(Color::Blue));
        assert_eq!(Color::for_seat(4), None);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(4, |p| p.index() as u32 * 10);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.get(PlayerId::new(4)), None);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Ross_2"));
        assert!(!is_valid_name("Ross Smith"));
        assert!(!is_valid_name("Ross!"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_debit_fails_without_change() {
        let mut p = player();
        p.credit(2);
        assert_eq!(
            p.debit(6),
            Err(GameError::InsufficientFunds { needed: 6, available: 2 })
        );
        assert_eq!(p.money(), 2);
        assert!(p.debit(2).is_ok());
        assert_eq!(p.money(), 0);
    }

    #[test]
    fn test_minion_reserve() {
        let mut p = Player::new(PlayerId::new(1), "Smith", Color::Yellow, 1, 6);
        assert!(p.take_minion().is_ok());
        assert_eq!(p.take_minion(), Err(GameError::NoMinionsAvailable(PlayerId::new(1))));
        p.return_minion();
        assert_eq!(p.minions_in_reserve(), 1);
    }

    #[test]
    fn test_hand_is_a_set_with_capacity() {
        let mut p = player();
        assert!(p.add_card(PlayerCard::Gaspode, 2).is_ok());
        assert!(matches!(
            p.add_card(PlayerCard::Gaspode, 2),
            Err(GameError::InvalidStateTransition(_))
        ));
        assert!(p.add_card(PlayerCard::MrBent, 2).is_ok());
        assert_eq!(
            p.add_card(PlayerCard::Ruby, 2),
            Err(GameError::HandFull { player: PlayerId::new(0), capacity: 2 })
        );
        assert!(p.remove_card(PlayerCard::Gaspode).is_ok());
        assert_eq!(
            p.remove_card(PlayerCard::Gaspode),
            Err(GameError::CardNotHeld { player: PlayerId::new(0), card: PlayerCard::Gaspode })
        );
    }

    #[test]
    fn test_city_cards_are_unique() {
        let mut p = player();
        p.add_city_card(Area::TheHippo);
        p.add_city_card(Area::TheHippo);
        assert_eq!(p.city_cards().len(), 1);
        p.remove_city_card(Area::TheHippo);
        assert!(p.city_card(Area::TheHippo).is_none());
    }

    #[test]
    fn test_personality_assigned_once() {
        let mut p = player();
        assert!(p.set_personality(Personality::LordVetinari).is_ok());
        assert!(p.set_personality(Personality::LordRust).is_err());
        assert_eq!(p.personality(), Some(Personality::LordVetinari));
    }
}
