//! Game state: every entity a game is made of, and the validated operations
//! that change them.
//!
//! ## GameState
//!
//! - Configuration (fixed for the game)
//! - Players, board occupancy, bank and neutral supply
//! - Player card, personality and random event decks
//! - Turn state (current player, round, status)
//! - Die and shuffle RNG, so a restored state rolls identically
//!
//! Every mutating operation validates first and mutates only once every
//! check has passed; a failed call leaves the state untouched.
//!
//! Cloning is cheap (persistent vectors for decks and hands), which the
//! effect registry relies on to checkpoint before each effect.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::{GameError, GameResult};
use super::player::{Color, Player, PlayerId, PlayerMap};
use super::rng::{Die, GameRng};
use crate::board::{Area, Board};
use crate::cards::{Deck, DeckKind, Personality, PlayerCard, RandomEvent};
use crate::ledger::{Bank, Piece, Supply};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No players seated yet.
    Uninitialized,
    /// Players seated and decks built.
    Ready,
    /// Starting resources dealt; turns may be taken.
    InProgress,
    Finished,
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEnd {
    /// The Riots event fired with enough trouble on the board.
    Riots,
    /// The draw pile could not refill a hand.
    DrawPileExhausted,
}

/// Turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    status: GameStatus,
    current_player: PlayerId,
    /// Starts at 1; advances when play wraps back to the first seat.
    round: u32,
    /// Turns completed so far.
    turns_taken: u32,
    game_end: Option<GameEnd>,
    /// Cards played this turn, discarded when the turn ends.
    in_play: Vec<PlayerCard>,
}

impl TurnState {
    fn new() -> Self {
        Self {
            status: GameStatus::Ready,
            current_player: PlayerId::new(0),
            round: 1,
            turns_taken: 0,
            game_end: None,
            in_play: Vec::new(),
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    #[must_use]
    pub fn game_end(&self) -> Option<GameEnd> {
        self.game_end
    }

    #[must_use]
    pub fn in_play(&self) -> &[PlayerCard] {
        &self.in_play
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    players: PlayerMap<Player>,
    board: Board,
    bank: Bank,
    supply: Supply,
    player_deck: Deck<PlayerCard>,
    personality_deck: Deck<Personality>,
    event_deck: Deck<RandomEvent>,
    turn: TurnState,
    die: Die,
    rng: GameRng,
}

impl GameState {
    /// Seat players and build shuffled decks.
    ///
    /// Names are assumed to be validated by the caller; seats beyond the
    /// fourth have no color and are rejected.
    pub fn new(config: GameConfig, names: &[&str], die: Die) -> GameResult<Self> {
        if names.is_empty() || names.len() > 4 {
            return Err(GameError::InvalidPlayerCount {
                count: names.len(),
                names: names.len(),
            });
        }

        let players = names
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                let color = Color::for_seat(seat).ok_or(GameError::InvalidPlayerCount {
                    count: names.len(),
                    names: names.len(),
                })?;
                Ok(Player::new(
                    PlayerId::new(seat as u8),
                    *name,
                    color,
                    config.total_minions,
                    config.total_buildings,
                ))
            })
            .collect::<GameResult<Vec<_>>>()?;

        let mut rng = GameRng::new(config.seed);

        let mut unique_cards: Vec<PlayerCard> = Vec::with_capacity(config.player_cards.len());
        for &card in &config.player_cards {
            if !unique_cards.contains(&card) {
                unique_cards.push(card);
            }
        }
        let mut player_deck = Deck::new(DeckKind::PlayerCards, unique_cards);
        player_deck.shuffle(&mut rng);

        let mut personality_deck =
            Deck::new(DeckKind::Personality, config.personalities.iter().copied());
        personality_deck.shuffle(&mut rng);

        let mut event_deck = Deck::new(DeckKind::RandomEvents, RandomEvent::ALL);
        event_deck.shuffle(&mut rng);

        Ok(Self {
            board: Board::new(players.len()),
            players: PlayerMap::from_vec(players),
            bank: Bank::new(config.bank_balance),
            supply: Supply::new(config.total_trolls, config.total_demons),
            player_deck,
            personality_deck,
            event_deck,
            turn: TurnState::new(),
            die,
            rng,
            config,
        })
    }

    // === Reads ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// A seated player.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a seat in this game.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    #[must_use]
    pub fn player_deck(&self) -> &Deck<PlayerCard> {
        &self.player_deck
    }

    #[must_use]
    pub fn personality_deck(&self) -> &Deck<Personality> {
        &self.personality_deck
    }

    #[must_use]
    pub fn event_deck(&self) -> &Deck<RandomEvent> {
        &self.event_deck
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn die(&self) -> &Die {
        &self.die
    }

    /// The player holding the building in `area`, if any.
    #[must_use]
    pub fn building_owner(&self, area: Area) -> Option<PlayerId> {
        self.board.area(area).building_owner()
    }

    /// Money plus building value minus loan penalties.
    #[must_use]
    pub fn net_worth(&self, id: PlayerId) -> i64 {
        let player = &self.players[id];
        let buildings: u32 = self.board.buildings_of(id).map(Area::building_cost).sum();
        i64::from(player.money()) + i64::from(buildings)
            - i64::from(player.loans()) * i64::from(self.config.loan_penalty)
    }

    fn seat(&self, id: PlayerId) -> GameResult<&Player> {
        self.players
            .get(id)
            .ok_or_else(|| GameError::InvalidChoice(format!("{id} is not seated")))
    }

    fn seat_mut(&mut self, id: PlayerId) -> GameResult<&mut Player> {
        self.players
            .get_mut(id)
            .ok_or_else(|| GameError::InvalidChoice(format!("{id} is not seated")))
    }

    // === Board registry ===

    /// Move a minion from `player`'s reserve into `area`.
    pub fn add_minion(&mut self, area: Area, player: PlayerId) -> GameResult<()> {
        self.seat_mut(player)?.take_minion()?;
        self.board.put_minion(area, player);
        Ok(())
    }

    /// Return one of `player`'s minions in `area` to their reserve.
    pub fn remove_minion(&mut self, area: Area, player: PlayerId) -> GameResult<()> {
        self.seat(player)?;
        self.board.lift_minion(area, player)?;
        self.players[player].return_minion();
        Ok(())
    }

    /// Buy and place a building, granting the area's city card.
    ///
    /// Checked in order: trouble marker, existing building, funds, reserve.
    pub fn add_building(&mut self, player: PlayerId, area: Area) -> GameResult<()> {
        let builder = self.seat(player)?;
        let site = self.board.area(area);
        if site.has_trouble() {
            return Err(GameError::TroubleBlocksConstruction(area));
        }
        if site.building_owner().is_some() {
            return Err(GameError::BuildingPresent(area));
        }
        let cost = area.building_cost();
        if !builder.has_money(cost) {
            return Err(GameError::InsufficientFunds {
                needed: cost,
                available: builder.money(),
            });
        }
        if builder.buildings_in_reserve() == 0 {
            return Err(GameError::NoBuildingsAvailable(player));
        }

        let builder = &mut self.players[player];
        builder.debit(cost)?;
        builder.take_building()?;
        builder.add_city_card(area);
        self.bank.deposit(cost);
        self.board.raise_building(area, player)?;
        debug!("{player} built in {area} for ${cost}");
        Ok(())
    }

    /// Remove the building in `area`, returning it and its city card to the owner.
    pub fn remove_building(&mut self, area: Area) -> GameResult<PlayerId> {
        let owner = self.board.raze_building(area)?;
        let player = &mut self.players[owner];
        player.return_building();
        player.remove_city_card(area);
        Ok(owner)
    }

    pub fn add_trouble(&mut self, area: Area) -> GameResult<()> {
        self.board.set_trouble(area, true)
    }

    pub fn remove_trouble(&mut self, area: Area) -> GameResult<()> {
        self.board.set_trouble(area, false)
    }

    /// Move a troll or demon from the shared supply into `area`.
    pub fn place_piece(&mut self, area: Area, piece: Piece) -> GameResult<()> {
        self.supply.take(piece)?;
        self.board.put_piece(area, piece);
        Ok(())
    }

    /// Return a troll or demon in `area` to the shared supply.
    pub fn remove_piece(&mut self, area: Area, piece: Piece) -> GameResult<()> {
        self.board.lift_piece(area, piece)?;
        self.supply.give_back(piece);
        Ok(())
    }

    pub fn place_troll(&mut self, area: Area) -> GameResult<()> {
        self.place_piece(area, Piece::Troll)
    }

    pub fn remove_troll(&mut self, area: Area) -> GameResult<()> {
        self.remove_piece(area, Piece::Troll)
    }

    pub fn place_demon(&mut self, area: Area) -> GameResult<()> {
        self.place_piece(area, Piece::Demon)
    }

    pub fn remove_demon(&mut self, area: Area) -> GameResult<()> {
        self.remove_piece(area, Piece::Demon)
    }

    // === Money ===

    pub fn give_money_from_bank(&mut self, player: PlayerId, amount: u32) -> GameResult<()> {
        self.seat(player)?;
        self.bank.withdraw(amount)?;
        self.players[player].credit(amount);
        Ok(())
    }

    pub fn take_money_to_bank(&mut self, player: PlayerId, amount: u32) -> GameResult<()> {
        self.seat_mut(player)?.debit(amount)?;
        self.bank.deposit(amount);
        Ok(())
    }

    pub fn transfer_money(&mut self, from: PlayerId, to: PlayerId, amount: u32) -> GameResult<()> {
        self.seat(to)?;
        self.seat_mut(from)?.debit(amount)?;
        self.players[to].credit(amount);
        Ok(())
    }

    /// Pay out a loan and record it against the player's score.
    pub fn take_loan(&mut self, player: PlayerId) -> GameResult<()> {
        self.give_money_from_bank(player, self.config.loan_amount)?;
        self.players[player].add_loan();
        Ok(())
    }

    // === Cards ===

    /// Draw the top player card into `player`'s hand.
    pub fn draw_player_card(&mut self, player: PlayerId) -> GameResult<PlayerCard> {
        self.draw_with_capacity(player, self.config.hand_capacity)
    }

    pub(crate) fn draw_with_capacity(
        &mut self,
        player: PlayerId,
        capacity: usize,
    ) -> GameResult<PlayerCard> {
        if self.seat(player)?.hand_size() >= capacity {
            return Err(GameError::HandFull { player, capacity });
        }
        let card = self.player_deck.draw()?;
        self.players[player].add_card(card, capacity)?;
        Ok(card)
    }

    /// Move a card from `player`'s hand to the discard pile.
    pub fn discard_player_card(&mut self, player: PlayerId, card: PlayerCard) -> GameResult<()> {
        self.seat_mut(player)?.remove_card(card)?;
        self.player_deck.discard(card);
        Ok(())
    }

    /// Give `player` a specific card from the draw pile.
    pub fn deal_card(&mut self, player: PlayerId, card: PlayerCard) -> GameResult<()> {
        let capacity = self.config.hand_capacity;
        if self.seat(player)?.hand_size() >= capacity {
            return Err(GameError::HandFull { player, capacity });
        }
        if self.player(player).holds(card) {
            return Err(GameError::transition(format!("{player} already holds {card}")));
        }
        self.player_deck
            .take(&card)
            .ok_or(GameError::CardUnavailable(card))?;
        self.players[player].add_card(card, capacity)
    }

    /// Deal the next personality to `player`.
    pub(crate) fn deal_personality(&mut self, player: PlayerId) -> GameResult<Personality> {
        self.seat(player)?;
        let personality = self.personality_deck.draw()?;
        self.players[player].set_personality(personality)?;
        Ok(personality)
    }

    /// Move a card from hand to the in-play area for this turn.
    pub(crate) fn put_in_play(&mut self, player: PlayerId, card: PlayerCard) -> GameResult<()> {
        self.seat_mut(player)?.remove_card(card)?;
        self.turn.in_play.push(card);
        Ok(())
    }

    /// Discard every card played this turn.
    pub(crate) fn discard_in_play(&mut self) {
        for card in std::mem::take(&mut self.turn.in_play) {
            self.player_deck.discard(card);
        }
    }

    /// Move the top `count` cards of the draw pile to the discard pile.
    pub(crate) fn discard_from_draw_pile(&mut self, count: usize) -> usize {
        let mut discarded = 0;
        while discarded < count {
            match self.player_deck.draw() {
                Ok(card) => self.player_deck.discard(card),
                Err(_) => break,
            }
            discarded += 1;
        }
        discarded
    }

    /// Draw a random event, reshuffling spent events when the pile runs out.
    pub(crate) fn draw_random_event(&mut self) -> GameResult<RandomEvent> {
        self.event_deck.draw_or_reshuffle(&mut self.rng)
    }

    pub(crate) fn discard_random_event(&mut self, event: RandomEvent) {
        self.event_deck.discard(event);
    }

    // === City cards ===

    /// Mark a held city card as used, enforcing the once-per-round limit.
    pub(crate) fn use_city_card(&mut self, player: PlayerId, area: Area) -> GameResult<()> {
        let card = self
            .seat_mut(player)?
            .city_card_mut(area)
            .ok_or(GameError::CityCardNotHeld { player, area })?;
        if !card.is_playable() {
            return Err(GameError::AlreadyPlayedThisRound(area));
        }
        card.mark_played();
        Ok(())
    }

    // === Turn state ===

    pub(crate) fn die_mut(&mut self) -> &mut Die {
        &mut self.die
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.turn.status = status;
    }

    pub(crate) fn end_game(&mut self, reason: GameEnd) {
        if self.turn.game_end.is_none() {
            self.turn.game_end = Some(reason);
        }
        self.turn.status = GameStatus::Finished;
    }

    /// Pass the turn to the next seat; returns true when a new round began.
    pub(crate) fn advance_turn(&mut self) -> bool {
        self.turn.turns_taken += 1;
        self.turn.current_player = self.turn.current_player.next(self.player_count());
        let new_round = self.turn.current_player.index() == 0;
        if new_round {
            self.turn.round += 1;
            for player in self.players.values_mut() {
                player.reset_city_cards();
            }
        }
        new_round
    }

    // === Invariants ===

    /// Check every conservation rule: pieces, money and cards.
    ///
    /// Returns the first violation found as `InvalidStateTransition`.
    pub fn check_invariants(&self) -> GameResult<()> {
        for (id, player) in self.players.iter() {
            let minions = player.minions_in_reserve() + self.board.minions_on_board(id);
            if minions != self.config.total_minions {
                return Err(self.violation(format!(
                    "{id} has {minions} minions, expected {}",
                    self.config.total_minions
                )));
            }
            let buildings =
                player.buildings_in_reserve() + self.board.buildings_of(id).count() as u32;
            if buildings != self.config.total_buildings {
                return Err(self.violation(format!(
                    "{id} has {buildings} buildings, expected {}",
                    self.config.total_buildings
                )));
            }
            for card in player.city_cards() {
                if self.board.area(card.area()).building_owner() != Some(id) {
                    return Err(self.violation(format!(
                        "{id} holds the {} city card without its building",
                        card.area()
                    )));
                }
            }
        }

        let money = self.bank.balance() + self.players.values().map(Player::money).sum::<u32>();
        if money != self.config.bank_balance {
            return Err(self.violation(format!(
                "money in play is ${money}, expected ${}",
                self.config.bank_balance
            )));
        }

        for (piece, total) in [
            (Piece::Troll, self.config.total_trolls),
            (Piece::Demon, self.config.total_demons),
        ] {
            let count = self.supply.available(piece) + self.board.pieces_on_board(piece);
            if count != total {
                return Err(self.violation(format!("{count} {piece}s in play, expected {total}")));
            }
        }

        Ok(())
    }

    fn violation(&self, message: String) -> GameError {
        warn!("invariant violated: {message}");
        GameError::InvalidStateTransition(message)
    }
}
