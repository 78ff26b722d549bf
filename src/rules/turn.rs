//! Turn coordinator.
//!
//! `Game` owns the lifecycle of one game:
//!
//! ```text
//! Uninitialized --set_up--> Ready --init--> InProgress --(riots | empty deck)--> Finished
//! ```
//!
//! A turn is: choose a card from hand, resolve its text and symbols in the
//! card's order (mandatory symbols always, the rest only when the player
//! agrees), keep playing while a card grants another play, offer the
//! player's unused city cards, then refill the hand. Each effect is its own
//! transaction: a failure is reported in the `TurnReport` and leaves the
//! state as it was before that effect.

use log::{debug, info, warn};

use crate::board::Area;
use crate::cards::{CityAreaCard, PlayerCard, RandomEvent, Symbol, TextEffect};
use crate::core::{
    is_valid_name, Die, GameConfig, GameEnd, GameError, GameResult, GameSnapshot, GameState,
    GameStatus, PlayerId, SnapshotError,
};
use crate::effects::targeting::select_card;
use crate::effects::{EffectContext, EffectRegistry, Resolution};
use crate::rules::ChoiceProvider;

/// One resolvable part of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Symbol(Symbol),
    Text(TextEffect),
    City(Area),
}

impl Step {
    /// Mandatory steps are resolved without asking.
    #[must_use]
    pub fn is_mandatory(self) -> bool {
        matches!(self, Step::Symbol(symbol) if symbol.is_mandatory())
    }

    fn dispatch(
        self,
        registry: &EffectRegistry,
        state: &mut GameState,
        ctx: &EffectContext,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        match self {
            Step::Symbol(symbol) => registry.dispatch_symbol(symbol, state, ctx, choices),
            Step::Text(text) => registry.dispatch_text(text, state, ctx, choices),
            Step::City(area) => play_city(registry, state, ctx.actor, area, choices),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Symbol(symbol) => write!(f, "{symbol}"),
            Step::Text(text) => write!(f, "card text ({text:?})"),
            Step::City(area) => write!(f, "the {area} city card"),
        }
    }
}

/// What happened to one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Resolved,
    /// A random event was drawn and resolved.
    Event(RandomEvent),
    /// The player chose not to resolve it.
    Declined,
    /// The effect failed and changed nothing.
    Failed(GameError),
    /// Another player's reaction cancelled or replaced it.
    Interrupted { by: PlayerId, card: PlayerCard },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The card the step belongs to; `None` for city cards.
    pub card: Option<PlayerCard>,
    pub step: Step,
    pub outcome: StepOutcome,
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub cards_played: Vec<PlayerCard>,
    pub steps: Vec<StepReport>,
    /// The turn wrapped play back to the first seat.
    pub new_round: bool,
    pub game_over: bool,
}

impl TurnReport {
    fn new(player: PlayerId) -> Self {
        Self {
            player,
            cards_played: Vec::new(),
            steps: Vec::new(),
            new_round: false,
            game_over: false,
        }
    }

    /// Outcomes of every step, in resolution order.
    pub fn outcomes(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().map(|s| &s.outcome)
    }
}

/// A player's final position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub net_worth: i64,
}

/// The engine's command surface.
///
/// ## Example
///
/// ```
/// use ankh_engine::core::GameStatus;
/// use ankh_engine::rules::{Game, ScriptedChoices};
///
/// let mut game = Game::new();
/// game.set_up(3, &["Vimes", "Vetinari", "Rincewind"]).unwrap();
/// game.init().unwrap();
/// assert_eq!(game.status(), GameStatus::InProgress);
///
/// let report = game.advance_to_next_turn(&mut ScriptedChoices::new()).unwrap();
/// assert_eq!(report.cards_played.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    registry: EffectRegistry,
    die: Die,
    state: Option<GameState>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// A game using `config`; the die is derived from the config seed.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            die: Die::for_game(config.seed),
            registry: EffectRegistry::standard(),
            state: None,
            config,
        }
    }

    /// Roll with `die` instead of the seeded default.
    #[must_use]
    pub fn with_die(mut self, die: Die) -> Self {
        self.die = die;
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: EffectRegistry) -> Self {
        self.registry = registry;
        self
    }

    // === Lifecycle ===

    /// Seat `count` players and build shuffled decks.
    ///
    /// Allowed before the first game and after a game has finished.
    pub fn set_up(&mut self, count: usize, names: &[&str]) -> GameResult<()> {
        let status = self.status();
        if !matches!(status, GameStatus::Uninitialized | GameStatus::Finished) {
            return Err(GameError::transition(format!("cannot set up a game that is {status:?}")));
        }
        if !(2..=4).contains(&count) || names.len() != count {
            return Err(GameError::InvalidPlayerCount {
                count,
                names: names.len(),
            });
        }
        if let Some(bad) = names.iter().find(|name| !is_valid_name(name)) {
            return Err(GameError::InvalidPlayerName((*bad).to_string()));
        }

        self.state = Some(GameState::new(self.config.clone(), names, self.die.clone())?);
        info!("game set up for {count} players");
        Ok(())
    }

    /// Deal starting money, personalities, minions and hands.
    ///
    /// All or nothing: if any step fails (for example an exhausted
    /// personality deck) the game stays `Ready` and unchanged.
    pub fn init(&mut self) -> GameResult<()> {
        let state = self.state.as_mut().ok_or_else(|| GameError::transition("no game has been set up"))?;
        if state.turn().status() != GameStatus::Ready {
            return Err(GameError::transition(format!(
                "cannot start a game that is {:?}",
                state.turn().status()
            )));
        }

        let mut next = state.clone();
        deal_starting_resources(&mut next)?;
        next.set_status(GameStatus::InProgress);
        next.check_invariants()?;
        *state = next;
        info!("game started, {} to play", state.turn().current_player());
        Ok(())
    }

    /// Play the current player's turn and pass play to the next seat.
    ///
    /// Failed effects are reported per step. Only a bad card choice or a
    /// broken invariant aborts the turn; the state is then restored and the
    /// same player is still to play.
    pub fn advance_to_next_turn(&mut self, choices: &mut dyn ChoiceProvider) -> GameResult<TurnReport> {
        let Self { registry, state, .. } = self;
        let state = in_progress(state.as_mut())?;

        let checkpoint = state.clone();
        match run_turn(registry, state, choices) {
            Ok(report) => Ok(report),
            Err(err) => {
                warn!("turn aborted: {err}");
                *state = checkpoint;
                Err(err)
            }
        }
    }

    /// Use a city area card outside the turn sequence.
    ///
    /// Fails with `CityCardNotHeld` or `AlreadyPlayedThisRound` before
    /// anything changes; a failed effect leaves the card unplayed.
    pub fn play_city_card(
        &mut self,
        player: PlayerId,
        area: Area,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        let Self { registry, state, .. } = self;
        let state = in_progress(state.as_mut())?;
        play_city(registry, state, player, area, choices)
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state
            .as_ref()
            .map_or(GameStatus::Uninitialized, |s| s.turn().status())
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status() == GameStatus::Finished
    }

    #[must_use]
    pub fn game_end(&self) -> Option<GameEnd> {
        self.state.as_ref().and_then(|s| s.turn().game_end())
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.as_ref().map(|s| s.turn().current_player())
    }

    /// Players ranked by net worth, highest first; ties keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let Some(state) = &self.state else {
            return Vec::new();
        };
        let mut standings: Vec<Standing> = state
            .players()
            .map(|p| Standing {
                player: p.id(),
                name: p.name().to_string(),
                net_worth: state.net_worth(p.id()),
            })
            .collect();
        standings.sort_by(|a, b| b.net_worth.cmp(&a.net_worth));
        standings
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Direct access to the board and ledger operations.
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    // === Persistence ===

    pub fn save_json(&self) -> Result<String, SnapshotError> {
        self.snapshot()?.to_json()
    }

    pub fn load_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(Self::resume(GameSnapshot::from_json(json)?))
    }

    pub fn save_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        self.snapshot()?.to_bytes()
    }

    pub fn load_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(Self::resume(GameSnapshot::from_bytes(bytes)?))
    }

    fn snapshot(&self) -> Result<GameSnapshot, SnapshotError> {
        let state = self.state.as_ref().ok_or(SnapshotError::NoGame)?;
        Ok(GameSnapshot::new(state.clone()))
    }

    fn resume(snapshot: GameSnapshot) -> Self {
        let state = snapshot.state;
        Self {
            config: state.config().clone(),
            registry: EffectRegistry::standard(),
            die: state.die().clone(),
            state: Some(state),
        }
    }
}

fn in_progress(state: Option<&mut GameState>) -> GameResult<&mut GameState> {
    let state = state.ok_or_else(|| GameError::transition("no game has been set up"))?;
    match state.turn().status() {
        GameStatus::InProgress => Ok(state),
        status => Err(GameError::transition(format!("no turns can be taken while {status:?}"))),
    }
}

fn deal_starting_resources(state: &mut GameState) -> GameResult<()> {
    let config = state.config().clone();
    let players: Vec<PlayerId> = state.player_ids().collect();

    for &player in &players {
        state.give_money_from_bank(player, config.starting_money)?;
        let personality = state.deal_personality(player)?;
        debug!("{player} is {personality}");
    }
    for &area in &config.starting_areas {
        for &player in &players {
            state.add_minion(area, player)?;
        }
        if !state.board().area(area).has_trouble() {
            state.add_trouble(area)?;
        }
    }
    for &player in &players {
        while state.player(player).hand_size() < config.hand_capacity {
            state.draw_player_card(player)?;
        }
    }
    Ok(())
}

fn is_finished(state: &GameState) -> bool {
    state.turn().status() == GameStatus::Finished
}

fn run_turn(
    registry: &EffectRegistry,
    state: &mut GameState,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<TurnReport> {
    let player = state.turn().current_player();
    info!(
        "round {}, turn {}: {player} to play",
        state.turn().round(),
        state.turn().turns_taken() + 1
    );
    let mut report = TurnReport::new(player);

    let mut plays = 1;
    while plays > 0 && !is_finished(state) {
        plays -= 1;
        let hand: Vec<PlayerCard> = state.player(player).hand().collect();
        if hand.is_empty() {
            debug!("{player} has no cards to play");
            break;
        }
        let card = select_card(choices, player, &hand, "card to play")?;
        state.put_in_play(player, card)?;
        report.cards_played.push(card);
        info!("{player} plays {card}");
        if resolve_card(registry, state, player, card, choices, &mut report) {
            plays += 1;
        }
    }

    if !is_finished(state) {
        offer_city_cards(registry, state, player, choices, &mut report);
    }
    state.discard_in_play();
    if !is_finished(state) {
        refill(state, player)?;
    }
    state.check_invariants()?;

    report.game_over = is_finished(state);
    if report.game_over {
        info!("game over: {:?}", state.turn().game_end());
    } else {
        report.new_round = state.advance_turn();
        if report.new_round {
            info!("round {} begins", state.turn().round());
        }
    }
    Ok(report)
}

/// Resolve one card; returns true if it granted another play.
fn resolve_card(
    registry: &EffectRegistry,
    state: &mut GameState,
    player: PlayerId,
    card: PlayerCard,
    choices: &mut dyn ChoiceProvider,
    report: &mut TurnReport,
) -> bool {
    let definition = card.definition();
    let mut steps: Vec<Step> = definition.symbols.iter().copied().map(Step::Symbol).collect();
    if let Some(text) = definition.text {
        if definition.text_first {
            steps.insert(0, Step::Text(text));
        } else {
            steps.push(Step::Text(text));
        }
    }

    let ctx = EffectContext::card(player, card);
    let mut another = false;
    for step in steps {
        if is_finished(state) {
            break;
        }
        let outcome = resolve_step(registry, state, &ctx, step, choices, &format!("{card}: {step}?"));
        if outcome == StepOutcome::Resolved && step == Step::Symbol(Symbol::PlayAnotherCard) {
            another = true;
        }
        report.steps.push(StepReport {
            card: Some(card),
            step,
            outcome,
        });
    }
    another
}

fn offer_city_cards(
    registry: &EffectRegistry,
    state: &mut GameState,
    player: PlayerId,
    choices: &mut dyn ChoiceProvider,
    report: &mut TurnReport,
) {
    // Small Gods only acts inside random events.
    let playable: Vec<Area> = state
        .player(player)
        .city_cards()
        .iter()
        .filter(|c| c.is_playable() && !c.area().is_replayable())
        .map(CityAreaCard::area)
        .collect();

    let ctx = EffectContext::bare(player);
    for area in playable {
        if is_finished(state) {
            break;
        }
        let step = Step::City(area);
        let outcome = resolve_step(registry, state, &ctx, step, choices, &format!("Use {step}?"));
        report.steps.push(StepReport {
            card: None,
            step,
            outcome,
        });
    }
}

fn resolve_step(
    registry: &EffectRegistry,
    state: &mut GameState,
    ctx: &EffectContext,
    step: Step,
    choices: &mut dyn ChoiceProvider,
    prompt: &str,
) -> StepOutcome {
    let player = ctx.actor;
    if !step.is_mandatory() && !choices.ask_yes_no(player, prompt) {
        debug!("{player} declined {step}");
        return StepOutcome::Declined;
    }
    match step.dispatch(registry, state, ctx, choices) {
        Ok(Resolution::Completed | Resolution::PlayAnotherCard) => StepOutcome::Resolved,
        Ok(Resolution::Event(event)) => StepOutcome::Event(event),
        Ok(Resolution::Interrupted { by, card }) => {
            info!("{step} of {player} interrupted by {by} with {card}");
            StepOutcome::Interrupted { by, card }
        }
        Err(err) => {
            info!("{player} could not resolve {step}: {err}");
            StepOutcome::Failed(err)
        }
    }
}

/// Mark the city card used and run it, restoring everything on failure.
fn play_city(
    registry: &EffectRegistry,
    state: &mut GameState,
    player: PlayerId,
    area: Area,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let checkpoint = state.clone();
    let result = state
        .use_city_card(player, area)
        .and_then(|()| registry.dispatch_city(area, state, &EffectContext::bare(player), choices));
    if result.is_err() {
        *state = checkpoint;
    }
    result
}

/// Draw up to hand capacity; an empty draw pile ends the game.
fn refill(state: &mut GameState, player: PlayerId) -> GameResult<()> {
    let capacity = state.config().hand_capacity;
    while state.player(player).hand_size() < capacity {
        match state.draw_player_card(player) {
            Ok(card) => debug!("{player} draws {card}"),
            Err(GameError::DeckExhausted(kind)) => {
                info!("the {kind} deck cannot refill the hand of {player}");
                state.end_game(GameEnd::DrawPileExhausted);
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Personality;
    use crate::rules::ScriptedChoices;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn ready(config: GameConfig) -> Game {
        let mut game = Game::with_config(config);
        game.set_up(2, &["Vimes", "Nobby"]).unwrap();
        game
    }

    /// Two players, P0 holding exactly `hand` and P1 cards without random events.
    fn started(hand: &[PlayerCard]) -> Game {
        let config = GameConfig::default().with_hand_capacity(hand.len());
        let mut game = ready(config);
        let state = game.state_mut().unwrap();
        for &card in hand {
            state.deal_card(P0, card).unwrap();
        }
        let quiet = [PlayerCard::HarryKing, PlayerCard::Ruby, PlayerCard::CaptainCarrot];
        for &card in quiet.iter().filter(|c| !hand.contains(c)).take(hand.len()) {
            state.deal_card(P1, card).unwrap();
        }
        game.init().unwrap();
        game
    }

    #[test]
    fn test_set_up_validates_players() {
        let mut game = Game::new();
        assert_eq!(
            game.set_up(1, &["Solo"]),
            Err(GameError::InvalidPlayerCount { count: 1, names: 1 })
        );
        assert_eq!(
            game.set_up(3, &["A", "B"]),
            Err(GameError::InvalidPlayerCount { count: 3, names: 2 })
        );
        assert_eq!(
            game.set_up(2, &["Ok", "not ok"]),
            Err(GameError::InvalidPlayerName("not ok".to_string()))
        );
        assert_eq!(game.status(), GameStatus::Uninitialized);

        game.set_up(2, &["A", "B"]).unwrap();
        assert_eq!(game.status(), GameStatus::Ready);
        assert!(matches!(
            game.set_up(2, &["A", "B"]),
            Err(GameError::InvalidStateTransition(_))
        ));
    }

    #[test]
    fn test_init_deals_starting_resources() {
        let mut game = ready(GameConfig::default());
        game.init().unwrap();
        let state = game.state().unwrap();
        for player in state.players() {
            assert_eq!(player.money(), 10);
            assert_eq!(player.minions_in_reserve(), 9);
            assert_eq!(player.hand_size(), 5);
            assert!(player.personality().is_some());
        }
        assert_eq!(state.bank().balance(), 100);
        assert_eq!(state.board().trouble_count(), 3);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Some(P0));
    }

    #[test]
    fn test_init_surfaces_exhausted_personality_deck() {
        let config = GameConfig::default().with_personalities(vec![Personality::ALL[0]]);
        let mut game = ready(config);
        let before = game.state().cloned();
        assert_eq!(
            game.init(),
            Err(GameError::DeckExhausted(crate::cards::DeckKind::Personality))
        );
        assert_eq!(game.state().cloned(), before);
        assert_eq!(game.status(), GameStatus::Ready);
    }

    #[test]
    fn test_turn_requires_a_started_game() {
        let mut game = Game::new();
        assert!(game.advance_to_next_turn(&mut ScriptedChoices::new()).is_err());
        game.set_up(2, &["A", "B"]).unwrap();
        assert!(matches!(
            game.advance_to_next_turn(&mut ScriptedChoices::new()),
            Err(GameError::InvalidStateTransition(_))
        ));
    }

    #[test]
    fn test_optional_symbol_needs_consent() {
        let mut game = started(&[PlayerCard::Librarian]);
        let report = game.advance_to_next_turn(&mut ScriptedChoices::new()).unwrap();
        assert_eq!(report.cards_played, vec![PlayerCard::Librarian]);
        assert_eq!(report.outcomes().collect::<Vec<_>>(), vec![&StepOutcome::Declined]);
        assert_eq!(game.state().unwrap().player(P0).money(), 10);
    }

    #[test]
    fn test_turn_plays_refills_and_passes() {
        let mut game = started(&[PlayerCard::Librarian]);
        let mut choices = ScriptedChoices::always_yes();
        let report = game.advance_to_next_turn(&mut choices).unwrap();
        assert_eq!(report.player, P0);
        assert_eq!(report.outcomes().collect::<Vec<_>>(), vec![&StepOutcome::Resolved]);
        assert!(!report.new_round);

        let state = game.state().unwrap();
        assert_eq!(state.player(P0).money(), 14);
        assert_eq!(state.player(P0).hand_size(), 1);
        assert!(!state.player(P0).holds(PlayerCard::Librarian));
        assert!(state.player_deck().discard_pile().any(|&c| c == PlayerCard::Librarian));
        assert_eq!(game.current_player(), Some(P1));
    }

    #[test]
    fn test_text_first_and_play_another_card() {
        let mut game = started(&[PlayerCard::TheBankOfAnkhMorpork, PlayerCard::Librarian]);
        let mut choices = ScriptedChoices::always_yes()
            .with_cards([PlayerCard::TheBankOfAnkhMorpork, PlayerCard::Librarian]);
        let report = game.advance_to_next_turn(&mut choices).unwrap();

        assert_eq!(
            report.cards_played,
            vec![PlayerCard::TheBankOfAnkhMorpork, PlayerCard::Librarian]
        );
        let steps: Vec<Step> = report.steps.iter().map(|s| s.step).collect();
        assert_eq!(
            steps,
            vec![
                Step::Text(TextEffect::TakeLoan),
                Step::Symbol(Symbol::PlayAnotherCard),
                Step::Symbol(Symbol::TakeMoney),
            ]
        );
        let state = game.state().unwrap();
        assert_eq!(state.player(P0).money(), 24);
        assert_eq!(state.player(P0).loans(), 1);
        assert_eq!(state.player(P0).hand_size(), 2);
    }

    #[test]
    fn test_failed_step_is_reported_and_rolled_back() {
        // No area holds trouble after this, so Remove Trouble has no target.
        let mut game = started(&[PlayerCard::TheDysk]);
        let state = game.state_mut().unwrap();
        for area in [Area::TheShades, Area::TheScours, Area::DollySisters] {
            state.remove_trouble(area).unwrap();
        }
        let before_money = state.player(P0).money();

        // Decline Place Building, accept Remove Trouble.
        let mut choices = ScriptedChoices::new().with_yes_no([false, true]);
        let report = game.advance_to_next_turn(&mut choices).unwrap();
        assert_eq!(
            report.outcomes().collect::<Vec<_>>(),
            vec![
                &StepOutcome::Declined,
                &StepOutcome::Failed(GameError::NoLegalTarget("area with a trouble marker")),
            ]
        );
        assert_eq!(game.state().unwrap().player(P0).money(), before_money);
        assert_eq!(game.current_player(), Some(P1));
    }

    #[test]
    fn test_bad_card_choice_aborts_the_turn() {
        let mut game = started(&[PlayerCard::Librarian]);
        let before = game.state().cloned();
        let mut choices = ScriptedChoices::new().with_cards([PlayerCard::Hex]);
        assert!(matches!(
            game.advance_to_next_turn(&mut choices),
            Err(GameError::InvalidChoice(_))
        ));
        assert_eq!(game.state().cloned(), before);
        assert_eq!(game.current_player(), Some(P0));
    }

    #[test]
    fn test_city_card_offered_once_per_round() {
        let mut game = started(&[PlayerCard::Librarian]);
        let state = game.state_mut().unwrap();
        state.add_building(P0, Area::TheHippo).unwrap_err();
        state.give_money_from_bank(P0, 2).unwrap();
        state.add_building(P0, Area::TheHippo).unwrap();
        assert_eq!(state.player(P0).money(), 0);

        let mut choices = ScriptedChoices::new();
        game.play_city_card(P0, Area::TheHippo, &mut choices).unwrap();
        assert_eq!(
            game.play_city_card(P0, Area::TheHippo, &mut choices),
            Err(GameError::AlreadyPlayedThisRound(Area::TheHippo))
        );

        // Finish the round: the card is not offered again to P0 this turn.
        let report = game.advance_to_next_turn(&mut choices).unwrap();
        assert!(report.steps.iter().all(|s| s.step != Step::City(Area::TheHippo)));
        let report = game.advance_to_next_turn(&mut choices).unwrap();
        assert!(report.new_round);

        game.play_city_card(P0, Area::TheHippo, &mut choices).unwrap();
        assert_eq!(game.state().unwrap().player(P0).money(), 4);
    }

    #[test]
    fn test_failed_city_card_stays_unplayed() {
        let mut game = started(&[PlayerCard::Librarian]);
        let state = game.state_mut().unwrap();
        state.add_building(P0, Area::DollySisters).unwrap_err();
        state.remove_trouble(Area::DollySisters).unwrap();
        state.add_building(P0, Area::DollySisters).unwrap();
        assert_eq!(state.player(P0).money(), 4);
        state.take_money_to_bank(P0, 4).unwrap();

        let mut choices = ScriptedChoices::new();
        assert_eq!(
            game.play_city_card(P0, Area::DollySisters, &mut choices),
            Err(GameError::InsufficientFunds { needed: 3, available: 0 })
        );
        let state = game.state().unwrap();
        assert!(state
            .player(P0)
            .city_card(Area::DollySisters)
            .is_some_and(|c| c.is_playable()));
        assert_eq!(
            game.play_city_card(P1, Area::DollySisters, &mut choices),
            Err(GameError::CityCardNotHeld { player: P1, area: Area::DollySisters })
        );
    }

    #[test]
    fn test_empty_draw_pile_ends_the_game() {
        let config = GameConfig::default()
            .with_hand_capacity(1)
            .with_player_cards(vec![PlayerCard::Librarian, PlayerCard::Hex]);
        let mut game = ready(config);
        game.init().unwrap();

        let report = game.advance_to_next_turn(&mut ScriptedChoices::new()).unwrap();
        assert!(report.game_over);
        assert!(game.is_game_over());
        assert_eq!(game.game_end(), Some(GameEnd::DrawPileExhausted));
        assert_eq!(game.current_player(), Some(P0));
        assert!(game.advance_to_next_turn(&mut ScriptedChoices::new()).is_err());

        // A finished game can be set up again.
        game.set_up(2, &["A", "B"]).unwrap();
        assert_eq!(game.status(), GameStatus::Ready);
    }

    #[test]
    fn test_standings_rank_by_net_worth() {
        let mut game = ready(GameConfig::default());
        game.init().unwrap();
        let state = game.state_mut().unwrap();
        state.transfer_money(P0, P1, 4).unwrap();
        state.take_loan(P0).unwrap();

        let standings = game.standings();
        assert_eq!(standings[0].player, P1);
        assert_eq!(standings[0].net_worth, 14);
        assert_eq!(standings[1].name, "Vimes");
        assert_eq!(standings[1].net_worth, 6 + 10 - 12);
    }

    #[test]
    fn test_snapshot_requires_a_game() {
        assert!(matches!(Game::new().save_json(), Err(SnapshotError::NoGame)));
    }

    #[test]
    fn test_resumed_game_plays_identically() {
        let mut game = Game::with_config(GameConfig::default().with_seed(11));
        game.set_up(3, &["A", "B", "C"]).unwrap();
        game.init().unwrap();
        let bytes = game.save_bytes().unwrap();
        let mut resumed = Game::load_bytes(&bytes).unwrap();

        for _ in 0..6 {
            let a = game.advance_to_next_turn(&mut ScriptedChoices::always_yes());
            let b = resumed.advance_to_next_turn(&mut ScriptedChoices::always_yes());
            assert_eq!(a, b);
        }
        assert_eq!(game.state(), resumed.state());
    }
}
