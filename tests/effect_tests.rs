//! Effect registry dispatch: symbols, card text, city cards and random events.

use ankh_engine::board::Area;
use ankh_engine::cards::{PlayerCard, RandomEvent, Symbol, TextEffect};
use ankh_engine::core::{Die, GameConfig, GameError, GameState, PlayerId};
use ankh_engine::effects::{EffectContext, EffectRegistry, Resolution};
use ankh_engine::ledger::Piece;
use ankh_engine::rules::ScriptedChoices;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

fn state_with_die(die: Die) -> GameState {
    GameState::new(GameConfig::default(), &["Vimes", "Angua", "Detritus"], die).unwrap()
}

fn state() -> GameState {
    state_with_die(Die::new(3))
}

fn symbol(
    state: &mut GameState,
    symbol: Symbol,
    ctx: EffectContext,
    choices: &mut ScriptedChoices,
) -> Result<Resolution, GameError> {
    EffectRegistry::standard().dispatch_symbol(symbol, state, &ctx, choices)
}

#[test]
fn test_place_minion_targets_own_area_or_adjacent() {
    let mut state = state();
    state.add_minion(Area::TheShades, P0).unwrap();

    // Nap Hill is nowhere near The Shades.
    let mut choices = ScriptedChoices::new().with_areas([Area::NapHill]);
    let before = state.clone();
    let result = symbol(&mut state, Symbol::PlaceMinion, EffectContext::bare(P0), &mut choices);
    assert!(matches!(result, Err(GameError::InvalidChoice(_))));
    assert_eq!(state, before);

    let mut choices = ScriptedChoices::new().with_areas([Area::Dimwell]);
    symbol(&mut state, Symbol::PlaceMinion, EffectContext::bare(P0), &mut choices).unwrap();
    assert_eq!(state.board().area(Area::Dimwell).minions_of(P0), 1);
}

#[test]
fn test_second_minion_in_an_area_causes_trouble() {
    let mut state = state();
    state.add_minion(Area::TheHippo, P1).unwrap();
    state.add_minion(Area::TheScours, P0).unwrap();
    let mut choices = ScriptedChoices::new().with_areas([Area::TheHippo]);
    symbol(&mut state, Symbol::PlaceMinion, EffectContext::bare(P0), &mut choices).unwrap();
    assert!(state.board().area(Area::TheHippo).has_trouble());
}

#[test]
fn test_place_minion_with_empty_reserve_moves_one() {
    let mut state = state();
    for _ in 0..12 {
        state.add_minion(Area::Longwall, P0).unwrap();
    }
    let mut choices = ScriptedChoices::new().with_areas([Area::Longwall, Area::IsleOfGods]);
    symbol(&mut state, Symbol::PlaceMinion, EffectContext::bare(P0), &mut choices).unwrap();
    assert_eq!(state.board().area(Area::Longwall).minions_of(P0), 11);
    assert_eq!(state.board().area(Area::IsleOfGods).minions_of(P0), 1);
    assert_eq!(state.player(P0).minions_in_reserve(), 0);
}

#[test]
fn test_place_building_grants_city_card() {
    let mut state = state();
    state.give_money_from_bank(P2, 12).unwrap();
    state.add_minion(Area::Longwall, P2).unwrap();
    symbol(&mut state, Symbol::PlaceBuilding, EffectContext::bare(P2), &mut ScriptedChoices::new())
        .unwrap();
    assert_eq!(state.building_owner(Area::Longwall), Some(P2));
    assert_eq!(state.player(P2).money(), 0);

    let registry = EffectRegistry::standard();
    registry
        .dispatch_city(Area::Longwall, &mut state, &EffectContext::bare(P2), &mut ScriptedChoices::new())
        .unwrap();
    assert_eq!(state.player(P2).money(), 1);
}

#[test]
fn test_place_building_without_a_legal_area() {
    let mut state = state();
    state.add_minion(Area::Longwall, P2).unwrap();
    let before = state.clone();
    assert_eq!(
        symbol(&mut state, Symbol::PlaceBuilding, EffectContext::bare(P2), &mut ScriptedChoices::new()),
        Err(GameError::NoLegalTarget("area to build in"))
    );
    assert_eq!(state, before);
}

#[test]
fn test_assassination_removes_minion_and_trouble() {
    let mut state = state();
    state.add_minion(Area::TheShades, P1).unwrap();
    state.add_trouble(Area::TheShades).unwrap();
    symbol(
        &mut state,
        Symbol::Assassination,
        EffectContext::card(P0, PlayerCard::InigoSkimmer),
        &mut ScriptedChoices::new(),
    )
    .unwrap();
    assert_eq!(state.board().area(Area::TheShades).minion_count(), 0);
    assert!(!state.board().area(Area::TheShades).has_trouble());
}

#[test]
fn test_assassination_can_target_a_troll() {
    let mut state = state();
    state.add_minion(Area::TheShades, P1).unwrap();
    state.place_troll(Area::TheShades).unwrap();
    state.add_trouble(Area::TheShades).unwrap();

    // Decline the minion; the troll is the remaining option.
    let mut choices = ScriptedChoices::new().with_yes_no([false]);
    symbol(&mut state, Symbol::Assassination, EffectContext::bare(P0), &mut choices).unwrap();
    assert_eq!(state.board().area(Area::TheShades).minions_of(P1), 1);
    assert_eq!(state.board().area(Area::TheShades).pieces(Piece::Troll), 0);
    assert_eq!(state.supply().available(Piece::Troll), 3);
}

#[test]
fn test_assassination_needs_trouble() {
    let mut state = state();
    state.add_minion(Area::TheShades, P1).unwrap();
    assert!(matches!(
        symbol(&mut state, Symbol::Assassination, EffectContext::bare(P0), &mut ScriptedChoices::new()),
        Err(GameError::NoLegalTarget(_))
    ));
}

#[test]
fn test_take_money_needs_a_card_amount() {
    let mut state = state();
    assert!(matches!(
        symbol(&mut state, Symbol::TakeMoney, EffectContext::bare(P0), &mut ScriptedChoices::new()),
        Err(GameError::NoLegalTarget(_))
    ));
    symbol(
        &mut state,
        Symbol::TakeMoney,
        EffectContext::card(P0, PlayerCard::DrCruces),
        &mut ScriptedChoices::new(),
    )
    .unwrap();
    assert_eq!(state.player(P0).money(), 3);
}

#[test]
fn test_play_another_card_is_reported() {
    let mut state = state();
    assert_eq!(
        symbol(&mut state, Symbol::PlayAnotherCard, EffectContext::bare(P0), &mut ScriptedChoices::new()),
        Ok(Resolution::PlayAnotherCard)
    );
}

#[test]
fn test_tax_rivals_through_the_registry() {
    let mut state = state();
    state.give_money_from_bank(P1, 2).unwrap();
    state.give_money_from_bank(P2, 2).unwrap();
    EffectRegistry::standard()
        .dispatch_text(
            TextEffect::TaxRivals,
            &mut state,
            &EffectContext::card(P0, PlayerCard::MrBoggis),
            &mut ScriptedChoices::new(),
        )
        .unwrap();
    assert_eq!(state.player(P0).money(), 4);
    assert_eq!(state.player(P1).money(), 0);
}

#[test]
fn test_dragon_event_with_a_fixed_die() {
    // 1 then 3: Dragon's Landing.
    let mut state = state_with_die(Die::scripted([1, 3]));
    state.add_minion(Area::DragonsLanding, P0).unwrap();
    state.add_minion(Area::DragonsLanding, P2).unwrap();
    state.place_demon(Area::DragonsLanding).unwrap();

    EffectRegistry::standard()
        .dispatch_event(
            RandomEvent::Dragon,
            &mut state,
            &EffectContext::bare(P1),
            &mut ScriptedChoices::new(),
        )
        .unwrap();
    assert!(state.board().area(Area::DragonsLanding).is_empty());
    assert_eq!(state.player(P0).minions_in_reserve(), 12);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn test_cheat_die_drives_gamble() {
    let mut die = Die::new(5);
    die.set_cheat(Some(6));
    let mut state = state_with_die(die);
    state.give_money_from_bank(P2, 5).unwrap();

    let mut choices = ScriptedChoices::new().with_players([P2]);
    EffectRegistry::standard()
        .dispatch_text(
            TextEffect::GambleOnDie,
            &mut state,
            &EffectContext::card(P0, PlayerCard::HereNNow),
            &mut choices,
        )
        .unwrap();
    assert_eq!(state.player(P0).money(), 3);
    assert_eq!(state.player(P2).money(), 2);
}

#[test]
fn test_city_cards_dispatch_for_every_area() {
    let registry = EffectRegistry::standard();
    let mut state = state();
    state.give_money_from_bank(P0, 3).unwrap();
    let mut choices = ScriptedChoices::new();
    registry
        .dispatch_city(Area::Dimwell, &mut state, &EffectContext::bare(P0), &mut choices)
        .unwrap();
    assert_eq!(state.board().minions_on_board(P0), 1);
    assert_eq!(state.player(P0).money(), 0);

    assert_eq!(
        registry.dispatch_city(Area::SmallGods, &mut state, &EffectContext::bare(P0), &mut choices),
        Err(GameError::NoLegalTarget("random event to ignore"))
    );
}
