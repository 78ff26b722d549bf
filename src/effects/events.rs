//! Random event effects.
//!
//! Events are mandatory and never interruptible. Where an event would
//! remove a player's pieces, a player holding the Small Gods city card may
//! pay to ignore it.

use log::{debug, info};

use super::context::{EffectContext, Resolution};
use super::symbols::place_piece_in;
use super::targeting::select_player;
use crate::board::Area;
use crate::core::{GameEnd, GameError, GameResult, GameState, PlayerId, RandomSource};
use crate::ledger::Piece;
use crate::rules::ChoiceProvider;

/// Price of Small Gods protection.
const PROTECTION_FEE: u32 = 3;
/// Price of keeping a building during subsidence.
const SUBSIDENCE_FEE: u32 = 2;
/// Cards the fog washes away.
const FOG_DISCARDS: usize = 5;
const TROLL_ROLLS: usize = 3;
const DEMON_ROLLS: usize = 4;

/// Offer Small Gods protection to `owner`; returns true if they paid.
fn protected(
    state: &mut GameState,
    owner: PlayerId,
    what: &str,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<bool> {
    let player = state.player(owner);
    if player.city_card(Area::SmallGods).is_none() || !player.has_money(PROTECTION_FEE) {
        return Ok(false);
    }
    let prompt = format!("Pay ${PROTECTION_FEE} (Small Gods) to protect {what}?");
    if !choices.ask_yes_no(owner, &prompt) {
        return Ok(false);
    }
    state.take_money_to_bank(owner, PROTECTION_FEE)?;
    info!("{owner} paid Small Gods to protect {what}");
    Ok(true)
}

/// Remove every piece from one rolled area.
pub fn dragon(
    state: &mut GameState,
    _ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let area = state.die_mut().roll_area();
    info!("the dragon strikes {area}");

    let owners: Vec<PlayerId> = state.board().area(area).minion_owners().collect();
    for owner in owners {
        // Protection is bought one minion at a time.
        for _ in 0..state.board().area(area).minions_of(owner) {
            if !protected(state, owner, &format!("a minion in {area}"), choices)? {
                state.remove_minion(area, owner)?;
            }
        }
    }
    if let Some(owner) = state.building_owner(area) {
        if !protected(state, owner, &format!("your building in {area}"), choices)? {
            state.remove_building(area)?;
        }
    }
    for piece in [Piece::Troll, Piece::Demon] {
        while state.board().area(area).pieces(piece) > 0 {
            state.remove_piece(area, piece)?;
        }
    }
    if state.board().area(area).has_trouble() {
        state.remove_trouble(area)?;
    }
    Ok(Resolution::Completed)
}

/// Remove the building in one rolled area.
pub fn explosion(
    state: &mut GameState,
    _ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let area = state.die_mut().roll_area();
    info!("explosion in {area}");
    if let Some(owner) = state.building_owner(area) {
        if !protected(state, owner, &format!("your building in {area}"), choices)? {
            state.remove_building(area)?;
        }
    }
    Ok(Resolution::Completed)
}

fn scatter(state: &mut GameState, piece: Piece, rolls: usize) -> GameResult<Resolution> {
    for _ in 0..rolls {
        let area = state.die_mut().roll_area();
        match place_piece_in(state, area, piece) {
            Ok(()) => debug!("a {piece} appears in {area}"),
            Err(GameError::NoPiecesAvailable(_)) => {
                debug!("no {piece} left for {area}");
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(Resolution::Completed)
}

/// A troll in each of three rolled areas.
pub fn trolls(
    state: &mut GameState,
    _ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    scatter(state, Piece::Troll, TROLL_ROLLS)
}

/// A demon in each of four rolled areas.
pub fn demons(
    state: &mut GameState,
    _ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    scatter(state, Piece::Demon, DEMON_ROLLS)
}

/// Starting with the actor, each player rolls an area and removes a minion there.
pub fn mysterious_murders(
    state: &mut GameState,
    ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let order: Vec<PlayerId> = std::iter::once(ctx.actor)
        .chain(ctx.actor.others_in_turn_order(state.player_count()))
        .collect();
    for murderer in order {
        let area = state.die_mut().roll_area();
        let owners: Vec<PlayerId> = state.board().area(area).minion_owners().collect();
        if owners.is_empty() {
            debug!("{murderer} rolled {area}: nobody there");
            continue;
        }
        let victim = select_player(choices, murderer, &owners, "player to lose a minion")?;
        if protected(state, victim, &format!("your minion in {area}"), choices)? {
            continue;
        }
        state.remove_minion(area, victim)?;
        info!("{murderer} murders a minion of {victim} in {area}");
    }
    Ok(Resolution::Completed)
}

/// End the game if the board holds enough trouble markers.
pub fn riots(
    state: &mut GameState,
    _ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let trouble = state.board().trouble_count();
    if trouble >= state.config().riot_threshold {
        info!("riots with {trouble} trouble markers: the game is over");
        state.end_game(GameEnd::Riots);
    }
    Ok(Resolution::Completed)
}

/// Every building costs its owner $2, or is lost.
pub fn subsidence(
    state: &mut GameState,
    _ctx: &EffectContext,
    choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let sites: Vec<(Area, PlayerId)> = state
        .board()
        .iter()
        .filter_map(|s| s.building_owner().map(|owner| (s.area(), owner)))
        .collect();
    for (area, owner) in sites {
        let keep = state.player(owner).has_money(SUBSIDENCE_FEE)
            && choices.ask_yes_no(owner, &format!("Pay ${SUBSIDENCE_FEE} to keep your building in {area}?"));
        if keep {
            state.take_money_to_bank(owner, SUBSIDENCE_FEE)?;
        } else {
            state.remove_building(area)?;
            info!("the building of {owner} in {area} subsides");
        }
    }
    Ok(Resolution::Completed)
}

/// Discard the top of the draw pile.
pub fn fog(
    state: &mut GameState,
    _ctx: &EffectContext,
    _choices: &mut dyn ChoiceProvider,
) -> GameResult<Resolution> {
    let discarded = state.discard_from_draw_pile(FOG_DISCARDS);
    debug!("fog discards {discarded} cards");
    Ok(Resolution::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Die, GameConfig, GameStatus};
    use crate::rules::ScriptedChoices;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn state(die: Die) -> GameState {
        GameState::new(GameConfig::default(), &["A", "B"], die).unwrap()
    }

    fn ctx() -> EffectContext {
        EffectContext::bare(P0)
    }

    // Rolls (4, 1) pick The Shades.
    const SHADES: [u8; 2] = [4, 1];

    #[test]
    fn test_dragon_clears_the_area() {
        let mut state = state(Die::scripted(SHADES));
        state.add_minion(Area::TheShades, P0).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();
        state.place_troll(Area::TheShades).unwrap();
        state.add_trouble(Area::TheShades).unwrap();
        state.give_money_from_bank(P1, 6).unwrap();
        state.add_building(P1, Area::TheScours).unwrap();

        dragon(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert!(state.board().area(Area::TheShades).is_empty());
        assert!(!state.board().area(Area::TheShades).has_trouble());
        assert_eq!(state.building_owner(Area::TheScours), Some(P1));
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_small_gods_protects_from_dragon() {
        let mut state = state(Die::scripted(SHADES));
        state.give_money_from_bank(P1, 21).unwrap();
        state.add_minion(Area::SmallGods, P1).unwrap();
        state.add_building(P1, Area::SmallGods).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();

        // Three dollars shield one minion; the second cannot be paid for.
        let mut choices = ScriptedChoices::new().with_yes_no([true, true]);
        dragon(&mut state, &ctx(), &mut choices).unwrap();
        assert_eq!(state.board().area(Area::TheShades).minions_of(P1), 1);
        assert_eq!(state.player(P1).money(), 0);
        assert_eq!(choices.prompts().len(), 1);
    }

    #[test]
    fn test_small_gods_charges_for_each_minion() {
        let mut state = state(Die::scripted(SHADES));
        state.give_money_from_bank(P1, 24).unwrap();
        state.add_minion(Area::SmallGods, P1).unwrap();
        state.add_building(P1, Area::SmallGods).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();

        let mut choices = ScriptedChoices::new().with_yes_no([true, true]);
        dragon(&mut state, &ctx(), &mut choices).unwrap();
        assert_eq!(state.board().area(Area::TheShades).minions_of(P1), 2);
        assert_eq!(state.player(P1).money(), 0);
        assert_eq!(choices.prompts().len(), 2);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_small_gods_declined_for_one_minion() {
        let mut state = state(Die::scripted(SHADES));
        state.give_money_from_bank(P1, 24).unwrap();
        state.add_minion(Area::SmallGods, P1).unwrap();
        state.add_building(P1, Area::SmallGods).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();
        state.add_minion(Area::TheShades, P1).unwrap();

        let mut choices = ScriptedChoices::new().with_yes_no([false, true]);
        dragon(&mut state, &ctx(), &mut choices).unwrap();
        assert_eq!(state.board().area(Area::TheShades).minions_of(P1), 1);
        assert_eq!(state.player(P1).money(), 3);
    }

    #[test]
    fn test_explosion_removes_building() {
        let mut state = state(Die::scripted(SHADES));
        state.give_money_from_bank(P0, 6).unwrap();
        state.add_building(P0, Area::TheShades).unwrap();
        explosion(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert_eq!(state.building_owner(Area::TheShades), None);
        assert_eq!(state.player(P0).buildings_in_reserve(), 6);
        assert!(state.player(P0).city_cards().is_empty());
    }

    #[test]
    fn test_trolls_stop_when_supply_runs_out() {
        let config = GameConfig::default().with_supply(2, 4);
        let mut state = GameState::new(config, &["A", "B"], Die::new(4)).unwrap();
        trolls(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert_eq!(state.board().pieces_on_board(Piece::Troll), 2);
        assert_eq!(state.supply().available(Piece::Troll), 0);
    }

    #[test]
    fn test_demons_cause_trouble_with_minions() {
        let mut state = state(Die::scripted([4, 1, 4, 1, 4, 1, 4, 1]));
        state.add_minion(Area::TheShades, P1).unwrap();
        demons(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert_eq!(state.board().area(Area::TheShades).demons(), 4);
        assert!(state.board().area(Area::TheShades).has_trouble());
    }

    #[test]
    fn test_mysterious_murders() {
        // P0 rolls The Shades, P1 rolls Dolly Sisters (empty).
        let mut state = state(Die::scripted([4, 1, 1, 1]));
        state.add_minion(Area::TheShades, P1).unwrap();
        mysterious_murders(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert_eq!(state.board().minions_on_board(P1), 0);
    }

    #[test]
    fn test_riots_end_the_game_at_threshold() {
        let config = GameConfig::default().with_riot_threshold(2);
        let mut state = GameState::new(config, &["A", "B"], Die::new(1)).unwrap();
        state.add_trouble(Area::TheHippo).unwrap();
        riots(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert_eq!(state.turn().status(), GameStatus::Ready);

        state.add_trouble(Area::Dimwell).unwrap();
        riots(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert_eq!(state.turn().status(), GameStatus::Finished);
        assert_eq!(state.turn().game_end(), Some(GameEnd::Riots));
    }

    #[test]
    fn test_subsidence() {
        let mut state = state(Die::new(1));
        state.give_money_from_bank(P0, 14).unwrap();
        state.add_building(P0, Area::TheShades).unwrap();
        state.add_building(P0, Area::Dimwell).unwrap();
        // Pay for The Shades, let Dimwell go.
        let mut choices = ScriptedChoices::new().with_yes_no([true, false]);
        subsidence(&mut state, &ctx(), &mut choices).unwrap();
        assert_eq!(state.building_owner(Area::TheShades), Some(P0));
        assert_eq!(state.building_owner(Area::Dimwell), None);
        assert_eq!(state.player(P0).money(), 0);
    }

    #[test]
    fn test_fog() {
        let mut state = state(Die::new(1));
        fog(&mut state, &ctx(), &mut ScriptedChoices::new()).unwrap();
        assert_eq!(state.player_deck().len(), 19);
        assert_eq!(state.player_deck().discard_pile().count(), 5);
    }
}
