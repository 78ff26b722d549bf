//! Effect registry: dispatch tables from symbols, card text, city areas and
//! random events to effect functions.
//!
//! Every dispatch is transactional. The state is checkpointed before the
//! effect runs and restored if it fails, so a failed effect is a no-op.

use std::fmt::Display;

use log::{debug, info};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::context::{EffectContext, EffectFn, Resolution};
use super::{city, events, symbols, text};
use crate::board::Area;
use crate::cards::{RandomEvent, Symbol, TextEffect};
use crate::core::{GameError, GameResult, GameState};
use crate::rules::ChoiceProvider;

static STANDARD: Lazy<EffectRegistry> = Lazy::new(EffectRegistry::build_standard);

/// Lookup tables for every effect the engine can resolve.
///
/// ## Example
///
/// ```
/// use ankh_engine::cards::Symbol;
/// use ankh_engine::effects::EffectRegistry;
///
/// let registry = EffectRegistry::standard();
/// assert!(registry.has_symbol(Symbol::PlaceMinion));
/// ```
#[derive(Clone, Debug)]
pub struct EffectRegistry {
    symbols: FxHashMap<Symbol, EffectFn>,
    texts: FxHashMap<TextEffect, EffectFn>,
    cities: FxHashMap<Area, EffectFn>,
    events: FxHashMap<RandomEvent, EffectFn>,
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl EffectRegistry {
    /// The full rule set.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// A registry with nothing registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            symbols: FxHashMap::default(),
            texts: FxHashMap::default(),
            cities: FxHashMap::default(),
            events: FxHashMap::default(),
        }
    }

    fn build_standard() -> Self {
        let mut registry = Self::empty();
        for symbol in Symbol::ALL {
            let effect: EffectFn = match symbol {
                Symbol::PlaceMinion => symbols::place_minion,
                Symbol::PlaceBuilding => symbols::place_building,
                Symbol::Assassination => symbols::assassination,
                Symbol::RemoveTrouble => symbols::remove_trouble,
                Symbol::TakeMoney => symbols::take_money,
                Symbol::RandomEvent => symbols::random_event,
                Symbol::PlayAnotherCard => symbols::play_another_card,
            };
            registry.symbols.insert(symbol, effect);
        }
        for text_effect in TextEffect::ALL {
            let effect: EffectFn = match text_effect {
                TextEffect::TaxRivals => text::tax_rivals,
                TextEffect::GambleOnDie => text::gamble_on_die,
                TextEffect::MoveRivalMinion => text::move_rival_minion,
                TextEffect::TakeLoan => text::take_loan,
            };
            registry.texts.insert(text_effect, effect);
        }
        for area in Area::ALL {
            let effect: EffectFn = match area {
                Area::DollySisters => city::dolly_sisters,
                Area::UnrealEstate => city::unreal_estate,
                Area::DragonsLanding => city::dragons_landing,
                Area::SmallGods => city::small_gods,
                Area::TheScours => city::the_scours,
                Area::TheHippo => city::the_hippo,
                Area::TheShades => city::the_shades,
                Area::Dimwell => city::dimwell,
                Area::Longwall => city::longwall,
                Area::IsleOfGods => city::isle_of_gods,
                Area::SevenSleepers => city::seven_sleepers,
                Area::NapHill => city::nap_hill,
            };
            registry.cities.insert(area, effect);
        }
        for event in RandomEvent::ALL {
            let effect: EffectFn = match event {
                RandomEvent::Dragon => events::dragon,
                RandomEvent::Explosion => events::explosion,
                RandomEvent::Trolls => events::trolls,
                RandomEvent::Demons => events::demons,
                RandomEvent::MysteriousMurders => events::mysterious_murders,
                RandomEvent::Riots => events::riots,
                RandomEvent::Subsidence => events::subsidence,
                RandomEvent::Fog => events::fog,
            };
            registry.events.insert(event, effect);
        }
        registry
    }

    // === Overrides ===

    #[must_use]
    pub fn with_symbol(mut self, symbol: Symbol, effect: EffectFn) -> Self {
        self.symbols.insert(symbol, effect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text_effect: TextEffect, effect: EffectFn) -> Self {
        self.texts.insert(text_effect, effect);
        self
    }

    #[must_use]
    pub fn with_city(mut self, area: Area, effect: EffectFn) -> Self {
        self.cities.insert(area, effect);
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: RandomEvent, effect: EffectFn) -> Self {
        self.events.insert(event, effect);
        self
    }

    #[must_use]
    pub fn has_symbol(&self, symbol: Symbol) -> bool {
        self.symbols.contains_key(&symbol)
    }

    #[must_use]
    pub fn has_text(&self, text_effect: TextEffect) -> bool {
        self.texts.contains_key(&text_effect)
    }

    #[must_use]
    pub fn has_city(&self, area: Area) -> bool {
        self.cities.contains_key(&area)
    }

    #[must_use]
    pub fn has_event(&self, event: RandomEvent) -> bool {
        self.events.contains_key(&event)
    }

    // === Dispatch ===

    /// Resolve a card symbol.
    ///
    /// A drawn random event is resolved within the same transaction and
    /// discarded; the result is `Resolution::Event` naming it.
    pub fn dispatch_symbol(
        &self,
        symbol: Symbol,
        state: &mut GameState,
        ctx: &EffectContext,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        let effect = lookup(&self.symbols, symbol, "symbol")?;
        self.transact(symbol, effect, state, ctx, choices)
    }

    /// Resolve a card's text.
    pub fn dispatch_text(
        &self,
        text_effect: TextEffect,
        state: &mut GameState,
        ctx: &EffectContext,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        let effect = lookup(&self.texts, text_effect, "card text")?;
        self.transact(format!("{text_effect:?}"), effect, state, ctx, choices)
    }

    /// Resolve the ability of a city area card.
    pub fn dispatch_city(
        &self,
        area: Area,
        state: &mut GameState,
        ctx: &EffectContext,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        let effect = lookup(&self.cities, area, "city area")?;
        self.transact(area, effect, state, ctx, choices)
    }

    /// Resolve a random event directly, without drawing it.
    pub fn dispatch_event(
        &self,
        event: RandomEvent,
        state: &mut GameState,
        ctx: &EffectContext,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        let effect = lookup(&self.events, event, "random event")?;
        self.transact(event, effect, state, ctx, choices)
    }

    fn transact(
        &self,
        label: impl Display,
        effect: EffectFn,
        state: &mut GameState,
        ctx: &EffectContext,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        let checkpoint = state.clone();
        let result = effect(state, ctx, choices)
            .and_then(|resolution| self.follow_up(resolution, state, ctx, choices));
        match result {
            Ok(resolution) => {
                debug!("{} resolved {label}: {resolution:?}", ctx.actor);
                Ok(resolution)
            }
            Err(err) => {
                *state = checkpoint;
                debug!("{} failed to resolve {label}: {err}", ctx.actor);
                Err(err)
            }
        }
    }

    fn follow_up(
        &self,
        resolution: Resolution,
        state: &mut GameState,
        ctx: &EffectContext,
        choices: &mut dyn ChoiceProvider,
    ) -> GameResult<Resolution> {
        if let Resolution::Event(event) = resolution {
            let effect = lookup(&self.events, event, "random event")?;
            info!("random event: {event}");
            effect(state, ctx, choices)?;
            state.discard_random_event(event);
        }
        Ok(resolution)
    }
}

fn lookup<K>(table: &FxHashMap<K, EffectFn>, key: K, what: &str) -> GameResult<EffectFn>
where
    K: std::hash::Hash + Eq + std::fmt::Debug,
{
    table
        .get(&key)
        .copied()
        .ok_or_else(|| GameError::transition(format!("no effect registered for {what} {key:?}")))
}
