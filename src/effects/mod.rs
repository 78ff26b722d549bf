//! Effect system: the functions behind card symbols, card text, city area
//! cards and random events.
//!
//! - `EffectContext`: who is acting and which card is in play
//! - `Resolution`: how an effect finished
//! - `EffectRegistry`: dispatch tables, checkpointing around every effect
//!
//! Effect functions share one signature (`EffectFn`) and receive the game
//! state, the context and a `ChoiceProvider` for every decision. They pick
//! targets first and mutate last.

pub mod city;
mod context;
pub mod events;
mod registry;
pub mod symbols;
pub mod targeting;
pub mod text;

pub use context::{EffectContext, EffectFn, Resolution};
pub use registry::EffectRegistry;
