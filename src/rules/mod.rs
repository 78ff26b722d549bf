//! Turn coordination and player decisions.
//!
//! - `ChoiceProvider`: how the engine asks players for decisions
//! - `Game`: lifecycle, turn sequence, city cards, scoring and snapshots
//!
//! The coordinator calls into the effect registry for every symbol, card
//! text and city card, and never answers a decision on a player's behalf.

mod choice;
mod turn;

pub use choice::{ChoiceProvider, ScriptedChoices};
pub use turn::{Game, Standing, Step, StepOutcome, StepReport, TurnReport};
