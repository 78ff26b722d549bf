//! Interrupt protocol: letting other players cancel or replace an effect
//! before it commits.
//!
//! ## Key Types
//!
//! - `PendingEffect`: what is about to happen and to whom
//! - `InterruptOutcome`: proceed, cancelled, or replaced
//! - `offer`: the turn-ordered offer loop
//!
//! Which cards can react is declared by their `Reaction` capability tag,
//! not by a list of card names.

pub mod protocol;
pub mod reaction;

pub use protocol::{offer, InterruptOutcome};
pub use reaction::{PendingEffect, PendingKind};
