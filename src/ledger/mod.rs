//! Resource ledger: the bank and the shared troll and demon supply.
//!
//! Money transfers between players and the bank are composed on
//! [`GameState`](crate::core::GameState) so that `bank + Σ player money`
//! never changes; this module only holds the pools.

pub mod bank;
pub mod supply;

pub use bank::Bank;
pub use supply::{Piece, Supply};
