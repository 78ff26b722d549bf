//! The bank: the single shared money pool.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameResult};

/// Shared money pool. Money only moves between the bank and players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    balance: u32,
}

impl Bank {
    #[must_use]
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    #[must_use]
    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Add money paid into the bank.
    pub(crate) fn deposit(&mut self, amount: u32) {
        self.balance += amount;
    }

    /// Pay money out; the bank cannot go below zero.
    pub(crate) fn withdraw(&mut self, amount: u32) -> GameResult<()> {
        if self.balance < amount {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_increases_balance() {
        let mut bank = Bank::new(120);
        bank.deposit(6);
        assert_eq!(bank.balance(), 126);
    }

    #[test]
    fn test_withdraw() {
        let mut bank = Bank::new(5);
        assert!(bank.withdraw(3).is_ok());
        assert_eq!(bank.balance(), 2);
        assert_eq!(
            bank.withdraw(3),
            Err(GameError::InsufficientFunds { needed: 3, available: 2 })
        );
        assert_eq!(bank.balance(), 2);
    }
}
