use crate::error::{EconomyError, EconomyResult};

// Balance only moves through deposit/withdraw; an overdraw is refused, never clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    balance: u64,
}

impl Wallet {
    pub fn with_balance(balance: u64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        self.balance >= amount
    }

    pub fn deposit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub fn withdraw(&mut self, amount: u64) -> EconomyResult<()> {
        if !self.can_afford(amount) {
            return Err(EconomyError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn restore(&mut self, balance: u64) {
        self.balance = balance;
    }
}
