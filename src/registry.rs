use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::domain::{Account, AccountId, Error};

/// Handle shared by the facades. One lock guards every account, so a
/// transfer never has to order two locks.
pub type SharedRegistry = Arc<Mutex<Registry>>;

/// The bank: owns every account plus the aggregate counters.
#[derive(Debug)]
pub struct Registry {
    accounts: HashMap<AccountId, Account>,
    // Sum of initial balances at creation time only; later movements are not tracked.
    total_balance: Decimal,
    total_loan_amount: Decimal,
    loan_enabled: bool,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            total_balance: Decimal::ZERO,
            total_loan_amount: Decimal::ZERO,
            loan_enabled: true,
        }
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(Mutex::new(self))
    }

    pub fn create(&mut self, id: &str, initial_balance: Decimal) -> Result<(), Error> {
        match self.accounts.entry(id.to_string()) {
            Entry::Vacant(e) => {
                let total_balance = self
                    .total_balance
                    .checked_add(initial_balance)
                    .ok_or_else(|| Error::AmountOverflow(id.to_string()))?;
                e.insert(Account::new(id.to_string(), initial_balance));
                self.total_balance = total_balance;
                tracing::info!(account = id, %initial_balance, "account created");
                Ok(())
            }
            Entry::Occupied(_) => {
                tracing::warn!(account = id, "account already exists");
                Err(Error::AccountAlreadyExists(id.to_string()))
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Credits the account with twice its current balance.
    ///
    /// Nothing tracks principal, so a second loan doubles the already
    /// inflated balance. Returns the amount credited.
    pub fn loan(&mut self, id: &str) -> Result<Decimal, Error> {
        if !self.loan_enabled {
            tracing::warn!(account = id, "loan requested while feature disabled");
            return Err(Error::LoanFeatureDisabled);
        }

        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| Error::AccountNotFound(id.to_string()))?;

        let overflow = || Error::AmountOverflow(id.to_string());
        let loan_amount = account
            .balance()
            .checked_mul(Decimal::TWO)
            .ok_or_else(overflow)?;
        let total_loan_amount = self
            .total_loan_amount
            .checked_add(loan_amount)
            .ok_or_else(overflow)?;
        account.deposit(loan_amount)?;
        self.total_loan_amount = total_loan_amount;

        tracing::info!(account = id, %loan_amount, "loan credited");
        Ok(loan_amount)
    }

    /// Resolves both accounts and moves `amount` between them.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), Error> {
        if from == to {
            return self
                .accounts
                .get_mut(from)
                .ok_or_else(|| Error::AccountNotFound(from.to_string()))?
                .transfer_to_self(amount);
        }

        // Keys are distinct here, so the lookup cannot panic.
        match self.accounts.get_disjoint_mut([from, to]) {
            [Some(sender), Some(recipient)] => sender.transfer(amount, recipient),
            [None, _] => Err(Error::AccountNotFound(from.to_string())),
            [_, None] => Err(Error::AccountNotFound(to.to_string())),
        }
    }

    pub fn print_history<W: Write>(&self, id: &str, out: &mut W) -> Result<(), Error> {
        let account = self
            .get(id)
            .ok_or_else(|| Error::AccountNotFound(id.to_string()))?;

        writeln!(out, "Transaction history for account {}:", id)?;
        for record in account.history() {
            writeln!(out, "{}", record)?;
        }
        Ok(())
    }

    pub fn total_balance(&self) -> Decimal {
        self.total_balance
    }

    pub fn total_loan_amount(&self) -> Decimal {
        self.total_loan_amount
    }

    pub fn loan_enabled(&self) -> bool {
        self.loan_enabled
    }

    pub fn set_loan_enabled(&mut self, enabled: bool) -> bool {
        self.loan_enabled = enabled;
        tracing::info!(enabled, "loan feature toggled");
        self.loan_enabled
    }

    pub fn snapshot(&self) -> Vec<(AccountId, Decimal)> {
        let mut rows: Vec<_> = self
            .accounts
            .values()
            .map(|acc| (acc.id().to_string(), acc.balance()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }
}
