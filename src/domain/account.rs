use rust_decimal::Decimal;

use crate::domain::{Error, Record};

pub type AccountId = String;

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    balance: Decimal,     // not validated at construction, may start negative
    history: Vec<Record>, // append-only
}

impl Account {
    pub fn new(id: AccountId, initial_balance: Decimal) -> Self {
        Self {
            id,
            balance: initial_balance,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Read-only view of the log, oldest first.
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// Credits `amount` unconditionally. Zero and negative amounts are accepted.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        self.balance = self.credited(amount)?;
        self.history.push(Record::Deposited(amount));
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        self.ensure_funds(amount)?;

        self.balance = self.debited(amount)?;
        self.history.push(Record::Withdrawn(amount));
        Ok(())
    }

    /// Moves `amount` to `recipient`, which logs it through its own `deposit`.
    pub fn transfer(&mut self, amount: Decimal, recipient: &mut Account) -> Result<(), Error> {
        self.ensure_funds(amount)?;

        let remaining = self.debited(amount)?;
        recipient.deposit(amount)?;
        self.balance = remaining;
        self.history.push(Record::Transferred {
            amount,
            to: recipient.id.clone(),
        });
        Ok(())
    }

    /// Transfer where sender and recipient are the same account.
    pub fn transfer_to_self(&mut self, amount: Decimal) -> Result<(), Error> {
        self.ensure_funds(amount)?;

        // Debit and credit cancel out; only the debit can overflow.
        self.debited(amount)?;
        self.history.push(Record::Deposited(amount));
        self.history.push(Record::Transferred {
            amount,
            to: self.id.clone(),
        });
        Ok(())
    }

    pub fn has_funds(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    fn ensure_funds(&self, amount: Decimal) -> Result<(), Error> {
        if !self.has_funds(amount) {
            return Err(Error::InsufficientFunds {
                account: self.id.clone(),
                balance: self.balance,
                requested: amount,
            });
        }
        Ok(())
    }

    fn credited(&self, amount: Decimal) -> Result<Decimal, Error> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| Error::AmountOverflow(self.id.clone()))
    }

    fn debited(&self, amount: Decimal) -> Result<Decimal, Error> {
        self.balance
            .checked_sub(amount)
            .ok_or_else(|| Error::AmountOverflow(self.id.clone()))
    }
}
