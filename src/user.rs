use rust_decimal::Decimal;

use crate::domain::{AccountId, Error, Record};
use crate::registry::SharedRegistry;

/// Account holder's view of the registry, bound to a single account id.
///
/// The account itself stays owned by the registry; every call looks it up
/// again, so a `User` may be built before its account exists.
#[derive(Debug, Clone)]
pub struct User {
    registry: SharedRegistry,
    account_id: AccountId,
}

impl User {
    pub fn new(registry: SharedRegistry, account_id: impl Into<AccountId>) -> Self {
        Self {
            registry,
            account_id: account_id.into(),
        }
    }

    #[cfg(test)]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn deposit(&self, amount: Decimal) -> Result<(), Error> {
        let mut registry = self.registry.lock();
        let account = registry
            .get_mut(&self.account_id)
            .ok_or_else(|| self.not_found())?;

        account.deposit(amount)?;
        tracing::info!(account = %self.account_id, %amount, "deposit");
        Ok(())
    }

    pub fn withdraw(&self, amount: Decimal) -> Result<(), Error> {
        let mut registry = self.registry.lock();
        let account = registry
            .get_mut(&self.account_id)
            .ok_or_else(|| self.not_found())?;

        // Checked here as well as inside Account::withdraw.
        if !account.has_funds(amount) {
            tracing::warn!(account = %self.account_id, %amount, "withdrawal rejected");
            return Err(Error::InsufficientFunds {
                account: self.account_id.clone(),
                balance: account.balance(),
                requested: amount,
            });
        }

        account.withdraw(amount)?;
        tracing::info!(account = %self.account_id, %amount, "withdrawal");
        Ok(())
    }

    pub fn transfer(&self, amount: Decimal, recipient_id: &str) -> Result<(), Error> {
        let mut registry = self.registry.lock();
        let sender = registry
            .get(&self.account_id)
            .ok_or_else(|| self.not_found())?;
        if registry.get(recipient_id).is_none() {
            return Err(Error::AccountNotFound(recipient_id.to_string()));
        }

        if !sender.has_funds(amount) {
            tracing::warn!(account = %self.account_id, %amount, "transfer rejected");
            return Err(Error::InsufficientFunds {
                account: self.account_id.clone(),
                balance: sender.balance(),
                requested: amount,
            });
        }

        registry.transfer(&self.account_id, recipient_id, amount)?;
        tracing::info!(
            account = %self.account_id,
            recipient = recipient_id,
            %amount,
            "transfer"
        );
        Ok(())
    }

    pub fn balance(&self) -> Result<Decimal, Error> {
        let registry = self.registry.lock();
        let balance = registry
            .get(&self.account_id)
            .map(|acc| acc.balance())
            .ok_or_else(|| self.not_found())?;
        tracing::debug!(account = %self.account_id, %balance, "balance read");
        Ok(balance)
    }

    /// Owned copy of the log; later operations do not show up in it.
    pub fn history(&self) -> Result<Vec<Record>, Error> {
        let registry = self.registry.lock();
        registry
            .get(&self.account_id)
            .map(|acc| acc.history().to_vec())
            .ok_or_else(|| self.not_found())
    }

    fn not_found(&self) -> Error {
        tracing::warn!(account = %self.account_id, "account not found");
        Error::AccountNotFound(self.account_id.clone())
    }
}
