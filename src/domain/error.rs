use rust_decimal::Decimal;

use crate::domain::AccountId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Account {0} not found")]
    AccountNotFound(AccountId),

    #[error("Account {0} already exists")]
    AccountAlreadyExists(AccountId),

    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountId,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Amount overflow on account {0}")]
    AmountOverflow(AccountId),

    #[error("Loan feature is currently disabled by the admin")]
    LoanFeatureDisabled,
}
