use rust_decimal::Decimal;

use crate::domain::{AccountId, Record};

/// Successful result of one applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AccountCreated {
        account: AccountId,
        initial_balance: Decimal,
    },
    Deposited {
        amount: Decimal,
    },
    Withdrawn {
        amount: Decimal,
    },
    Transferred {
        amount: Decimal,
        recipient: AccountId,
    },
    Balance {
        account: AccountId,
        balance: Decimal,
    },
    History {
        account: AccountId,
        records: Vec<Record>,
    },
    /// Pre-rendered output of `Registry::print_history`.
    Statement(String),
    LoanCredited {
        account: AccountId,
        amount: Decimal,
    },
    TotalBalance(Decimal),
    TotalLoanAmount(Decimal),
    LoanFeature {
        enabled: bool,
    },
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::AccountCreated {
                account,
                initial_balance,
            } => write!(
                f,
                "Account {} created successfully with balance {}",
                account, initial_balance
            ),
            Outcome::Deposited { amount } => write!(f, "Amount {} deposited successfully.", amount),
            Outcome::Withdrawn { amount } => write!(f, "Amount {} withdrawn successfully.", amount),
            Outcome::Transferred { amount, recipient } => write!(
                f,
                "Amount {} transferred to account {} successfully.",
                amount, recipient
            ),
            Outcome::Balance { account, balance } => {
                write!(f, "Account {} balance: {}", account, balance)
            }
            Outcome::History { account, records } => {
                let records: Vec<String> = records.iter().map(|r| r.to_string()).collect();
                write!(
                    f,
                    "Account {} transaction history: [{}]",
                    account,
                    records.join(", ")
                )
            }
            Outcome::Statement(text) => write!(f, "{}", text.trim_end()),
            Outcome::LoanCredited { account, amount } => {
                write!(f, "Loan of {} credited to account {}", amount, account)
            }
            Outcome::TotalBalance(total) => write!(f, "Total bank balance: {}", total),
            Outcome::TotalLoanAmount(total) => write!(f, "Total loan amount: {}", total),
            Outcome::LoanFeature { enabled: true } => write!(f, "Loan feature enabled."),
            Outcome::LoanFeature { enabled: false } => write!(f, "Loan feature disabled."),
        }
    }
}
