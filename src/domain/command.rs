use rust_decimal::Decimal;

use crate::domain::AccountId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        account: AccountId,
        initial_balance: Decimal,
    },
    Deposit {
        account: AccountId,
        amount: Decimal,
    },
    Withdraw {
        account: AccountId,
        amount: Decimal,
    },
    Transfer {
        account: AccountId,
        amount: Decimal,
        recipient: AccountId,
    },
    Balance {
        account: AccountId,
    },
    History {
        account: AccountId,
    },
    Statement {
        account: AccountId,
    },
    Loan {
        account: AccountId,
    },
    TotalBalance,
    TotalLoanAmount,
    EnableLoans,
    DisableLoans,
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Create {
                account,
                initial_balance,
            } => write!(f, "create,account={},amount={}", account, initial_balance),
            Command::Deposit { account, amount } => {
                write!(f, "deposit,account={},amount={}", account, amount)
            }
            Command::Withdraw { account, amount } => {
                write!(f, "withdraw,account={},amount={}", account, amount)
            }
            Command::Transfer {
                account,
                amount,
                recipient,
            } => write!(
                f,
                "transfer,account={},amount={},recipient={}",
                account, amount, recipient
            ),
            Command::Balance { account } => write!(f, "balance,account={}", account),
            Command::History { account } => write!(f, "history,account={}", account),
            Command::Statement { account } => write!(f, "statement,account={}", account),
            Command::Loan { account } => write!(f, "loan,account={}", account),
            Command::TotalBalance => write!(f, "total_balance"),
            Command::TotalLoanAmount => write!(f, "total_loans"),
            Command::EnableLoans => write!(f, "enable_loans"),
            Command::DisableLoans => write!(f, "disable_loans"),
        }
    }
}
