use rust_decimal::Decimal;

use crate::domain::AccountId;

/// One entry of an account's transaction log.
///
/// The recipient of a transfer logs a plain `Deposited` entry; only the
/// sender logs `Transferred`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Deposited(Decimal),
    Withdrawn(Decimal),
    Transferred { amount: Decimal, to: AccountId },
}

impl core::fmt::Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Record::Deposited(amount) => write!(f, "Deposited: {}", amount),
            Record::Withdrawn(amount) => write!(f, "Withdrawn: {}", amount),
            Record::Transferred { amount, to } => {
                write!(f, "Transferred: {} to account {}", amount, to)
            }
        }
    }
}
