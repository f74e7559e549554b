use futures::Stream;

use crate::domain::{AccountId, Command, Error, Outcome};
use rust_decimal::Decimal;

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

pub trait Reporter {
    fn report(&self, error: &Error);
}

pub trait OutcomeSink {
    fn record(&mut self, outcome: &Outcome) -> Result<(), Error>;

    /// Writes the closing `account,balance` table.
    fn flush(&mut self, accounts: &[(AccountId, Decimal)]) -> Result<(), Error>;
}
