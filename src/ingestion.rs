use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Command, CommandStream, Error};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    command: String,
    account: Option<String>,
    amount: Option<Decimal>,
    recipient: Option<String>,
}

fn required<T>(field: Option<T>, name: &str, command: &str) -> Result<T, Error> {
    field.ok_or_else(|| Error::Ingestion(format!("{} requires field '{}'", command, name)))
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let name = row.command.trim().to_ascii_lowercase();
        let account = row.account.filter(|a| !a.is_empty());
        let recipient = row.recipient.filter(|r| !r.is_empty());

        let command = match name.as_str() {
            "create" => Command::Create {
                account: required(account, "account", &name)?,
                initial_balance: required(row.amount, "amount", &name)?,
            },
            "deposit" => Command::Deposit {
                account: required(account, "account", &name)?,
                amount: required(row.amount, "amount", &name)?,
            },
            "withdraw" => Command::Withdraw {
                account: required(account, "account", &name)?,
                amount: required(row.amount, "amount", &name)?,
            },
            "transfer" => Command::Transfer {
                account: required(account, "account", &name)?,
                amount: required(row.amount, "amount", &name)?,
                recipient: required(recipient, "recipient", &name)?,
            },
            "balance" => Command::Balance {
                account: required(account, "account", &name)?,
            },
            "history" => Command::History {
                account: required(account, "account", &name)?,
            },
            "statement" => Command::Statement {
                account: required(account, "account", &name)?,
            },
            "loan" => Command::Loan {
                account: required(account, "account", &name)?,
            },
            "total_balance" => Command::TotalBalance,
            "total_loans" => Command::TotalLoanAmount,
            "enable_loans" => Command::EnableLoans,
            "disable_loans" => Command::DisableLoans,
            other => {
                return Err(Error::Ingestion(format!("Invalid command: {}", other)));
            }
        };

        Ok(command)
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvReader<R> {
    type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::CmdStream {
        // Take ownership of the reader so the iterator we build owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Command, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
