use std::io::Write;

use rust_decimal::Decimal;

use crate::domain::{AccountId, Error, Outcome, OutcomeSink};

/// Writes outcomes one per line, then a closing `account,balance` table.
#[derive(Debug)]
pub struct WriterOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterOutput<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> OutcomeSink for WriterOutput<W> {
    fn record(&mut self, outcome: &Outcome) -> Result<(), Error> {
        writeln!(self.writer, "{}", outcome)?;
        Ok(())
    }

    fn flush(&mut self, accounts: &[(AccountId, Decimal)]) -> Result<(), Error> {
        writeln!(self.writer, "account,balance")?;
        for (id, balance) in accounts {
            writeln!(self.writer, "{},{}", id, balance)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_outcomes_then_table() {
        let mut output = WriterOutput::new(Vec::new());
        output
            .record(&Outcome::LoanCredited {
                account: "A".into(),
                amount: dec!(3400),
            })
            .unwrap();
        output
            .flush(&[("A".into(), dec!(5100)), ("B".into(), dec!(5800))])
            .unwrap();

        assert_eq!(
            String::from_utf8(output.into_inner()).unwrap(),
            "Loan of 3400 credited to account A\n\
             account,balance\n\
             A,5100\n\
             B,5800\n"
        );
    }
}
