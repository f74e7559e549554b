use crate::admin::Admin;
use crate::domain::{
    Command, Error, Outcome,
    traits::{CommandStream, OutcomeSink, Reporter},
};
use crate::registry::SharedRegistry;
use crate::user::User;

use futures::StreamExt;

#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: CommandStream,
    O: OutcomeSink,
    D: Reporter,
{
    ingestion: I,
    output: O,
    reporter: D,
    registry: SharedRegistry,
    admin: Admin,
}

impl<I, O, D> Engine<I, O, D>
where
    I: CommandStream,
    O: OutcomeSink,
    D: Reporter,
{
    pub fn new(ingestion: I, output: O, reporter: D, registry: SharedRegistry) -> Self {
        let admin = Admin::new(registry.clone());
        Self {
            ingestion,
            output,
            reporter,
            registry,
            admin,
        }
    }

    /// Replays every command. Rejected commands go to the reporter; only
    /// output failures abort the run.
    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(cmd) = res.next().await {
            match cmd {
                Ok(cmd) => {
                    tracing::debug!(command = %cmd, "applying");
                    match self.apply_command(cmd) {
                        Ok(outcome) => self.output.record(&outcome)?,
                        Err(e) => self.reporter.report(&e),
                    }
                }
                Err(e) => self.reporter.report(&e),
            }
        }

        Ok(())
    }

    fn apply_command(&mut self, cmd: Command) -> Result<Outcome, Error> {
        match cmd {
            Command::Create {
                account,
                initial_balance,
            } => {
                self.admin.create_account(&account, initial_balance)?;
                Ok(Outcome::AccountCreated {
                    account,
                    initial_balance,
                })
            }
            Command::Deposit { account, amount } => {
                self.user(account).deposit(amount)?;
                Ok(Outcome::Deposited { amount })
            }
            Command::Withdraw { account, amount } => {
                self.user(account).withdraw(amount)?;
                Ok(Outcome::Withdrawn { amount })
            }
            Command::Transfer {
                account,
                amount,
                recipient,
            } => {
                self.user(account).transfer(amount, &recipient)?;
                Ok(Outcome::Transferred { amount, recipient })
            }
            Command::Balance { account } => {
                let balance = self.user(account.clone()).balance()?;
                Ok(Outcome::Balance { account, balance })
            }
            Command::History { account } => {
                let records = self.user(account.clone()).history()?;
                Ok(Outcome::History { account, records })
            }
            Command::Statement { account } => {
                let mut buf = Vec::new();
                self.registry.lock().print_history(&account, &mut buf)?;
                Ok(Outcome::Statement(
                    String::from_utf8_lossy(&buf).into_owned(),
                ))
            }
            Command::Loan { account } => {
                let amount = self.registry.lock().loan(&account)?;
                Ok(Outcome::LoanCredited { account, amount })
            }
            Command::TotalBalance => Ok(Outcome::TotalBalance(self.admin.check_total_balance())),
            Command::TotalLoanAmount => Ok(Outcome::TotalLoanAmount(
                self.admin.check_total_loan_amount(),
            )),
            Command::EnableLoans => Ok(Outcome::LoanFeature {
                enabled: self.admin.enable_loan_feature(),
            }),
            Command::DisableLoans => Ok(Outcome::LoanFeature {
                enabled: self.admin.disable_loan_feature(),
            }),
        }
    }

    fn user(&self, account: String) -> User {
        User::new(self.registry.clone(), account)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        let snapshot = self.registry.lock().snapshot();
        self.output.flush(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use futures::stream::{self, Stream};
    use parking_lot::Mutex;
    use rust_decimal_macros::dec;
    use std::pin::Pin;
    use std::sync::Arc;

    struct VecStream(Vec<Result<Command, Error>>);

    impl CommandStream for VecStream {
        type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

        fn stream(&mut self) -> Self::CmdStream {
            Box::pin(stream::iter(std::mem::take(&mut self.0)))
        }
    }

    #[derive(Default)]
    struct CollectingSink {
        outcomes: Vec<Outcome>,
        table: Vec<(String, rust_decimal::Decimal)>,
    }

    impl OutcomeSink for CollectingSink {
        fn record(&mut self, outcome: &Outcome) -> Result<(), Error> {
            self.outcomes.push(outcome.clone());
            Ok(())
        }

        fn flush(&mut self, accounts: &[(String, rust_decimal::Decimal)]) -> Result<(), Error> {
            self.table = accounts.to_vec();
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct CollectingReporter(Arc<Mutex<Vec<String>>>);

    impl Reporter for CollectingReporter {
        fn report(&self, error: &Error) {
            self.0.lock().push(error.to_string());
        }
    }

    fn create(id: &str, amount: rust_decimal::Decimal) -> Result<Command, Error> {
        Ok(Command::Create {
            account: id.into(),
            initial_balance: amount,
        })
    }

    #[tokio::test]
    async fn replays_reference_scenario() {
        let commands = vec![
            create("A", dec!(1000)),
            create("B", dec!(5000)),
            Ok(Command::Deposit {
                account: "A".into(),
                amount: dec!(2000),
            }),
            Ok(Command::Withdraw {
                account: "A".into(),
                amount: dec!(500),
            }),
            Ok(Command::Withdraw {
                account: "A".into(),
                amount: dec!(3000),
            }),
            Ok(Command::Transfer {
                account: "A".into(),
                amount: dec!(800),
                recipient: "B".into(),
            }),
            Ok(Command::Loan {
                account: "A".into(),
            }),
            Ok(Command::TotalBalance),
            Ok(Command::TotalLoanAmount),
            Ok(Command::DisableLoans),
            Ok(Command::Loan {
                account: "B".into(),
            }),
        ];
        let registry = Registry::new().shared();
        let reporter = CollectingReporter::default();
        let mut engine = Engine::new(
            VecStream(commands),
            CollectingSink::default(),
            reporter.clone(),
            registry.clone(),
        );

        engine.process().await.unwrap();
        engine.flush().unwrap();

        let rejected = reporter.0.lock().clone();
        assert_eq!(rejected.len(), 2);
        assert!(rejected[0].starts_with("Insufficient funds in account A"));
        assert_eq!(rejected[1], Error::LoanFeatureDisabled.to_string());

        let sink = &engine.output;
        assert!(sink.outcomes.contains(&Outcome::LoanCredited {
            account: "A".into(),
            amount: dec!(3400),
        }));
        assert!(sink.outcomes.contains(&Outcome::TotalBalance(dec!(6000))));
        assert!(sink.outcomes.contains(&Outcome::TotalLoanAmount(dec!(3400))));
        assert_eq!(
            sink.table,
            vec![("A".to_string(), dec!(5100)), ("B".to_string(), dec!(5800))]
        );
        assert!(!registry.lock().loan_enabled());
    }

    #[tokio::test]
    async fn ingestion_errors_are_reported_and_skipped() {
        let commands = vec![
            Err(Error::Ingestion("Invalid command: bogus".into())),
            create("A", dec!(1)),
            create("A", dec!(2)),
            Ok(Command::Statement {
                account: "A".into(),
            }),
        ];
        let reporter = CollectingReporter::default();
        let mut engine = Engine::new(
            VecStream(commands),
            CollectingSink::default(),
            reporter.clone(),
            Registry::new().shared(),
        );

        engine.process().await.unwrap();

        assert_eq!(reporter.0.lock().len(), 2);
        assert_eq!(
            engine.output.outcomes.last(),
            Some(&Outcome::Statement(
                "Transaction history for account A:\n".to_string()
            ))
        );
    }
}
