use crate::domain::{Error, Reporter};

#[derive(Default, Debug)]
pub struct StdErrReporter {}

impl Reporter for StdErrReporter {
    fn report(&self, error: &Error) {
        tracing::debug!(%error, "command rejected");
        eprintln!("Rejected: {}", error);
    }
}
