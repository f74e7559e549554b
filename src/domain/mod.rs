pub mod account;
pub mod command;
pub mod error;
pub mod outcome;
pub mod record;
pub mod traits;

pub use account::{Account, AccountId};
pub use command::Command;
pub use error::Error;
pub use outcome::Outcome;
pub use record::Record;
pub use traits::{CommandStream, OutcomeSink, Reporter};
