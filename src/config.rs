use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "LEDGER_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Replays a CSV script of banking commands against an in-memory ledger.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "bank_ledger")]
#[command(version)]
pub struct Config {
    /// Script to replay (header: command, account, amount, recipient); stdin when omitted
    pub script: Option<PathBuf>,

    /// Start with the loan facility disabled
    #[arg(long = "no-loans", action = ArgAction::SetFalse)]
    pub loans_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("bank_ledger").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_stdin_with_loans() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.script, None);
        assert!(config.loans_enabled);
    }

    #[test]
    fn reads_flag_and_path_in_any_order() {
        let config = parse(&["script.csv", "--no-loans"]).unwrap();
        assert_eq!(config.script, Some(PathBuf::from("script.csv")));
        assert!(!config.loans_enabled);
    }

    #[test]
    fn rejects_unknown_flag_and_extra_paths() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.csv", "b.csv"]).is_err());
    }
}
