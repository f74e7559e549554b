mod admin;
mod config;
mod domain;
mod engine;
mod ingestion;
mod output;
mod registry;
mod report;
mod user;

use std::{fs::File, io::Read};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER, LOG_ENV};
use crate::engine::Engine;
use crate::ingestion::CsvReader;
use crate::output::WriterOutput;
use crate::registry::Registry;
use crate::report::StdErrReporter;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let source: Box<dyn Read + Send> = match &config.script {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(std::io::stdin()),
    };

    let mut registry = Registry::new();
    registry.set_loan_enabled(config.loans_enabled);
    tracing::info!(loans_enabled = registry.loan_enabled(), "registry ready");

    let mut engine = Engine::new(
        CsvReader::new(source),
        WriterOutput::stdout(),
        StdErrReporter::default(),
        registry.shared(),
    );

    engine.process().await?;
    engine.flush()?;

    Ok(())
}
