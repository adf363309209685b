pub mod cli;
pub mod core;
pub mod providers;
pub mod resolver;

pub use crate::core::{ExchangeRate, RateError, SymbolParam};
pub use crate::resolver::RateResolver;

use crate::core::config::{AppConfig, FixerProviderConfig};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Rate for `from`/`to` from the Fixer API, latest or as of `date`.
///
/// Blocks the calling thread on the request; use [`rate_async`] from async code.
pub fn rate(
    api_key: &str,
    from: &str,
    to: &str,
    date: Option<NaiveDate>,
) -> Result<ExchangeRate, RateError> {
    RateResolver::fixer(&FixerProviderConfig::default()).rate(api_key, from, to, date)
}

/// Converts `amount` of `from` into `to` using the Fixer API.
pub fn convert(
    api_key: &str,
    from: &str,
    to: &str,
    amount: f64,
    date: Option<NaiveDate>,
) -> Result<f64, RateError> {
    RateResolver::fixer(&FixerProviderConfig::default()).convert(api_key, from, to, amount, date)
}

pub async fn rate_async(
    api_key: &str,
    from: &str,
    to: &str,
    date: Option<NaiveDate>,
) -> Result<ExchangeRate, RateError> {
    RateResolver::fixer(&FixerProviderConfig::default())
        .rate_async(api_key, from, to, date)
        .await
}

pub async fn convert_async(
    api_key: &str,
    from: &str,
    to: &str,
    amount: f64,
    date: Option<NaiveDate>,
) -> Result<f64, RateError> {
    RateResolver::fixer(&FixerProviderConfig::default())
        .convert_async(api_key, from, to, amount, date)
        .await
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Rate {
        from: String,
        to: String,
        date: Option<NaiveDate>,
    },
    Convert {
        from: String,
        to: String,
        amount: f64,
        date: Option<NaiveDate>,
    },
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    api_key: Option<&str>,
) -> Result<()> {
    info!("Fixer rates starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {:?}", config.providers.fixer.base_url);

    let fixer_config = &config.providers.fixer;
    let api_key = api_key
        .or(fixer_config.api_key.as_deref())
        .context("No API key configured. Pass --api-key or set providers.fixer.api_key")?;
    let resolver = RateResolver::fixer(fixer_config);

    match command {
        AppCommand::Rate { from, to, date } => {
            cli::rate::run_rate(&resolver, api_key, &from, &to, date).await
        }
        AppCommand::Convert {
            from,
            to,
            amount,
            date,
        } => cli::rate::run_convert(&resolver, api_key, &from, &to, amount, date).await,
    }
}
