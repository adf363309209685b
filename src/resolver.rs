//! Rate resolution pipeline: validate, build, fetch, parse.

use crate::core::config::FixerProviderConfig;
use crate::core::error::{RateError, SymbolParam};
use crate::core::rate::ExchangeRate;
use crate::core::symbols::{SymbolTable, Symbols};
use crate::providers::fixer;
use crate::providers::http::{Fetch, HttpFetcher};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Resolves exchange rates against one provider endpoint.
///
/// The blocking and async entry points share the same pipeline; the async
/// ones run it on the tokio blocking pool.
#[derive(Clone)]
pub struct RateResolver {
    base_url: String,
    fetcher: Arc<dyn Fetch>,
    symbols: Arc<dyn SymbolTable>,
}

impl RateResolver {
    pub fn new(
        base_url: &str,
        fetcher: impl Fetch + 'static,
        symbols: impl SymbolTable + 'static,
    ) -> Self {
        RateResolver {
            base_url: base_url.to_string(),
            fetcher: Arc::new(fetcher),
            symbols: Arc::new(symbols),
        }
    }

    /// Resolver for the Fixer API over HTTP with the Fixer symbol set.
    pub fn fixer(config: &FixerProviderConfig) -> Self {
        Self::new(
            &config.base_url,
            HttpFetcher::new(config.timeout()),
            Symbols::fixer(),
        )
    }

    fn validate(&self, param: SymbolParam, code: &str) -> Result<String, RateError> {
        let code = code.to_uppercase();
        if !self.symbols.is_valid(&code) {
            return Err(RateError::invalid_symbol(param, &code));
        }
        Ok(code)
    }

    #[instrument(name = "RateResolve", skip(self, api_key))]
    pub fn rate(
        &self,
        api_key: &str,
        from: &str,
        to: &str,
        date: Option<NaiveDate>,
    ) -> Result<ExchangeRate, RateError> {
        let from = self.validate(SymbolParam::From, from)?;
        let to = self.validate(SymbolParam::To, to)?;

        let url = fixer::build_reference(&self.base_url, api_key, date);
        debug!(%from, %to, "Requesting rates");

        let body = self.fetcher.fetch(&url)?;
        let rate = fixer::parse(&body, &from, &to)?;
        debug!(rate = rate.rate(), date = %rate.date(), "Resolved rate");
        Ok(rate)
    }

    pub fn convert(
        &self,
        api_key: &str,
        from: &str,
        to: &str,
        amount: f64,
        date: Option<NaiveDate>,
    ) -> Result<f64, RateError> {
        Ok(self.rate(api_key, from, to, date)?.convert(amount))
    }

    pub async fn rate_async(
        &self,
        api_key: &str,
        from: &str,
        to: &str,
        date: Option<NaiveDate>,
    ) -> Result<ExchangeRate, RateError> {
        let resolver = self.clone();
        let (api_key, from, to) = (api_key.to_string(), from.to_string(), to.to_string());

        match tokio::task::spawn_blocking(move || resolver.rate(&api_key, &from, &to, date)).await
        {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => Err(RateError::transport(format!(
                "Rate resolution was cancelled: {e}"
            ))),
        }
    }

    pub async fn convert_async(
        &self,
        api_key: &str,
        from: &str,
        to: &str,
        amount: f64,
        date: Option<NaiveDate>,
    ) -> Result<f64, RateError> {
        Ok(self
            .rate_async(api_key, from, to, date)
            .await?
            .convert(amount))
    }
}
