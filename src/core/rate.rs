//! Resolved exchange rate and conversion

use crate::core::error::RateError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Display;

/// Amount of `to` bought by one unit of `from`, as published for `date`.
///
/// `date` is the day the provider's data reflects, which can differ from the
/// day that was asked for when the provider falls back to the closest trading day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRate {
    from: String,
    to: String,
    rate: f64,
    date: NaiveDate,
}

impl ExchangeRate {
    pub fn new(from: &str, to: &str, rate: f64, date: NaiveDate) -> Result<Self, RateError> {
        if from.is_empty() || to.is_empty() {
            return Err(RateError::data_format("Currency codes must not be empty"));
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateError::data_format(format!(
                "Rate {rate} for {from}/{to} is not a positive finite number"
            )));
        }

        Ok(ExchangeRate {
            from: from.to_string(),
            to: to.to_string(),
            rate,
            date,
        })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Converts `amount` of `from` into `to`.
    pub fn convert(&self, amount: f64) -> f64 {
        self.rate * amount
    }
}

impl Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "1 {} = {:.4} {} ({})",
            self.from, self.rate, self.to, self.date
        )
    }
}
