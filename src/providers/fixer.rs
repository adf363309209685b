//! Fixer API request construction and payload parsing

use crate::core::error::RateError;
use crate::core::rate::ExchangeRate;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct FixerResponse {
    success: Option<bool>,
    error: Option<FixerApiError>,
    date: Option<String>,
    rates: Option<HashMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
struct FixerApiError {
    code: Option<i64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    info: Option<String>,
}

/// Builds the endpoint for the latest rates, or for the snapshot of `date`.
pub fn build_reference(base_url: &str, api_key: &str, date: Option<NaiveDate>) -> String {
    let segment = date.map_or_else(
        || "latest".to_string(),
        |d| d.format(DATE_FORMAT).to_string(),
    );
    format!(
        "{}/{}?access_key={}",
        base_url.trim_end_matches('/'),
        segment,
        urlencoding::encode(api_key)
    )
}

fn parse_date(raw: &str) -> Result<NaiveDate, RateError> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| RateError::data_format(format!("Failed to parse date '{raw}': {e}")))?;
    // chrono accepts unpadded fields; the payload must be exactly YYYY-MM-DD
    if date.format(DATE_FORMAT).to_string() != raw {
        return Err(RateError::data_format(format!(
            "Date '{raw}' is not in YYYY-MM-DD format"
        )));
    }
    Ok(date)
}

fn lookup_rate(rates: &HashMap<String, f64>, code: &str) -> Result<f64, RateError> {
    rates
        .get(code)
        .copied()
        .ok_or_else(|| RateError::data_format(format!("No rate found for currency: {code}")))
}

/// Decodes a Fixer payload into the cross rate `rates[to] / rates[from]`.
///
/// The payload's rates are relative to one anchor currency which need not be
/// `from` or `to`. The returned date is the payload's own date, not the
/// requested one.
pub fn parse(body: &str, from: &str, to: &str) -> Result<ExchangeRate, RateError> {
    let data: FixerResponse = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => {
            error!(error = ?e, "Failed to parse rate response");
            return Err(RateError::data_format(format!(
                "Failed to parse JSON response: {e}"
            )));
        }
    };

    if data.success == Some(false) {
        let api_error = data.error.unwrap_or(FixerApiError {
            code: None,
            kind: None,
            info: None,
        });
        return Err(RateError::data_format(format!(
            "Provider reported error {} ({}): {}",
            api_error.code.map_or_else(|| "?".to_string(), |c| c.to_string()),
            api_error.kind.as_deref().unwrap_or("unknown"),
            api_error.info.as_deref().unwrap_or("no details"),
        )));
    }

    let rates = data
        .rates
        .ok_or_else(|| RateError::data_format("Response has no rates"))?;
    let from_rate = lookup_rate(&rates, from)?;
    let to_rate = lookup_rate(&rates, to)?;
    debug!(from_rate, to_rate, "Found anchor relative rates");

    let raw_date = data
        .date
        .ok_or_else(|| RateError::data_format("Response has no date"))?;
    let date = parse_date(&raw_date)?;

    ExchangeRate::new(from, to, to_rate / from_rate, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_JSON: &str = r#"{
        "success": true,
        "timestamp": 1476921599,
        "historical": true,
        "base": "EUR",
        "date": "2016-10-19",
        "rates": {
            "EUR": 1.0,
            "GBP": 0.75,
            "USD": 1.0,
            "DKK": 7.44
        }
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_reference_latest() {
        assert_eq!(
            build_reference("http://data.fixer.io/api", "abc123", None),
            "http://data.fixer.io/api/latest?access_key=abc123"
        );
    }

    #[test]
    fn test_build_reference_historical() {
        assert_eq!(
            build_reference("http://data.fixer.io/api/", "abc123", Some(date(2016, 1, 5))),
            "http://data.fixer.io/api/2016-01-05?access_key=abc123"
        );
    }

    #[test]
    fn test_build_reference_encodes_key() {
        assert_eq!(
            build_reference("http://h", "a b&c", None),
            "http://h/latest?access_key=a%20b%26c"
        );
    }

    #[test]
    fn test_parse_cross_rate() {
        let rate = parse(MOCK_JSON, "GBP", "USD").unwrap();
        assert_eq!(rate.from(), "GBP");
        assert_eq!(rate.to(), "USD");
        assert!((rate.rate() - 1.0 / 0.75).abs() < 1e-12);
        assert_eq!(rate.date(), date(2016, 10, 19));
    }

    #[test]
    fn test_parse_anchor_as_from() {
        let rate = parse(MOCK_JSON, "EUR", "GBP").unwrap();
        assert!((rate.convert(100.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_same_currency_passes_through() {
        let body = r#"{"date": "2016-10-19", "rates": {"GBP": 0.7500001}}"#;
        let rate = parse(body, "GBP", "GBP").unwrap();
        assert!((rate.rate() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_keeps_provider_date() {
        // Weekend requests come back with the previous trading day
        let body = r#"{"date": "2016-10-14", "rates": {"GBP": 0.9, "USD": 1.1}}"#;
        let rate = parse(body, "GBP", "USD").unwrap();
        assert_eq!(rate.date(), date(2016, 10, 14));
    }

    #[test]
    fn test_parse_missing_rates() {
        let result = parse(r#"{"date": "2016-10-19"}"#, "GBP", "USD");
        assert_eq!(
            result.unwrap_err(),
            RateError::DataFormat("Response has no rates".to_string())
        );
    }

    #[test]
    fn test_parse_missing_currency() {
        let body = r#"{"date": "2016-10-19", "rates": {"GBP": 0.75}}"#;
        let result = parse(body, "GBP", "USD");
        assert_eq!(
            result.unwrap_err(),
            RateError::DataFormat("No rate found for currency: USD".to_string())
        );
    }

    #[test]
    fn test_parse_zero_rates() {
        let zero_from = r#"{"date": "2016-10-19", "rates": {"GBP": 0.0, "USD": 1.0}}"#;
        assert!(matches!(
            parse(zero_from, "GBP", "USD"),
            Err(RateError::DataFormat(_))
        ));

        let zero_to = r#"{"date": "2016-10-19", "rates": {"GBP": 0.75, "USD": 0.0}}"#;
        assert!(matches!(
            parse(zero_to, "GBP", "USD"),
            Err(RateError::DataFormat(_))
        ));
    }

    #[test]
    fn test_parse_bad_dates() {
        for raw in ["2016-1-5", "19/10/2016", "2016-13-01", ""] {
            let body = format!(r#"{{"date": "{raw}", "rates": {{"GBP": 0.75, "USD": 1.0}}}}"#);
            assert!(
                matches!(parse(&body, "GBP", "USD"), Err(RateError::DataFormat(_))),
                "{raw}"
            );
        }

        let no_date = r#"{"rates": {"GBP": 0.75, "USD": 1.0}}"#;
        assert!(matches!(
            parse(no_date, "GBP", "USD"),
            Err(RateError::DataFormat(_))
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        for body in ["", "not json", r#"{"rates": {"GBP": "x"}}"#, "[1, 2]"] {
            assert!(
                matches!(parse(body, "GBP", "USD"), Err(RateError::DataFormat(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn test_parse_provider_error() {
        let body = r#"{
            "success": false,
            "error": {
                "code": 101,
                "type": "invalid_access_key",
                "info": "You have not supplied a valid API Access Key."
            }
        }"#;
        let result = parse(body, "GBP", "USD");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid rate data: Provider reported error 101 (invalid_access_key): \
             You have not supplied a valid API Access Key."
        );
    }
}
