//! Failure taxonomy for a rate resolution

use std::fmt::Display;
use thiserror::Error;

/// Which argument of a resolution carried the rejected currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolParam {
    From,
    To,
}

impl Display for SymbolParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SymbolParam::From => "from",
                SymbolParam::To => "to",
            }
        )
    }
}

/// Every resolution either yields an exchange rate or exactly one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// The code is not a supported currency symbol. Raised before any request is made.
    #[error("Symbol not found for provided currency: {code} (parameter '{param}')")]
    InvalidSymbol { param: SymbolParam, code: String },

    /// The fetch failed or the provider answered with a non-success status.
    #[error("Transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The fetched body is not a usable rate payload.
    #[error("Invalid rate data: {0}")]
    DataFormat(String),
}

impl RateError {
    pub fn invalid_symbol(param: SymbolParam, code: &str) -> Self {
        RateError::InvalidSymbol {
            param,
            code: code.to_string(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        RateError::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn data_format(message: impl Into<String>) -> Self {
        RateError::DataFormat(message.into())
    }
}
