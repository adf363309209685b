//! Transport used to fetch provider payloads

use crate::core::error::RateError;
use std::time::Duration;
use tracing::debug;

/// Fetches the body behind a provider reference.
///
/// A success yields the raw body; connection failures and non-2xx responses
/// are reported as [`RateError::Transport`] without reading a body.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, RateError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, RateError> + Send + Sync,
{
    fn fetch(&self, url: &str) -> Result<String, RateError> {
        self(url)
    }
}

/// Blocking HTTP transport. A client is built for every call and dropped on return.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        HttpFetcher {
            user_agent: concat!("fixer-rates/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

// Errors drop the URL since it carries the access key.
fn request_error(e: reqwest::Error) -> RateError {
    RateError::Transport {
        status: e.status().map(|s| s.as_u16()),
        message: format!("Request error: {}", e.without_url()),
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, RateError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(request_error)?;

        let response = client.get(url).send().map_err(request_error)?;
        let status = response.status();
        debug!(%status, "Received provider response");

        if !status.is_success() {
            return Err(RateError::Transport {
                status: Some(status.as_u16()),
                message: format!("HTTP error: {status}"),
            });
        }

        response.text().map_err(request_error)
    }
}
