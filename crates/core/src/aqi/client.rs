use log::debug;

use crate::aqi::response::Response;
use crate::config::DEFAULT_API_URL;
use crate::error::{Error, Result};

/// Source of station search results.
///
/// Commands receive a provider as a parameter so tests can substitute their own.
pub trait StationProvider {
    /// Runs a keyword search and returns every station the provider knows for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or rejects the request.
    fn fetch(&self, query: &str) -> Result<Response>;
}

/// Blocking client for the WAQI keyword search endpoint.
pub struct WaqiClient {
    agent: ureq::Agent,
    base_url: String,
    token: String,
}

impl WaqiClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

impl StationProvider for WaqiClient {
    fn fetch(&self, query: &str) -> Result<Response> {
        debug!("Searching `{}` for `{query}`", self.base_url);

        let response = self
            .agent
            .get(&self.base_url)
            .query("keyword", query)
            .query("token", &self.token)
            .call()?;

        let body = response
            .into_string()
            .map_err(|e| Error::Fetch(format!("Couldn't read provider response: {e}")))?;

        let parsed = Response::from_json_str(&body)?;
        debug!("Provider returned {} station(s) for `{query}`", parsed.data.len());

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = WaqiClient::new("token");
        assert_eq!(client.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_unreachable_provider_is_fetch_error() {
        // Nothing listens on the discard port locally, so the connection is refused.
        let client = WaqiClient::with_base_url("http://127.0.0.1:9/search/", "token");
        let result = client.fetch("kathmandu");
        assert!(matches!(result, Err(Error::Fetch(_))));
    }
}
