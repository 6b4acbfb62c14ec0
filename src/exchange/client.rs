//! HTTP client for the exchange rate API.
//!
//! This module provides a thin wrapper around `reqwest` that requests the
//! latest rate table for a base currency and conforms the response to
//! [`RateTable`].

use super::{ExchangeError, ExchangeResult, RateProvider, RateTable};
use async_trait::async_trait;
use log::*;

/// Placeholder substituted with the base currency code in URL templates.
///
pub const BASE_PLACEHOLDER: &str = "{base}";

/// Makes requests to the rate API and tries to conform response data to
/// the rate table model.
///
pub struct Client {
    url_template: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given URL template. The template must
    /// contain `{base}` where the base currency code belongs.
    ///
    pub fn new(url_template: &str) -> Self {
        Client {
            url_template: url_template.to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Return the request URL for the base currency.
    ///
    pub fn url_for(&self, base: &str) -> String {
        self.url_template.replace(BASE_PLACEHOLDER, base)
    }

    /// Return the full rate table for the base currency or an error.
    ///
    pub async fn latest(&self, base: &str) -> ExchangeResult<RateTable> {
        let url = self.url_for(base);
        debug!("Requesting rate table from {}...", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            error!("Rate request failed with status {}: {}", status, body);
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let table: RateTable = serde_json::from_slice(&bytes).map_err(|e| {
            error!(
                "Failed to parse rate table: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&bytes)
            );
            e
        })?;

        debug!(
            "Received {} rates for base {}",
            table.rates.len(),
            table.base.as_deref().unwrap_or(base)
        );
        Ok(table)
    }
}

#[async_trait]
impl RateProvider for Client {
    async fn latest(&self, base: &str) -> ExchangeResult<RateTable> {
        Client::latest(self, base).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn client_for(server: &MockServer) -> Client {
        Client::new(&format!("{}/v4/latest/{}", server.base_url(), BASE_PLACEHOLDER))
    }

    #[test]
    fn url_for_substitutes_base() {
        let client = Client::new("https://api.example.com/v4/latest/{base}");
        assert_eq!(
            client.url_for("EUR"),
            "https://api.example.com/v4/latest/EUR"
        );
    }

    #[tokio::test]
    async fn latest_success() -> ExchangeResult<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/v4/latest/USD");
                then.status(200).json_body(json!({
                    "base": "USD",
                    "date": "2024-01-01",
                    "rates": { "USD": 1.0, "EUR": 0.9, "GBP": 0.8 }
                }));
            })
            .await;

        let table = client_for(&server).latest("USD").await?;
        mock.assert_async().await;
        assert_eq!(table.base.as_deref(), Some("USD"));
        assert_eq!(table.rates.len(), 3);
        assert_eq!(table.rates.get("EUR"), Some(&0.9));
        Ok(())
    }

    #[tokio::test]
    async fn latest_non_success_status() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/v4/latest/USD");
                then.status(404).body("unknown base");
            })
            .await;

        let result = client_for(&server).latest("USD").await;
        mock.assert_async().await;
        match result {
            Err(ExchangeError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "unknown base");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn latest_malformed_body() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/v4/latest/USD");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let result = client_for(&server).latest("USD").await;
        mock.assert_async().await;
        assert!(matches!(result, Err(ExchangeError::Parse(_))));
    }

    #[tokio::test]
    async fn latest_missing_rates_field() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/v4/latest/USD");
                then.status(200).json_body(json!({ "base": "USD" }));
            })
            .await;

        let result = client_for(&server).latest("USD").await;
        assert!(matches!(result, Err(ExchangeError::Parse(_))));
    }

    #[tokio::test]
    async fn latest_unreachable_host() {
        let client = Client::new("http://127.0.0.1:1/v4/latest/{base}");
        let result = client.latest("USD").await;
        assert!(matches!(result, Err(ExchangeError::Network(_))));
    }
}
