use super::{ExchangeError, ExchangeResult, RateProvider};
use log::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Looks up the rate for a currency pair and remembers which currencies the
/// last successful response listed.
///
pub struct RateService {
    provider: Arc<dyn RateProvider>,
    supported: Mutex<HashSet<String>>,
}

impl RateService {
    /// Returns a new instance backed by the provider.
    ///
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        RateService {
            provider,
            supported: Mutex::new(HashSet::new()),
        }
    }

    /// Return the rate converting one unit of `from` into `to`.
    ///
    pub async fn get_rate(&self, from: &str, to: &str) -> ExchangeResult<f64> {
        info!("Fetching rate {} -> {}...", from, to);
        let table = self.provider.latest(from).await?;

        // Replaced, never merged
        if let Ok(mut supported) = self.supported.lock() {
            *supported = table.rates.keys().cloned().collect();
            debug!("{} currencies known to be supported", supported.len());
        }

        match table.rates.get(to) {
            Some(rate) => Ok(*rate),
            None => {
                warn!("Currency {} missing from {} rate table", to, from);
                Err(ExchangeError::UnsupportedCurrency {
                    code: to.to_owned(),
                })
            }
        }
    }

    /// Return whether the last successful response listed the currency.
    ///
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported
            .lock()
            .map(|supported| supported.contains(code))
            .unwrap_or(false)
    }

    /// Return the currencies listed by the last successful response, sorted.
    ///
    pub fn supported_currencies(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .supported
            .lock()
            .map(|supported| supported.iter().cloned().collect())
            .unwrap_or_default();
        codes.sort();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::Client;
    use httpmock::MockServer;
    use serde_json::json;

    fn service_for(server: &MockServer) -> RateService {
        let client = Client::new(&format!("{}/latest/{{base}}", server.base_url()));
        RateService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn get_rate_success() -> ExchangeResult<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/USD");
                then.status(200)
                    .json_body(json!({ "rates": { "USD": 1.0, "EUR": 0.9 } }));
            })
            .await;

        let service = service_for(&server);
        let rate = service.get_rate("USD", "EUR").await?;
        mock.assert_async().await;
        assert_eq!(rate, 0.9);
        Ok(())
    }

    #[tokio::test]
    async fn get_rate_unsupported_currency() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/USD");
                then.status(200)
                    .json_body(json!({ "rates": { "USD": 1.0, "EUR": 0.9 } }));
            })
            .await;

        let service = service_for(&server);
        match service.get_rate("USD", "XXX").await {
            Err(ExchangeError::UnsupportedCurrency { code }) => assert_eq!(code, "XXX"),
            other => panic!("expected unsupported currency, got {:?}", other),
        }
        // The table still counts as a successful response
        assert!(service.is_supported("EUR"));
        assert!(!service.is_supported("XXX"));
    }

    #[tokio::test]
    async fn supported_set_is_replaced() -> ExchangeResult<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/USD");
                then.status(200)
                    .json_body(json!({ "rates": { "USD": 1.0, "JPY": 150.0 } }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/EUR");
                then.status(200)
                    .json_body(json!({ "rates": { "EUR": 1.0, "GBP": 0.85 } }));
            })
            .await;

        let service = service_for(&server);
        service.get_rate("USD", "JPY").await?;
        assert_eq!(service.supported_currencies(), vec!["JPY", "USD"]);

        service.get_rate("EUR", "GBP").await?;
        assert_eq!(service.supported_currencies(), vec!["EUR", "GBP"]);
        assert!(!service.is_supported("JPY"));
        Ok(())
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_set() -> ExchangeResult<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/USD");
                then.status(200).json_body(json!({ "rates": { "EUR": 0.9 } }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/EUR");
                then.status(500);
            })
            .await;

        let service = service_for(&server);
        service.get_rate("USD", "EUR").await?;
        assert!(matches!(
            service.get_rate("EUR", "USD").await,
            Err(ExchangeError::Status { status: 500, .. })
        ));
        assert_eq!(service.supported_currencies(), vec!["EUR"]);
        Ok(())
    }
}
