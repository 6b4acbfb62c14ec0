use super::{CurrencyCache, ExchangeResult, RateProvider};
use log::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Currency codes always listed first, in this order.
///
pub const FAVORITES: [&str; 3] = ["USD", "EUR", "GBP"];

/// Order a currency list with the favorites first, followed by every other
/// code sorted ascending.
///
/// Favorites are emitted once each, in the given order, whether or not the
/// source list contains them. Other codes keep their duplicates.
pub fn sort_currencies(currencies: Vec<String>, favorites: &[&str]) -> Vec<String> {
    let pinned: HashSet<&str> = favorites.iter().copied().collect();
    let mut regular: Vec<String> = currencies
        .into_iter()
        .filter(|code| !pinned.contains(code.as_str()))
        .collect();
    regular.sort();

    let mut sorted: Vec<String> = favorites.iter().map(|code| code.to_string()).collect();
    sorted.extend(regular);
    sorted
}

/// Combines the cache and the rate provider into the list of currencies
/// offered for selection.
///
pub struct Resolver {
    cache: Arc<dyn CurrencyCache>,
    provider: Arc<dyn RateProvider>,
}

impl Resolver {
    /// Returns a new instance over the cache and provider.
    ///
    pub fn new(cache: Arc<dyn CurrencyCache>, provider: Arc<dyn RateProvider>) -> Self {
        Resolver { cache, provider }
    }

    /// Return the ordered currency list, preferring the cached copy and
    /// otherwise fetching it from the provider with `base` and caching it.
    ///
    pub async fn resolve(&self, base: &str) -> ExchangeResult<Vec<String>> {
        if let Some(currencies) = self.cache.load()? {
            if !currencies.is_empty() {
                info!("Loaded {} currencies from cache", currencies.len());
                return Ok(sort_currencies(currencies, &FAVORITES));
            }
        }

        info!("Fetching currencies from API...");
        let table = self.provider.latest(base).await?;
        let currencies: Vec<String> = table.rates.into_keys().collect();
        self.cache.store(&currencies)?;
        info!("Cached {} currencies", currencies.len());

        Ok(sort_currencies(currencies, &FAVORITES))
    }

    /// Return the cached currency list ordered for display, or an empty list
    /// when nothing has been cached yet. Never contacts the provider.
    ///
    pub fn cached(&self) -> ExchangeResult<Vec<String>> {
        match self.cache.load()? {
            Some(currencies) if !currencies.is_empty() => {
                Ok(sort_currencies(currencies, &FAVORITES))
            }
            _ => Ok(vec![]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{Client, ExchangeError, MemoryCache};
    use httpmock::MockServer;
    use serde_json::json;

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn provider_for(server: &MockServer) -> Arc<Client> {
        Arc::new(Client::new(&format!("{}/latest/{{base}}", server.base_url())))
    }

    #[test]
    fn sort_pins_favorites_first() {
        let sorted = sort_currencies(codes(&["JPY", "USD", "AUD", "EUR", "GBP"]), &FAVORITES);
        assert_eq!(sorted, codes(&["USD", "EUR", "GBP", "AUD", "JPY"]));
    }

    #[test]
    fn sort_keeps_favorite_order_regardless_of_position() {
        let sorted = sort_currencies(codes(&["GBP", "CHF", "EUR", "USD"]), &FAVORITES);
        assert_eq!(sorted, codes(&["USD", "EUR", "GBP", "CHF"]));
    }

    #[test]
    fn sort_preserves_duplicates() {
        let sorted = sort_currencies(codes(&["JPY", "AUD", "JPY", "USD", "USD"]), &FAVORITES);
        assert_eq!(sorted, codes(&["USD", "EUR", "GBP", "AUD", "JPY", "JPY"]));
    }

    #[test]
    fn sort_is_idempotent() {
        let once = sort_currencies(codes(&["NZD", "EUR", "CAD", "USD", "GBP"]), &FAVORITES);
        let twice = sort_currencies(once.clone(), &FAVORITES);
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn resolve_uses_cache_when_present() -> ExchangeResult<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/USD");
                then.status(200).json_body(json!({ "rates": { "USD": 1.0 } }));
            })
            .await;

        let cache = Arc::new(MemoryCache::with_payload(r#"["JPY","USD","AUD","EUR","GBP"]"#));
        let resolver = Resolver::new(cache.clone(), provider_for(&server));

        let first = resolver.resolve("USD").await?;
        let second = resolver.resolve("USD").await?;
        assert_eq!(first, codes(&["USD", "EUR", "GBP", "AUD", "JPY"]));
        assert_eq!(first, second);
        mock.assert_hits_async(0).await;
        assert_eq!(cache.writes(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn resolve_fetches_and_stores_when_cache_empty() -> ExchangeResult<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/USD");
                then.status(200).json_body(json!({
                    "rates": { "USD": 1.0, "SEK": 10.4, "EUR": 0.9, "AUD": 1.5 }
                }));
            })
            .await;

        let cache = Arc::new(MemoryCache::default());
        let resolver = Resolver::new(cache.clone(), provider_for(&server));

        let currencies = resolver.resolve("USD").await?;
        mock.assert_async().await;
        assert_eq!(currencies, codes(&["USD", "EUR", "GBP", "AUD", "SEK"]));
        assert_eq!(cache.writes(), 1);
        assert_eq!(cache.load()?, Some(codes(&["AUD", "EUR", "SEK", "USD"])));
        Ok(())
    }

    #[tokio::test]
    async fn resolve_treats_empty_cached_list_as_missing() -> ExchangeResult<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/EUR");
                then.status(200).json_body(json!({ "rates": { "EUR": 1.0, "CHF": 0.95 } }));
            })
            .await;

        let cache = Arc::new(MemoryCache::with_payload("[]"));
        let resolver = Resolver::new(cache.clone(), provider_for(&server));

        let currencies = resolver.resolve("EUR").await?;
        mock.assert_async().await;
        assert_eq!(currencies, codes(&["USD", "EUR", "GBP", "CHF"]));
        Ok(())
    }

    #[tokio::test]
    async fn resolve_network_failure_leaves_cache_untouched() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/latest/USD");
                then.status(502);
            })
            .await;

        let cache = Arc::new(MemoryCache::default());
        let resolver = Resolver::new(cache.clone(), provider_for(&server));

        assert!(matches!(
            resolver.resolve("USD").await,
            Err(ExchangeError::Status { status: 502, .. })
        ));
        assert_eq!(cache.writes(), 0);
        assert_eq!(cache.payload(), None);
    }

    #[tokio::test]
    async fn resolve_corrupt_cache_is_cache_error() {
        let server = MockServer::start();
        let cache = Arc::new(MemoryCache::with_payload("not json"));
        let resolver = Resolver::new(cache, provider_for(&server));

        assert!(matches!(
            resolver.resolve("USD").await,
            Err(ExchangeError::Cache(_))
        ));
    }

    #[test]
    fn cached_without_entry_is_empty() -> ExchangeResult<()> {
        let server = MockServer::start();
        let resolver = Resolver::new(Arc::new(MemoryCache::default()), provider_for(&server));
        assert!(resolver.cached()?.is_empty());
        Ok(())
    }

    #[test]
    fn cached_orders_entry() -> ExchangeResult<()> {
        let server = MockServer::start();
        let cache = Arc::new(MemoryCache::with_payload(r#"["ZAR","GBP","BRL"]"#));
        let resolver = Resolver::new(cache, provider_for(&server));
        assert_eq!(resolver.cached()?, codes(&["USD", "EUR", "GBP", "BRL", "ZAR"]));
        Ok(())
    }
}
