//! Exchange rate access.
//!
//! This module contains everything that talks to the outside world:
//! - HTTP client for the rate API
//! - Rate lookups for a currency pair
//! - Currency list cache and its wire format
//! - Currency list resolution with favorites pinned first

mod cache;
mod client;
mod error;
mod rates;
mod resolver;

pub use cache::{CurrencyCache, RedisCache};
pub use client::Client;
pub use error::{ExchangeError, ExchangeResult};
pub use rates::RateService;
pub use resolver::Resolver;

#[cfg(test)]
pub use cache::MemoryCache;

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Defines the rate table returned for a base currency.
///
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RateTable {
    #[serde(default)]
    pub base: Option<String>,
    pub rates: BTreeMap<String, f64>,
}

/// Source of rate tables keyed by base currency.
///
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn latest(&self, base: &str) -> ExchangeResult<RateTable>;
}
