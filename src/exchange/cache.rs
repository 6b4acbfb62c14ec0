//! Currency list cache.
//!
//! The list of supported currency codes is stored under a single key as a
//! JSON array of strings. Entries never expire.

use super::{ExchangeError, ExchangeResult};
use log::*;
use redis::Commands;
use std::sync::Mutex;

/// Key under which the currency list is stored.
///
pub const CACHE_KEY: &str = "supported_currencies";

/// Storage for a previously fetched currency list.
///
pub trait CurrencyCache: Send + Sync {
    /// Return the stored list, or `None` when nothing has been stored.
    fn load(&self) -> ExchangeResult<Option<Vec<String>>>;

    /// Store the list without expiry, replacing any previous value.
    fn store(&self, currencies: &[String]) -> ExchangeResult<()>;
}

/// Encode a currency list into the cache format.
///
pub fn encode_currencies(currencies: &[String]) -> ExchangeResult<String> {
    serde_json::to_string(currencies)
        .map_err(|e| ExchangeError::Cache(format!("Failed to encode currency list: {}", e)))
}

/// Decode a currency list from the cache format.
///
pub fn decode_currencies(payload: &str) -> ExchangeResult<Vec<String>> {
    serde_json::from_str(payload)
        .map_err(|e| ExchangeError::Cache(format!("Failed to decode currency list: {}", e)))
}

/// Currency cache backed by a Redis server.
///
pub struct RedisCache {
    connection: Mutex<redis::Connection>,
}

impl RedisCache {
    /// Connect to the server at `url` and verify it answers `PING`.
    ///
    pub fn connect(url: &str) -> ExchangeResult<Self> {
        debug!("Connecting to currency cache at {}...", url);
        let client = redis::Client::open(url)?;
        let mut connection = client.get_connection()?;
        let pong: String = redis::cmd("PING").query(&mut connection)?;
        debug!("Currency cache answered {}", pong);
        Ok(RedisCache {
            connection: Mutex::new(connection),
        })
    }

    fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut redis::Connection) -> redis::RedisResult<T>,
    ) -> ExchangeResult<T> {
        let mut connection = self
            .connection
            .lock()
            .map_err(|_| ExchangeError::Cache("Cache connection poisoned".to_string()))?;
        Ok(f(&mut connection)?)
    }
}

impl CurrencyCache for RedisCache {
    fn load(&self) -> ExchangeResult<Option<Vec<String>>> {
        let payload: Option<String> = self.with_connection(|con| con.get(CACHE_KEY))?;
        payload.as_deref().map(decode_currencies).transpose()
    }

    fn store(&self, currencies: &[String]) -> ExchangeResult<()> {
        let payload = encode_currencies(currencies)?;
        self.with_connection(|con| con.set::<_, _, ()>(CACHE_KEY, payload))?;
        debug!("Stored {} currencies under '{}'", currencies.len(), CACHE_KEY);
        Ok(())
    }
}

/// Currency cache kept in memory, holding the encoded payload the way the
/// server would.
///
#[cfg(test)]
#[derive(Default)]
pub struct MemoryCache {
    payload: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

#[cfg(test)]
impl MemoryCache {
    pub fn with_payload(payload: &str) -> Self {
        MemoryCache {
            payload: Mutex::new(Some(payload.to_owned())),
            writes: Mutex::new(0),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.payload.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[cfg(test)]
impl CurrencyCache for MemoryCache {
    fn load(&self) -> ExchangeResult<Option<Vec<String>>> {
        self.payload
            .lock()
            .unwrap()
            .as_deref()
            .map(decode_currencies)
            .transpose()
    }

    fn store(&self, currencies: &[String]) -> ExchangeResult<()> {
        *self.payload.lock().unwrap() = Some(encode_currencies(currencies)?);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
