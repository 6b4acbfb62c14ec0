//! Exchange-specific error types.

/// Errors that can occur while fetching rates or reading the currency cache.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Rate service answered with a non-success status
    #[error("Rate service error (status {status}): {body}")]
    Status { status: u16, body: String },

    /// Failed to parse the rate table
    #[error("Failed to parse exchange data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Target currency missing from the fetched rate table
    #[error("Currency {code} not supported")]
    UnsupportedCurrency { code: String },

    /// Amount entered by the user is not a number
    #[error("Invalid Amount: '{input}'")]
    InvalidAmount { input: String },

    /// Cache connection or payload failure
    #[error("Cache error: {0}")]
    Cache(String),
}

impl From<redis::RedisError> for ExchangeError {
    fn from(error: redis::RedisError) -> Self {
        ExchangeError::Cache(error.to_string())
    }
}

/// Convenience type alias for Result with ExchangeError
pub type ExchangeResult<T> = Result<T, ExchangeError>;
