use crate::exchange::{ExchangeError, RateService, Resolver};
use crate::state::{Response, State};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ResolveCurrencies { base: String },
    CachedCurrencies,
    FetchRate { from: String, to: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    resolver: &'a Resolver,
    rates: &'a RateService,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        resolver: &'a Resolver,
        rates: &'a RateService,
    ) -> Self {
        Handler {
            state,
            resolver,
            rates,
        }
    }

    /// Handle network events by type and feed the result back into state.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        let response = self.execute(event).await;
        let mut state = self.state.lock().await;
        state.handle_response(response);
        Ok(())
    }

    /// Perform the work for an event without touching state.
    ///
    pub async fn execute(&self, event: Event) -> Response {
        match event {
            Event::ResolveCurrencies { base } => {
                info!("Loading supported currencies...");
                Response::CurrenciesLoaded(self.resolver.resolve(&base).await)
            }
            Event::CachedCurrencies => Response::CachedListLoaded(self.resolver.cached()),
            Event::FetchRate { from, to } => {
                let result = self.rates.get_rate(&from, &to).await;
                match &result {
                    Ok(_) if !self.rates.is_supported(&from) => {
                        warn!("Base {} missing from its own rate table", from);
                    }
                    Err(ExchangeError::UnsupportedCurrency { .. }) => {
                        debug!(
                            "Currencies offered for {}: {}",
                            from,
                            self.rates.supported_currencies().join(", ")
                        );
                    }
                    _ => {}
                }
                Response::RateFetched(result)
            }
        }
    }
}
