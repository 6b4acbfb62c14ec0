//! Inputs to the state machine and what it asks for in return.

use crate::events::network::Event as NetworkEvent;
use crate::exchange::ExchangeResult;

/// Specifying the keys the application reacts to.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Quit,
    Char(char),
}

/// Results of dispatched network events, fed back into the state.
///
#[derive(Debug)]
pub enum Response {
    CurrenciesLoaded(ExchangeResult<Vec<String>>),
    CachedListLoaded(ExchangeResult<Vec<String>>),
    RateFetched(ExchangeResult<f64>),
}

/// Outcome of handling a key press.
///
#[derive(Debug, PartialEq, Clone)]
pub enum Transition {
    Continue,
    Dispatch(NetworkEvent),
    Quit,
}
