use crate::events::network::Event as NetworkEvent;
use crate::exchange::ExchangeError;
use log::*;

use super::input::{Key, Response, Transition};
use super::navigation::{MenuOption, Screen};

/// Number of currencies shown per row on the selection screens. Up and Down
/// move the cursor by one row.
///
pub const PAGE_WIDTH: usize = 10;

/// Base currency used when none is configured.
///
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Houses data representative of application state.
///
#[derive(Debug)]
pub struct State {
    screen: Screen,
    base_currency: String,
    currencies: Vec<String>,
    menu_options: Vec<MenuOption>,
    cursor: usize,
    amount_input: String,
    amount: f64,
    from: Option<String>,
    to: Option<String>,
    results: Option<String>,
    listing: Option<Vec<String>>,
    error: Option<ExchangeError>,   // Blocks everything but quitting
    warning: Option<ExchangeError>, // Cleared by the next key press
    busy: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State::new(DEFAULT_BASE_CURRENCY)
    }
}

impl State {
    /// Return a fresh state on the menu screen. Currency lists are resolved
    /// against `base_currency`.
    ///
    pub fn new(base_currency: &str) -> Self {
        State {
            screen: Screen::Menu,
            base_currency: base_currency.to_owned(),
            currencies: vec![],
            menu_options: MenuOption::ALL.to_vec(),
            cursor: 0,
            amount_input: String::new(),
            amount: 0.0,
            from: None,
            to: None,
            results: None,
            listing: None,
            error: None,
            warning: None,
            busy: false,
        }
    }

    /// Apply a key press and return what the application should do next.
    ///
    pub fn handle_key(&mut self, key: Key) -> Transition {
        if key == Key::Quit {
            debug!("Quit requested on {:?} screen", self.screen);
            return Transition::Quit;
        }
        if self.busy || self.error.is_some() {
            return Transition::Continue;
        }
        self.warning = None;

        match self.screen {
            Screen::Menu => self.menu_key(key),
            Screen::List => {
                if key == Key::Backspace {
                    self.back_to_menu();
                }
                Transition::Continue
            }
            Screen::AmountEntry => self.amount_key(key),
            Screen::FromSelect | Screen::ToSelect => self.selection_key(key),
            Screen::Results => {
                if key == Key::Enter {
                    info!("Starting over");
                    *self = State::new(&self.base_currency);
                }
                Transition::Continue
            }
        }
    }

    /// Apply the result of a dispatched network event.
    ///
    pub fn handle_response(&mut self, response: Response) {
        self.busy = false;
        match response {
            Response::CurrenciesLoaded(Ok(currencies)) => {
                info!("Loaded {} currencies", currencies.len());
                self.currencies = currencies;
                self.screen = Screen::AmountEntry;
                self.cursor = 0;
            }
            Response::CurrenciesLoaded(Err(e)) => {
                error!("Failed to load currencies: {}", e);
                self.error = Some(e);
            }
            Response::CachedListLoaded(Ok(currencies)) => {
                self.listing = Some(currencies);
            }
            Response::CachedListLoaded(Err(e)) => {
                warn!("Failed to read cached currencies: {}", e);
                self.listing = Some(vec![]);
                self.warning = Some(e);
            }
            Response::RateFetched(Ok(rate)) => {
                let from = self.from.clone().unwrap_or_default();
                let to = self.to.clone().unwrap_or_default();
                let converted = self.amount * rate;
                self.results = Some(format!(
                    "Converted {} {} to {}: {:.2}",
                    self.amount_input, from, to, converted
                ));
                info!("Converted {} {} at rate {}", self.amount_input, from, rate);
                self.screen = Screen::Results;
            }
            Response::RateFetched(Err(e)) => {
                warn!("Failed to fetch rate: {}", e);
                self.warning = Some(e);
            }
        }
    }

    fn menu_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Up => self.cursor = self.cursor.saturating_sub(1),
            Key::Down => self.cursor = clamp_forward(self.cursor, 1, self.menu_options.len()),
            Key::Enter => match self.menu_options.get(self.cursor) {
                Some(MenuOption::Conversion) => {
                    self.screen = Screen::AmountEntry;
                    self.cursor = 0;
                    self.amount_input.clear();
                    self.amount = 0.0;
                    self.from = None;
                    self.to = None;
                    self.results = None;
                    self.busy = true;
                    return Transition::Dispatch(NetworkEvent::ResolveCurrencies {
                        base: self.base_currency.clone(),
                    });
                }
                Some(MenuOption::List) => {
                    self.screen = Screen::List;
                    self.cursor = 0;
                    self.listing = None;
                    self.busy = true;
                    return Transition::Dispatch(NetworkEvent::CachedCurrencies);
                }
                Some(MenuOption::Quit) => return Transition::Quit,
                None => {}
            },
            _ => {}
        }
        Transition::Continue
    }

    fn amount_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Char(c) => self.amount_input.push(c),
            Key::Backspace => {
                self.amount_input.pop();
            }
            Key::Enter => match parse_amount(&self.amount_input) {
                Ok(amount) => {
                    self.amount = amount;
                    self.screen = Screen::FromSelect;
                    self.cursor = 0;
                }
                Err(e) => {
                    warn!("{}", e);
                    self.amount_input.clear();
                    self.amount = 0.0;
                    self.cursor = 0;
                    self.warning = Some(e);
                }
            },
            _ => {}
        }
        Transition::Continue
    }

    fn selection_key(&mut self, key: Key) -> Transition {
        let len = self.currencies.len();
        match key {
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = clamp_forward(self.cursor, 1, len),
            Key::Up => self.cursor = self.cursor.saturating_sub(PAGE_WIDTH),
            Key::Down => self.cursor = clamp_forward(self.cursor, PAGE_WIDTH, len),
            Key::Backspace => self.back_to_menu(),
            Key::Enter => {
                let Some(code) = self.currencies.get(self.cursor).cloned() else {
                    return Transition::Continue;
                };
                if self.screen == Screen::FromSelect {
                    self.from = Some(code);
                    self.screen = Screen::ToSelect;
                    self.cursor = 0;
                } else {
                    let from = self.from.clone().unwrap_or_default();
                    self.to = Some(code.clone());
                    self.busy = true;
                    return Transition::Dispatch(NetworkEvent::FetchRate { from, to: code });
                }
            }
            _ => {}
        }
        Transition::Continue
    }

    fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.cursor = 0;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    pub fn menu_options(&self) -> &[MenuOption] {
        &self.menu_options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn results(&self) -> Option<&str> {
        self.results.as_deref()
    }

    /// Cached currencies shown on the list screen, `None` until read.
    ///
    pub fn listing(&self) -> Option<&[String]> {
        self.listing.as_deref()
    }

    pub fn error(&self) -> Option<&ExchangeError> {
        self.error.as_ref()
    }

    pub fn warning(&self) -> Option<&ExchangeError> {
        self.warning.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// Move `cursor` forward by `step` without leaving `[0, len - 1]`.
///
fn clamp_forward(cursor: usize, step: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cursor + step).min(len - 1)
    }
}

/// Parse the typed amount as a finite decimal number.
///
fn parse_amount(input: &str) -> Result<f64, ExchangeError> {
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExchangeError::InvalidAmount {
            input: input.to_owned(),
        }),
    }
}
