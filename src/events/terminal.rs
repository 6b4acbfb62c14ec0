use crate::app::NetworkEventSender;
use crate::state::{Key, State, Transition};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    net_sender: NetworkEventSender,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new(net_sender: NetworkEventSender) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, net_sender }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let event = match self.rx.recv()? {
            Event::Input(event) => event,
            Event::Tick => return Ok(true),
        };
        let key = match map_key(event) {
            Some(key) => key,
            None => return Ok(true),
        };

        match state.handle_key(key) {
            Transition::Continue => Ok(true),
            Transition::Dispatch(network_event) => {
                self.net_sender.send(network_event)?;
                Ok(true)
            }
            Transition::Quit => {
                debug!("Processing exit terminal event '{:?}'...", event);
                Ok(false)
            }
        }
    }
}

/// Translate a terminal key event into an application key.
///
pub fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Key::Quit),
        KeyEvent {
            code: KeyCode::Esc, ..
        } => Some(Key::Quit),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Key::Enter),
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => Some(Key::Backspace),
        KeyEvent {
            code: KeyCode::Up, ..
        } => Some(Key::Up),
        KeyEvent {
            code: KeyCode::Down,
            ..
        } => Some(Key::Down),
        KeyEvent {
            code: KeyCode::Left,
            ..
        } => Some(Key::Left),
        KeyEvent {
            code: KeyCode::Right,
            ..
        } => Some(Key::Right),
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } => Some(Key::Char(c)),
        _ => None,
    }
}
