//! Application state management module.
//!
//! This module contains the screen state machine, including:
//! - Main `State` struct holding everything the screens display
//! - Navigation types (Screen, MenuOption)
//! - Input types (Key, Response, Transition)
//!
//! Key presses and network responses are the only ways the state changes.
//! Work that needs the network or the cache is never done here; it is
//! requested by returning `Transition::Dispatch`.

mod input;
mod navigation;

pub use input::{Key, Response, Transition};
pub use navigation::Screen;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, DEFAULT_BASE_CURRENCY, PAGE_WIDTH};
