//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: rate API and cache work requested by the state
//! - Terminal events: user input and terminal interactions

pub mod network;
pub mod terminal;
