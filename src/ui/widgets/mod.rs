//! Reusable UI widget components.
//!
//! This module contains styling helpers shared by the screens.

pub mod styling;
