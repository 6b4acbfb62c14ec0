//! Navigation-related state types.
//!
//! This module contains the screens the application moves through and the
//! options offered on the main menu.

/// Specifying the different screens.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Menu,
    List,
    AmountEntry,
    FromSelect,
    ToSelect,
    Results,
}

/// Specifying the main menu options.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuOption {
    Conversion,
    List,
    Quit,
}

impl MenuOption {
    /// All options in display order.
    ///
    pub const ALL: [MenuOption; 3] = [MenuOption::Conversion, MenuOption::List, MenuOption::Quit];

    /// Return the label shown on the menu.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Conversion => "Conversion",
            MenuOption::List => "List",
            MenuOption::Quit => "Quit",
        }
    }
}
