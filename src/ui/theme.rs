use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Bright colours on a dark terminal.
    ///
    pub fn classic() -> Self {
        Theme {
            name: "classic".to_string(),
            primary: ColorSpec::rgb(255, 85, 255),   // Magenta
            text: ColorSpec::rgb(229, 229, 229),     // White
            text_muted: ColorSpec::rgb(127, 127, 127),
            success: ColorSpec::rgb(85, 255, 85),    // Green
            warning: ColorSpec::rgb(255, 255, 85),   // Yellow
            error: ColorSpec::rgb(255, 85, 85),      // Red
            info: ColorSpec::rgb(85, 255, 255),      // Cyan
            border_active: ColorSpec::rgb(85, 255, 255),
            border_normal: ColorSpec::rgb(127, 127, 127),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(255, 121, 198),  // Pink
            text: ColorSpec::rgb(248, 248, 242),     // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164), // Comment
            success: ColorSpec::rgb(80, 250, 123),   // Green
            warning: ColorSpec::rgb(241, 250, 140),  // Yellow
            error: ColorSpec::rgb(255, 85, 85),      // Red
            info: ColorSpec::rgb(139, 233, 253),     // Cyan
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(68, 71, 90),
        }
    }

    /// Return the theme with the given name, if it exists.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Return the names of all built-in themes.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["classic".to_string(), "dracula".to_string()]
    }
}
