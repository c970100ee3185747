//! Terminal color palettes for the dark and light themes.

use colored::Color;

use crate::application::ThemeMode;

/// Color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Section headers
    pub accent: Color,
    /// Fully selected nodes
    pub checked: Color,
    /// Partially selected nodes
    pub partial: Color,
    /// Labels, descriptions, unselected nodes
    pub muted: Color,
    /// Hints
    pub warning: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            accent: Color::BrightCyan,
            checked: Color::BrightGreen,
            partial: Color::BrightYellow,
            muted: Color::BrightBlack,
            warning: Color::BrightYellow,
        }
    }

    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            checked: Color::Green,
            partial: Color::Yellow,
            muted: Color::Black,
            warning: Color::Red,
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}
