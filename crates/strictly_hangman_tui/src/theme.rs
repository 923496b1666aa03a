//! Colour themes.
//!
//! Palettes follow Catppuccin: Macchiato for dark terminals and Latte for
//! light ones. A [`Theme`] is built once at startup and handed to the
//! renderer; nothing mutates it afterwards.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Which palette to draw with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemeName {
    /// Catppuccin Macchiato.
    #[default]
    Dark,
    /// Catppuccin Latte.
    Light,
}

/// Colours for every element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Graphic, title background, footer, neutral notices, unused keys.
    pub primary: Color,
    /// Board text and the input line.
    pub secondary: Color,
    /// Background of used keys.
    pub tertiary: Color,
    /// Board cell background.
    pub strong: Color,
    /// Win notice and correct-guess flash.
    pub success: Color,
    /// Loss notice and wrong-guess flash.
    pub fail: Color,
    /// Title text and unused key text.
    pub text: Color,
    /// Graphic background.
    pub background: Color,
}

impl Theme {
    /// Builds the palette for `name`.
    #[instrument]
    pub fn new(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self {
                primary: hex(0xcba6f7),
                secondary: hex(0xf5c2e7),
                tertiary: hex(0x6e738d),
                strong: hex(0x8839ef),
                success: hex(0xa6e3a1),
                fail: hex(0xf38ba8),
                text: hex(0x24273a),
                background: hex(0x24273a),
            },
            ThemeName::Light => Self {
                primary: hex(0x7287fd),
                secondary: hex(0xea76cb),
                tertiary: hex(0x9ca0b0),
                strong: hex(0x8839ef),
                success: hex(0x40a02b),
                fail: hex(0xd20f39),
                text: hex(0x4c4f69),
                background: hex(0xeff1f5),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_hex_splits_channels() {
        assert_eq!(hex(0x8839ef), Color::Rgb(0x88, 0x39, 0xef));
    }

    #[test]
    fn test_theme_name_parses_case_insensitively() {
        assert_eq!(ThemeName::from_str("Light").unwrap(), ThemeName::Light);
        assert_eq!(ThemeName::from_str("dark").unwrap(), ThemeName::Dark);
        assert!(ThemeName::from_str("solarized").is_err());
    }

    #[test]
    fn test_palettes_differ() {
        let themes: Vec<Theme> = ThemeName::iter().map(Theme::new).collect();
        assert_eq!(themes.len(), 2);
        assert_ne!(themes[0], themes[1]);
        assert_eq!(themes[0].strong, themes[1].strong);
    }
}
