/// Theme selection and the color palettes for dark and light mode.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Theme requested by the user. `System` follows the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeChoice {
    #[default]
    System,
    Dark,
    Light,
}

impl ThemeChoice {
    /// Picks the concrete mode. `system` is the OS preference, if it could
    /// be detected; an unknown preference means dark.
    pub fn resolve(self, system: Option<ThemeMode>) -> ThemeMode {
        match self {
            Self::Dark => ThemeMode::Dark,
            Self::Light => ThemeMode::Light,
            Self::System => system.unwrap_or(ThemeMode::Dark),
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!("unknown theme '{s}', expected system, dark or light")),
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::System => "System",
            Self::Dark => "Dark",
            Self::Light => "Light",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

/// Colors for the text area, the status bar and the scroll indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub text_bg: HexColor,
    pub text_fg: HexColor,
    pub selection: HexColor,
    pub status_bg: HexColor,
    pub status_fg: HexColor,
    pub scrollbar_thumb: HexColor,
    pub scrollbar_thumb_active: HexColor,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            text_bg: HexColor::rgb(0x27, 0x27, 0x27),
            text_fg: HexColor::rgb(0xCC, 0xCC, 0xCC),
            selection: HexColor::rgba(50, 110, 200, 100),
            status_bg: HexColor::rgb(0x02, 0x02, 0x02),
            status_fg: HexColor::rgb(0xCC, 0xCC, 0xCC),
            scrollbar_thumb: HexColor::rgb(80, 80, 80),
            scrollbar_thumb_active: HexColor::rgb(140, 140, 140),
        }
    }

    pub fn light() -> Self {
        Self {
            text_bg: HexColor::WHITE,
            text_fg: HexColor::rgb(30, 30, 30),
            selection: HexColor::rgba(100, 150, 230, 100),
            status_bg: HexColor::rgb(0xFF, 0xFF, 0xF2),
            status_fg: HexColor::rgb(0x59, 0x59, 0x59),
            scrollbar_thumb: HexColor::rgb(190, 190, 190),
            scrollbar_thumb_active: HexColor::rgb(130, 130, 130),
        }
    }
}
