pub mod color;
pub mod config;
pub mod theme;

pub use color::HexColor;
pub use config::{AppConfig, KeyBinding};
pub use theme::{Palette, ThemeChoice, ThemeMode};
