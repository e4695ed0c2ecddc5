/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::{Palette, ThemeChoice, ThemeMode};

/// One user key binding, e.g. `{"shortcut": "Ctrl+Q", "command": "close"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub shortcut: String,
    pub command: String,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Encoding label used to read and write files (e.g. "utf-8", "windows-1252").
    pub encoding: String,
    pub theme: ThemeChoice,
    pub font_size: f32,
    /// Whether to remember the last folder used in open/save dialogs.
    pub remember_last_folder: bool,
    /// Last folder used in an open/save dialog (persisted across sessions).
    pub last_used_folder: String,
    /// Extra bindings applied on top of the default shortcuts.
    pub key_bindings: Vec<KeyBinding>,
    pub dark_palette: Palette,
    pub light_palette: Palette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            theme: ThemeChoice::System,
            font_size: 15.0,
            remember_last_folder: true,
            last_used_folder: String::new(),
            key_bindings: Vec::new(),
            dark_palette: Palette::dark(),
            light_palette: Palette::light(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path: `<config dir>/mica-pad/mica-pad.json`,
    /// or `mica-pad.json` in the working directory when there is no config dir.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("mica-pad").join("mica-pad.json"))
            .unwrap_or_else(|| PathBuf::from("mica-pad.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            return config;
        }

        let loaded = std::fs::read_to_string(path)
            .map_err(|e| tracing::warn!("Failed to read config at {}: {e}", path.display()))
            .and_then(|contents| {
                serde_json::from_str::<AppConfig>(&contents)
                    .map_err(|e| tracing::warn!("Failed to parse config at {}: {e}", path.display()))
            });

        // A broken file is left alone so the user can fix it.
        let mut config = loaded.unwrap_or_default();
        config.sanitize();
        tracing::debug!("Loaded config from {}", path.display());
        config
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent folders.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    pub fn palette(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Dark => &self.dark_palette,
            ThemeMode::Light => &self.light_palette,
        }
    }

    /// `(shortcut, command)` pairs from `key_bindings`.
    pub fn binding_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.key_bindings
            .iter()
            .map(|b| (b.shortcut.as_str(), b.command.as_str()))
    }

    /// Returns the starting directory for file dialogs: the last used folder
    /// when remembered and still present, otherwise the home directory.
    pub fn start_folder(&self) -> Option<PathBuf> {
        if self.remember_last_folder && !self.last_used_folder.is_empty() {
            let p = PathBuf::from(&self.last_used_folder);
            if p.is_dir() {
                return Some(p);
            }
        }
        dirs::home_dir()
    }

    /// Records the folder of a file picked in a dialog. Returns true if the
    /// stored folder changed.
    pub fn remember_folder_of(&mut self, file: &Path) -> bool {
        if !self.remember_last_folder {
            return false;
        }
        let Some(folder) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return false;
        };
        let folder = folder.to_string_lossy();
        if folder == self.last_used_folder {
            return false;
        }
        self.last_used_folder = folder.into_owned();
        true
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font_size = if self.font_size.is_finite() {
            self.font_size.clamp(6.0, 72.0)
        } else {
            Self::default().font_size
        };

        let encoding = self.encoding.trim();
        self.encoding = if encoding.is_empty() {
            Self::default().encoding
        } else {
            encoding.to_string()
        };

        self.key_bindings
            .retain(|b| !b.shortcut.trim().is_empty() && !b.command.trim().is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.theme, ThemeChoice::System);
        assert!((config.font_size - 15.0).abs() < f32::EPSILON);
        assert!(config.remember_last_folder);
        assert!(config.key_bindings.is_empty());
    }

    #[test]
    fn test_sanitize_clamps_font_size() {
        let mut config = AppConfig::default();
        config.font_size = 2.0;
        config.sanitize();
        assert!((config.font_size - 6.0).abs() < f32::EPSILON);

        config.font_size = 100.0;
        config.sanitize();
        assert!((config.font_size - 72.0).abs() < f32::EPSILON);

        config.font_size = f32::NAN;
        config.sanitize();
        assert!((config.font_size - 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sanitize_blank_encoding() {
        let mut config = AppConfig::default();
        config.encoding = "   ".to_string();
        config.sanitize();
        assert_eq!(config.encoding, "utf-8");

        config.encoding = " latin1 ".to_string();
        config.sanitize();
        assert_eq!(config.encoding, "latin1");
    }

    #[test]
    fn test_sanitize_drops_empty_bindings() {
        let mut config = AppConfig::default();
        config.key_bindings = vec![
            KeyBinding {
                shortcut: "Ctrl+Q".to_string(),
                command: "close".to_string(),
            },
            KeyBinding {
                shortcut: String::new(),
                command: "save".to_string(),
            },
        ];
        config.sanitize();
        assert_eq!(config.key_bindings.len(), 1);
        assert_eq!(
            config.binding_pairs().collect::<Vec<_>>(),
            vec![("Ctrl+Q", "close")]
        );
    }

    #[test]
    fn test_palette_by_mode() {
        let config = AppConfig::default();
        assert_eq!(config.palette(ThemeMode::Dark), &Palette::dark());
        assert_eq!(config.palette(ThemeMode::Light), &Palette::light());
    }

    #[test]
    fn test_remember_folder_of() {
        let mut config = AppConfig::default();
        assert!(config.remember_folder_of(Path::new("/tmp/notes/a.txt")));
        assert!(!config.remember_folder_of(Path::new("/tmp/notes/b.txt")));
        assert_eq!(
            PathBuf::from(&config.last_used_folder),
            PathBuf::from("/tmp/notes")
        );
        assert!(!config.remember_folder_of(Path::new("bare.txt")));
    }

    #[test]
    fn test_remember_folder_disabled() {
        let mut config = AppConfig::default();
        config.remember_last_folder = false;
        assert!(!config.remember_folder_of(Path::new("/tmp/notes/a.txt")));
        assert!(config.last_used_folder.is_empty());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"theme": "Light"}"#).unwrap();
        assert_eq!(parsed.theme, ThemeChoice::Light);
        assert_eq!(parsed.encoding, "utf-8");
        assert_eq!(parsed.light_palette, Palette::light());
    }
}
