//! Command dispatch table.
//!
//! Maps toolkit-independent key gestures such as `Ctrl+Shift+S` to the
//! editor operations they trigger. The UI translates its own key events into
//! [`Shortcut`]s and asks the [`CommandTable`] what to do.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// An editor operation reachable from the keyboard or the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Close,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Close,
    ];

    /// Identifier used in configuration files.
    pub fn id(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Open => "open",
            Self::Save => "save",
            Self::SaveAs => "save_as",
            Self::Close => "close",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Open => "Open...",
            Self::Save => "Save",
            Self::SaveAs => "Save As...",
            Self::Close => "Exit",
        }
    }
}

impl FromStr for Command {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BindingError::UnknownCommand(s.to_string()))
    }
}

/// A key combination: modifiers plus one letter or digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Upper-case ASCII letter or digit.
    pub key: char,
}

impl Shortcut {
    /// `Ctrl+<key>`.
    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            shift: false,
            alt: false,
            key: key.to_ascii_uppercase(),
        }
    }

    /// `Ctrl+Shift+<key>`.
    pub fn ctrl_shift(key: char) -> Self {
        Self {
            shift: true,
            ..Self::ctrl(key)
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for Shortcut {
    type Err = BindingError;

    /// Parses `"Ctrl+Shift+S"`-style strings; modifier names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut shortcut = Shortcut {
            ctrl: false,
            shift: false,
            alt: false,
            key: ' ',
        };
        let mut key = None;
        for part in s.split('+').map(str::trim) {
            if key.is_some() {
                return Err(BindingError::InvalidShortcut(s.to_string()));
            }
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" => shortcut.ctrl = true,
                "shift" => shortcut.shift = true,
                "alt" => shortcut.alt = true,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if c.is_ascii_alphanumeric() => {
                            key = Some(c.to_ascii_uppercase())
                        }
                        _ => return Err(BindingError::InvalidShortcut(s.to_string())),
                    }
                }
            }
        }
        match key {
            Some(k) => {
                shortcut.key = k;
                Ok(shortcut)
            }
            None => Err(BindingError::InvalidShortcut(s.to_string())),
        }
    }
}

/// Reasons a configured key binding can't be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("invalid shortcut: '{0}'")]
    InvalidShortcut(String),
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),
}

/// Gesture → command lookup.
#[derive(Debug, Clone)]
pub struct CommandTable {
    bindings: HashMap<Shortcut, Command>,
}

impl Default for CommandTable {
    /// Ctrl+N, Ctrl+O, Ctrl+S, Ctrl+Shift+S and Ctrl+W.
    fn default() -> Self {
        let mut table = Self::empty();
        table.bind(Shortcut::ctrl('N'), Command::New);
        table.bind(Shortcut::ctrl('O'), Command::Open);
        table.bind(Shortcut::ctrl('S'), Command::Save);
        table.bind(Shortcut::ctrl_shift('S'), Command::SaveAs);
        table.bind(Shortcut::ctrl('W'), Command::Close);
        table
    }
}

impl CommandTable {
    /// A table with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `shortcut` to `command`, replacing whatever it triggered before.
    pub fn bind(&mut self, shortcut: Shortcut, command: Command) {
        self.bindings.insert(shortcut, command);
    }

    /// Applies `(shortcut, command)` string pairs on top of the current
    /// bindings. Valid pairs are applied even if others fail; the failures
    /// are returned for the caller to log.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Vec<BindingError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut errors = Vec::new();
        for (shortcut, command) in overrides {
            match (shortcut.parse::<Shortcut>(), command.parse::<Command>()) {
                (Ok(s), Ok(c)) => self.bind(s, c),
                (Err(e), _) | (_, Err(e)) => errors.push(e),
            }
        }
        errors
    }

    /// Returns the command bound to `shortcut`, if any.
    pub fn lookup(&self, shortcut: &Shortcut) -> Option<Command> {
        self.bindings.get(shortcut).copied()
    }

    /// Returns a shortcut bound to `command`, for menu hints.
    pub fn shortcut_for(&self, command: Command) -> Option<Shortcut> {
        let mut matches: Vec<Shortcut> = self
            .bindings
            .iter()
            .filter(|(_, c)| **c == command)
            .map(|(s, _)| *s)
            .collect();
        // Deterministic pick when several gestures trigger the same command.
        matches.sort_by_key(|s| (s.alt, s.shift, s.key));
        matches.into_iter().next()
    }
}
