//! Global keyboard shortcut handling.
//!
//! Translates egui key events into [`Shortcut`]s and runs whatever the
//! command table binds them to. Matched key events are removed from the
//! input so the text editor never sees them.

use eframe::egui;
use mica_pad_core::{Command, Shortcut};

use super::App;

/// Builds a shortcut from a key event. Plain keys (no Ctrl or Alt) are typing,
/// not shortcuts.
pub(crate) fn shortcut_from_key(key: egui::Key, modifiers: egui::Modifiers) -> Option<Shortcut> {
    let ctrl = modifiers.ctrl || modifiers.command;
    if !ctrl && !modifiers.alt {
        return None;
    }
    let mut chars = key.name().chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => c.to_ascii_uppercase(),
        _ => return None,
    };
    Some(Shortcut {
        ctrl,
        shift: modifiers.shift,
        alt: modifiers.alt,
        key,
    })
}

impl App {
    /// Handles global keyboard shortcuts.
    pub(crate) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let table = &self.commands;
        let triggered: Vec<Command> = ctx.input_mut(|i| {
            let mut triggered = Vec::new();
            i.events.retain(|event| {
                let egui::Event::Key {
                    key,
                    pressed,
                    repeat,
                    modifiers,
                    ..
                } = event
                else {
                    return true;
                };
                match shortcut_from_key(*key, *modifiers).and_then(|s| table.lookup(&s)) {
                    Some(command) => {
                        if *pressed && !*repeat {
                            triggered.push(command);
                        }
                        false
                    }
                    None => true,
                }
            });
            triggered
        });

        for command in triggered {
            self.run_command(command, ctx);
        }
    }
}
