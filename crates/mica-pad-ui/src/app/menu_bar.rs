//! Menu bar rendering for the editor application.
//!
//! Contains the File, Edit, and View menus.

use eframe::egui;
use mica_pad_config::ThemeChoice;
use mica_pad_core::{Command, LineEnding, TextEncoding};

use super::App;

/// Encodings offered in the Edit menu.
const MENU_ENCODINGS: [TextEncoding; 5] = [
    TextEncoding::Utf8,
    TextEncoding::Utf16Le,
    TextEncoding::Utf16Be,
    TextEncoding::Ascii,
    TextEncoding::Legacy("windows-1252"),
];

impl App {
    /// Button text for a command, with its shortcut right after the label.
    fn command_label(&self, command: Command) -> String {
        match self.commands.shortcut_for(command) {
            Some(shortcut) => format!("{:<16}{shortcut}", command.label()),
            None => command.label().to_string(),
        }
    }

    /// Renders the menu bar with File, Edit, and View menus.
    pub(crate) fn show_menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::MenuBar::new().ui(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                for command in [Command::New, Command::Open, Command::Save, Command::SaveAs] {
                    if ui.button(self.command_label(command)).clicked() {
                        ui.close();
                        self.run_command(command, ctx);
                    }
                }
                ui.separator();
                if ui.button(self.command_label(Command::Close)).clicked() {
                    ui.close();
                    self.run_command(Command::Close, ctx);
                }
            });

            // Edit menu
            ui.menu_button("Edit", |ui| {
                ui.menu_button("Line Ending", |ui| {
                    let current = self.doc.line_ending();
                    for eol in [LineEnding::Lf, LineEnding::CrLf, LineEnding::Cr] {
                        if ui.radio(current == eol, eol.to_string()).clicked() {
                            self.doc.set_line_ending(eol);
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Encoding", |ui| {
                    let current = self.doc.encoding();
                    for enc in MENU_ENCODINGS {
                        if ui.radio(current == enc, enc.to_string()).clicked() {
                            self.doc.set_encoding(enc);
                            ui.close();
                        }
                    }
                });
            });

            // View menu
            ui.menu_button("View", |ui| {
                ui.menu_button("Theme", |ui| {
                    for choice in [ThemeChoice::System, ThemeChoice::Dark, ThemeChoice::Light] {
                        if ui.radio(self.theme_choice == choice, choice.to_string()).clicked() {
                            self.set_theme_choice(choice, ctx);
                            ui.close();
                        }
                    }
                });
            });
        });
    }
}
