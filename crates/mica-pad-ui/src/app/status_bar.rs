//! Status bar rendering for the editor application.
//!
//! Shows the cursor position on the left; encoding, line ending and the
//! last saved time on the right.

use eframe::egui;
use egui::RichText;

use super::App;

/// Formats a save timestamp for the status bar.
fn format_saved_time(dt: &chrono::DateTime<chrono::Local>) -> String {
    format!("Saved: {}", dt.format("%H:%M:%S"))
}

impl App {
    /// Renders the status bar at the bottom of the application window.
    pub(crate) fn show_status_bar(&self, ui: &mut egui::Ui) {
        let fg = self.theme.status_fg;
        let doc = &self.doc;
        let label = |text: String| egui::Label::new(RichText::new(text).color(fg)).selectable(false);

        ui.horizontal_centered(|ui| {
            ui.add(label(doc.cursor().to_string()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(label(doc.encoding().to_string()));
                ui.separator();
                ui.add(label(doc.line_ending().to_string()));

                if let Some(saved_at) = doc.last_saved_at {
                    ui.separator();
                    ui.add(label(format_saved_time(&saved_at)));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_saved_time() {
        let dt = chrono::Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 42)
            .single()
            .unwrap();
        assert_eq!(format_saved_time(&dt), "Saved: 07:05:42");
    }
}
