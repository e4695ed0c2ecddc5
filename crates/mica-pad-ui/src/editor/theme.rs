//! Editor theme configuration.
//!
//! Resolved egui colors for the text area, status bar and scroll indicator,
//! built from a config [`Palette`].

use egui::{Color32, FontId};
use mica_pad_config::{HexColor, Palette, ThemeMode};

fn hex_to_color32(c: HexColor) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub mode: ThemeMode,
    pub font_id: FontId,
    pub bg_color: Color32,
    pub text_color: Color32,
    pub selection_color: Color32,
    pub status_bg: Color32,
    pub status_fg: Color32,
    pub scrollbar_thumb_idle: Color32,
    pub scrollbar_thumb_active: Color32,
}

impl Default for EditorTheme {
    fn default() -> Self {
        Self::from_palette(&Palette::dark(), ThemeMode::Dark, 15.0)
    }
}

impl EditorTheme {
    pub fn from_palette(palette: &Palette, mode: ThemeMode, font_size: f32) -> Self {
        Self {
            mode,
            font_id: FontId::monospace(font_size),
            bg_color: hex_to_color32(palette.text_bg),
            text_color: hex_to_color32(palette.text_fg),
            selection_color: hex_to_color32(palette.selection),
            status_bg: hex_to_color32(palette.status_bg),
            status_fg: hex_to_color32(palette.status_fg),
            scrollbar_thumb_idle: hex_to_color32(palette.scrollbar_thumb),
            scrollbar_thumb_active: hex_to_color32(palette.scrollbar_thumb_active),
        }
    }

    /// Applies the theme to egui's global visuals.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self.mode {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        };
        // TextEdit paints its background with `extreme_bg_color`.
        visuals.extreme_bg_color = self.bg_color;
        visuals.selection.bg_fill = self.selection_color;
        visuals.widgets.noninteractive.bg_stroke.width = 0.0;
        ctx.set_visuals(visuals);
    }
}
