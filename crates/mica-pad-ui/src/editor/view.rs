//! The editing surface.
//!
//! A multiline `TextEdit` inside a vertical `ScrollArea` whose own bars are
//! hidden; the scroll position is reported to an [`AutoHideScrollIndicator`]
//! every frame and the indicator is drawn by `scrollbar.rs`. Cursor moves
//! and text edits are forwarded to the [`Document`] as separate signals.

use egui::scroll_area::ScrollBarVisibility;
use egui::{ScrollArea, TextEdit, Ui};
use mica_pad_core::{AutoHideScrollIndicator, Document, ScrollRangeListener, ScrollState};

use super::scrollbar::{show_scroll_indicator, SCROLLBAR_WIDTH};
use super::theme::EditorTheme;

/// Id of the editor's `TextEdit`.
pub const EDITOR_TEXT_ID: &str = "editor_text";

/// Editor state that outlives a single frame.
#[derive(Debug, Default)]
pub struct EditorState {
    pub indicator: AutoHideScrollIndicator,
    /// Offset requested through the indicator, applied on the next frame.
    pending_offset: Option<f32>,
    last_cursor_index: Option<usize>,
    focused_once: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares for a freshly loaded document: back to the top, focus the text.
    pub fn reset(&mut self) {
        self.pending_offset = Some(0.0);
        self.last_cursor_index = None;
        self.focused_once = false;
    }
}

/// Width left for the text; the indicator only takes width while it is shown.
fn text_width(available: f32, indicator_visible: bool) -> f32 {
    if indicator_visible {
        (available - SCROLLBAR_WIDTH).max(0.0)
    } else {
        available
    }
}

pub struct EditorView<'a> {
    doc: &'a mut Document,
    state: &'a mut EditorState,
    theme: &'a EditorTheme,
}

impl<'a> EditorView<'a> {
    pub fn new(doc: &'a mut Document, state: &'a mut EditorState, theme: &'a EditorTheme) -> Self {
        Self { doc, state, theme }
    }

    pub fn show(self, ui: &mut Ui) {
        let Self { doc, state, theme } = self;

        let mut area = ScrollArea::vertical()
            .id_salt("editor_scroll")
            .auto_shrink([false, false])
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden);
        if let Some(offset) = state.pending_offset.take() {
            area = area.vertical_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            let mut size = ui.available_size();
            size.x = text_width(size.x, state.indicator.is_visible());
            TextEdit::multiline(doc.buffer.text_mut())
                .id(egui::Id::new(EDITOR_TEXT_ID))
                .font(theme.font_id.clone())
                .text_color(theme.text_color)
                .desired_width(size.x)
                .min_size(size)
                .lock_focus(true)
                .show(ui)
        });

        let visible = ScrollState::from_viewport(
            output.state.offset.y,
            output.inner_rect.height(),
            output.content_size.y,
        );
        state
            .indicator
            .on_scroll_range_changed(visible.visible_start, visible.visible_end);

        if let Some(offset) = show_scroll_indicator(
            ui,
            &state.indicator,
            theme,
            output.inner_rect,
            output.content_size.y,
        ) {
            state.pending_offset = Some(offset);
            ui.ctx().request_repaint();
        }

        let edit = output.inner;
        if !state.focused_once {
            edit.response.request_focus();
            state.focused_once = true;
        }

        let changed = edit.response.changed();
        if changed {
            doc.on_content_changed();
        }

        if let Some(range) = edit.cursor_range {
            let index = range.primary.index;
            if changed || state.last_cursor_index != Some(index) {
                state.last_cursor_index = Some(index);
                let position = doc.buffer.position_at(index);
                doc.on_cursor_move(position);
            }
        }
    }
}
