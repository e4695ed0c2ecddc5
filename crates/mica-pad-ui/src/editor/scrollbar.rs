//! Overlay scroll indicator for the editor.
//!
//! Paints the thumb described by an [`AutoHideScrollIndicator`] along the
//! right edge of the text area and turns clicks and drags on its track into
//! a scroll offset. Nothing is drawn, and no width is reserved, while the
//! whole document fits.

use egui::{Pos2, Rect, Response, Sense, Ui, Vec2};
use mica_pad_core::AutoHideScrollIndicator;

use super::theme::EditorTheme;

pub(crate) const SCROLLBAR_WIDTH: f32 = 10.0;
const SCROLLBAR_MIN_THUMB: f32 = 20.0;

/// Computes the scroll fraction (0..=1) for a pointer coordinate on the track.
fn scroll_ratio_from_pointer(
    pointer_val: f32,
    track_start: f32,
    thumb_size: f32,
    thumb_travel: f32,
) -> f32 {
    let relative = pointer_val - track_start - thumb_size * 0.5;
    (relative / thumb_travel.max(1.0)).clamp(0.0, 1.0)
}

/// Places the thumb inside `track`. The thumb never gets shorter than
/// `SCROLLBAR_MIN_THUMB`; the start fraction is rescaled so the thumb still
/// reaches the bottom when the end of the document is visible.
fn thumb_rect(indicator: &AutoHideScrollIndicator, track: Rect) -> Rect {
    let state = indicator.thumb();
    let track_len = track.height();
    let thumb_len = (state.span() * track_len)
        .max(SCROLLBAR_MIN_THUMB)
        .min(track_len);
    let hidden = 1.0 - state.span();
    let start_ratio = if hidden > 0.0 {
        (state.visible_start / hidden).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let top = track.min.y + start_ratio * (track_len - thumb_len);
    Rect::from_min_size(
        Pos2::new(track.min.x + 2.0, top),
        Vec2::new(SCROLLBAR_WIDTH - 4.0, thumb_len),
    )
}

/// Draws the indicator over `viewport` and returns the offset the user asked
/// to scroll to, if any.
pub(crate) fn show_scroll_indicator(
    ui: &mut Ui,
    indicator: &AutoHideScrollIndicator,
    theme: &EditorTheme,
    viewport: Rect,
    content_height: f32,
) -> Option<f32> {
    if !indicator.is_visible() {
        return None;
    }

    let track = Rect::from_min_max(
        Pos2::new(viewport.max.x - SCROLLBAR_WIDTH, viewport.min.y),
        viewport.max,
    );
    let response = ui.interact(
        track,
        ui.id().with("scroll_indicator"),
        Sense::click_and_drag(),
    );

    let thumb = thumb_rect(indicator, track);
    let color = if response.dragged() || response.hovered() {
        theme.scrollbar_thumb_active
    } else {
        theme.scrollbar_thumb_idle
    };
    ui.painter().rect_filled(thumb, 3.0, color);

    requested_offset(&response, track, thumb.height(), viewport.height(), content_height)
}

fn requested_offset(
    response: &Response,
    track: Rect,
    thumb_len: f32,
    viewport_height: f32,
    content_height: f32,
) -> Option<f32> {
    if !(response.dragged() || response.clicked()) {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    let ratio = scroll_ratio_from_pointer(pos.y, track.min.y, thumb_len, track.height() - thumb_len);
    Some(ratio * (content_height - viewport_height).max(0.0))
}
