//! Auto-hiding scroll indicator.
//!
//! The view reports which fraction of its content is visible every time it
//! scrolls or resizes; [`AutoHideScrollIndicator`] turns that into "show a
//! thumb spanning this range" or "hide, everything fits".

/// The visible fraction of a viewport's content, both ends in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub visible_start: f32,
    pub visible_end: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::FULL
    }
}

impl ScrollState {
    /// The whole content is visible.
    pub const FULL: Self = Self {
        visible_start: 0.0,
        visible_end: 1.0,
    };

    /// Builds a state, clamping both ends into `[0, 1]` and ordering them.
    pub fn new(visible_start: f32, visible_end: f32) -> Self {
        let a = clamp_unit(visible_start);
        let b = clamp_unit(visible_end);
        Self {
            visible_start: a.min(b),
            visible_end: a.max(b),
        }
    }

    /// Derives the visible range from a scroll offset and the lengths of the
    /// viewport and its content, all in the same unit (pixels, lines, ...).
    pub fn from_viewport(offset: f32, viewport_len: f32, content_len: f32) -> Self {
        if content_len <= 0.0 || viewport_len >= content_len {
            return Self::FULL;
        }
        Self::new(offset / content_len, (offset + viewport_len) / content_len)
    }

    /// True when no scrolling is possible.
    pub fn covers_everything(&self) -> bool {
        self.visible_start <= 0.0 && self.visible_end >= 1.0
    }

    /// Length of the visible range.
    pub fn span(&self) -> f32 {
        self.visible_end - self.visible_start
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Receives the visible range each time the observed viewport changes.
pub trait ScrollRangeListener {
    fn on_scroll_range_changed(&mut self, visible_start: f32, visible_end: f32);
}

/// A vertical scroll indicator that removes itself when all content fits.
///
/// The view anchors it along the trailing edge of the viewport while visible.
#[derive(Debug, Clone, Default)]
pub struct AutoHideScrollIndicator {
    visible: bool,
    thumb: ScrollState,
}

impl AutoHideScrollIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the indicator currently takes part in layout.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Thumb bounds as fractions of the track.
    pub fn thumb(&self) -> ScrollState {
        self.thumb
    }
}

impl ScrollRangeListener for AutoHideScrollIndicator {
    fn on_scroll_range_changed(&mut self, visible_start: f32, visible_end: f32) {
        self.thumb = ScrollState::new(visible_start, visible_end);
        self.visible = !self.thumb.covers_everything();
    }
}
