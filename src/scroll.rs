//! Viewport-derived scroll signals.
//!
//! The page layer reports raw scroll metrics; these helpers turn them into the global progress
//! consumed by the interpolator and into the index of the section currently under the viewport
//! midline.

use crate::gradient::direction::clamp01;

/// Raw scroll state of the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Scroll offset at which the morph starts.
    pub start: f64,
    /// Scroll offset at which the morph ends.
    pub end: f64,
}

/// Global progress in `[0, 1]` for `m`.
///
/// A zero-length range is a step: 0 before `start`, 1 from `start` on.
pub fn scroll_progress(m: ScrollMetrics) -> f64 {
    let span = m.end - m.start;
    if span.is_nan() || span <= 0.0 {
        return if m.scroll_y >= m.start { 1.0 } else { 0.0 };
    }
    clamp01((m.scroll_y - m.start) / span)
}

/// A vertical page section, as laid out by the page layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub top: f64,
    pub height: f64,
}

/// Index of the first section containing the viewport midline, if any.
pub fn active_section(scroll_y: f64, viewport_height: f64, sections: &[Section]) -> Option<usize> {
    let probe = scroll_y + viewport_height / 2.0;
    sections
        .iter()
        .position(|s| probe >= s.top && probe < s.top + s.height)
}

/// Progress at which shape `index` of `count` is shown unblended.
pub fn section_progress(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    clamp01(index.min(count - 1) as f64 / count as f64)
}
