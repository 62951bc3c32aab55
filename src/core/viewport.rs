//! Scrolling and fullscreen, behind a trait so components stay testable.

/// Scroll offset past which the header switches to its solid style.
pub const HEADER_CONDENSE_AFTER: f64 = 50.0;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

pub trait Viewport: Send + Sync {
    /// Smoothly bring the element with `id` into view. Returns false if absent.
    fn scroll_to(&self, id: &str) -> bool;

    fn scroll_to_top(&self);

    /// Toggle fullscreen for the element with `id`.
    fn toggle_fullscreen(&self, id: &str) -> bool;

    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;
}

pub fn header_condensed(scroll_y: f64) -> bool {
    scroll_y > HEADER_CONDENSE_AFTER
}

pub fn show_back_to_top(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

/// Viewport for environments without a window, such as server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_to(&self, _id: &str) -> bool {
        false
    }

    fn scroll_to_top(&self) {}

    fn toggle_fullscreen(&self, _id: &str) -> bool {
        false
    }

    fn scroll_y(&self) -> f64 {
        0.0
    }
}

/// Next index of a wrapping carousel.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Previous index of a wrapping carousel.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}
