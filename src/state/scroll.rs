//! Viewport scroll flag driving navbar treatment and the back-to-top control.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::SCROLL_THRESHOLD_PX;

/// Whether the viewport has been scrolled past the threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub past_threshold: bool,
}

impl ScrollState {
    /// Single strict threshold, no hysteresis.
    #[must_use]
    pub fn from_offset(offset_px: f64) -> Self {
        Self { past_threshold: offset_px > SCROLL_THRESHOLD_PX }
    }
}
