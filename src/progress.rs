//! Normalised scroll progress through a tall "scroll track" element.

use crate::interp::clamp01;

/// Geometry read from the host each scroll/resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Top of the tracked element relative to the viewport (negative once
    /// scrolled past).
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

/// Progress in `[0, 1]` through the element's scrollable range.
///
/// When the element is no taller than the viewport there is no range to
/// scroll through; progress is then 1 once the element's top has left the
/// viewport and 0 before.
pub fn scroll_progress(geom: &ScrollGeometry) -> f64 {
    let scrolled = -geom.element_top;
    let range = geom.element_height - geom.viewport_height;
    if range <= 0.0 || range.is_nan() {
        return if scrolled > 0.0 { 1.0 } else { 0.0 };
    }
    clamp01(scrolled / range)
}
