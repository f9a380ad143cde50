//! Hero zoom: a fixed overlay grows from the in-flow portrait to a
//! viewport-covering rectangle as the hero track is scrolled.

use crate::interp::{band_progress, lerp};

/// Unzoomed geometry of the in-flow portrait. Captured once at mount and again
/// on resize; never read back from the live element while it is hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl ZoomState {
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Progress thresholds for the hero bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    /// Overlay replaces the original above this.
    pub handoff: f64,
    pub nav_hide: f64,
    /// Rounded corners dropped above this.
    pub fullscreen: f64,
    pub fade_start: f64,
    pub fade_span: f64,
    pub opacity_on: f64,
    pub opacity_off: f64,
    /// Extra coverage beyond the viewport edge.
    pub cover_margin: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            handoff: 0.005,
            nav_hide: 0.15,
            fullscreen: 0.2,
            fade_start: 0.05,
            fade_span: 0.15,
            opacity_on: 0.02,
            opacity_off: 0.98,
            cover_margin: 0.05,
        }
    }
}

/// Smallest rectangle with the portrait's aspect ratio that covers the
/// viewport scaled by `1 + margin`.
pub fn cover_size(initial: &ZoomState, viewport: &Viewport, margin: f64) -> (f64, f64) {
    let aspect = initial.aspect_ratio();
    let scale = 1.0 + margin;
    if viewport.height > 0.0 && viewport.width / viewport.height > aspect {
        let w = viewport.width * scale;
        (w, w / aspect)
    } else {
        let h = viewport.height * scale;
        (h * aspect, h)
    }
}

/// Everything the DOM adapter writes for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFrame {
    pub progress: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Overlay shown and original hidden.
    pub overlay_active: bool,
    /// `None` leaves the previous opacity in place.
    pub overlay_opacity: Option<f64>,
    pub fullscreen: bool,
    pub nav_hidden: bool,
    pub content_opacity: f64,
}

impl ZoomFrame {
    /// Top-left translation of the overlay.
    pub fn offset(&self) -> (f64, f64) {
        (
            self.center_x - self.width / 2.0,
            self.center_y - self.height / 2.0,
        )
    }
}

#[derive(Debug, Clone)]
pub struct ZoomController {
    initial: ZoomState,
    config: ZoomConfig,
}

impl ZoomController {
    pub fn new(initial: ZoomState, config: ZoomConfig) -> Self {
        Self { initial, config }
    }

    pub fn initial(&self) -> &ZoomState {
        &self.initial
    }

    /// Replace the cached geometry after a layout change.
    pub fn set_initial(&mut self, initial: ZoomState) {
        self.initial = initial;
    }

    pub fn frame(&self, progress: f64, viewport: &Viewport) -> ZoomFrame {
        let c = &self.config;
        let init = &self.initial;
        let (target_w, target_h) = cover_size(init, viewport, c.cover_margin);

        let overlay_opacity = if progress >= c.opacity_off {
            Some(0.0)
        } else if progress > c.opacity_on {
            Some(1.0)
        } else {
            None
        };

        ZoomFrame {
            progress,
            width: lerp(init.width, target_w, progress),
            height: lerp(init.height, target_h, progress),
            center_x: lerp(init.center_x, viewport.width / 2.0, progress),
            center_y: lerp(init.center_y, viewport.height / 2.0, progress),
            overlay_active: progress > c.handoff,
            overlay_opacity,
            fullscreen: progress > c.fullscreen,
            nav_hidden: progress > c.nav_hide,
            content_opacity: 1.0 - band_progress(progress, c.fade_start, c.fade_span),
        }
    }
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller should schedule a frame; false if one is in flight.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
