//! Infinite 3D gallery ticker.
//!
//! Cards sit on a virtual track that scrolls left at a constant speed. Each
//! card's position is wrapped onto `[-wrap_offset, total_width - wrap_offset)`
//! so the seam happens off-screen, then its distance to the hero point drives
//! scale, opacity, tilt and stacking.

/// Viewport width below which the mobile layout is used.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerConfig {
    /// Pixels per frame.
    pub speed: f64,
    pub card_width: f64,
    pub gap: f64,
    /// Hero point as a fraction of the container width.
    pub hero_x: f64,
    /// Degrees.
    pub rotation_max: f64,
    pub scale_min: f64,
    /// Influence radius is `container_width / influence_divisor`.
    pub influence_divisor: f64,
    /// Fraction of the influence radius where fading starts.
    pub fade_start: f64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            speed: 0.8,
            card_width: 460.0,
            gap: 60.0,
            hero_x: 0.5,
            rotation_max: 50.0,
            scale_min: 0.5,
            influence_divisor: 1.5,
            fade_start: 0.6,
        }
    }
}

impl TickerConfig {
    pub fn for_viewport(viewport_width: f64) -> Self {
        let mut config = Self::default();
        if viewport_width < MOBILE_BREAKPOINT {
            config.card_width = viewport_width * 0.75;
            config.gap = 20.0;
        }
        config
    }

    pub fn item_spacing(&self) -> f64 {
        self.card_width + self.gap
    }

    pub fn wrap_offset(&self) -> f64 {
        self.card_width * 2.0
    }

    /// Opacity for a normalised distance in `[0, 1]`.
    pub fn opacity_at(&self, progress: f64) -> f64 {
        if progress <= self.fade_start {
            return 1.0;
        }
        let span = 1.0 - self.fade_start;
        (1.0 - (progress - self.fade_start) / span).max(0.0)
    }
}

/// Wrap `raw` into `[-offset, total - offset)`.
pub fn wrap(raw: f64, total: f64, offset: f64) -> f64 {
    if total <= 0.0 {
        return raw;
    }
    let mut x = (raw + offset) % total;
    if x < 0.0 {
        x += total;
    }
    // `-tiny % total + total` can round up to exactly `total`.
    if x >= total {
        x -= total;
    }
    x - offset
}

/// Per-card output for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    pub index: usize,
    /// Left edge on the container.
    pub x: f64,
    pub scale: f64,
    /// Degrees around Y; positive faces right.
    pub rotate_y: f64,
    pub opacity: f64,
    pub z_index: i32,
}

#[derive(Debug, Clone)]
pub struct Ticker {
    scroll_pos: f64,
    item_count: usize,
    config: TickerConfig,
}

impl Ticker {
    pub fn new(item_count: usize, config: TickerConfig) -> Self {
        Self {
            scroll_pos: 0.0,
            item_count,
            config,
        }
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }

    pub fn scroll_pos(&self) -> f64 {
        self.scroll_pos
    }

    pub fn set_scroll_pos(&mut self, pos: f64) {
        self.scroll_pos = pos;
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn total_width(&self) -> f64 {
        self.item_count as f64 * self.config.item_spacing()
    }

    /// Move the track by one frame.
    pub fn advance(&mut self) {
        self.scroll_pos -= self.config.speed;
    }

    /// Re-pick the breakpoint config; total width follows from it.
    pub fn resize(&mut self, viewport_width: f64) {
        let speed = self.config.speed;
        self.config = TickerConfig {
            speed,
            ..TickerConfig::for_viewport(viewport_width)
        };
    }

    pub fn wrapped_x(&self, index: usize) -> f64 {
        let raw = self.scroll_pos + index as f64 * self.config.item_spacing();
        wrap(raw, self.total_width(), self.config.wrap_offset())
    }

    pub fn transform(&self, index: usize, container_width: f64) -> ItemTransform {
        let c = &self.config;
        let x = self.wrapped_x(index);
        let hero = container_width * c.hero_x;
        let dist = x + c.card_width / 2.0 - hero;
        let radius = container_width / c.influence_divisor;
        let progress = if radius > 0.0 {
            (dist.abs() / radius).min(1.0)
        } else {
            1.0
        };

        let rotate_y = if dist < 0.0 {
            progress * c.rotation_max
        } else {
            -progress * c.rotation_max
        };

        ItemTransform {
            index,
            x,
            scale: 1.0 - progress * (1.0 - c.scale_min),
            rotate_y,
            opacity: c.opacity_at(progress),
            z_index: 100 - (progress * 100.0).floor() as i32,
        }
    }

    pub fn layout(&self, container_width: f64) -> Vec<ItemTransform> {
        (0..self.item_count)
            .map(|i| self.transform(i, container_width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_stays_in_range() {
        let (total, offset) = (5200.0, 920.0);
        for raw in [-12345.6, -5200.0, -920.0, -0.4, 0.0, 17.0, 4279.9, 99999.0] {
            let x = wrap(raw, total, offset);
            assert!(x >= -offset && x < total - offset, "raw={raw} x={x}");
        }
    }

    #[test]
    fn breakpoint_config() {
        let mobile = TickerConfig::for_viewport(400.0);
        assert_eq!((mobile.card_width, mobile.gap), (300.0, 20.0));
        let desktop = TickerConfig::for_viewport(1280.0);
        assert_eq!((desktop.card_width, desktop.gap), (460.0, 60.0));
    }

    #[test]
    fn resize_recomputes_total_width() {
        let mut t = Ticker::new(10, TickerConfig::for_viewport(1280.0));
        assert_eq!(t.total_width(), 5200.0);
        t.resize(400.0);
        assert_eq!(t.total_width(), 3200.0);
    }

    #[test]
    fn advance_moves_left() {
        let mut t = Ticker::new(3, TickerConfig::default());
        t.advance();
        t.advance();
        assert!((t.scroll_pos() + 1.6).abs() < 1e-12);
    }

    #[test]
    fn centred_card_is_full_size_and_on_top() {
        let mut t = Ticker::new(10, TickerConfig::default());
        // put card 0's centre on the hero point of a 1200px container
        t.set_scroll_pos(600.0 - 230.0);
        let item = t.transform(0, 1200.0);
        assert_eq!(item.scale, 1.0);
        assert_eq!(item.opacity, 1.0);
        assert_eq!(item.z_index, 100);
        assert_eq!(item.rotate_y, 0.0);
    }

    #[test]
    fn scale_and_tilt_scale_with_distance() {
        // 1200px container: hero at 600, influence radius 800
        let mut t = Ticker::new(10, TickerConfig::default());
        let place = |t: &mut Ticker, d: f64| {
            t.set_scroll_pos(600.0 - 230.0 + d);
            t.transform(0, 1200.0)
        };

        let half = place(&mut t, 400.0);
        assert_eq!(half.scale, 0.75);
        assert_eq!(half.rotate_y, -25.0);
        assert_eq!(half.z_index, 50);

        let half_left = place(&mut t, -400.0);
        assert_eq!(half_left.scale, 0.75);
        assert_eq!(half_left.rotate_y, 25.0);

        for d in [800.0, 1000.0, -1000.0] {
            let far = place(&mut t, d);
            assert_eq!(far.scale, t.config().scale_min, "d={d}");
            assert_eq!(far.rotate_y.abs(), t.config().rotation_max, "d={d}");
            assert_eq!(far.opacity, 0.0, "d={d}");
            assert_eq!(far.z_index, 0, "d={d}");
        }
    }

    #[test]
    fn tilt_sign_follows_side() {
        let mut t = Ticker::new(10, TickerConfig::default());
        t.set_scroll_pos(0.0);
        // card 0 centre at 230, hero at 600
        assert!(t.transform(0, 1200.0).rotate_y > 0.0);
        // card 1 centre at 750
        assert!(t.transform(1, 1200.0).rotate_y < 0.0);
    }
}
