//! Decorative background: a field of slowly drifting sine lines.

use std::f64::consts::TAU;

/// Horizontal sample spacing of the rasterised polyline, in pixels.
pub const SAMPLE_STEP: f64 = 10.0;

/// Brand-adjacent hues; each line picks one.
pub const HUES: [f64; 2] = [10.0, 330.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub amplitude: f64,
    pub period: f64,
    /// Phase increment per frame.
    pub speed: f64,
    pub phase: f64,
    pub base_y: f64,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Ranges the background lines are drawn from. Each `(min, span)` pair
/// yields `min + rand * span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFieldConfig {
    pub amplitude: (f64, f64),
    pub period: (f64, f64),
    pub speed: (f64, f64),
    /// Random downward offset added to each line's slot, in pixels.
    pub base_jitter: f64,
    /// Line `i` sits at `height / slots * i` before jitter.
    pub slots: f64,
    pub hues: [f64; 2],
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
    pub px_per_line: f64,
    pub extra_lines: usize,
}

impl Default for LineFieldConfig {
    fn default() -> Self {
        Self {
            amplitude: (50.0, 100.0),
            period: (200.0, 300.0),
            speed: (0.001, 0.003),
            base_jitter: 50.0,
            slots: 10.0,
            hues: HUES,
            saturation: (20.0, 40.0),
            lightness: (40.0, 40.0),
            px_per_line: 100.0,
            extra_lines: 2,
        }
    }
}

impl LineFieldConfig {
    /// Lines for a field `height` tall: one per `px_per_line`, plus extras.
    pub fn line_count(&self, height: f64) -> usize {
        if self.px_per_line <= 0.0 {
            return self.extra_lines;
        }
        (height.max(0.0) / self.px_per_line).floor() as usize + self.extra_lines
    }
}

fn pick((min, span): (f64, f64), rng: &mut impl FnMut() -> f64) -> f64 {
    min + rng() * span
}

impl Line {
    /// Draw a fresh line for slot `index` of a field `field_height` tall.
    /// `rng` must yield values in `[0, 1)`.
    pub fn random(
        index: usize,
        field_height: f64,
        config: &LineFieldConfig,
        rng: &mut impl FnMut() -> f64,
    ) -> Self {
        let amplitude = pick(config.amplitude, rng);
        let period = pick(config.period, rng);
        let speed = pick(config.speed, rng);
        let phase = rng() * TAU;
        let base_y = field_height / config.slots * index as f64 + rng() * config.base_jitter;
        let hue = if rng() > 0.5 {
            config.hues[0]
        } else {
            config.hues[1]
        };
        let saturation = pick(config.saturation, rng);
        let lightness = pick(config.lightness, rng);
        Self {
            amplitude,
            period,
            speed,
            phase,
            base_y,
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS `hsla()` colour of this line at `alpha`.
    pub fn color(&self, alpha: f64) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, alpha
        )
    }
}

pub fn advance(line: &mut Line) {
    line.phase += line.speed;
}

/// Vertical position of `line` at horizontal coordinate `x`.
pub fn sample(line: &Line, x: f64) -> f64 {
    let primary = (x / line.period + line.phase).sin() * line.amplitude;
    let secondary = (x / (line.period * 1.5) + line.phase * 0.5).cos() * (line.amplitude * 0.5);
    line.base_y + primary + secondary
}

/// Sample points from `x = 0` up to (excluding) `width`.
pub fn polyline(line: &Line, width: f64, step: f64) -> Vec<(f64, f64)> {
    if width <= 0.0 || step <= 0.0 {
        return Vec::new();
    }
    let n = (width / step).ceil() as usize;
    (0..n)
        .map(|i| {
            let x = i as f64 * step;
            (x, sample(line, x))
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct LineField {
    config: LineFieldConfig,
    width: f64,
    height: f64,
    lines: Vec<Line>,
}

impl LineField {
    pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Self::with_config(LineFieldConfig::default(), width, height, rng)
    }

    pub fn with_config(
        config: LineFieldConfig,
        width: f64,
        height: f64,
        rng: &mut impl FnMut() -> f64,
    ) -> Self {
        let mut field = Self {
            config,
            ..Self::default()
        };
        field.regenerate(width, height, rng);
        field
    }

    /// Resize and replace every line with freshly randomised parameters.
    pub fn regenerate(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        let config = self.config;
        self.lines = (0..config.line_count(height))
            .map(|i| Line::random(i, height, &config, rng))
            .collect();
    }

    pub fn tick(&mut self) {
        self.lines.iter_mut().for_each(advance);
    }

    pub fn config(&self) -> &LineFieldConfig {
        &self.config
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
