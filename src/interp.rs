//! Scalar interpolation helpers shared by every effect.

/// Clamp `x` into `[0, 1]`. NaN collapses to 0 so a bad layout read can never
/// leak into a style string.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Linear interpolation with the progress clamped first; fast scrolling can
/// hand us values slightly outside `[0, 1]`.
#[inline]
pub fn lerp(start: f64, target: f64, progress: f64) -> f64 {
    start + (target - start) * clamp01(progress)
}

/// Position of `value` inside the band `[start, start + span]`, clamped.
#[inline]
pub fn band_progress(value: f64, start: f64, span: f64) -> f64 {
    if span <= 0.0 {
        return if value > start { 1.0 } else { 0.0 };
    }
    clamp01((value - start) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp(120.0, 1890.0, 0.0), 120.0);
        assert_eq!(lerp(120.0, 1890.0, 1.0), 1890.0);
        assert_eq!(lerp(-4.0, 4.0, 0.5), 0.0);
    }

    #[test]
    fn lerp_clamps_out_of_range_progress() {
        assert_eq!(lerp(10.0, 20.0, -3.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 7.5), 20.0);
        assert_eq!(lerp(10.0, 20.0, f64::NAN), 10.0);
    }

    #[test]
    fn band_progress_fades_over_span() {
        assert_eq!(band_progress(0.05, 0.05, 0.15), 0.0);
        assert!((band_progress(0.125, 0.05, 0.15) - 0.5).abs() < 1e-12);
        assert_eq!(band_progress(0.9, 0.05, 0.15), 1.0);
        assert_eq!(band_progress(0.3, 0.2, 0.0), 1.0);
    }
}
