#![cfg(not(target_arch = "wasm32"))]

use landing_fx::lines::{sample, Line};
use landing_fx::progress::{scroll_progress, ScrollGeometry};
use landing_fx::ticker::{wrap, Ticker, TickerConfig};
use landing_fx::zoom::{cover_size, Viewport, ZoomConfig, ZoomController, ZoomState};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn zoom_is_exact_linear_interpolation() {
    let initial = ZoomState::from_rect(820.0, 120.0, 360.0, 480.0);
    let controller = ZoomController::new(initial, ZoomConfig::default());

    for vp in [
        Viewport { width: 1920.0, height: 1080.0 }, // wide
        Viewport { width: 390.0, height: 844.0 },   // tall
    ] {
        let (tw, th) = cover_size(&initial, &vp, 0.05);
        assert!(tw >= vp.width && th >= vp.height, "target must cover {vp:?}");

        for step in 0..=20 {
            let p = step as f64 / 20.0;
            let f = controller.frame(p, &vp);
            let expect = (
                initial.width + (tw - initial.width) * p,
                initial.height + (th - initial.height) * p,
                initial.center_x + (vp.width / 2.0 - initial.center_x) * p,
                initial.center_y + (vp.height / 2.0 - initial.center_y) * p,
            );
            assert_eq!((f.width, f.height, f.center_x, f.center_y), expect, "p={p}");
        }

        let f0 = controller.frame(0.0, &vp);
        assert_eq!((f0.width, f0.height), (initial.width, initial.height));
        assert_eq!((f0.center_x, f0.center_y), (initial.center_x, initial.center_y));
    }
}

#[test]
fn wrap_range_and_periodicity() {
    let mut ticker = Ticker::new(10, TickerConfig::for_viewport(1440.0));
    let total = ticker.total_width();
    let offset = ticker.config().wrap_offset();

    for start in [-99999.2, -1234.5, 0.0, 37.25, 2500.0] {
        ticker.set_scroll_pos(start);
        let before: Vec<f64> = (0..10).map(|i| ticker.wrapped_x(i)).collect();
        for &x in &before {
            assert!(x >= -offset && x < total - offset, "start={start} x={x}");
        }

        ticker.set_scroll_pos(start + total);
        for (i, &x) in before.iter().enumerate() {
            let after = ticker.wrapped_x(i);
            assert!(approx_eq(x, after, 1e-6), "item {i}: {x} vs {after}");
        }
    }

    // raw offsets far on either side
    for raw in [-1e7, -5200.0, -919.999, 4279.999, 1e7] {
        let x = wrap(raw, total, offset);
        assert!(x >= -offset && x < total - offset, "raw={raw} x={x}");
    }
}

#[test]
fn opacity_falls_off_with_distance() {
    let container = 1200.0;
    let mut ticker = Ticker::new(10, TickerConfig::for_viewport(1440.0));
    let half_card = ticker.config().card_width / 2.0;
    let radius = container / ticker.config().influence_divisor;

    // Place card 0's centre at `d` from the hero point on each side.
    let mut opacity_at = |d: f64| {
        ticker.set_scroll_pos(container / 2.0 - half_card + d);
        ticker.transform(0, container)
    };

    assert_eq!(opacity_at(0.0).opacity, 1.0);
    for sign in [-1.0, 1.0] {
        let mut last = 1.0;
        let mut last_z = 100;
        for step in 0..=48 {
            let d = step as f64 * 25.0;
            let t = opacity_at(sign * d);
            assert!(t.opacity <= last, "d={d} {} > {last}", t.opacity);
            assert!(t.z_index <= last_z);
            if d >= radius {
                assert_eq!(t.opacity, 0.0, "d={d}");
            }
            last = t.opacity;
            last_z = t.z_index;
        }
    }
}

#[test]
fn line_sample_at_origin() {
    let line = Line {
        amplitude: 80.0,
        period: 320.0,
        speed: 0.002,
        phase: 1.3,
        base_y: 240.0,
        hue: 10.0,
        saturation: 45.0,
        lightness: 60.0,
    };
    let expect = line.base_y
        + line.amplitude * line.phase.sin()
        + 0.5 * line.amplitude * (0.5 * line.phase).cos();
    assert!(approx_eq(sample(&line, 0.0), expect, 1e-12));
}

#[test]
fn sampler_bounds() {
    let geom = |top: f64| ScrollGeometry {
        element_top: top,
        element_height: 2400.0,
        viewport_height: 800.0,
    };
    assert_eq!(scroll_progress(&geom(0.0)), 0.0);
    assert_eq!(scroll_progress(&geom(-1600.0)), 1.0);
    assert_eq!(scroll_progress(&geom(-5000.0)), 1.0);
    assert_eq!(scroll_progress(&geom(250.0)), 0.0);
    for top in [-10.0, -400.0, -1599.0] {
        let p = scroll_progress(&geom(top));
        assert!(p > 0.0 && p < 1.0);
    }
}

#[test]
fn sampler_zero_range_is_defined() {
    for (top, expect) in [(0.0, 0.0), (12.0, 0.0), (-0.5, 1.0), (-900.0, 1.0)] {
        let p = scroll_progress(&ScrollGeometry {
            element_top: top,
            element_height: 900.0,
            viewport_height: 900.0,
        });
        assert!(!p.is_nan());
        assert_eq!(p, expect, "top={top}");
    }
}
