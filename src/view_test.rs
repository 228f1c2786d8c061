#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn view(pan_x: f64, pan_y: f64, zoom: f64) -> View {
    View { pan_x, pan_y, zoom, ..View::default() }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0));
}

// --- View defaults ---

#[test]
fn view_default_is_identity() {
    let v = View::default();
    assert_eq!(v.pan_x, 0.0);
    assert_eq!(v.pan_y, 0.0);
    assert_eq!(v.zoom, 1.0);
}

#[test]
fn view_default_grid() {
    let v = View::default();
    assert_eq!(v.grid_spacing, 50.0);
    assert!(!v.snap_enabled);
    assert!(!v.grid_visible);
}

// --- screen_to_world / world_to_screen ---

#[test]
fn screen_to_world_identity() {
    let world = View::default().screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let v = view(20.0, 10.0, 2.0);
    let world = v.screen_to_world(Point::new(20.0, 10.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
    let world = v.screen_to_world(Point::new(40.0, 30.0));
    assert!(point_approx_eq(world, Point::new(10.0, 10.0)));
}

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let v = view(20.0, 10.0, 1.5);
    let screen = v.world_to_screen(Point::new(10.0, 10.0));
    // 10*1.5 + 20 = 35, 10*1.5 + 10 = 25
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

#[test]
fn round_trip_across_views() {
    let views = [view(0.0, 0.0, 1.0), view(-300.0, 125.5, 0.5), view(12.25, -7.0, 2.0), view(1e4, -1e4, 0.73)];
    let points = [Point::new(0.0, 0.0), Point::new(-123.4, 987.6), Point::new(1e6, -1e6), Point::new(0.001, 42.0)];
    for v in views {
        for p in points {
            let back = v.screen_to_world(v.world_to_screen(p));
            assert!((back.x - p.x).abs() <= 1e-9 * p.x.abs().max(1.0));
            assert!((back.y - p.y).abs() <= 1e-9 * p.y.abs().max(1.0));
        }
    }
}

// --- clamp_zoom ---

#[test]
fn clamp_zoom_limits() {
    assert_eq!(clamp_zoom(0.1), 0.5);
    assert_eq!(clamp_zoom(5.0), 2.0);
    assert_eq!(clamp_zoom(1.3), 1.3);
    assert_eq!(clamp_zoom(f64::INFINITY), 2.0);
    assert_eq!(clamp_zoom(f64::NEG_INFINITY), 0.5);
    assert_eq!(clamp_zoom(f64::NAN), 0.5);
}

// --- zoom_about_point ---

#[test]
fn zoom_about_point_keeps_anchor_world_point() {
    let cases = [
        (view(0.0, 0.0, 1.0), Point::new(400.0, 300.0), 1.5),
        (view(-120.0, 35.0, 0.8), Point::new(10.0, 700.0), 0.6),
        (view(55.0, -90.0, 2.0), Point::new(-50.0, 0.0), 1.1),
    ];
    for (v, anchor, z) in cases {
        let world = v.screen_to_world(anchor);
        let zoomed = v.zoom_about_point(anchor, z);
        assert!(point_approx_eq(zoomed.world_to_screen(world), anchor));
    }
}

#[test]
fn zoom_about_point_keeps_anchor_when_clamped() {
    let v = view(30.0, 40.0, 1.0);
    let anchor = Point::new(200.0, 100.0);
    let world = v.screen_to_world(anchor);
    let zoomed = v.zoom_about_point(anchor, 50.0);
    assert_eq!(zoomed.zoom, 2.0);
    assert!(point_approx_eq(zoomed.world_to_screen(world), anchor));
}

#[test]
fn zoom_about_point_formula() {
    let v = view(100.0, 50.0, 1.0);
    let zoomed = v.zoom_about_point(Point::new(300.0, 250.0), 2.0);
    // pan' = anchor - 2 * (anchor - pan)
    assert!(approx_eq(zoomed.pan_x, 300.0 - 2.0 * 200.0));
    assert!(approx_eq(zoomed.pan_y, 250.0 - 2.0 * 200.0));
}

#[test]
fn zoom_about_point_preserves_grid_options() {
    let v = View { snap_enabled: true, grid_visible: true, grid_spacing: 25.0, ..View::default() };
    let zoomed = v.zoom_about_point(Point::new(0.0, 0.0), 1.5);
    assert!(zoomed.snap_enabled);
    assert!(zoomed.grid_visible);
    assert_eq!(zoomed.grid_spacing, 25.0);
}

#[test]
fn repeated_zoom_in_converges_to_max() {
    let mut v = View::default();
    let anchor = Point::new(400.0, 300.0);
    for _ in 0..50 {
        v = v.zoom_about_point(anchor, v.zoom * 1.25);
        assert!(v.zoom <= 2.0);
    }
    assert_eq!(v.zoom, 2.0);
    let again = v.zoom_about_point(anchor, v.zoom * 1.25);
    assert_eq!(again.zoom, 2.0);
    assert!(approx_eq(again.pan_x, v.pan_x));
}

#[test]
fn repeated_zoom_out_converges_to_min() {
    let mut v = View::default();
    for _ in 0..50 {
        v = v.zoom_about_point(Point::new(0.0, 0.0), v.zoom * 0.8);
        assert!(v.zoom >= 0.5);
    }
    assert_eq!(v.zoom, 0.5);
}

// --- pan / css ---

#[test]
fn pan_to_is_unconstrained() {
    let mut v = View::default();
    v.pan_to(-1e7, 3.5e6);
    assert_eq!(v.pan_x, -1e7);
    assert_eq!(v.pan_y, 3.5e6);
}

#[test]
fn css_transform_format() {
    let v = view(10.0, -5.5, 1.5);
    assert_eq!(v.css_transform(), "translate(10px, -5.5px) scale(1.5)");
}
