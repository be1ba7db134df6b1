#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn bounds(cam: &Camera) -> (f64, f64, f64, f64) {
    (cam.left, cam.right, cam.top, cam.bottom)
}

fn site() -> (Camera, Viewport) {
    (Camera::fit_to_image(1000.0, 800.0), Viewport::sized(1000.0, 800.0))
}

// --- Viewport ---

#[test]
fn viewport_zero_width_is_degenerate() {
    assert!(Viewport::sized(0.0, 600.0).is_degenerate());
    assert!(Viewport::sized(800.0, 0.0).is_degenerate());
    assert!(Viewport::sized(f64::NAN, 600.0).is_degenerate());
    assert!(!Viewport::sized(800.0, 600.0).is_degenerate());
}

#[test]
fn viewport_client_to_local_subtracts_offset() {
    let vp = Viewport::new(30.0, 120.0, 800.0, 600.0);
    assert_eq!(vp.client_to_local(130.0, 220.0), Point::new(100.0, 100.0));
}

// --- fit_to_image ---

#[test]
fn fit_to_image_frames_whole_image() {
    let cam = Camera::fit_to_image(1000.0, 800.0);
    assert_eq!(bounds(&cam), (0.0, 1000.0, 800.0, 0.0));
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.image_size(), (1000.0, 800.0));
}

#[test]
fn fit_resets_after_pan_and_zoom() {
    let (mut cam, vp) = site();
    cam.pan(40.0, -12.0, &vp);
    cam.zoom_at(2.0, Point::new(10.0, 10.0), &vp);
    cam.fit(500.0, 400.0);
    assert_eq!(bounds(&cam), (0.0, 500.0, 400.0, 0.0));
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn fit_with_zero_size_keeps_bounds_ordered() {
    let cam = Camera::fit_to_image(0.0, -5.0);
    assert!(cam.left < cam.right);
    assert!(cam.bottom < cam.top);
}

// --- projections ---

#[test]
fn world_to_screen_flips_y() {
    let (cam, vp) = site();
    let top_left = cam.world_to_screen(Point::new(0.0, 800.0), &vp).unwrap();
    let bottom_right = cam.world_to_screen(Point::new(1000.0, 0.0), &vp).unwrap();
    assert!(point_approx_eq(top_left, Point::new(0.0, 0.0)));
    assert!(point_approx_eq(bottom_right, Point::new(1000.0, 800.0)));
}

#[test]
fn world_to_ndc_center_is_origin() {
    let (cam, _) = site();
    assert!(point_approx_eq(cam.world_to_ndc(Point::new(500.0, 400.0)), Point::new(0.0, 0.0)));
}

#[test]
fn screen_world_round_trip() {
    let (mut cam, vp) = site();
    cam.pan(13.0, 7.0, &vp);
    cam.zoom_at(1.7, Point::new(300.0, 200.0), &vp);
    let screen = Point::new(123.0, 456.0);
    let world = cam.screen_to_world(screen, &vp).unwrap();
    let back = cam.world_to_screen(world, &vp).unwrap();
    assert!(point_approx_eq(screen, back));
}

#[test]
fn projections_none_on_degenerate_viewport() {
    let (cam, _) = site();
    let vp = Viewport::sized(0.0, 0.0);
    assert!(cam.screen_to_world(Point::new(1.0, 1.0), &vp).is_none());
    assert!(cam.world_to_screen(Point::new(1.0, 1.0), &vp).is_none());
}

// --- pan ---

#[test]
fn pan_right_moves_window_left() {
    let (mut cam, vp) = site();
    assert!(cam.pan(100.0, 0.0, &vp));
    assert_eq!(bounds(&cam), (-100.0, 900.0, 800.0, 0.0));
}

#[test]
fn pan_down_moves_window_up() {
    let (mut cam, vp) = site();
    cam.pan(0.0, 50.0, &vp);
    assert_eq!(bounds(&cam), (0.0, 1000.0, 850.0, 50.0));
}

#[test]
fn pan_scales_by_world_per_pixel() {
    let mut cam = Camera::fit_to_image(1000.0, 800.0);
    let vp = Viewport::sized(500.0, 400.0);
    cam.pan(10.0, 10.0, &vp);
    assert!(approx_eq(cam.left, -20.0));
    assert!(approx_eq(cam.top, 820.0));
}

#[test]
fn pan_keeps_point_under_cursor() {
    let (mut cam, vp) = site();
    cam.zoom_at(3.0, Point::new(200.0, 300.0), &vp);
    let grabbed = cam.screen_to_world(Point::new(400.0, 400.0), &vp).unwrap();
    cam.pan(25.0, -40.0, &vp);
    let now = cam.screen_to_world(Point::new(425.0, 360.0), &vp).unwrap();
    assert!(point_approx_eq(grabbed, now));
}

#[test]
fn pan_then_inverse_restores_exactly() {
    let (mut cam, vp) = site();
    let before = bounds(&cam);
    cam.pan(37.0, -12.0, &vp);
    cam.pan(-37.0, 12.0, &vp);
    assert_eq!(bounds(&cam), before);
}

#[test]
fn pan_then_inverse_restores_when_zoomed() {
    let (mut cam, vp) = site();
    cam.zoom_at(2.3, Point::new(321.0, 123.0), &vp);
    let (l, r, t, b) = bounds(&cam);
    cam.pan(17.5, 3.25, &vp);
    cam.pan(-17.5, -3.25, &vp);
    assert!(approx_eq(cam.left, l));
    assert!(approx_eq(cam.right, r));
    assert!(approx_eq(cam.top, t));
    assert!(approx_eq(cam.bottom, b));
}

#[test]
fn pan_on_degenerate_viewport_is_noop() {
    let (mut cam, _) = site();
    let before = cam;
    assert!(!cam.pan(10.0, 10.0, &Viewport::sized(0.0, 600.0)));
    assert_eq!(cam, before);
}

#[test]
fn pan_allows_leaving_the_image() {
    let (mut cam, vp) = site();
    cam.pan(-5000.0, 0.0, &vp);
    assert!(cam.left > 1000.0);
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_pivot_world_point_fixed() {
    let (mut cam, vp) = site();
    for (factor, pivot) in [
        (1.1, Point::new(100.0, 700.0)),
        (2.5, Point::new(999.0, 1.0)),
        (0.8, Point::new(500.0, 400.0)),
        (1.0 / 1.1, Point::new(10.0, 790.0)),
    ] {
        let before = cam.screen_to_world(pivot, &vp).unwrap();
        assert!(cam.zoom_at(factor, pivot, &vp));
        let after = cam.screen_to_world(pivot, &vp).unwrap();
        assert!(point_approx_eq(before, after), "pivot drifted for factor {factor}");
    }
}

#[test]
fn zoom_at_scales_window_from_image_size() {
    let (mut cam, vp) = site();
    cam.zoom_at(2.0, vp.center(), &vp);
    assert!(approx_eq(cam.world_width(), 500.0));
    assert!(approx_eq(cam.world_height(), 400.0));
    assert!(approx_eq(cam.zoom, 2.0));
    assert!(point_approx_eq(cam.center(), Point::new(500.0, 400.0)));
}

#[test]
fn zoom_in_never_exceeds_max() {
    let (mut cam, vp) = site();
    for _ in 0..200 {
        cam.zoom_at(1.1, Point::new(250.0, 250.0), &vp);
        assert!(cam.zoom <= MAX_ZOOM);
    }
    assert!(approx_eq(cam.zoom, MAX_ZOOM));
}

#[test]
fn zoom_out_never_below_min() {
    let (mut cam, vp) = site();
    for _ in 0..200 {
        cam.zoom_at(1.0 / 1.1, Point::new(250.0, 250.0), &vp);
        assert!(cam.zoom >= MIN_ZOOM);
    }
    assert!(approx_eq(cam.zoom, MIN_ZOOM));
}

#[test]
fn zoom_at_limit_is_noop() {
    let (mut cam, vp) = site();
    cam.zoom_at(1000.0, Point::new(0.0, 0.0), &vp);
    let pinned = cam;
    assert!(!cam.zoom_at(1.1, Point::new(400.0, 100.0), &vp));
    assert_eq!(cam, pinned);
}

#[test]
fn zoom_at_degenerate_viewport_is_noop() {
    let (mut cam, _) = site();
    let before = cam;
    assert!(!cam.zoom_at(2.0, Point::new(0.0, 0.0), &Viewport::sized(0.0, 0.0)));
    assert_eq!(cam, before);
}

#[test]
fn zoom_at_rejects_bad_factor() {
    let (mut cam, vp) = site();
    assert!(!cam.zoom_at(0.0, Point::new(0.0, 0.0), &vp));
    assert!(!cam.zoom_at(f64::NAN, Point::new(0.0, 0.0), &vp));
    assert!(!cam.zoom_at(-2.0, Point::new(0.0, 0.0), &vp));
}

#[test]
fn zoom_keeps_bounds_ordered() {
    let (mut cam, vp) = site();
    cam.zoom_at(7.0, Point::new(900.0, 50.0), &vp);
    cam.zoom_at(0.1, Point::new(50.0, 700.0), &vp);
    assert!(cam.left < cam.right);
    assert!(cam.bottom < cam.top);
}

// --- center_on ---

#[test]
fn center_on_moves_and_clamps() {
    let (mut cam, _) = site();
    cam.center_on(Point::new(150.0, 150.0), 40.0);
    assert!(point_approx_eq(cam.center(), Point::new(150.0, 150.0)));
    assert_eq!(cam.zoom, MAX_ZOOM);
}

#[test]
fn center_on_ignores_non_finite_target() {
    let (mut cam, _) = site();
    let before = cam;
    cam.center_on(Point::new(f64::NAN, 0.0), 2.0);
    assert_eq!(cam, before);
}
