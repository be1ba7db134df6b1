#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Button / Cursor
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(7), Button::Primary);
}

#[test]
fn cursor_css_names() {
    assert_eq!(Cursor::default().as_css(), "default");
    assert_eq!(Cursor::Pointer.as_css(), "pointer");
    assert_eq!(Cursor::Grab.as_css(), "grab");
    assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
}

// =============================================================
// State defaults
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert_eq!(state.mouse, MouseState::Idle);
    assert_eq!(state.touch, TouchState::Idle);
}

// =============================================================
// Tap / click classification
// =============================================================

#[test]
fn tap_under_threshold() {
    assert!(is_tap(Point::new(100.0, 100.0), Point::new(109.0, 91.0)));
}

#[test]
fn tap_at_threshold_is_pan() {
    assert!(!is_tap(Point::new(100.0, 100.0), Point::new(110.0, 100.0)));
    assert!(!is_tap(Point::new(100.0, 100.0), Point::new(100.0, 90.0)));
}

#[test]
fn tap_checks_each_axis() {
    // Diagonal distance is above 10 but each axis is below it.
    assert!(is_tap(Point::new(0.0, 0.0), Point::new(9.0, 9.0)));
}

#[test]
fn click_slop() {
    assert!(is_click(0.0));
    assert!(is_click(3.9));
    assert!(!is_click(4.0));
}

// =============================================================
// Pinch helpers
// =============================================================

#[test]
fn pinch_needs_two_touches() {
    assert!(pinch_distance(&[Point::new(0.0, 0.0)]).is_none());
    assert!(pinch_center(&[]).is_none());
}

#[test]
fn pinch_distance_and_center() {
    let touches = [Point::new(0.0, 0.0), Point::new(6.0, 8.0), Point::new(100.0, 100.0)];
    assert_eq!(pinch_distance(&touches), Some(10.0));
    assert_eq!(pinch_center(&touches), Some(Point::new(3.0, 4.0)));
}
