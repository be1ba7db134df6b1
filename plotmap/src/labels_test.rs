#![allow(clippy::float_cmp)]

use super::*;

fn anchor(x: f64, y: f64) -> LabelAnchor {
    LabelAnchor { plot_no: "12".to_owned(), status: PlotStatus::Available, world: Point::new(x, y), visible: true }
}

fn site() -> (Camera, Viewport) {
    (Camera::fit_to_image(1000.0, 800.0), Viewport::new(40.0, 60.0, 1000.0, 800.0))
}

// =============================================================
// project_label
// =============================================================

#[test]
fn anchor_inside_is_placed_in_canvas_pixels() {
    let (cam, vp) = site();
    let placement = project_label(&anchor(150.0, 150.0), &cam, &vp);
    assert!(placement.visible);
    assert!((placement.x - 150.0).abs() < 1e-9);
    assert!((placement.y - 650.0).abs() < 1e-9);
    assert_eq!(placement.scale, 1.0);
}

#[test]
fn anchor_outside_is_hidden() {
    let (cam, vp) = site();
    assert!(!project_label(&anchor(-5.0, 100.0), &cam, &vp).visible);
    assert!(!project_label(&anchor(100.0, 900.0), &cam, &vp).visible);
}

#[test]
fn anchor_leaves_view_after_pan() {
    let (mut cam, vp) = site();
    let a = anchor(950.0, 400.0);
    assert!(project_label(&a, &cam, &vp).visible);
    cam.pan(100.0, 0.0, &vp);
    assert!(!project_label(&a, &cam, &vp).visible);
}

#[test]
fn filtered_anchor_is_hidden() {
    let (cam, vp) = site();
    let mut a = anchor(500.0, 400.0);
    a.visible = false;
    assert!(!project_label(&a, &cam, &vp).visible);
}

#[test]
fn degenerate_viewport_hides_everything() {
    let (cam, _) = site();
    let vp = Viewport::sized(0.0, 0.0);
    assert!(!project_label(&anchor(500.0, 400.0), &cam, &vp).visible);
}

#[test]
fn scale_follows_zoom() {
    let (mut cam, vp) = site();
    cam.zoom_at(2.0, Point::new(500.0, 400.0), &vp);
    let placement = project_label(&anchor(500.0, 400.0), &cam, &vp);
    assert!(placement.visible);
    assert!((placement.scale - 2.0).abs() < 1e-9);
}

#[test]
fn label_tracks_zoom_about_its_own_position() {
    let (mut cam, vp) = site();
    let a = anchor(150.0, 150.0);
    let before = project_label(&a, &cam, &vp);
    cam.zoom_at(3.0, Point::new(before.x, before.y), &vp);
    let after = project_label(&a, &cam, &vp);
    assert!((before.x - after.x).abs() < 1e-6);
    assert!((before.y - after.y).abs() < 1e-6);
}

#[test]
fn project_labels_preserves_order() {
    let (cam, vp) = site();
    let placements = project_labels(&[anchor(10.0, 10.0), anchor(-10.0, 10.0), anchor(990.0, 790.0)], &cam, &vp);
    let visible: Vec<bool> = placements.iter().map(|p| p.visible).collect();
    assert_eq!(visible, vec![true, false, true]);
}

// =============================================================
// Styles
// =============================================================

#[test]
fn hidden_label_style_is_display_none() {
    assert_eq!(label_style(&LabelPlacement::HIDDEN), "display:none;");
}

#[test]
fn visible_label_style_positions_and_sizes() {
    let style = label_style(&LabelPlacement { visible: true, x: 12.0, y: 34.5, scale: 2.0 });
    assert!(style.contains("left:12.0px"));
    assert!(style.contains("top:34.5px"));
    assert!(style.contains("font-size:20.0px"));
}

#[test]
fn container_style_follows_canvas_rect() {
    let style = container_style(&Viewport::new(40.0, 60.0, 1000.0, 800.0));
    assert!(style.contains("position:fixed"));
    assert!(style.contains("left:40.0px"));
    assert!(style.contains("top:60.0px"));
    assert!(style.contains("width:1000.0px"));
    assert!(style.contains("height:800.0px"));
}

#[test]
fn font_scales_linearly() {
    assert_eq!(label_font_px(1.0), LABEL_BASE_FONT_PX);
    assert_eq!(label_font_px(0.5), LABEL_BASE_FONT_PX * 0.5);
}
