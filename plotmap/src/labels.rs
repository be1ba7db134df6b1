//! Label projector: plot-number overlays positioned from world-space centroids.
//!
//! The host calls [`project_labels`] once per animation frame, whether or not
//! anything changed, because camera bounds are mutated imperatively during
//! drag and pinch gestures without going through reactive state. Each anchor
//! is projected world → NDC → canvas pixels; anchors outside the canvas are
//! hidden. Label size follows the zoom factor so numbers grow as the user
//! zooms in instead of overlapping at low zoom.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use crate::camera::{Camera, Viewport};
use crate::consts::LABEL_BASE_FONT_PX;
use crate::geometry::PlotStatus;
use crate::math::Point;

/// World-space anchor for one plot label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    pub plot_no: String,
    pub status: PlotStatus,
    /// Area-weighted centroid in world space.
    pub world: Point,
    /// False when the plot is hidden by the status filter.
    pub visible: bool,
}

/// Where (and whether) to draw a label this frame, in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl LabelPlacement {
    pub const HIDDEN: Self = Self { visible: false, x: 0.0, y: 0.0, scale: 1.0 };
}

/// Project one anchor through the camera.
#[must_use]
pub fn project_label(anchor: &LabelAnchor, camera: &Camera, viewport: &Viewport) -> LabelPlacement {
    if !anchor.visible {
        return LabelPlacement::HIDDEN;
    }
    let Some(screen) = camera.world_to_screen(anchor.world, viewport) else {
        return LabelPlacement::HIDDEN;
    };
    let on_screen = screen.is_finite()
        && (0.0..=viewport.width).contains(&screen.x)
        && (0.0..=viewport.height).contains(&screen.y);
    if !on_screen {
        return LabelPlacement::HIDDEN;
    }
    LabelPlacement { visible: true, x: screen.x, y: screen.y, scale: camera.zoom }
}

/// Project every anchor, preserving order.
#[must_use]
pub fn project_labels(anchors: &[LabelAnchor], camera: &Camera, viewport: &Viewport) -> Vec<LabelPlacement> {
    anchors
        .iter()
        .map(|anchor| project_label(anchor, camera, viewport))
        .collect()
}

/// Label font size in CSS pixels for a given zoom.
#[must_use]
pub fn label_font_px(scale: f64) -> f64 {
    LABEL_BASE_FONT_PX * scale
}

/// Inline style for a label element, relative to the label container.
#[must_use]
pub fn label_style(placement: &LabelPlacement) -> String {
    if !placement.visible {
        return "display:none;".to_owned();
    }
    format!(
        "display:block;position:absolute;left:{:.1}px;top:{:.1}px;font-size:{:.1}px;transform:translate(-50%,-50%);",
        placement.x,
        placement.y,
        label_font_px(placement.scale)
    )
}

/// Inline style pinning the label container over the canvas' current client rect.
#[must_use]
pub fn container_style(viewport: &Viewport) -> String {
    format!(
        "position:fixed;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;overflow:hidden;pointer-events:none;",
        viewport.left,
        viewport.top,
        viewport.width.max(0.0),
        viewport.height.max(0.0)
    )
}
