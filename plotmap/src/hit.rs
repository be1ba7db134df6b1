#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Viewport};
use crate::geometry::{PlotScene, PlotShape};
use crate::math::Point;

/// Find the plot under `screen_pt` (canvas-local pixels).
///
/// Only visible shapes are considered. Shapes are tested newest-first, so on
/// overlap the most recently loaded plot wins, matching draw order. Returns
/// `None` for a degenerate viewport.
#[must_use]
pub fn hit_test<'a>(scene: &'a PlotScene, camera: &Camera, viewport: &Viewport, screen_pt: Point) -> Option<&'a PlotShape> {
    let world = camera.screen_to_world(screen_pt, viewport)?;
    hit_test_world(scene, world)
}

/// World-space variant of [`hit_test`].
#[must_use]
pub fn hit_test_world(scene: &PlotScene, world: Point) -> Option<&PlotShape> {
    if !world.is_finite() {
        return None;
    }
    scene
        .shapes()
        .iter()
        .rev()
        .filter(|shape| shape.visible)
        .find(|shape| shape.contains(world))
}
