#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_EPSILON};
use crate::math::{Point, clamp};

/// The canvas' bounding client rect in CSS pixels.
///
/// `left` / `top` are page offsets and only matter for converting client
/// coordinates and aligning overlays; projections work in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A canvas-local viewport of the given size anchored at the page origin.
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self { left: 0.0, top: 0.0, width, height }
    }

    /// True while layout has not produced a usable size (zero, negative or non-finite).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }

    /// Convert page/client coordinates to canvas-local pixels.
    #[must_use]
    pub fn client_to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }

    /// Canvas-local centre.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Orthographic camera over the site image.
///
/// World space is the image's pixel grid with y pointing up: `(0, 0)` is the
/// bottom-left image corner and `(image_width, image_height)` the top-right.
/// The visible window is kept as four independent bounds; `zoom` is derived
/// from them and only used for clamping and label scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub zoom: f64,
    image_width: f64,
    image_height: f64,
}

impl Camera {
    /// A camera framing the full `width` x `height` image at zoom 1.
    #[must_use]
    pub fn fit_to_image(width: f64, height: f64) -> Self {
        let mut camera = Self {
            left: 0.0,
            right: 1.0,
            top: 1.0,
            bottom: 0.0,
            zoom: 1.0,
            image_width: 1.0,
            image_height: 1.0,
        };
        camera.fit(width, height);
        camera
    }

    /// Reset bounds to `[0, width] x [0, height]` and zoom to 1.
    ///
    /// Non-positive sizes fall back to 1 so the bounds invariants still hold.
    pub fn fit(&mut self, width: f64, height: f64) {
        let width = if width.is_finite() && width > 0.0 { width } else { 1.0 };
        let height = if height.is_finite() && height > 0.0 { height } else { 1.0 };
        self.image_width = width;
        self.image_height = height;
        self.left = 0.0;
        self.right = width;
        self.bottom = 0.0;
        self.top = height;
        self.zoom = 1.0;
    }

    #[must_use]
    pub fn image_size(&self) -> (f64, f64) {
        (self.image_width, self.image_height)
    }

    #[must_use]
    pub fn world_width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn world_height(&self) -> f64 {
        self.top - self.bottom
    }

    /// World-space centre of the visible window.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.bottom + self.top) * 0.5)
    }

    /// Project a world point to normalized device coordinates (`[-1, 1]` on screen).
    #[must_use]
    pub fn world_to_ndc(&self, world: Point) -> Point {
        Point::new(
            (world.x - self.left) / self.world_width() * 2.0 - 1.0,
            (world.y - self.bottom) / self.world_height() * 2.0 - 1.0,
        )
    }

    /// Project a world point to canvas-local pixels. `None` for a degenerate viewport.
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport: &Viewport) -> Option<Point> {
        if viewport.is_degenerate() {
            return None;
        }
        let ndc = self.world_to_ndc(world);
        Some(Point::new((ndc.x + 1.0) * 0.5 * viewport.width, (1.0 - ndc.y) * 0.5 * viewport.height))
    }

    /// Unproject canvas-local pixels to world space. `None` for a degenerate viewport.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport: &Viewport) -> Option<Point> {
        if viewport.is_degenerate() {
            return None;
        }
        let ndc_x = screen.x / viewport.width * 2.0 - 1.0;
        let ndc_y = 1.0 - screen.y / viewport.height * 2.0;
        Some(Point::new(
            self.left + (ndc_x + 1.0) * 0.5 * self.world_width(),
            self.bottom + (ndc_y + 1.0) * 0.5 * self.world_height(),
        ))
    }

    /// Shift the window by a screen-space pixel delta so the content follows the pointer.
    ///
    /// Returns `false` (and changes nothing) for a degenerate viewport.
    pub fn pan(&mut self, dx_px: f64, dy_px: f64, viewport: &Viewport) -> bool {
        if viewport.is_degenerate() || !dx_px.is_finite() || !dy_px.is_finite() {
            return false;
        }
        let world_dx = dx_px * self.world_width() / viewport.width;
        let world_dy = dy_px * self.world_height() / viewport.height;
        self.left -= world_dx;
        self.right -= world_dx;
        // Screen y grows downwards, world y grows upwards.
        self.top += world_dy;
        self.bottom += world_dy;
        true
    }

    /// Zoom by `factor` keeping the world point under `pivot` (canvas-local px) fixed.
    ///
    /// Returns `false` when the clamped zoom does not change or the viewport is degenerate.
    pub fn zoom_at(&mut self, factor: f64, pivot: Point, viewport: &Viewport) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let new_zoom = clamp(self.zoom * factor, MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < ZOOM_EPSILON {
            return false;
        }
        let Some(before) = self.screen_to_world(pivot, viewport) else {
            return false;
        };

        let center = self.center();
        let half_w = self.image_width / new_zoom * 0.5;
        let half_h = self.image_height / new_zoom * 0.5;
        self.left = center.x - half_w;
        self.right = center.x + half_w;
        self.bottom = center.y - half_h;
        self.top = center.y + half_h;
        self.zoom = new_zoom;

        let Some(after) = self.screen_to_world(pivot, viewport) else {
            return true;
        };
        let dx = before.x - after.x;
        let dy = before.y - after.y;
        self.left += dx;
        self.right += dx;
        self.bottom += dy;
        self.top += dy;
        true
    }

    /// Centre the window on `world` at the given (clamped) zoom.
    pub fn center_on(&mut self, world: Point, zoom: f64) {
        if !world.is_finite() {
            return;
        }
        let zoom = clamp(zoom, MIN_ZOOM, MAX_ZOOM);
        let half_w = self.image_width / zoom * 0.5;
        let half_h = self.image_height / zoom * 0.5;
        self.left = world.x - half_w;
        self.right = world.x + half_w;
        self.bottom = world.y - half_h;
        self.top = world.y + half_h;
        self.zoom = zoom;
    }
}
