use std::collections::HashSet;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::camera::{Camera, Viewport};
use crate::consts::{FOCUS_ZOOM, PINCH_DEAD_ZONE_PX, PINCH_ZOOM_STEP, WHEEL_ZOOM_STEP};
use crate::geometry::{LoadReport, PlotFeature, PlotProperties, PlotScene, PlotShape, PlotStatus};
use crate::hit;
use crate::input::{Button, Cursor, InputState, MouseState, TouchState, WheelDelta, is_click, is_tap};
use crate::input::{pinch_center, pinch_distance};
use crate::labels::{self, LabelAnchor, LabelPlacement};
use crate::math::{Point, distance};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Change the canvas CSS cursor.
    SetCursor(Cursor),
    /// The hovered plot or its screen position changed; `None` clears the tooltip.
    Hover(Option<HoverInfo>),
    /// A click or tap landed on a plot; open its detail dialog.
    PlotSelected(PlotProperties),
    /// Camera or highlight changed; the next frame must redraw.
    RenderNeeded,
}

/// Tooltip payload for the plot under the mouse.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub properties: PlotProperties,
    /// Last pointer position in canvas-local pixels.
    pub screen: Point,
}

/// Engine state that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// One instance exists per mounted viewer; nothing here is global.
pub struct EngineCore {
    pub scene: PlotScene,
    /// `None` until the site image has loaded; input is ignored until then.
    pub camera: Option<Camera>,
    pub input: InputState,
    pub viewport: Viewport,
    pub dpr: f64,
    anchors: Vec<LabelAnchor>,
    geometry_rev: u64,
    hovered: Option<String>,
    selected: Option<String>,
    cursor: Cursor,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: PlotScene::new(),
            camera: None,
            input: InputState::default(),
            viewport: Viewport::default(),
            dpr: 1.0,
            anchors: Vec::new(),
            geometry_rev: 0,
            hovered: None,
            selected: None,
            cursor: Cursor::Default,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// A new site image finished loading: frame it and rebuild geometry against its height.
    pub fn set_image_size(&mut self, width: f64, height: f64) -> LoadReport {
        let camera = Camera::fit_to_image(width, height);
        let (_, fitted_height) = camera.image_size();
        self.camera = Some(camera);
        self.input = InputState::default();
        let report = self.scene.set_image_size(fitted_height);
        self.geometry_replaced();
        report
    }

    /// Replace all plot shapes with a new snapshot.
    pub fn load_features(&mut self, features: Vec<PlotFeature>) -> LoadReport {
        let report = self.scene.load_features(features);
        self.geometry_replaced();
        report
    }

    /// Forget the current venture entirely (image, camera, shapes, gestures).
    pub fn clear(&mut self) {
        self.scene.clear();
        self.camera = None;
        self.input = InputState::default();
        self.geometry_replaced();
    }

    /// Show only plots with the given statuses; `None` shows all.
    pub fn set_status_filter(&mut self, filter: Option<HashSet<PlotStatus>>) {
        self.scene.set_status_filter(filter);
        self.geometry_replaced();
    }

    fn geometry_replaced(&mut self) {
        self.anchors = self.scene.anchors();
        self.geometry_rev = self.geometry_rev.wrapping_add(1);
        if self.hovered.as_deref().is_some_and(|no| self.scene.find(no).is_none()) {
            self.hovered = None;
        }
        if self.selected.as_deref().is_some_and(|no| self.scene.find(no).is_none()) {
            self.selected = None;
        }
    }

    /// Record the canvas' client rect.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Option<Camera> {
        self.camera
    }

    #[must_use]
    pub fn zoom(&self) -> Option<f64> {
        self.camera.map(|c| c.zoom)
    }

    /// Bumped whenever label anchors are rebuilt, so hosts know to recreate label elements.
    #[must_use]
    pub fn geometry_rev(&self) -> u64 {
        self.geometry_rev
    }

    #[must_use]
    pub fn anchors(&self) -> &[LabelAnchor] {
        &self.anchors
    }

    /// Screen placement for every anchor under the current camera.
    #[must_use]
    pub fn label_placements(&self) -> Vec<LabelPlacement> {
        match self.camera {
            Some(camera) => labels::project_labels(&self.anchors, &camera, &self.viewport),
            None => vec![LabelPlacement::HIDDEN; self.anchors.len()],
        }
    }

    #[must_use]
    pub fn hovered_plot(&self) -> Option<&PlotShape> {
        self.hovered.as_deref().and_then(|no| self.scene.find(no))
    }

    #[must_use]
    pub fn selected_plot(&self) -> Option<&PlotShape> {
        self.selected.as_deref().and_then(|no| self.scene.find(no))
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Plot under a canvas-local point, if the viewer is ready.
    #[must_use]
    pub fn plot_at(&self, screen_pt: Point) -> Option<&PlotShape> {
        let camera = self.camera.as_ref()?;
        hit::hit_test(&self.scene, camera, &self.viewport, screen_pt)
    }

    fn ready(&self) -> bool {
        self.camera.is_some() && !self.viewport.is_degenerate()
    }

    // --- View commands ---

    /// Zoom one wheel step in, anchored at the viewport centre.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        let center = self.viewport.center();
        self.zoom_by(WHEEL_ZOOM_STEP, center)
    }

    /// Zoom one wheel step out, anchored at the viewport centre.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        let center = self.viewport.center();
        self.zoom_by(1.0 / WHEEL_ZOOM_STEP, center)
    }

    /// Frame the whole site image again.
    pub fn reset_view(&mut self) -> Vec<Action> {
        let Some(camera) = self.camera.as_mut() else {
            return Vec::new();
        };
        let (w, h) = camera.image_size();
        camera.fit(w, h);
        vec![Action::RenderNeeded]
    }

    /// Centre on a plot's centroid at [`FOCUS_ZOOM`] and mark it selected.
    pub fn focus_plot(&mut self, plot_no: &str) -> Vec<Action> {
        let Some(centroid) = self.scene.find(plot_no).map(|s| s.centroid) else {
            return Vec::new();
        };
        let Some(camera) = self.camera.as_mut() else {
            return Vec::new();
        };
        camera.center_on(centroid, FOCUS_ZOOM);
        self.selected = Some(plot_no.to_owned());
        vec![Action::RenderNeeded]
    }

    /// Drop the selection highlight (detail dialog closed).
    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.selected.take().is_some() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn zoom_by(&mut self, factor: f64, pivot: Point) -> Vec<Action> {
        if !self.ready() {
            return Vec::new();
        }
        let viewport = self.viewport;
        if self.camera.as_mut().is_some_and(|camera| camera.zoom_at(factor, pivot, &viewport)) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        let viewport = self.viewport;
        self.camera.as_mut().is_some_and(|camera| camera.pan(dx, dy, &viewport))
    }

    fn select_at(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some(properties) = self.plot_at(screen_pt).map(|s| s.properties.clone()) else {
            return Vec::new();
        };
        self.selected = Some(properties.plot_no.clone());
        vec![Action::PlotSelected(properties), Action::RenderNeeded]
    }

    fn set_cursor(&mut self, cursor: Cursor, actions: &mut Vec<Action>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }
    }

    // --- Mouse ---

    pub fn on_mouse_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.ready() {
            return Vec::new();
        }
        self.input.mouse = MouseState::Dragging { start: screen_pt, last: screen_pt, max_travel: 0.0 };
        let mut actions = Vec::new();
        self.set_cursor(Cursor::Grab, &mut actions);
        actions
    }

    pub fn on_mouse_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if !self.ready() {
            return Vec::new();
        }
        if let MouseState::Dragging { start, last, max_travel } = self.input.mouse {
            self.input.mouse = MouseState::Dragging {
                start,
                last: screen_pt,
                max_travel: max_travel.max(distance(start, screen_pt)),
            };
            let mut actions = Vec::new();
            if !is_click(max_travel.max(distance(start, screen_pt))) {
                self.set_cursor(Cursor::Grabbing, &mut actions);
            }
            if self.pan_by(screen_pt.x - last.x, screen_pt.y - last.y) {
                actions.push(Action::RenderNeeded);
            }
            return actions;
        }
        self.update_hover(screen_pt)
    }

    fn update_hover(&mut self, screen_pt: Point) -> Vec<Action> {
        let hit = self.plot_at(screen_pt).map(|s| s.properties.clone());
        let mut actions = Vec::new();
        match hit {
            Some(properties) => {
                let changed = self.hovered.as_deref() != Some(properties.plot_no.as_str());
                self.hovered = Some(properties.plot_no.clone());
                self.set_cursor(Cursor::Pointer, &mut actions);
                actions.push(Action::Hover(Some(HoverInfo { properties, screen: screen_pt })));
                if changed {
                    actions.push(Action::RenderNeeded);
                }
            }
            None => {
                self.set_cursor(Cursor::Default, &mut actions);
                if self.hovered.take().is_some() {
                    actions.push(Action::Hover(None));
                    actions.push(Action::RenderNeeded);
                }
            }
        }
        actions
    }

    /// Button released anywhere on the page. `screen_pt` may lie outside the canvas.
    pub fn on_mouse_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let MouseState::Dragging { start, max_travel, .. } = self.input.mouse else {
            return Vec::new();
        };
        self.input.mouse = MouseState::Idle;
        let travel = max_travel.max(distance(start, screen_pt));
        let mut actions = Vec::new();
        let cursor = if self.hovered.is_some() { Cursor::Pointer } else { Cursor::Default };
        self.set_cursor(cursor, &mut actions);
        if is_click(travel) && self.ready() {
            actions.extend(self.select_at(screen_pt));
        }
        actions
    }

    /// Pointer left the canvas: drop hover. An active drag continues until the global mouse-up.
    pub fn on_mouse_leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if matches!(self.input.mouse, MouseState::Idle) {
            self.set_cursor(Cursor::Default, &mut actions);
        }
        if self.hovered.take().is_some() {
            actions.push(Action::Hover(None));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Wheel ---

    /// One discrete zoom step per wheel event, anchored at the cursor.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        if delta.dy < 0.0 {
            self.zoom_by(WHEEL_ZOOM_STEP, screen_pt)
        } else if delta.dy > 0.0 {
            self.zoom_by(1.0 / WHEEL_ZOOM_STEP, screen_pt)
        } else {
            Vec::new()
        }
    }

    // --- Touch ---

    /// `touches` holds every finger currently down, in canvas-local pixels.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        if !self.ready() {
            return Vec::new();
        }
        if let Some(distance) = pinch_distance(touches) {
            self.input.touch = TouchState::Pinching { distance };
        } else if let [only] = touches {
            self.input.touch = TouchState::Panning { start: *only, last: *only, was_pinch: false };
        }
        Vec::new()
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        if !self.ready() {
            return Vec::new();
        }
        match self.input.touch {
            TouchState::Panning { start, last, was_pinch } => {
                let Some(&current) = touches.first() else {
                    return Vec::new();
                };
                self.input.touch = TouchState::Panning { start, last: current, was_pinch };
                if self.pan_by(current.x - last.x, current.y - last.y) {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            TouchState::Pinching { distance } => {
                let (Some(current), Some(center)) = (pinch_distance(touches), pinch_center(touches)) else {
                    return Vec::new();
                };
                if (current - distance).abs() <= PINCH_DEAD_ZONE_PX {
                    return Vec::new();
                }
                self.input.touch = TouchState::Pinching { distance: current };
                let factor = if current > distance { PINCH_ZOOM_STEP } else { 1.0 / PINCH_ZOOM_STEP };
                self.zoom_by(factor, center)
            }
            TouchState::Idle => Vec::new(),
        }
    }

    /// `remaining` holds the fingers still down after this touch ended.
    pub fn on_touch_end(&mut self, remaining: &[Point]) -> Vec<Action> {
        let previous = self.input.touch;
        match remaining {
            [] => {
                self.input.touch = TouchState::Idle;
                if let TouchState::Panning { start, last, was_pinch: false } = previous
                    && is_tap(start, last)
                    && self.ready()
                {
                    return self.select_at(last);
                }
                Vec::new()
            }
            [only] => {
                // A pinch lifting one finger continues as a pan that can no longer be a tap.
                self.input.touch = match previous {
                    TouchState::Panning { start, was_pinch, .. } => {
                        TouchState::Panning { start, last: *only, was_pinch }
                    }
                    _ => TouchState::Panning { start: *only, last: *only, was_pinch: true },
                };
                Vec::new()
            }
            _ => {
                if let Some(distance) = pinch_distance(remaining) {
                    self.input.touch = TouchState::Pinching { distance };
                }
                Vec::new()
            }
        }
    }
}

/// The full viewer engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, image: None, core: EngineCore::new() }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Data inputs ---

    /// Adopt a loaded site image and frame it.
    pub fn set_site_image(&mut self, image: HtmlImageElement) -> LoadReport {
        let width = f64::from(image.natural_width());
        let height = f64::from(image.natural_height());
        self.image = Some(image);
        self.core.set_image_size(width, height)
    }

    pub fn load_features(&mut self, features: Vec<PlotFeature>) -> LoadReport {
        self.core.load_features(features)
    }

    /// Forget the current venture (called on venture switch).
    pub fn clear(&mut self) {
        self.image = None;
        self.core.clear();
    }

    // --- Viewport ---

    /// Update the canvas client rect and device pixel ratio, resizing the backing store if needed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, viewport: Viewport, dpr: f64) {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let backing_w = (viewport.width.max(0.0) * dpr).round() as u32;
        let backing_h = (viewport.height.max(0.0) * dpr).round() as u32;
        if self.canvas.width() != backing_w {
            self.canvas.set_width(backing_w);
        }
        if self.canvas.height() != backing_h {
            self.canvas.set_height(backing_h);
        }
        self.core.dpr = dpr;
        self.core.set_viewport(viewport);
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, self.image.as_ref(), &self.core)
    }
}
