//! Rendering: draws the site image and plot polygons to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels; it never mutates application state.
//! Plot labels are not drawn here; they are DOM elements positioned from
//! [`crate::engine::EngineCore::label_placements`].
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::camera::{Camera, Viewport};
use crate::consts::{HOVER_STROKE_PX, PLOT_FILL_ALPHA, PLOT_STROKE_PX};
use crate::engine::EngineCore;
use crate::geometry::PlotShape;
use crate::math::Point;

/// Backdrop shown before the image loads and around it when zoomed out.
const BACKGROUND: &str = "#f3f4f6";
const PLOT_STROKE: &str = "#1f2937";
const HOVER_STROKE: &str = "#111827";
const SELECTED_STROKE: &str = "#2563eb";

/// Draw the full frame: background, site image, plots, then hover and selection outlines.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, image: Option<&HtmlImageElement>, core: &EngineCore) -> Result<(), JsValue> {
    let viewport = core.viewport;

    // Layer 1: clear in CSS pixels.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    let Some(camera) = core.camera() else {
        return Ok(());
    };
    if viewport.is_degenerate() {
        return Ok(());
    }

    // Layer 2: site image stretched over world [0, W] x [0, H].
    if let Some(image) = image {
        draw_image(ctx, image, &camera, &viewport)?;
    }

    // Layer 3: plots in load order (later on top).
    for shape in core.scene.shapes().iter().filter(|s| s.visible) {
        draw_plot(ctx, shape, &camera, &viewport);
    }

    // Layer 4: highlights.
    if let Some(shape) = core.hovered_plot().filter(|s| s.visible) {
        outline(ctx, shape, &camera, &viewport, HOVER_STROKE);
    }
    if let Some(shape) = core.selected_plot().filter(|s| s.visible) {
        outline(ctx, shape, &camera, &viewport, SELECTED_STROKE);
    }

    Ok(())
}

fn draw_image(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    camera: &Camera,
    viewport: &Viewport,
) -> Result<(), JsValue> {
    let (width, height) = camera.image_size();
    let (Some(top_left), Some(bottom_right)) = (
        camera.world_to_screen(Point::new(0.0, height), viewport),
        camera.world_to_screen(Point::new(width, 0.0), viewport),
    ) else {
        return Ok(());
    };
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        top_left.x,
        top_left.y,
        bottom_right.x - top_left.x,
        bottom_right.y - top_left.y,
    )
}

fn draw_plot(ctx: &CanvasRenderingContext2d, shape: &PlotShape, camera: &Camera, viewport: &Viewport) {
    if !trace_ring(ctx, shape, camera, viewport) {
        return;
    }
    ctx.set_global_alpha(PLOT_FILL_ALPHA);
    ctx.set_fill_style_str(shape.fill);
    ctx.fill();
    ctx.set_global_alpha(1.0);
    ctx.set_line_width(PLOT_STROKE_PX);
    ctx.set_stroke_style_str(PLOT_STROKE);
    ctx.stroke();
}

fn outline(ctx: &CanvasRenderingContext2d, shape: &PlotShape, camera: &Camera, viewport: &Viewport, color: &str) {
    if !trace_ring(ctx, shape, camera, viewport) {
        return;
    }
    ctx.set_line_width(HOVER_STROKE_PX);
    ctx.set_line_join("round");
    ctx.set_stroke_style_str(color);
    ctx.stroke();
}

/// Build a closed path for the shape in screen pixels. Returns `false` if nothing was traced.
fn trace_ring(ctx: &CanvasRenderingContext2d, shape: &PlotShape, camera: &Camera, viewport: &Viewport) -> bool {
    let mut points = shape.ring.iter().filter_map(|&p| camera.world_to_screen(p, viewport));
    let Some(first) = points.next() else {
        return false;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in points {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    true
}
