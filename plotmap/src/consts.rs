//! Shared numeric constants for the plotmap crate.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest zoom factor; at 1.0 the whole site image fills the viewport.
pub const MIN_ZOOM: f64 = 0.4;

/// Largest zoom factor.
pub const MAX_ZOOM: f64 = 15.0;

/// Zoom changes smaller than this are treated as no change.
pub const ZOOM_EPSILON: f64 = 1e-9;

/// Zoom used when jumping to a single plot.
pub const FOCUS_ZOOM: f64 = 4.0;

// ── Input ───────────────────────────────────────────────────────

/// Multiplicative zoom step for one wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Multiplicative zoom step for one pinch event. Pinch fires far more often than wheel.
pub const PINCH_ZOOM_STEP: f64 = 1.03;

/// Change in finger distance (px) below which a pinch move is ignored.
pub const PINCH_DEAD_ZONE_PX: f64 = 2.0;

/// A touch gesture that stays within this many pixels on both axes is a tap.
pub const TAP_THRESHOLD_PX: f64 = 10.0;

/// A mouse press that travels less than this many pixels still counts as a click.
pub const CLICK_SLOP_PX: f64 = 4.0;

// ── Rendering ───────────────────────────────────────────────────

/// Plot fill opacity so the site image stays visible underneath.
pub const PLOT_FILL_ALPHA: f64 = 0.55;

/// Plot outline width in screen pixels.
pub const PLOT_STROKE_PX: f64 = 1.0;

/// Outline width for the hovered plot in screen pixels.
pub const HOVER_STROKE_PX: f64 = 2.5;

/// Label font size at zoom 1.0, in CSS pixels.
pub const LABEL_BASE_FONT_PX: f64 = 10.0;
