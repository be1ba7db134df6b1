//! Rendering, geometry and input engine for the interactive plot map.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! canvas side of the viewer: framing the site image with an orthographic
//! camera, turning backend plot polygons into hit-testable shapes, routing raw
//! pointer and touch input into pan, zoom, hover and selection, and projecting
//! label anchors to screen positions. The host UI layer is responsible only for
//! wiring DOM events to the engine and reacting to the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Orthographic camera, viewport and coordinate conversions |
//! | [`geometry`] | Plot feature types, status palette and the shape scene |
//! | [`hit`] | Ray-cast hit-testing against plot shapes |
//! | [`input`] | Input event types and the mouse/touch state machines |
//! | [`labels`] | Label anchor projection and DOM styling |
//! | [`math`] | Points, bounds and polygon helpers |
//! | [`render`] | Canvas 2D drawing of the image and plots |
//! | [`consts`] | Shared numeric constants (zoom limits, thresholds, stroke widths) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod labels;
pub mod math;
pub mod render;
