//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the viewer chrome and the canvas host while reading and
//! writing shared state from Leptos context providers.

pub mod hover_card;
pub mod legend;
pub mod plot_dialog;
pub mod plot_viewer;
pub mod status_bar;
pub mod venture_picker;
