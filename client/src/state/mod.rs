//! Client-side reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs wrapped in `RwSignal`s and provided as context. The canvas
//! engine keeps camera and scene outside this state; only low-frequency
//! values (selection, hover, zoom readout) flow through signals.

pub mod enquiry;
pub mod plot_sync;
pub mod status;
pub mod viewer;
