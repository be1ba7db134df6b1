//! Viewer page state: ventures, selection, hover and chrome readouts.
//!
//! DESIGN
//! ======
//! Holds only what non-canvas UI renders. The camera and plot shapes live in
//! the engine owned by `PlotViewer`; commands for it (zoom buttons, focus)
//! travel through a sequenced `view_command` so repeated presses re-trigger.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use std::collections::HashSet;

use plotmap::engine::HoverInfo;
use plotmap::geometry::{PlotProperties, PlotStatus};

use crate::net::types::Venture;

/// Minimum time between zoom readout updates.
pub const ZOOM_READOUT_INTERVAL_MS: f64 = 100.0;

/// Site image loading phase for the active venture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImagePhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
    /// The venture has no site-plan image.
    Missing,
}

/// Camera command issued by chrome outside the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    ZoomIn,
    ZoomOut,
    Reset,
    Focus(String),
}

#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    pub ventures: Vec<Venture>,
    pub ventures_loading: bool,
    pub active_venture_id: Option<String>,
    pub image_phase: ImagePhase,
    pub selected_plot: Option<PlotProperties>,
    pub hover: Option<HoverInfo>,
    pub zoom_percent: u32,
    /// `None` shows every status.
    pub status_filter: Option<HashSet<PlotStatus>>,
    pub status_counts: Vec<(PlotStatus, usize)>,
    pub view_command_seq: u64,
    pub view_command: Option<ViewCommand>,
}

impl ViewerState {
    #[must_use]
    pub fn active_venture(&self) -> Option<&Venture> {
        let id = self.active_venture_id.as_deref()?;
        self.ventures.iter().find(|v| v.id == id)
    }

    /// Replace the venture list and pick the active one.
    pub fn set_ventures(&mut self, ventures: Vec<Venture>, route_id: Option<&str>) {
        self.active_venture_id = select_venture(&ventures, route_id);
        self.ventures = ventures;
        self.ventures_loading = false;
    }

    /// Make `id` active, dropping per-venture transient state.
    pub fn activate(&mut self, id: &str) {
        if self.active_venture_id.as_deref() == Some(id) {
            return;
        }
        self.active_venture_id = Some(id.to_owned());
        self.clear_plot_state();
    }

    pub fn clear_plot_state(&mut self) {
        self.selected_plot = None;
        self.hover = None;
        self.status_counts.clear();
        self.image_phase = ImagePhase::Idle;
    }

    pub fn issue(&mut self, command: ViewCommand) {
        self.view_command_seq += 1;
        self.view_command = Some(command);
    }

    /// Toggle one status in the legend filter.
    ///
    /// Starting from "all", toggling a status shows only that status. Emptying
    /// the set or selecting every status returns to "all".
    pub fn toggle_status(&mut self, status: PlotStatus) {
        let mut filter = self.status_filter.take().unwrap_or_default();
        if !filter.remove(&status) {
            filter.insert(status);
        }
        let shows_all = filter.is_empty() || PlotStatus::ALL.iter().all(|s| filter.contains(s));
        self.status_filter = if shows_all { None } else { Some(filter) };
    }

    #[must_use]
    pub fn status_shown(&self, status: PlotStatus) -> bool {
        self.status_filter.as_ref().is_none_or(|f| f.contains(&status))
    }
}

/// Pick the venture to show: the route parameter when it names a known venture,
/// else the one flagged default, else the first.
#[must_use]
pub fn select_venture(ventures: &[Venture], route_id: Option<&str>) -> Option<String> {
    route_id
        .and_then(|id| ventures.iter().find(|v| v.id == id))
        .or_else(|| ventures.iter().find(|v| v.is_default))
        .or_else(|| ventures.first())
        .map(|v| v.id.clone())
}

/// Throttles pushing the camera zoom into reactive state from the frame loop.
#[derive(Clone, Debug, Default)]
pub struct ZoomReadout {
    last_push_ms: Option<f64>,
    last_percent: Option<u32>,
}

impl ZoomReadout {
    /// Returns the percentage to publish, or `None` when throttled or unchanged.
    pub fn sample(&mut self, now_ms: f64, percent: u32) -> Option<u32> {
        if self.last_percent == Some(percent) {
            return None;
        }
        if self.last_push_ms.is_some_and(|last| now_ms - last < ZOOM_READOUT_INTERVAL_MS) {
            return None;
        }
        self.last_push_ms = Some(now_ms);
        self.last_percent = Some(percent);
        Some(percent)
    }
}
