//! Bottom status bar: transient messages, zoom readout and camera controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows low-frequency viewer telemetry. Zoom buttons do not touch the camera
//! directly; they issue a `ViewCommand` that `PlotViewer` applies.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use crate::net::types::Venture;
use crate::state::status::{StatusKind, StatusState};
use crate::state::viewer::{ViewCommand, ViewerState};

#[component]
pub fn StatusBar() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let status = expect_context::<RwSignal<StatusState>>();

    let message = move || status.with(|s| s.latest().map(|m| (m.kind, m.text.clone())));
    let message_class = move || match message().map(|(kind, _)| kind) {
        Some(StatusKind::Error) => "status-bar__message status-bar__message--error",
        _ => "status-bar__message",
    };
    let zoom = move || format_zoom(viewer.with(|v| v.zoom_percent));
    let calibration = move || viewer.with(|v| calibration_badge(v.active_venture()));
    let issue = move |command: ViewCommand| viewer.update(|v| v.issue(command));

    view! {
        <div class="status-bar">
            <div class="status-bar__section">
                <span class=message_class>{move || message().map(|(_, text)| text)}</span>
            </div>
            <div class="status-bar__section">
                {move || {
                    calibration()
                        .map(|(label, class)| view! { <span class=class>{label}</span> })
                }}
                <span class="status-bar__divider"></span>
                <button class="status-bar__control" title="Zoom out" on:click=move |_| issue(ViewCommand::ZoomOut)>
                    "−"
                </button>
                <span class="status-bar__item">{zoom}</span>
                <button class="status-bar__control" title="Zoom in" on:click=move |_| issue(ViewCommand::ZoomIn)>
                    "+"
                </button>
                <button class="status-bar__control" title="Fit to screen" on:click=move |_| issue(ViewCommand::Reset)>
                    "Reset"
                </button>
            </div>
        </div>
    }
}

fn format_zoom(percent: u32) -> String {
    if percent == 0 { "--%".to_owned() } else { format!("{percent}%") }
}

/// Badge text and class for the active venture's calibration state.
fn calibration_badge(venture: Option<&Venture>) -> Option<(&'static str, &'static str)> {
    venture.map(|v| {
        if v.calibration.is_calibrated {
            ("Calibrated", "status-bar__badge status-bar__badge--ok")
        } else {
            ("Not calibrated", "status-bar__badge status-bar__badge--warn")
        }
    })
}
