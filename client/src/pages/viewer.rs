//! Viewer page: venture list, picker, legend, map canvas and plot dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves both `/` and `/ventures/:id`. The venture list is fetched once per
//! mount; the route parameter then picks which venture is active, falling
//! back to the default or first venture when it is absent or unknown.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::hover_card::HoverCard;
use crate::components::legend::Legend;
use crate::components::plot_dialog::PlotDialog;
use crate::components::plot_viewer::PlotViewer;
use crate::components::status_bar::StatusBar;
use crate::components::venture_picker::VenturePicker;
use crate::state::viewer::{ViewerState, select_venture};

/// Venture the route should show once the list is known, or `None` while the
/// list is empty.
#[must_use]
pub fn route_target(state: &ViewerState, route_id: Option<&str>) -> Option<String> {
    select_venture(&state.ventures, route_id)
}

#[component]
pub fn ViewerPage() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let params = use_params_map();
    let route_id = Memo::new(move |_| params.read().get("id"));

    #[cfg(feature = "csr")]
    {
        use crate::config::ClientConfig;
        use crate::state::status::{StatusKind, StatusState, show_status};

        let status = expect_context::<RwSignal<StatusState>>();
        let config = expect_context::<ClientConfig>();

        viewer.update(|v| v.ventures_loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_ventures(&config).await {
                Ok(ventures) => {
                    if ventures.is_empty() {
                        show_status(status, StatusKind::Info, "No ventures available");
                    }
                    let route = route_id.try_get_untracked().flatten();
                    viewer.try_update(|v| v.set_ventures(ventures, route.as_deref()));
                }
                Err(err) => {
                    viewer.try_update(|v| v.ventures_loading = false);
                    show_status(status, StatusKind::Error, format!("Could not load ventures: {err}"));
                }
            }
        });
    }

    // Follow route changes once the list has loaded.
    Effect::new(move || {
        let route = route_id.get();
        let target = viewer.with_untracked(|v| route_target(v, route.as_deref()));
        if let Some(id) = target {
            viewer.update(|v| v.activate(&id));
        }
    });

    view! {
        <div class="viewer-page">
            <header class="viewer-page__header">
                <h1 class="viewer-page__title">
                    {move || viewer.with(|v| v.active_venture().map_or_else(|| "Site plan".to_owned(), |v| v.name.clone()))}
                </h1>
                <VenturePicker/>
            </header>
            <div class="viewer-page__body">
                <Legend/>
                <div class="viewer-page__stage">
                    <PlotViewer/>
                    <HoverCard/>
                </div>
            </div>
            <StatusBar/>
            <PlotDialog/>
        </div>
    }
}
