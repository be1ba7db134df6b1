//! Status legend with per-status counts; clicking an entry filters the map.

#[cfg(test)]
#[path = "legend_test.rs"]
mod legend_test;

use leptos::prelude::*;
use plotmap::geometry::PlotStatus;

use crate::state::viewer::ViewerState;

/// One legend row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub status: PlotStatus,
    pub count: usize,
    pub shown: bool,
}

/// Legend rows in legend order. Statuses with no plots are left out.
#[must_use]
pub fn legend_entries(state: &ViewerState) -> Vec<LegendEntry> {
    PlotStatus::ALL
        .iter()
        .filter_map(|&status| {
            let count = state
                .status_counts
                .iter()
                .find(|(s, _)| *s == status)
                .map_or(0, |(_, n)| *n);
            (count > 0).then(|| LegendEntry { status, count, shown: state.status_shown(status) })
        })
        .collect()
}

#[component]
pub fn Legend() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let entries = Memo::new(move |_| viewer.with(legend_entries));
    let filtered = move || viewer.with(|v| v.status_filter.is_some());

    view! {
        <aside class="legend">
            <ul class="legend__list">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.status, entry.count, entry.shown)
                    children=move |entry| {
                        let status = entry.status;
                        let class = if entry.shown { "legend__item" } else { "legend__item legend__item--muted" };
                        view! {
                            <li class=class on:click=move |_| viewer.update(|v| v.toggle_status(status))>
                                <span class="legend__swatch" style:background-color=status.fill_color()></span>
                                <span class="legend__label">{status.label()}</span>
                                <span class="legend__count">{entry.count}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=filtered>
                <button class="btn legend__reset" on:click=move |_| viewer.update(|v| v.status_filter = None)>
                    "Show all"
                </button>
            </Show>
        </aside>
    }
}
