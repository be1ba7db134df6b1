//! Venture selector; switching navigates to `/ventures/:id`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::viewer::ViewerState;

/// Route for a venture's map.
#[must_use]
pub fn venture_path(id: &str) -> String {
    format!("/ventures/{id}")
}

#[component]
pub fn VenturePicker() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let navigate = use_navigate();

    let ventures = Memo::new(move |_| {
        viewer.with(|v| v.ventures.iter().map(|v| (v.id.clone(), v.name.clone())).collect::<Vec<_>>())
    });
    let active = move || viewer.with(|v| v.active_venture_id.clone().unwrap_or_default());
    let loading = move || viewer.with(|v| v.ventures_loading);

    let on_change = move |ev| {
        let id = event_target_value(&ev);
        if id.is_empty() {
            return;
        }
        navigate(&venture_path(&id), NavigateOptions::default());
    };

    view! {
        <label class="venture-picker">
            <span class="venture-picker__label">"Venture"</span>
            <select class="venture-picker__select" prop:value=active on:change=on_change disabled=loading>
                <Show when=move || ventures.with(Vec::is_empty)>
                    <option value="">{move || if loading() { "Loading…" } else { "No ventures" }}</option>
                </Show>
                <For
                    each=move || ventures.get()
                    key=|(id, _)| id.clone()
                    children=move |(id, name)| {
                        let selected = {
                            let id = id.clone();
                            move || viewer.with(|v| v.active_venture_id.as_deref() == Some(id.as_str()))
                        };
                        view! { <option value=id selected=selected>{name}</option> }
                    }
                />
            </select>
        </label>
    }
}
