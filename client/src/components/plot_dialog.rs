//! Modal dialog with plot details and an enquiry form.
//!
//! DESIGN
//! ======
//! Opens whenever `ViewerState::selected_plot` is set; closing clears it, which
//! also clears the engine's selection outline. The enquiry is validated
//! locally before it is sent; the outcome is reported as a status message.

#[cfg(test)]
#[path = "plot_dialog_test.rs"]
mod plot_dialog_test;

use leptos::prelude::*;
use plotmap::geometry::PlotProperties;

use crate::state::enquiry::EnquiryForm;
use crate::state::viewer::{ViewCommand, ViewerState};
use crate::util::format::{format_area, format_number, format_price};

/// `(label, value)` rows for the details table. Known fields first, then any
/// other scalar properties the backend sent.
#[must_use]
pub fn detail_rows(props: &PlotProperties) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Status".to_owned(), props.status.label().to_owned()),
        ("Area".to_owned(), format_area(props.area)),
        ("Price".to_owned(), format_price(props.price)),
    ];
    if let Some(facing) = props.facing.as_deref().filter(|s| !s.trim().is_empty()) {
        rows.push(("Facing".to_owned(), facing.to_owned()));
    }
    if let Some(dimensions) = props.dimensions.as_deref().filter(|s| !s.trim().is_empty()) {
        rows.push(("Dimensions".to_owned(), dimensions.to_owned()));
    }
    for (key, value) in &props.extra {
        let text = match value {
            serde_json::Value::String(s) if !s.trim().is_empty() => s.clone(),
            serde_json::Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), format_number),
            serde_json::Value::Bool(b) => if *b { "Yes" } else { "No" }.to_owned(),
            _ => continue,
        };
        rows.push((humanize_key(key), text));
    }
    rows
}

/// `"customerName"` / `"customer_name"` → `"Customer name"`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' || ch == '-' {
            out.push(' ');
        } else if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[component]
pub fn PlotDialog() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let selected = Memo::new(move |_| viewer.with(|v| v.selected_plot.clone()));

    move || {
        selected.get().map(|props| view! { <PlotDialogBody props/> })
    }
}

#[component]
fn PlotDialogBody(props: PlotProperties) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    #[cfg(feature = "csr")]
    let status = expect_context::<RwSignal<crate::state::status::StatusState>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<crate::config::ClientConfig>();

    let form = RwSignal::new(EnquiryForm::default());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let plot_no = props.plot_no.clone();
    let rows = detail_rows(&props);
    let status_color = props.status.fill_color();

    let close = move || viewer.update(|v| v.selected_plot = None);
    let on_focus = {
        let plot_no = plot_no.clone();
        move |_| viewer.update(|v| v.issue(ViewCommand::Focus(plot_no.clone())))
    };

    let on_submit = {
        let plot_no = plot_no.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            let Some(venture_id) = viewer.with_untracked(|v| v.active_venture_id.clone()) else {
                return;
            };
            let request = match form.with_untracked(|f| f.to_request(&venture_id, &plot_no)) {
                Ok(request) => request,
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    return;
                }
            };
            form_error.set(None);

            #[cfg(feature = "csr")]
            {
                use crate::state::status::{StatusKind, show_status};

                submitting.set(true);
                let config = config.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::submit_enquiry(&config, &request).await;
                    submitting.try_set(false);
                    match result {
                        Ok(()) => {
                            show_status(status, StatusKind::Info, format!("Enquiry sent for plot {}", request.plot_no));
                            viewer.try_update(|v| v.selected_plot = None);
                        }
                        Err(err) => {
                            show_status(status, StatusKind::Error, format!("Enquiry failed: {err}"));
                        }
                    }
                });
            }

            #[cfg(not(feature = "csr"))]
            {
                let _ = request;
            }
        }
    };

    let field = move |update: fn(&mut EnquiryForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| update(f, value));
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--plot" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <span class="dialog__swatch" style:background-color=status_color></span>
                    <h2 class="dialog__title">{format!("Plot {plot_no}")}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| close()>"×"</button>
                </header>

                <dl class="dialog__details">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }
                        })
                        .collect_view()}
                </dl>

                <button class="btn dialog__focus" on:click=on_focus>"Zoom to plot"</button>

                <form class="dialog__form" on:submit=on_submit>
                    <h3 class="dialog__subtitle">"Enquire about this plot"</h3>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=field(|f, v| f.name = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="tel"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=field(|f, v| f.phone = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=field(|f, v| f.email = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Message"
                        <textarea
                            class="dialog__textarea"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=field(|f, v| f.message = v)
                        ></textarea>
                    </label>
                    {move || form_error.get().map(|err| view! { <p class="dialog__error">{err}</p> })}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending…" } else { "Send enquiry" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
