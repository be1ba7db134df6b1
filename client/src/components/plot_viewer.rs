//! Bridge component between Leptos state and the imperative `plotmap::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns camera, scene and drawing; this host wires DOM events to it,
//! mounts it when the canvas node exists, feeds it the active venture and the
//! legend filter, and tears down the frame loop, poller and window listener on
//! cleanup.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use plotmap::input::Cursor;

#[cfg(feature = "csr")]
use crate::config::ClientConfig;
#[cfg(feature = "csr")]
use crate::state::status::StatusState;
use crate::state::viewer::{ImagePhase, ViewerState};

/// Canvas viewer with its label overlay.
#[component]
pub fn PlotViewer() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let labels_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    let canvas = {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::util::viewer_host::ViewerHost;

        let status = expect_context::<RwSignal<StatusState>>();
        let config = expect_context::<ClientConfig>();
        let cursor = RwSignal::new(Cursor::Default);
        let host = ViewerHost::new(viewer, status, cursor, config);
        let alive = Arc::new(AtomicBool::new(true));

        // Mount once the canvas node exists, then start the loops.
        {
            let host = host.clone();
            let alive = Arc::clone(&alive);
            Effect::new(move |mounted: Option<bool>| {
                if mounted == Some(true) {
                    return true;
                }
                let Some(canvas) = canvas_ref.get() else {
                    return false;
                };
                host.mount(canvas);
                host.start_frame_loop(labels_ref, Arc::clone(&alive));
                host.start_polling(Arc::clone(&alive));
                true
            });
        }

        // Active venture drives image + plot loading.
        {
            let host = host.clone();
            let active = Memo::new(move |_| viewer.with(|v| v.active_venture().cloned()));
            Effect::new(move || {
                let venture = active.get();
                // Wait for the engine so the first venture is not lost.
                if canvas_ref.get().is_none() {
                    return;
                }
                host.load_venture(venture);
            });
        }

        {
            let host = host.clone();
            let filter = Memo::new(move |_| viewer.with(|v| v.status_filter.clone()));
            Effect::new(move || host.set_status_filter(filter.get()));
        }

        {
            let host = host.clone();
            let seq = Memo::new(move |_| viewer.with(|v| v.view_command_seq));
            Effect::new(move || {
                if seq.get() == 0 {
                    return;
                }
                if let Some(command) = viewer.with_untracked(|v| v.view_command.clone()) {
                    host.run_command(&command);
                }
            });
        }

        {
            let host = host.clone();
            let has_selection = Memo::new(move |_| viewer.with(|v| v.selected_plot.is_some()));
            Effect::new(move || {
                if !has_selection.get() {
                    host.clear_selection();
                }
            });
        }

        let mouse_up = {
            let host = host.clone();
            window_event_listener(leptos::ev::mouseup, move |ev| host.mouse_up(&ev))
        };
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            mouse_up.remove();
        });

        let on_mouse_down = {
            let host = host.clone();
            move |ev: leptos::ev::MouseEvent| host.mouse_down(&ev)
        };
        let on_mouse_move = {
            let host = host.clone();
            move |ev: leptos::ev::MouseEvent| host.mouse_move(&ev)
        };
        let on_mouse_leave = {
            let host = host.clone();
            move |_: leptos::ev::MouseEvent| host.mouse_leave()
        };
        let on_wheel = {
            let host = host.clone();
            move |ev: leptos::ev::WheelEvent| host.wheel(&ev)
        };
        let on_touch_start = {
            let host = host.clone();
            move |ev: leptos::ev::TouchEvent| host.touch_start(&ev)
        };
        let on_touch_move = {
            let host = host.clone();
            move |ev: leptos::ev::TouchEvent| host.touch_move(&ev)
        };
        let on_touch_end = {
            let host = host.clone();
            move |ev: leptos::ev::TouchEvent| host.touch_end(&ev)
        };
        let on_touch_cancel = move |ev: leptos::ev::TouchEvent| host.touch_end(&ev);

        view! {
            <canvas
                class="plot-viewer__canvas"
                node_ref=canvas_ref
                style:cursor=move || cursor.get().as_css()
                style:touch-action="none"
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseleave=on_mouse_leave
                on:wheel=on_wheel
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=on_touch_cancel
            ></canvas>
        }
    };

    #[cfg(not(feature = "csr"))]
    let canvas = view! { <canvas class="plot-viewer__canvas" node_ref=canvas_ref></canvas> };

    let image_phase = Memo::new(move |_| viewer.with(|v| v.image_phase));
    let overlay_text = move || match image_phase.get() {
        ImagePhase::Loading => Some("Loading site plan…"),
        ImagePhase::Failed => Some("Site plan unavailable"),
        ImagePhase::Missing => Some("No site plan for this venture"),
        ImagePhase::Idle | ImagePhase::Ready => None,
    };

    view! {
        <div class="plot-viewer">
            {canvas}
            <div class="plot-viewer__labels" node_ref=labels_ref></div>
            {move || overlay_text().map(|text| view! { <div class="plot-viewer__overlay">{text}</div> })}
        </div>
    }
}
