//! Imperative glue between the `PlotViewer` component and the `plotmap` engine.
//!
//! ARCHITECTURE
//! ============
//! The engine, label layer and plot sync live behind `Rc<RefCell<..>>` handles
//! owned by one `ViewerHost` per mounted viewer; nothing is global. DOM events
//! are mapped to canvas-local points and forwarded to `EngineCore`, and the
//! returned actions are folded into the low-frequency reactive state. A
//! continuous animation-frame loop renders, repositions labels and publishes
//! the throttled zoom readout. Plot data arrives from an initial fetch plus a
//! polling task; both go through the stale-response guard in `PlotSync`.
//!
//! Every handle is borrowed only for the duration of one synchronous call.
//! Signal updates schedule effects instead of running them inline, so no
//! effect can re-enter a borrowed handle.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use plotmap::camera::Viewport;
use plotmap::engine::{Action, Engine};
use plotmap::geometry::PlotStatus;
use plotmap::input::{Button, Cursor, WheelDelta};
use plotmap::math::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlImageElement, MouseEvent, TouchEvent, TouchList, WheelEvent};

use crate::config::ClientConfig;
use crate::net::api::{self, ApiError};
use crate::net::types::Venture;
use crate::state::plot_sync::{PlotSync, RequestTag, SyncOutcome};
use crate::state::status::{StatusKind, StatusState, show_status};
use crate::state::viewer::{ImagePhase, ViewCommand, ViewerState, ZoomReadout};
use crate::util::format::zoom_percent;
use crate::util::label_layer::LabelLayer;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Clone)]
pub struct ViewerHost {
    engine: Rc<RefCell<Option<Engine>>>,
    labels: Rc<RefCell<LabelLayer>>,
    sync: Rc<RefCell<PlotSync>>,
    readout: Rc<RefCell<ZoomReadout>>,
    viewer: RwSignal<ViewerState>,
    status: RwSignal<StatusState>,
    cursor: RwSignal<Cursor>,
    config: ClientConfig,
}

impl ViewerHost {
    pub fn new(
        viewer: RwSignal<ViewerState>,
        status: RwSignal<StatusState>,
        cursor: RwSignal<Cursor>,
        config: ClientConfig,
    ) -> Self {
        Self {
            engine: Rc::new(RefCell::new(None)),
            labels: Rc::new(RefCell::new(LabelLayer::default())),
            sync: Rc::new(RefCell::new(PlotSync::default())),
            readout: Rc::new(RefCell::new(ZoomReadout::default())),
            viewer,
            status,
            cursor,
            config,
        }
    }

    /// Bind the engine to the canvas once it is in the DOM. Later calls are no-ops.
    pub fn mount(&self, canvas: HtmlCanvasElement) {
        let mut slot = self.engine.borrow_mut();
        if slot.is_some() {
            return;
        }
        let mut engine = Engine::new(canvas);
        sync_viewport(&mut engine);
        *slot = Some(engine);
    }

    // =============================================================
    // Frame loop
    // =============================================================

    /// Run render + label projection on every animation frame until `alive` is cleared.
    pub fn start_frame_loop(&self, labels: NodeRef<leptos::html::Div>, alive: Arc<AtomicBool>) {
        let holder: FrameCallback = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let host = self.clone();
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if !alive.load(Ordering::Relaxed) {
                holder_for_cb.borrow_mut().take();
                return;
            }
            host.frame(labels.get_untracked());
            if !request_frame(&holder_for_cb) {
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);
        *holder.borrow_mut() = Some(cb);
        if !request_frame(&holder) {
            log::warn!("animation frames unavailable; plot map will not render");
            holder.borrow_mut().take();
        }
    }

    fn frame(&self, label_container: Option<web_sys::HtmlDivElement>) {
        let mut slot = self.engine.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return;
        };
        sync_viewport(engine);
        if let Err(err) = engine.render() {
            log::warn!("plot map render failed: {err:?}");
        }
        if let Some(container) = label_container {
            let container: &HtmlElement = &container;
            if let Err(err) = self.labels.borrow_mut().sync(container, &engine.core) {
                log::warn!("plot label update failed: {err:?}");
            }
        }
        if let Some(zoom) = engine.core.zoom() {
            let sampled = self.readout.borrow_mut().sample(js_sys::Date::now(), zoom_percent(zoom));
            if let Some(percent) = sampled {
                self.viewer.update(|v| v.zoom_percent = percent);
            }
        }
    }

    // =============================================================
    // Input
    // =============================================================

    pub fn mouse_down(&self, ev: &MouseEvent) {
        self.dispatch(|engine| {
            let pt = local_point(engine, ev.client_x(), ev.client_y());
            engine.core.on_mouse_down(pt, Button::from_dom(ev.button()))
        });
    }

    pub fn mouse_move(&self, ev: &MouseEvent) {
        self.dispatch(|engine| {
            let pt = local_point(engine, ev.client_x(), ev.client_y());
            engine.core.on_mouse_move(pt)
        });
    }

    /// Window-level mouse-up so drags released outside the canvas still end.
    pub fn mouse_up(&self, ev: &MouseEvent) {
        self.dispatch(|engine| {
            let pt = local_point(engine, ev.client_x(), ev.client_y());
            engine.core.on_mouse_up(pt, Button::from_dom(ev.button()))
        });
    }

    pub fn mouse_leave(&self) {
        self.dispatch(|engine| engine.core.on_mouse_leave());
    }

    pub fn wheel(&self, ev: &WheelEvent) {
        ev.prevent_default();
        self.dispatch(|engine| {
            let pt = local_point(engine, ev.client_x(), ev.client_y());
            engine.core.on_wheel(pt, WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() })
        });
    }

    pub fn touch_start(&self, ev: &TouchEvent) {
        ev.prevent_default();
        self.dispatch(|engine| {
            let touches = touch_points(engine, &ev.touches());
            engine.core.on_touch_start(&touches)
        });
    }

    pub fn touch_move(&self, ev: &TouchEvent) {
        ev.prevent_default();
        self.dispatch(|engine| {
            let touches = touch_points(engine, &ev.touches());
            engine.core.on_touch_move(&touches)
        });
    }

    pub fn touch_end(&self, ev: &TouchEvent) {
        ev.prevent_default();
        self.dispatch(|engine| {
            let remaining = touch_points(engine, &ev.touches());
            engine.core.on_touch_end(&remaining)
        });
    }

    // =============================================================
    // Commands from chrome
    // =============================================================

    pub fn run_command(&self, command: &ViewCommand) {
        self.dispatch(|engine| match command {
            ViewCommand::ZoomIn => engine.core.zoom_in(),
            ViewCommand::ZoomOut => engine.core.zoom_out(),
            ViewCommand::Reset => engine.core.reset_view(),
            ViewCommand::Focus(plot_no) => engine.core.focus_plot(plot_no),
        });
    }

    pub fn set_status_filter(&self, filter: Option<HashSet<PlotStatus>>) {
        if let Some(engine) = self.engine.borrow_mut().as_mut() {
            engine.core.set_status_filter(filter);
        }
    }

    /// The detail dialog closed.
    pub fn clear_selection(&self) {
        self.dispatch(|engine| engine.core.clear_selection());
    }

    fn dispatch(&self, handler: impl FnOnce(&mut Engine) -> Vec<Action>) {
        let actions = {
            let mut slot = self.engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            handler(engine)
        };
        self.apply(actions);
    }

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SetCursor(cursor) => self.cursor.set(cursor),
                Action::Hover(info) => self.viewer.update(|v| v.hover = info),
                Action::PlotSelected(properties) => self.viewer.update(|v| v.selected_plot = Some(properties)),
                // The frame loop redraws continuously.
                Action::RenderNeeded => {}
            }
        }
    }

    // =============================================================
    // Venture data
    // =============================================================

    /// Switch the viewer to `venture`: drop the old scene, load the image, fetch plots.
    pub fn load_venture(&self, venture: Option<Venture>) {
        if let Some(engine) = self.engine.borrow_mut().as_mut() {
            engine.clear();
        }
        self.cursor.set(Cursor::Default);
        let Some(venture) = venture else {
            self.sync.borrow_mut().reset();
            return;
        };
        let tag = self.sync.borrow_mut().begin(venture.id.clone());
        log::info!("loading venture {} ({})", venture.id, venture.name);

        match venture.image_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => self.load_image(url, tag.clone()),
            None => {
                self.viewer.update(|v| v.image_phase = ImagePhase::Missing);
                show_status(self.status, StatusKind::Error, format!("{} has no site plan image", venture.name));
            }
        }
        self.spawn_refresh(tag);
    }

    fn load_image(&self, url: &str, tag: RequestTag) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(err) => {
                log::warn!("failed to create image element: {err:?}");
                self.viewer.update(|v| v.image_phase = ImagePhase::Failed);
                return;
            }
        };
        self.viewer.update(|v| v.image_phase = ImagePhase::Loading);

        let host = self.clone();
        let loaded = image.clone();
        let load_tag = tag.clone();
        let on_load = Closure::once_into_js(move || host.image_loaded(loaded, &load_tag));
        let host = self.clone();
        let on_error = Closure::once_into_js(move || host.image_failed(&tag));
        image.set_onload(Some(on_load.unchecked_ref()));
        image.set_onerror(Some(on_error.unchecked_ref()));
        image.set_src(url);
    }

    fn image_loaded(&self, image: HtmlImageElement, tag: &RequestTag) {
        if !self.sync.borrow().is_current(tag) {
            log::debug!("ignoring site image for inactive venture {}", tag.venture_id);
            return;
        }
        let counts = {
            let mut slot = self.engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            let report = engine.set_site_image(image);
            log::info!("site image ready: {} plots drawn, {} skipped", report.loaded, report.skipped);
            engine.core.scene.status_counts()
        };
        self.viewer.update(|v| {
            v.image_phase = ImagePhase::Ready;
            v.status_counts = counts;
        });
    }

    fn image_failed(&self, tag: &RequestTag) {
        if !self.sync.borrow().is_current(tag) {
            return;
        }
        self.viewer.update(|v| v.image_phase = ImagePhase::Failed);
        show_status(self.status, StatusKind::Error, "Could not load the site plan image");
    }

    fn spawn_refresh(&self, tag: RequestTag) {
        let host = self.clone();
        leptos::task::spawn_local(async move {
            host.refresh(tag).await;
        });
    }

    /// Poll the active venture's plots every configured interval until `alive` is cleared.
    pub fn start_polling(&self, alive: Arc<AtomicBool>) {
        let host = self.clone();
        let interval = Duration::from_millis(u64::from(self.config.poll_interval_ms));
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                let Some(tag) = host.sync.borrow().current_tag() else {
                    continue;
                };
                host.refresh(tag).await;
            }
        });
    }

    async fn refresh(&self, tag: RequestTag) {
        match api::fetch_plots(&self.config, &tag.venture_id).await {
            Ok(payload) => self.apply_payload(&tag, payload),
            // Credentials are cleared and the page is leaving.
            Err(ApiError::Unauthorized) => {}
            Err(err) => {
                if self.sync.borrow().is_current(&tag) {
                    show_status(self.status, StatusKind::Error, format!("Could not load plots: {err}"));
                }
            }
        }
    }

    fn apply_payload(&self, tag: &RequestTag, payload: serde_json::Value) {
        let outcome = self.sync.borrow_mut().accept(tag, payload);
        let SyncOutcome::Changed { features, malformed } = outcome else {
            return;
        };
        for err in &malformed {
            log::warn!("skipping plot feature: {err}");
        }
        let counts = {
            let mut slot = self.engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            let report = engine.load_features(features);
            log::debug!("plots replaced: {} loaded, {} skipped", report.loaded, report.skipped);
            engine.core.scene.status_counts()
        };
        self.viewer.update(|v| v.status_counts = counts);
    }
}

fn request_frame(holder: &FrameCallback) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let borrowed = holder.borrow();
    let Some(cb) = borrowed.as_ref() else {
        return false;
    };
    window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok()
}

/// Push the canvas' client rect and device pixel ratio into the engine.
fn sync_viewport(engine: &mut Engine) {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = engine.canvas().get_bounding_client_rect();
    engine.set_viewport(Viewport::new(rect.left(), rect.top(), rect.width(), rect.height()), dpr);
}

fn local_point(engine: &Engine, client_x: i32, client_y: i32) -> Point {
    engine.core.viewport.client_to_local(f64::from(client_x), f64::from(client_y))
}

fn touch_points(engine: &Engine, list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| local_point(engine, t.client_x(), t.client_y()))
        .collect()
}
