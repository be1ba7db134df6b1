//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::viewer::ViewerPage;
use crate::state::status::StatusState;
use crate::state::viewer::ViewerState;

/// Root application component.
///
/// Provides the resolved config and shared state contexts, then sets up
/// client-side routing.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config);
    provide_context(RwSignal::new(ViewerState::default()));
    provide_context(RwSignal::new(StatusState::default()));

    view! {
        <Title text="Plot Map"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ViewerPage/>
                <Route path=(StaticSegment("ventures"), ParamSegment("id")) view=ViewerPage/>
            </Routes>
        </Router>
    }
}
