//! Tooltip that follows the pointer over a hovered plot.

use leptos::prelude::*;

use crate::state::viewer::ViewerState;
use crate::util::format::{format_area, format_price};

/// Offset from the pointer so the card never sits under the cursor.
const CARD_OFFSET_PX: f64 = 14.0;

#[component]
pub fn HoverCard() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let hover = Memo::new(move |_| viewer.with(|v| v.hover.clone()));

    move || {
        hover.get().map(|info| {
            let props = info.properties;
            view! {
                <div
                    class="hover-card"
                    style:left=format!("{}px", info.screen.x + CARD_OFFSET_PX)
                    style:top=format!("{}px", info.screen.y + CARD_OFFSET_PX)
                >
                    <div class="hover-card__title">{format!("Plot {}", props.plot_no)}</div>
                    <div class="hover-card__status" style:color=props.status.fill_color()>
                        {props.status.label()}
                    </div>
                    <div class="hover-card__row">{format_area(props.area)}</div>
                    <div class="hover-card__row">{format_price(props.price)}</div>
                </div>
            }
        })
    }
}
