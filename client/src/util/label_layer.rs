//! DOM plot labels positioned over the canvas.
//!
//! One absolutely positioned element per label anchor. Elements are recreated
//! only when the engine's geometry revision changes; every frame just rewrites
//! their inline styles from the projected placements.

use plotmap::engine::EngineCore;
use plotmap::labels::{container_style, label_style};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

#[derive(Default)]
pub struct LabelLayer {
    rev: Option<u64>,
    elements: Vec<HtmlElement>,
    styles: Vec<String>,
    container_style: String,
}

impl LabelLayer {
    /// Align the container with the canvas and reposition every label.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a DOM call fails.
    pub fn sync(&mut self, container: &HtmlElement, core: &EngineCore) -> Result<(), JsValue> {
        if self.rev != Some(core.geometry_rev()) {
            self.rebuild(container, core)?;
        }

        let style = container_style(&core.viewport);
        if style != self.container_style {
            container.set_attribute("style", &style)?;
            self.container_style = style;
        }

        for ((element, cached), placement) in self.elements.iter().zip(self.styles.iter_mut()).zip(core.label_placements())
        {
            let style = label_style(&placement);
            if style != *cached {
                element.set_attribute("style", &style)?;
                *cached = style;
            }
        }
        Ok(())
    }

    fn rebuild(&mut self, container: &HtmlElement, core: &EngineCore) -> Result<(), JsValue> {
        self.clear();
        let document = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("label container is detached"))?;
        for anchor in core.anchors() {
            let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
            element.set_class_name(&format!("plot-label plot-label--{}", anchor.status.as_str()));
            element.set_text_content(Some(&anchor.plot_no));
            container.append_child(&element)?;
            self.elements.push(element);
            self.styles.push(String::new());
        }
        self.rev = Some(core.geometry_rev());
        Ok(())
    }

    /// Remove every label element.
    pub fn clear(&mut self) {
        for element in self.elements.drain(..) {
            element.remove();
        }
        self.styles.clear();
        self.rev = None;
    }
}
