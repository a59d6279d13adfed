use crate::core::WheelCapability;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow::anyhow!("no window"))
}

#[inline]
pub fn document() -> anyhow::Result<web::Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))
}

/// First element matching `selector`; an invalid selector counts as no match.
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    match document.query_selector(selector) {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[toggle] bad selector {:?}: {:?}", selector, e);
            None
        }
    }
}

#[inline]
pub fn page_visible(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Visible
}

#[inline]
pub fn page_loaded(document: &web::Document) -> bool {
    document.ready_state() == "complete"
}

/// Hide `el` without touching the rest of its inline style.
pub fn hide(el: &web::Element) {
    let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    if let Err(e) = html.style().set_property("display", "none") {
        log::warn!("[toggle] hide failed: {:?}", e);
    }
}

pub fn set_class(el: &web::Element, class_name: &str, present: bool) {
    let list = el.class_list();
    let res = if present {
        list.add_1(class_name)
    } else {
        list.remove_1(class_name)
    };
    if let Err(e) = res {
        log::warn!("[toggle] class update failed: {:?}", e);
    }
}

/// Vertical offset applied without the browser's own smoothing.
pub fn scroll_by_instant(window: &web::Window, dy: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(dy);
    opts.set_behavior(web::ScrollBehavior::Instant);
    window.scroll_by_with_scroll_to_options(&opts);
}

/// Capability answered by a fine-pointer media query; touch-first devices
/// report a coarse primary pointer.
pub struct PointerQuery;

impl WheelCapability for PointerQuery {
    fn supports_smooth_wheel(&self) -> bool {
        let query = window().ok().and_then(|w| w.match_media("(pointer: fine)").ok().flatten());
        match query {
            Some(list) => list.matches(),
            None => true,
        }
    }
}
