use super::EventBinding;
use crate::dom;
use crate::frame::Sampler;
use web_sys as web;

/// Feeds the frame-rate sampler from the page's visibility.
pub fn visibility_binding(document: &web::Document, sampler: Sampler) -> EventBinding {
    let doc = document.clone();
    EventBinding::new(document.clone(), "visibilitychange", move |_ev: web::Event| {
        if dom::page_visible(&doc) {
            sampler.resume();
        } else {
            sampler.pause();
        }
    })
}

/// Runs `on_load` when the window's load event fires.
pub fn load_binding(window: &web::Window, mut on_load: impl FnMut() + 'static) -> EventBinding {
    EventBinding::new(window.clone(), "load", move |_ev: web::Event| on_load())
}
