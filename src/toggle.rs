use crate::core::ToggleSignal;
use crate::dom;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(Array, web::MutationObserver)>;

/// The page's toggle control, read through its class list.
pub struct ClassToggle {
    element: web::Element,
    class_name: String,
    observer: Option<(web::MutationObserver, ObserverCallback)>,
}

impl ClassToggle {
    pub fn find(document: &web::Document, selector: &str, class_name: &str) -> Option<Self> {
        dom::query(document, selector).map(|element| Self {
            element,
            class_name: class_name.to_string(),
            observer: None,
        })
    }

    pub fn hide(&self) {
        dom::hide(&self.element);
    }

    /// Bring the class in line with the animator state. Observers see this as
    /// a regular mutation.
    pub fn mark_active(&self, active: bool) {
        if self.is_active() != active {
            dom::set_class(&self.element, &self.class_name, active);
        }
    }
}

impl ToggleSignal for ClassToggle {
    fn subscribe(&mut self, mut on_change: Box<dyn FnMut(bool)>) {
        self.unsubscribe();
        let element = self.element.clone();
        let class_name = self.class_name.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |_records: Array, _observer: web::MutationObserver| {
                on_change(element.class_list().contains(&class_name));
            },
        ) as Box<dyn FnMut(Array, web::MutationObserver)>);

        let observer = match web::MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[toggle] MutationObserver error: {:?}", e);
                return;
            }
        };
        let init = web::MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&Array::of1(&JsValue::from_str("class")));
        if let Err(e) = observer.observe_with_options(&self.element, &init) {
            log::warn!("[toggle] observe failed: {:?}", e);
            return;
        }
        self.observer = Some((observer, callback));
    }

    fn unsubscribe(&mut self) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
    }

    fn is_active(&self) -> bool {
        self.element.class_list().contains(&self.class_name)
    }
}

impl Drop for ClassToggle {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
