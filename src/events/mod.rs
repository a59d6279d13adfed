pub mod page;
pub mod wheel;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A listener owned on the Rust side that can be attached and detached any
/// number of times.
pub struct EventBinding {
    target: web::EventTarget,
    kind: &'static str,
    passive: Option<bool>,
    closure: Closure<dyn FnMut(web::Event)>,
    attached: bool,
}

impl EventBinding {
    pub fn new(
        target: impl Into<web::EventTarget>,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            kind,
            passive: None,
            closure: Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>),
            attached: false,
        }
    }

    /// Listener that may call `preventDefault`.
    pub fn non_passive(mut self) -> Self {
        self.passive = Some(false);
        self
    }

    pub fn attach(&mut self) -> anyhow::Result<()> {
        if self.attached {
            return Ok(());
        }
        let callback = self.closure.as_ref().unchecked_ref();
        let res = match self.passive {
            Some(passive) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(passive);
                self.target
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        self.kind, callback, &opts,
                    )
            }
            None => self
                .target
                .add_event_listener_with_callback(self.kind, callback),
        };
        res.map_err(|e| anyhow::anyhow!("add {} listener: {:?}", self.kind, e))?;
        self.attached = true;
        Ok(())
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        self.attached = false;
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        self.detach();
    }
}
