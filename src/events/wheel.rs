use super::EventBinding;
use crate::core::{Animator, FrameRateEstimator};
use crate::frame::StepLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Native-scroll suppression and gesture handling, attached and detached
/// together.
pub struct WheelListeners {
    suppress: EventBinding,
    gesture: EventBinding,
}

impl WheelListeners {
    pub fn new(
        window: &web::Window,
        animator: Rc<RefCell<Animator>>,
        estimator: Rc<RefCell<FrameRateEstimator>>,
        step_loop: StepLoop,
    ) -> Self {
        let suppress = EventBinding::new(window.clone(), "wheel", |ev: web::Event| {
            ev.prevent_default();
        })
        .non_passive();

        let gesture = EventBinding::new(window.clone(), "wheel", move |ev: web::Event| {
            let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            let rate = estimator.borrow().current_rate();
            let outcome = animator.borrow_mut().on_wheel(wheel.delta_y(), rate);
            log::trace!("[scroll] wheel dy={:.1} -> {:?}", wheel.delta_y(), outcome);
            if let Some(id) = outcome.scheduled() {
                step_loop.schedule(id);
            }
        });

        Self { suppress, gesture }
    }

    pub fn attach(&mut self) -> anyhow::Result<()> {
        self.suppress.attach()?;
        if let Err(e) = self.gesture.attach() {
            self.suppress.detach();
            return Err(e);
        }
        Ok(())
    }

    pub fn detach(&mut self) {
        self.gesture.detach();
        self.suppress.detach();
    }
}
