use crate::core::{
    Animator, FrameRateEstimator, Lifecycle, ScrollConfig, ToggleSignal, WheelCapability,
};
use crate::dom;
use crate::events::page::{load_binding, visibility_binding};
use crate::events::wheel::WheelListeners;
use crate::events::EventBinding;
use crate::frame::{Sampler, StepLoop};
use crate::toggle::ClassToggle;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// One smoothing instance: owns the animator, the calibration and every
/// listener it installs on the page.
pub struct Controller {
    animator: Rc<RefCell<Animator>>,
    estimator: Rc<RefCell<FrameRateEstimator>>,
    step_loop: StepLoop,
    sampler: Sampler,
    capability: Box<dyn WheelCapability>,
    wheel: RefCell<Option<WheelListeners>>,
    toggle: RefCell<Option<ClassToggle>>,
    visibility: RefCell<Option<EventBinding>>,
    load: RefCell<Option<EventBinding>>,
    lifecycle: Cell<Lifecycle>,
}

impl Controller {
    pub fn new(config: ScrollConfig, capability: Box<dyn WheelCapability>) -> Rc<Self> {
        let animator = Rc::new(RefCell::new(Animator::new(config)));
        // listeners are detached until startup decides otherwise
        animator.borrow_mut().set_enabled(false);
        let estimator = Rc::new(RefCell::new(FrameRateEstimator::new()));
        let step_loop = StepLoop::new(animator.clone());
        let sampler = Sampler::new(estimator.clone());

        let wheel = match dom::window() {
            Ok(w) => Some(WheelListeners::new(
                &w,
                animator.clone(),
                estimator.clone(),
                step_loop.clone(),
            )),
            Err(e) => {
                log::warn!("[scroll] {}", e);
                None
            }
        };

        Rc::new(Self {
            animator,
            estimator,
            step_loop,
            sampler,
            capability,
            wheel: RefCell::new(wheel),
            toggle: RefCell::new(None),
            visibility: RefCell::new(None),
            load: RefCell::new(None),
            lifecycle: Cell::new(Lifecycle::Created),
        })
    }

    pub fn start(self: &Rc<Self>) {
        let mut lifecycle = self.lifecycle.get();
        let first = lifecycle.start();
        self.lifecycle.set(lifecycle);
        if !first {
            return;
        }
        let document = match dom::document() {
            Ok(d) => d,
            Err(e) => {
                log::warn!("[scroll] start skipped: {}", e);
                return;
            }
        };

        let mut visibility = visibility_binding(&document, self.sampler.clone());
        if let Err(e) = visibility.attach() {
            log::warn!("[fps] {}", e);
        }
        *self.visibility.borrow_mut() = Some(visibility);

        if dom::page_loaded(&document) {
            self.on_page_load();
            return;
        }
        let window = match dom::window() {
            Ok(w) => w,
            Err(e) => {
                log::warn!("[scroll] {}", e);
                return;
            }
        };
        let weak = Rc::downgrade(self);
        let mut load = load_binding(&window, move || {
            if let Some(this) = weak.upgrade() {
                this.on_page_load();
            }
        });
        if let Err(e) = load.attach() {
            log::warn!("[scroll] {}", e);
        }
        *self.load.borrow_mut() = Some(load);
    }

    fn on_page_load(self: &Rc<Self>) {
        if !self.lifecycle.get().is_running() {
            return;
        }
        let document = match dom::document() {
            Ok(d) => d,
            Err(e) => {
                log::warn!("[scroll] {}", e);
                return;
            }
        };
        let (selector, class_name) = {
            let animator = self.animator.borrow();
            let cfg = animator.config();
            (
                cfg.toggle_button_selector.clone(),
                cfg.active_state_class_name.clone(),
            )
        };
        let toggle = ClassToggle::find(&document, &selector, &class_name);

        if !self.capability.supports_smooth_wheel() {
            log::info!("[scroll] wheel smoothing unavailable on this device");
            if let Some(t) = &toggle {
                t.hide();
            }
            return;
        }

        match toggle {
            Some(mut t) => {
                t.mark_active(true);
                let weak: Weak<Self> = Rc::downgrade(self);
                t.subscribe(Box::new(move |active| {
                    if let Some(this) = weak.upgrade() {
                        this.apply(active);
                    }
                }));
                *self.toggle.borrow_mut() = Some(t);
            }
            None => log::debug!("[toggle] nothing matches {:?}", selector),
        }

        self.apply(true);
        if dom::page_visible(&document) {
            self.sampler.resume();
        }
    }

    /// Switch the wheel listener pair and the animator together.
    fn apply(&self, enabled: bool) {
        if !self.lifecycle.get().accepts(enabled) {
            log::debug!("[scroll] enable ignored: not started");
            return;
        }
        if enabled && !self.capability.supports_smooth_wheel() {
            log::debug!("[scroll] enable refused: no smooth wheel support");
            return;
        }
        let changed = self.animator.borrow_mut().set_enabled(enabled);
        let mut wheel = self.wheel.borrow_mut();
        let Some(wheel) = wheel.as_mut() else {
            return;
        };
        if enabled {
            if let Err(e) = wheel.attach() {
                log::warn!("[scroll] {}", e);
                self.animator.borrow_mut().set_enabled(false);
                return;
            }
        } else {
            wheel.detach();
            self.step_loop.cancel();
        }
        if changed {
            log::info!(
                "[scroll] smoothing {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }

    /// Enable or disable on behalf of the host, keeping the toggle control's
    /// class in line.
    pub fn set_enabled(&self, enabled: bool) {
        self.apply(enabled);
        let active = self.is_enabled();
        if let Some(t) = self.toggle.borrow().as_ref() {
            t.mark_active(active);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.animator.borrow().is_enabled()
    }

    pub fn frame_rate(&self) -> Option<u32> {
        self.estimator.borrow().current_rate()
    }

    pub fn is_calibrated(&self) -> bool {
        self.estimator.borrow().is_frozen()
    }

    /// Tear down everything `start` installed. The calibration survives, so a
    /// later `start` does not measure again once frozen.
    pub fn stop(&self) {
        // the wheel pair and the sampler go regardless of how they came up
        self.apply(false);
        self.sampler.pause();
        let mut lifecycle = self.lifecycle.get();
        let was_running = lifecycle.stop();
        self.lifecycle.set(lifecycle);
        if !was_running {
            return;
        }
        if let Some(mut t) = self.toggle.borrow_mut().take() {
            t.unsubscribe();
        }
        if let Some(mut b) = self.visibility.borrow_mut().take() {
            b.detach();
        }
        if let Some(mut b) = self.load.borrow_mut().take() {
            b.detach();
        }
        log::info!("[scroll] stopped");
    }
}
