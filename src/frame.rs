use crate::core::{Animator, FrameRateEstimator, GestureId};
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

fn cancel_frame(pending: &Cell<Option<i32>>) {
    if let Some(handle) = pending.take() {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Per-frame driver for the animator. At most one frame is pending; it
/// carries the id of the gesture it was scheduled for.
#[derive(Clone)]
pub struct StepLoop {
    tick: Tick,
    target: Rc<Cell<Option<GestureId>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl StepLoop {
    pub fn new(animator: Rc<RefCell<Animator>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let target: Rc<Cell<Option<GestureId>>> = Rc::new(Cell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick_inner = tick.clone();
        let target_inner = target.clone();
        let pending_inner = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_inner.set(None);
            let Some(id) = target_inner.get() else {
                return;
            };
            let outcome = animator.borrow_mut().step(id);
            match outcome {
                Some(step) => {
                    if step.delta_px != 0.0 {
                        if let Some(w) = web::window() {
                            dom::scroll_by_instant(&w, step.delta_px);
                        }
                    }
                    if step.finished {
                        target_inner.set(None);
                        log::debug!("[scroll] gesture {:?} finished", id);
                    } else {
                        pending_inner.set(request_frame(&tick_inner));
                    }
                }
                // superseded or cancelled while the frame was queued
                None => target_inner.set(None),
            }
        }) as Box<dyn FnMut()>));

        Self {
            tick,
            target,
            pending,
        }
    }

    /// Point the loop at gesture `id`, requesting a frame if none is queued.
    pub fn schedule(&self, id: GestureId) {
        self.target.set(Some(id));
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }

    pub fn cancel(&self) {
        self.target.set(None);
        cancel_frame(&self.pending);
    }
}

/// Feeds animation callbacks into the estimator while the page is visible.
#[derive(Clone)]
pub struct Sampler {
    tick: Tick,
    estimator: Rc<RefCell<FrameRateEstimator>>,
    last: Rc<Cell<Instant>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl Sampler {
    pub fn new(estimator: Rc<RefCell<FrameRateEstimator>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let last = Rc::new(Cell::new(Instant::now()));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick_inner = tick.clone();
        let estimator_inner = estimator.clone();
        let last_inner = last.clone();
        let pending_inner = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_inner.set(None);
            let now = Instant::now();
            let dt = now - last_inner.get();
            last_inner.set(now);

            let mut est = estimator_inner.borrow_mut();
            if let Some(report) = est.record_frame(dt) {
                match report.final_rate {
                    Some(rate) => log::info!("[fps] calibrated at {} fps", rate),
                    None => log::debug!(
                        "[fps] {} frames in {} ms -> {} fps{}",
                        report.frames,
                        report.window_ms,
                        report.rate,
                        if report.retained { " (sample)" } else { "" }
                    ),
                }
            }
            let keep_going = est.is_running();
            drop(est);
            if keep_going {
                pending_inner.set(request_frame(&tick_inner));
            }
        }) as Box<dyn FnMut()>));

        Self {
            tick,
            estimator,
            last,
            pending,
        }
    }

    /// Page visible: continue the current window. No-op once calibrated.
    pub fn resume(&self) {
        if !self.estimator.borrow_mut().resume() {
            return;
        }
        self.last.set(Instant::now());
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }

    pub fn pause(&self) {
        self.estimator.borrow_mut().pause();
        cancel_frame(&self.pending);
    }
}
