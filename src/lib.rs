#![cfg(target_arch = "wasm32")]
//! Eased wheel scrolling for web pages.
//!
//! The host page constructs a [`SmoothScroll`] and calls `start()`; nothing
//! is installed on the page before that.

use crate::core::{FixedCapability, ScrollConfig, WheelCapability};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod controller;
mod core;
mod dom;
mod events;
mod frame;
mod options;
mod toggle;

#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

#[wasm_bindgen]
pub struct SmoothScroll {
    inner: Rc<controller::Controller>,
}

#[wasm_bindgen]
impl SmoothScroll {
    /// `options` may be omitted; unknown keys are ignored.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> SmoothScroll {
        let host = options::read(&options);
        let config = ScrollConfig::merged(host.scroll);
        let capability: Box<dyn WheelCapability> = match host.wheel_capable {
            Some(capable) => Box::new(FixedCapability(capable)),
            None => Box::new(dom::PointerQuery),
        };
        log::debug!("[scroll] config {:?}", config);
        SmoothScroll {
            inner: controller::Controller::new(config, capability),
        }
    }

    pub fn start(&self) {
        self.inner.start();
    }

    pub fn stop(&self) {
        self.inner.stop();
    }

    pub fn enable(&self) {
        self.inner.set_enabled(true);
    }

    pub fn disable(&self) {
        self.inner.set_enabled(false);
    }

    #[wasm_bindgen(js_name = isEnabled)]
    pub fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    /// Current calibration in frames per second, if any window completed.
    #[wasm_bindgen(js_name = frameRate)]
    pub fn frame_rate(&self) -> Option<u32> {
        self.inner.frame_rate()
    }

    #[wasm_bindgen(js_name = isCalibrated)]
    pub fn is_calibrated(&self) -> bool {
        self.inner.is_calibrated()
    }
}
