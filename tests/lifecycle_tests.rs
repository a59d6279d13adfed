// Host-side tests for instance start/stop and the enable gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod bezier {
    include!("../src/core/bezier.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod animator {
    include!("../src/core/animator.rs");
}
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use animator::*;
use config::*;
use lifecycle::*;

/// Instance whose wheel pair follows the same gate as the page controller.
struct Instance {
    lifecycle: Lifecycle,
    animator: Animator,
    listeners_attached: bool,
}

impl Instance {
    fn new() -> Self {
        let mut animator = Animator::new(ScrollConfig::default());
        animator.set_enabled(false);
        Self {
            lifecycle: Lifecycle::default(),
            animator,
            listeners_attached: false,
        }
    }

    fn apply(&mut self, enabled: bool) {
        if !self.lifecycle.accepts(enabled) {
            return;
        }
        self.animator.set_enabled(enabled);
        self.listeners_attached = enabled;
    }

    fn start(&mut self) {
        if self.lifecycle.start() {
            self.apply(true);
        }
    }

    fn stop(&mut self) {
        self.apply(false);
        self.lifecycle.stop();
    }
}

#[test]
fn start_runs_once_until_stopped() {
    let mut l = Lifecycle::default();
    assert_eq!(l, Lifecycle::Created);
    assert!(l.start());
    assert!(!l.start());
    assert!(l.stop());
    assert!(!l.stop());
    assert_eq!(l, Lifecycle::Stopped);
    assert!(l.start());
    assert!(l.is_running());
}

#[test]
fn stop_before_start_changes_nothing() {
    let mut l = Lifecycle::default();
    assert!(!l.stop());
    assert_eq!(l, Lifecycle::Created);
}

#[test]
fn enabling_is_only_accepted_while_running() {
    let mut l = Lifecycle::default();
    assert!(!l.accepts(true));
    assert!(l.accepts(false));
    l.start();
    assert!(l.accepts(true));
    l.stop();
    assert!(!l.accepts(true));
    assert!(l.accepts(false));
}

#[test]
fn enable_before_start_attaches_nothing() {
    let mut inst = Instance::new();
    inst.apply(true);
    assert!(!inst.listeners_attached);
    assert!(!inst.animator.is_enabled());
    assert_eq!(inst.animator.on_wheel(100.0, Some(60)), WheelOutcome::Ignored);

    inst.stop();
    assert!(!inst.listeners_attached);
}

#[test]
fn stop_detaches_listeners_installed_by_start() {
    let mut inst = Instance::new();
    inst.start();
    assert!(inst.listeners_attached);
    let id = inst.animator.on_wheel(100.0, Some(60)).scheduled().unwrap();

    inst.stop();
    assert!(!inst.listeners_attached);
    assert_eq!(inst.animator.step(id), None);

    inst.apply(true);
    assert!(!inst.listeners_attached);
}

#[test]
fn restart_after_stop_enables_again() {
    let mut inst = Instance::new();
    inst.start();
    inst.stop();
    inst.start();
    assert!(inst.listeners_attached);
    assert!(inst.animator.is_enabled());
}
