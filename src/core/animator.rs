// Wheel gesture state machine.
//
// Consecutive wheel ticks in one direction fold into a single gesture whose
// eased duration keeps growing; a tick in the other direction abandons the
// current motion and restarts. Every start or restart allocates a fresh
// `GestureId` and animation steps must present the id they were scheduled
// for, so a frame queued for an abandoned or cancelled gesture applies
// nothing.

use super::bezier::calculate_speed_variation;
use super::config::ScrollConfig;
use super::constants::{DELTA_PRECISION, FALLBACK_FRAME_RATE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GestureId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
}

/// The in-flight animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Gesture {
    pub id: GestureId,
    /// +1 scrolls down, -1 scrolls up.
    pub direction: i8,
    pub elapsed_ms: u32,
    pub total_duration_ms: u32,
    pub step_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Animator disabled or the event carried no vertical delta.
    Ignored,
    /// A new gesture began; its steps must be scheduled.
    Started(GestureId),
    /// Same-direction tick folded into the running gesture.
    Extended { total_duration_ms: u32 },
    /// Direction flipped; the previous gesture is abandoned and a new id issued.
    Reversed(GestureId),
}

impl WheelOutcome {
    /// Gesture whose step loop has to be (re)scheduled, if any.
    pub fn scheduled(&self) -> Option<GestureId> {
        match *self {
            WheelOutcome::Started(id) | WheelOutcome::Reversed(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    /// Vertical offset to apply immediately (px).
    pub delta_px: f64,
    /// No further step is due; the animator is back to `Idle`.
    pub finished: bool,
}

/// Milliseconds per animation step for a calibrated rate, falling back to
/// 60 fps when no calibration exists yet.
pub fn step_time_ms(frame_rate: Option<u32>) -> u32 {
    let rate = frame_rate
        .filter(|r| *r > 0)
        .unwrap_or(FALLBACK_FRAME_RATE);
    // step 0 would never terminate a gesture
    ((1000.0 / rate as f64).round() as u32).max(1)
}

pub struct Animator {
    config: ScrollConfig,
    gesture: Option<Gesture>,
    next_id: u64,
    enabled: bool,
}

impl Animator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            gesture: None,
            next_id: 0,
            enabled: true,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        if self.gesture.is_some() {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true when the state changed. Disabling also cancels the
    /// in-flight gesture.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        if !enabled {
            self.cancel();
        }
        true
    }

    /// Drop the in-flight gesture; steps already queued for it become no-ops.
    pub fn cancel(&mut self) -> Option<GestureId> {
        self.gesture.take().map(|g| g.id)
    }

    fn allocate_id(&mut self) -> GestureId {
        self.next_id += 1;
        GestureId(self.next_id)
    }

    /// Fold one wheel event into the gesture state.
    pub fn on_wheel(&mut self, delta_y: f64, frame_rate: Option<u32>) -> WheelOutcome {
        if !self.enabled {
            return WheelOutcome::Ignored;
        }
        let direction: i8 = if delta_y > 0.0 {
            1
        } else if delta_y < 0.0 {
            -1
        } else {
            return WheelOutcome::Ignored;
        };
        let step_ms = step_time_ms(frame_rate);

        if let Some(g) = self.gesture.as_mut().filter(|g| g.direction == direction) {
            g.total_duration_ms = self.config.grow_duration(g.total_duration_ms);
            g.step_ms = step_ms;
            return WheelOutcome::Extended {
                total_duration_ms: g.total_duration_ms,
            };
        }

        let reversing = self.gesture.is_some();
        let id = self.allocate_id();
        let total_duration_ms = if reversing {
            self.config.reversed_duration()
        } else {
            self.config.scroll_duration_ms
        };
        self.gesture = Some(Gesture {
            id,
            direction,
            elapsed_ms: 0,
            total_duration_ms,
            step_ms,
        });
        if reversing {
            WheelOutcome::Reversed(id)
        } else {
            WheelOutcome::Started(id)
        }
    }

    /// Advance the gesture `id` by one step. `None` when `id` is stale or
    /// nothing is animating.
    pub fn step(&mut self, id: GestureId) -> Option<StepOutcome> {
        let multiplier = self.config.scroll_speed_multiplier;
        let g = self.gesture.as_mut().filter(|g| g.id == id)?;

        let t = g.elapsed_ms as f64 / g.total_duration_ms as f64;
        let velocity = calculate_speed_variation(t);
        let raw = (velocity * multiplier * g.direction as f64 * DELTA_PRECISION).round()
            / DELTA_PRECISION;
        let delta_px = if raw.is_finite() { raw } else { 0.0 };

        g.elapsed_ms = g.elapsed_ms.saturating_add(g.step_ms);
        let finished = g.elapsed_ms > g.total_duration_ms;
        if finished {
            self.gesture = None;
        }
        Some(StepOutcome { delta_px, finished })
    }
}
