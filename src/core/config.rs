// Animator configuration and the shallow merge of user-supplied options.
//
// Numeric ranges are not validated: a negative multiplier or a zero base
// duration produces meaningless motion but never a panic.

use super::constants::*;

/// Fully resolved options for one animator instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Growth applied to the gesture duration per same-direction wheel tick.
    pub duration_increase_factor: f64,
    /// Scales the eased velocity into pixels per step.
    pub scroll_speed_multiplier: f64,
    /// Base gesture duration (ms).
    pub scroll_duration_ms: u32,
    /// Gesture duration cap (ms), honoured when `enable_limit_duration` is set.
    pub limit_duration_ms: u32,
    pub enable_limit_duration: bool,
    pub toggle_button_selector: String,
    pub active_state_class_name: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_increase_factor: DEFAULT_DURATION_INCREASE_FACTOR,
            scroll_speed_multiplier: DEFAULT_SCROLL_SPEED_MULTIPLIER,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            limit_duration_ms: DEFAULT_LIMIT_DURATION_MS,
            enable_limit_duration: DEFAULT_ENABLE_LIMIT_DURATION,
            toggle_button_selector: DEFAULT_TOGGLE_BUTTON_SELECTOR.to_string(),
            active_state_class_name: DEFAULT_ACTIVE_STATE_CLASS_NAME.to_string(),
        }
    }
}

/// Partial overrides; `None` keeps the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollOptions {
    pub duration_increase_factor: Option<f64>,
    pub scroll_speed_multiplier: Option<f64>,
    pub scroll_duration_ms: Option<u32>,
    pub limit_duration_ms: Option<u32>,
    pub enable_limit_duration: Option<bool>,
    pub toggle_button_selector: Option<String>,
    pub active_state_class_name: Option<String>,
}

impl ScrollConfig {
    /// Defaults overridden field by field with whatever `options` supplies.
    pub fn merged(options: ScrollOptions) -> Self {
        let mut cfg = Self::default();
        cfg.apply(options);
        cfg
    }

    pub fn apply(&mut self, options: ScrollOptions) {
        if let Some(v) = options.duration_increase_factor {
            self.duration_increase_factor = v;
        }
        if let Some(v) = options.scroll_speed_multiplier {
            self.scroll_speed_multiplier = v;
        }
        if let Some(v) = options.scroll_duration_ms {
            self.scroll_duration_ms = v;
        }
        if let Some(v) = options.limit_duration_ms {
            self.limit_duration_ms = v;
        }
        if let Some(v) = options.enable_limit_duration {
            self.enable_limit_duration = v;
        }
        if let Some(v) = options.toggle_button_selector {
            self.toggle_button_selector = v;
        }
        if let Some(v) = options.active_state_class_name {
            self.active_state_class_name = v;
        }
    }

    /// Duration after one more same-direction tick.
    pub fn grow_duration(&self, current_ms: u32) -> u32 {
        if self.enable_limit_duration && current_ms >= self.limit_duration_ms {
            return self.limit_duration_ms;
        }
        // f64 -> u32 casts saturate, so unbounded growth tops out at u32::MAX
        let grown = (current_ms as f64 * self.duration_increase_factor).round() as u32;
        if self.enable_limit_duration {
            grown.min(self.limit_duration_ms)
        } else {
            grown
        }
    }

    /// Duration a reversed gesture restarts with.
    pub fn reversed_duration(&self) -> u32 {
        (self.scroll_duration_ms as f64 * self.duration_increase_factor).round() as u32
    }
}
