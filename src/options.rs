use crate::core::ScrollOptions;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Options object handed to the constructor, split into animator options and
/// host overrides.
#[derive(Clone, Debug, Default)]
pub struct HostOptions {
    pub scroll: ScrollOptions,
    pub wheel_capable: Option<bool>,
}

fn field(obj: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn number(obj: &JsValue, key: &str) -> Option<f64> {
    let v = field(obj, key)?;
    let n = v.as_f64();
    if n.is_none() {
        log::warn!("[scroll] option {} is not a number, using default", key);
    }
    n
}

fn millis(obj: &JsValue, key: &str) -> Option<u32> {
    // f64 -> u32 saturates; negatives become 0
    number(obj, key).map(|n| n.round() as u32)
}

fn boolean(obj: &JsValue, key: &str) -> Option<bool> {
    let v = field(obj, key)?;
    let b = v.as_bool();
    if b.is_none() {
        log::warn!("[scroll] option {} is not a boolean, using default", key);
    }
    b
}

fn string(obj: &JsValue, key: &str) -> Option<String> {
    let v = field(obj, key)?;
    let s = v.as_string();
    if s.is_none() {
        log::warn!("[scroll] option {} is not a string, using default", key);
    }
    s
}

pub fn read(value: &JsValue) -> HostOptions {
    if !value.is_object() {
        return HostOptions::default();
    }
    HostOptions {
        scroll: ScrollOptions {
            duration_increase_factor: number(value, "durationIncreaseFactor"),
            scroll_speed_multiplier: number(value, "scrollSpeedMultiplier"),
            scroll_duration_ms: millis(value, "scrollDuration"),
            limit_duration_ms: millis(value, "limitDuration"),
            enable_limit_duration: boolean(value, "enableLimitDuration"),
            toggle_button_selector: string(value, "toggleButtonSelector"),
            active_state_class_name: string(value, "activeStateClassName"),
        },
        wheel_capable: boolean(value, "wheelCapable"),
    }
}
