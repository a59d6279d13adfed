// Seams to the host environment.

/// Something the host can observe change, paired with a predicate telling
/// whether it currently reads as "effect enabled".
pub trait ToggleSignal {
    /// Register `on_change`; replaces any earlier subscription.
    fn subscribe(&mut self, on_change: Box<dyn FnMut(bool)>);
    fn unsubscribe(&mut self);
    fn is_active(&self) -> bool;
}

/// Whether the environment delivers wheel input worth smoothing.
pub trait WheelCapability {
    fn supports_smooth_wheel(&self) -> bool;
}

/// Capability fixed at construction, e.g. from an explicit host option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCapability(pub bool);

impl WheelCapability for FixedCapability {
    fn supports_smooth_wheel(&self) -> bool {
        self.0
    }
}

