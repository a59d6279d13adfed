// Instance lifecycle: nothing touches the page before `start` or after `stop`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Created,
    Running,
    Stopped,
}

impl Lifecycle {
    /// Returns true when startup has to run.
    pub fn start(&mut self) -> bool {
        let first = *self != Lifecycle::Running;
        *self = Lifecycle::Running;
        first
    }

    /// Returns true when page bindings installed by `start` must be removed.
    pub fn stop(&mut self) -> bool {
        let was_running = *self == Lifecycle::Running;
        if was_running {
            *self = Lifecycle::Stopped;
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        *self == Lifecycle::Running
    }

    /// Whether an enable/disable request may change listeners now. Disabling
    /// is always allowed; enabling only while running.
    pub fn accepts(&self, enabled: bool) -> bool {
        !enabled || self.is_running()
    }
}
