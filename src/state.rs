// Process-wide flags shared between the controller and the reporters.
// Only the controller writes them.

use std::sync::atomic::{AtomicBool, Ordering};

/// Which shake reporter a toggle addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShakeTarget {
    Image,
    Table,
}

impl ShakeTarget {
    /// Label printed in shake lines, e.g. `[IMAGE] SHAKE (0)`.
    pub fn label(self) -> &'static str {
        match self {
            ShakeTarget::Image => "IMAGE",
            ShakeTarget::Table => "TABLE",
        }
    }

    /// Capitalized name used in toggle confirmations.
    pub fn title(self) -> &'static str {
        match self {
            ShakeTarget::Image => "Image",
            ShakeTarget::Table => "Table",
        }
    }
}

#[derive(Debug)]
pub struct RunState {
    running: AtomicBool,
    shake_image: AtomicBool,
    shake_table: AtomicBool,
}

impl Default for RunState {
    fn default() -> Self {
        RunState {
            running: AtomicBool::new(true),
            shake_image: AtomicBool::new(false),
            shake_table: AtomicBool::new(false),
        }
    }
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ask every reporter to stop. There is no way back.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    fn flag(&self, target: ShakeTarget) -> &AtomicBool {
        match target {
            ShakeTarget::Image => &self.shake_image,
            ShakeTarget::Table => &self.shake_table,
        }
    }

    pub fn is_shaking(&self, target: ShakeTarget) -> bool {
        self.flag(target).load(Ordering::Acquire)
    }

    /// Flip the shake flag and return its new value.
    pub fn toggle(&self, target: ShakeTarget) -> bool {
        !self.flag(target).fetch_xor(true, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_with_shakes_off() {
        let state = RunState::new();
        assert!(state.is_running());
        assert!(!state.is_shaking(ShakeTarget::Image));
        assert!(!state.is_shaking(ShakeTarget::Table));
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let state = RunState::new();
        assert!(state.toggle(ShakeTarget::Image));
        assert!(state.is_shaking(ShakeTarget::Image));
        assert!(!state.toggle(ShakeTarget::Image));
        assert!(!state.is_shaking(ShakeTarget::Image));
    }

    #[test]
    fn targets_are_independent() {
        let state = RunState::new();
        state.toggle(ShakeTarget::Table);
        assert!(state.is_shaking(ShakeTarget::Table));
        assert!(!state.is_shaking(ShakeTarget::Image));
    }

    #[test]
    fn stop_is_terminal() {
        let state = RunState::new();
        state.stop();
        state.stop();
        assert!(!state.is_running());
    }
}
