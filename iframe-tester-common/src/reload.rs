//! Auto-reload state machine
//!
//! The timer itself is owned here as an opaque handle `H`; dropping the
//! handle must cancel the timer. That keeps "is a timer running" a single
//! fact instead of something each caller re-derives.

/// Period between forced frame reloads
pub const RELOAD_INTERVAL_MS: u32 = 5_000;

/// Current auto-reload state, owning the running timer if any
#[derive(Debug)]
enum ReloadState<H> {
    Idle,
    /// Held only so that dropping the state cancels the timer
    Reloading { _timer: H },
}

/// Transition taken by [`AutoReload::set_enabled`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Started,
    Stopped,
    Unchanged,
}

#[derive(Debug)]
pub struct AutoReload<H> {
    state: ReloadState<H>,
}

impl<H> Default for AutoReload<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> AutoReload<H> {
    pub fn new() -> Self {
        Self {
            state: ReloadState::Idle,
        }
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.state, ReloadState::Reloading { .. })
    }

    /// Apply the auto-reload flag. `start` runs only on Idle -> Reloading.
    pub fn set_enabled(&mut self, enabled: bool, start: impl FnOnce() -> H) -> Transition {
        match (self.is_reloading(), enabled) {
            (false, true) => {
                self.state = ReloadState::Reloading { _timer: start() };
                Transition::Started
            }
            (true, false) => {
                self.stop();
                Transition::Stopped
            }
            _ => Transition::Unchanged,
        }
    }

    /// Cancel the timer if running. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.state = ReloadState::Idle;
    }
}
