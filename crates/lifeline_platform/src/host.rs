//! Host application context and poll primitive

use std::time::Duration;

use crate::command::Command;
use crate::input::InputEvent;

/// How long a poll may block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollTimeout {
    /// Return at once if nothing is ready
    Immediate,
    /// Block until an event arrives
    Forever,
}

impl PollTimeout {
    /// Timeout as the `Option<Duration>` most poll APIs take (`None` blocks)
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            PollTimeout::Immediate => Some(Duration::ZERO),
            PollTimeout::Forever => None,
        }
    }
}

/// Outcome of one [`Host::poll`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polled {
    /// An event source was ready and has been dispatched
    Event,
    /// Nothing more is ready right now (timeout or wake-up)
    Timeout,
}

/// Host-provided save-state output slot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedState {
    data: Vec<u8>,
}

impl SavedState {
    /// An empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot contents
    pub fn store(&mut self, bytes: &[u8]) {
        self.data.clear();
        self.data.extend_from_slice(bytes);
    }

    /// Saved bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Size of the saved state in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing was saved
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Empty the slot
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Take the saved bytes, leaving the slot empty
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }
}

/// Host application context available while events are dispatched
pub trait HostContext {
    /// Whether a window surface currently exists
    fn has_window(&self) -> bool;

    /// Save-state output slot, written during `SaveState`
    fn saved_state(&mut self) -> &mut SavedState;

    /// Ask the host to finish the activity
    ///
    /// Asynchronous: destruction arrives later as a `Destroy` command.
    fn request_finish(&mut self);
}

/// Host event source driving the router
pub trait Host: HostContext {
    /// Wait for at most `timeout` and dispatch one ready event source
    ///
    /// Lifecycle commands, input events and sensor readiness are delivered to
    /// `dispatcher` before this returns.
    fn poll(&mut self, timeout: PollTimeout, dispatcher: &mut dyn Dispatcher) -> Polled;

    /// Whether the host has delivered permanent destruction
    fn destroy_requested(&self) -> bool;
}

/// Receives events from [`Host::poll`]
pub trait Dispatcher {
    /// Handle a lifecycle command
    fn process_app_event(&mut self, host: &mut dyn HostContext, command: Command);

    /// Handle an input event, returning whether it was consumed
    fn process_input_event(&mut self, host: &mut dyn HostContext, event: &dyn InputEvent)
        -> bool;

    /// Sensor data may be waiting on the sensor queue
    fn process_event_sensor(&mut self, host: &mut dyn HostContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_duration() {
        assert_eq!(PollTimeout::Immediate.as_duration(), Some(Duration::ZERO));
        assert_eq!(PollTimeout::Forever.as_duration(), None);
    }

    #[test]
    fn test_saved_state_store_replaces() {
        let mut state = SavedState::new();
        assert!(state.is_empty());
        state.store(b"first");
        state.store(b"two");
        assert_eq!(state.as_bytes(), b"two");
        assert_eq!(state.len(), 3);
        assert_eq!(state.take(), b"two".to_vec());
        assert!(state.is_empty());
    }
}
