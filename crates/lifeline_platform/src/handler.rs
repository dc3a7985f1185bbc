//! Application handler traits
//!
//! The router never implements these; applications inject concrete handlers
//! when they build a router.

use thiserror::Error;

use crate::host::SavedState;
use crate::input::InputEvent;
use crate::sensor::SensorSample;

/// Non-OK status returned by an activity handler
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The handler reported failure
    #[error("Handler failed: {0}")]
    Failed(String),

    /// Error raised inside the handler
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HandlerError {
    /// Create a failure with a message
    pub fn failed(message: impl Into<String>) -> Self {
        HandlerError::Failed(message.into())
    }
}

/// Status of [`ActivityHandler::on_active`] and [`ActivityHandler::on_step`]
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// Receives lifecycle notifications and drives per-frame work
///
/// Notification methods default to doing nothing.
pub trait ActivityHandler {
    /// The activity was started
    fn on_start(&mut self) {}

    /// The activity was resumed
    fn on_resume(&mut self) {}

    /// The activity was paused; deactivation follows
    fn on_pause(&mut self) {}

    /// The activity was stopped
    fn on_stop(&mut self) {}

    /// The activity is being destroyed
    fn on_destroy(&mut self) {}

    /// A window surface was created
    fn on_create_window(&mut self) {}

    /// The window surface is going away; deactivation follows
    fn on_destroy_window(&mut self) {}

    /// Input focus was gained, after activation
    fn on_gain_focus(&mut self) {}

    /// Input focus was lost; deactivation follows
    fn on_lost_focus(&mut self) {}

    /// Device configuration changed
    fn on_configuration_changed(&mut self) {}

    /// The system is low on memory
    fn on_low_memory(&mut self) {}

    /// Write state to restore into the host's save slot
    fn on_save_state(&mut self, state: &mut SavedState) {
        let _ = state;
    }

    /// Window and focus are both available and sensors are live
    fn on_active(&mut self) -> HandlerResult;

    /// The application left the active state
    fn on_deactivate(&mut self);

    /// One unit of per-frame work
    fn on_step(&mut self) -> HandlerResult;
}

/// Receives touch and sensor input while the application is active
pub trait InputHandler {
    /// A touchscreen motion event; return whether it was consumed
    fn on_touch_event(&mut self, event: &dyn InputEvent) -> bool;

    /// An accelerometer sample
    fn on_accelerometer_event(&mut self, sample: &SensorSample);
}

impl<T: ActivityHandler + ?Sized> ActivityHandler for &mut T {
    fn on_start(&mut self) {
        (**self).on_start()
    }

    fn on_resume(&mut self) {
        (**self).on_resume()
    }

    fn on_pause(&mut self) {
        (**self).on_pause()
    }

    fn on_stop(&mut self) {
        (**self).on_stop()
    }

    fn on_destroy(&mut self) {
        (**self).on_destroy()
    }

    fn on_create_window(&mut self) {
        (**self).on_create_window()
    }

    fn on_destroy_window(&mut self) {
        (**self).on_destroy_window()
    }

    fn on_gain_focus(&mut self) {
        (**self).on_gain_focus()
    }

    fn on_lost_focus(&mut self) {
        (**self).on_lost_focus()
    }

    fn on_configuration_changed(&mut self) {
        (**self).on_configuration_changed()
    }

    fn on_low_memory(&mut self) {
        (**self).on_low_memory()
    }

    fn on_save_state(&mut self, state: &mut SavedState) {
        (**self).on_save_state(state)
    }

    fn on_active(&mut self) -> HandlerResult {
        (**self).on_active()
    }

    fn on_deactivate(&mut self) {
        (**self).on_deactivate()
    }

    fn on_step(&mut self) -> HandlerResult {
        (**self).on_step()
    }
}

impl<T: InputHandler + ?Sized> InputHandler for &mut T {
    fn on_touch_event(&mut self, event: &dyn InputEvent) -> bool {
        (**self).on_touch_event(event)
    }

    fn on_accelerometer_event(&mut self, sample: &SensorSample) {
        (**self).on_accelerometer_event(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        steps: u32,
    }

    impl ActivityHandler for Counter {
        fn on_active(&mut self) -> HandlerResult {
            Ok(())
        }

        fn on_deactivate(&mut self) {}

        fn on_step(&mut self) -> HandlerResult {
            self.steps += 1;
            if self.steps > 1 {
                return Err(HandlerError::failed("done"));
            }
            Ok(())
        }
    }

    fn step_twice<A: ActivityHandler>(mut handler: A) -> (HandlerResult, HandlerResult) {
        (handler.on_step(), handler.on_step())
    }

    #[test]
    fn test_borrowed_handler_forwards() {
        let mut counter = Counter { steps: 0 };
        let (first, second) = step_twice(&mut counter);
        assert!(first.is_ok());
        assert!(second.is_err());
        assert_eq!(counter.steps, 2);
    }

    #[test]
    fn test_handler_error_from_anyhow() {
        let err: HandlerError = anyhow::anyhow!("surface lost").into();
        assert_eq!(err.to_string(), "surface lost");
        assert_eq!(
            HandlerError::failed("boom").to_string(),
            "Handler failed: boom"
        );
    }
}
