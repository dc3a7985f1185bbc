//! Android host implementation
//!
//! Wraps android-activity event polling to implement the Lifeline
//! [`Host`](lifeline_platform::Host) trait.

use lifeline_platform::PlatformError;

#[cfg(target_os = "android")]
use android_activity::{AndroidApp, InputStatus, MainEvent, PollEvent};

#[cfg(target_os = "android")]
use lifeline_platform::{
    Command, Dispatcher, Host, HostContext, PollTimeout, Polled, SavedState,
};

#[cfg(target_os = "android")]
use tracing::{debug, error, info, warn};

#[cfg(target_os = "android")]
use crate::input::AndroidInput;

#[cfg(target_os = "android")]
use crate::jni_utils;

/// Map an android-activity main event to a lifecycle command
#[cfg(target_os = "android")]
fn command_for(event: &MainEvent<'_>) -> Option<Command> {
    let command = match event {
        MainEvent::InitWindow { .. } => Command::InitWindow,
        MainEvent::TerminateWindow { .. } => Command::TermWindow,
        MainEvent::WindowResized { .. } => Command::WindowResized,
        MainEvent::RedrawNeeded { .. } => Command::WindowRedrawNeeded,
        MainEvent::ContentRectChanged { .. } => Command::ContentRectChanged,
        MainEvent::GainedFocus => Command::GainedFocus,
        MainEvent::LostFocus => Command::LostFocus,
        MainEvent::ConfigChanged { .. } => Command::ConfigChanged,
        MainEvent::LowMemory => Command::LowMemory,
        MainEvent::Start => Command::Start,
        MainEvent::Resume { .. } => Command::Resume,
        MainEvent::SaveState { .. } => Command::SaveState,
        MainEvent::Pause => Command::Pause,
        MainEvent::Stop => Command::Stop,
        MainEvent::Destroy => Command::Destroy,
        _ => return None,
    };
    Some(command)
}

/// Android host wrapping an [`AndroidApp`]
#[cfg(target_os = "android")]
pub struct AndroidHost {
    app: AndroidApp,
    saved_state: SavedState,
    destroy_requested: bool,
}

#[cfg(target_os = "android")]
impl AndroidHost {
    /// Create a host for the app passed to `android_main`
    pub fn new(app: AndroidApp) -> Result<Self, PlatformError> {
        Ok(Self {
            app,
            saved_state: SavedState::new(),
            destroy_requested: false,
        })
    }

    /// The wrapped app
    pub fn app(&self) -> &AndroidApp {
        &self.app
    }

    /// Dispatch every pending input event
    fn drain_input(&mut self, app: &AndroidApp, dispatcher: &mut dyn Dispatcher) {
        let mut iter = match app.input_events_iter() {
            Ok(iter) => iter,
            Err(e) => {
                warn!("Failed to get input events iterator: {:?}", e);
                return;
            }
        };

        while iter.next(|event| {
            let event = AndroidInput::new(event);
            if dispatcher.process_input_event(self, &event) {
                InputStatus::Handled
            } else {
                InputStatus::Unhandled
            }
        }) {}
    }
}

#[cfg(target_os = "android")]
impl HostContext for AndroidHost {
    fn has_window(&self) -> bool {
        self.app.native_window().is_some()
    }

    fn saved_state(&mut self) -> &mut SavedState {
        &mut self.saved_state
    }

    fn request_finish(&mut self) {
        info!("Android: Requesting activity finish");
        if let Err(e) = jni_utils::finish_activity(&self.app) {
            error!("Failed to finish activity: {}", e);
        }
    }
}

#[cfg(target_os = "android")]
impl Host for AndroidHost {
    fn poll(&mut self, timeout: PollTimeout, dispatcher: &mut dyn Dispatcher) -> Polled {
        let app = self.app.clone();
        let mut polled = Polled::Timeout;

        app.poll_events(timeout.as_duration(), |event| match event {
            PollEvent::Main(MainEvent::InputAvailable) => {
                polled = Polled::Event;
                self.drain_input(&app, dispatcher);
            }

            PollEvent::Main(MainEvent::SaveState { saver, .. }) => {
                polled = Polled::Event;
                self.saved_state.clear();
                dispatcher.process_app_event(self, Command::SaveState);
                if !self.saved_state.is_empty() {
                    debug!("Android: Saving {} bytes of state", self.saved_state.len());
                    saver.store(self.saved_state.as_bytes());
                }
            }

            PollEvent::Main(main_event) => {
                polled = Polled::Event;
                if let Some(command) = command_for(&main_event) {
                    dispatcher.process_app_event(self, command);
                    if command == Command::Destroy {
                        info!("Android: Destroyed");
                        self.destroy_requested = true;
                    }
                }
            }

            _ => {}
        });

        // The sensor queue shares this thread's looper; read whatever it holds
        dispatcher.process_event_sensor(self);

        polled
    }

    fn destroy_requested(&self) -> bool {
        self.destroy_requested
    }
}

/// Placeholder for non-Android builds
#[cfg(not(target_os = "android"))]
pub struct AndroidHost {
    _private: (),
}

#[cfg(not(target_os = "android"))]
impl AndroidHost {
    /// Android hosts only exist on Android
    pub fn new() -> Result<Self, PlatformError> {
        Err(PlatformError::Unsupported(
            "Android platform only available on Android".to_string(),
        ))
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[test]
    fn test_host_unsupported_off_device() {
        assert!(matches!(
            AndroidHost::new(),
            Err(PlatformError::Unsupported(_))
        ));
    }
}
