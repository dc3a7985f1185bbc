//! Android touch input handling
//!
//! Exposes android-activity input events through the Lifeline
//! [`InputEvent`](lifeline_platform::InputEvent) trait. Handlers that need to
//! keep an event past the dispatch copy it with
//! [`MotionInput::capture`](lifeline_platform::MotionInput::capture).

#[cfg(target_os = "android")]
use android_activity::input::{InputEvent as NdkInputEvent, MotionAction, Source};

#[cfg(target_os = "android")]
use lifeline_platform::{InputEvent, InputEventType, InputSource, TouchAction, TouchPointer};

/// Borrowed view of an android-activity input event
#[cfg(target_os = "android")]
pub struct AndroidInput<'e, 'a> {
    event: &'e NdkInputEvent<'a>,
}

#[cfg(target_os = "android")]
impl<'e, 'a> AndroidInput<'e, 'a> {
    /// Wrap an event received from `input_events_iter()`
    pub fn new(event: &'e NdkInputEvent<'a>) -> Self {
        Self { event }
    }
}

#[cfg(target_os = "android")]
fn convert_source(source: Source) -> InputSource {
    match source {
        Source::Touchscreen => InputSource::Touchscreen,
        Source::Mouse => InputSource::Mouse,
        Source::Keyboard => InputSource::Keyboard,
        Source::Trackball => InputSource::Trackball,
        Source::Joystick => InputSource::Joystick,
        Source::Stylus | Source::BluetoothStylus => InputSource::Stylus,
        _ => InputSource::Unknown,
    }
}

#[cfg(target_os = "android")]
fn convert_action(action: MotionAction) -> TouchAction {
    match action {
        MotionAction::Down => TouchAction::Down,
        MotionAction::Up => TouchAction::Up,
        MotionAction::Move => TouchAction::Move,
        MotionAction::Cancel => TouchAction::Cancel,
        MotionAction::PointerDown => TouchAction::PointerDown,
        MotionAction::PointerUp => TouchAction::PointerUp,
        _ => TouchAction::Other,
    }
}

#[cfg(target_os = "android")]
impl InputEvent for AndroidInput<'_, '_> {
    fn event_type(&self) -> InputEventType {
        match self.event {
            NdkInputEvent::MotionEvent(_) => InputEventType::Motion,
            NdkInputEvent::KeyEvent(_) => InputEventType::Key,
            _ => InputEventType::Other,
        }
    }

    fn source(&self) -> InputSource {
        match self.event {
            NdkInputEvent::MotionEvent(motion) => convert_source(motion.source()),
            NdkInputEvent::KeyEvent(key) => convert_source(key.source()),
            _ => InputSource::Unknown,
        }
    }

    fn action(&self) -> TouchAction {
        match self.event {
            NdkInputEvent::MotionEvent(motion) => convert_action(motion.action()),
            _ => TouchAction::Other,
        }
    }

    fn pointer_count(&self) -> usize {
        match self.event {
            NdkInputEvent::MotionEvent(motion) => motion.pointer_count(),
            _ => 0,
        }
    }

    fn action_index(&self) -> usize {
        match self.event {
            NdkInputEvent::MotionEvent(motion) => motion.pointer_index(),
            _ => 0,
        }
    }

    fn pointer(&self, index: usize) -> Option<TouchPointer> {
        let NdkInputEvent::MotionEvent(motion) = self.event else {
            return None;
        };
        if index >= motion.pointer_count() {
            return None;
        }

        let p = motion.pointer_at_index(index);
        Some(TouchPointer {
            id: p.pointer_id(),
            x: p.x(),
            y: p.y(),
            pressure: p.pressure(),
            size: p.size(),
        })
    }
}
