//! Input event types for touch and motion input
//!
//! The router only needs an event's type and source to decide where it goes.
//! Handlers that accept a touch event read the rest through the motion
//! accessors on [`InputEvent`].

/// Broad category of an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEventType {
    /// Key press or release
    Key,
    /// Pointer motion (touch, mouse, stylus, ...)
    Motion,
    /// Anything else the host reports
    Other,
}

/// Device class an input event came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Touchscreen
    Touchscreen,
    /// Mouse or touchpad pointer
    Mouse,
    /// Keyboard
    Keyboard,
    /// Trackball
    Trackball,
    /// Joystick or gamepad stick
    Joystick,
    /// Stylus
    Stylus,
    /// Unknown source
    Unknown,
}

/// Motion action of a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// First pointer went down
    Down,
    /// Last pointer went up
    Up,
    /// One or more pointers moved
    Move,
    /// The gesture was cancelled by the system
    Cancel,
    /// An additional pointer went down
    PointerDown,
    /// A non-primary pointer went up
    PointerUp,
    /// Hover, scroll and other actions
    Other,
}

/// Touch pointer state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPointer {
    /// Pointer ID (for multi-touch)
    pub id: i32,
    /// X coordinate in window space
    pub x: f32,
    /// Y coordinate in window space
    pub y: f32,
    /// Pressure (0.0 - 1.0)
    pub pressure: f32,
    /// Touch size
    pub size: f32,
}

/// A host input event as seen by the router and input handlers
///
/// Hosts implement this either directly over their native event (borrowed for
/// the duration of the dispatch) or by decoding into [`MotionInput`].
pub trait InputEvent {
    /// Event category
    fn event_type(&self) -> InputEventType;

    /// Device class that produced the event
    fn source(&self) -> InputSource;

    /// Motion action, [`TouchAction::Other`] for non-motion events
    fn action(&self) -> TouchAction {
        TouchAction::Other
    }

    /// Number of pointers in a motion event
    fn pointer_count(&self) -> usize {
        0
    }

    /// Index of the pointer that changed for `PointerDown` / `PointerUp`
    fn action_index(&self) -> usize {
        0
    }

    /// Pointer at `index`, if there is one
    fn pointer(&self, index: usize) -> Option<TouchPointer> {
        let _ = index;
        None
    }

    /// All pointers of a motion event
    fn pointers(&self) -> Vec<TouchPointer> {
        (0..self.pointer_count())
            .filter_map(|i| self.pointer(i))
            .collect()
    }

    /// Whether the router forwards this event to [`crate::InputHandler::on_touch_event`]
    fn is_touch(&self) -> bool {
        self.event_type() == InputEventType::Motion && self.source() == InputSource::Touchscreen
    }
}

/// Owned snapshot of an input event
#[derive(Clone, Debug, PartialEq)]
pub struct MotionInput {
    /// Event category
    pub event_type: InputEventType,
    /// Device class
    pub source: InputSource,
    /// Motion action
    pub action: TouchAction,
    /// Index of the pointer that changed
    pub action_index: usize,
    /// Pointers, in host order
    pub pointers: Vec<TouchPointer>,
}

impl MotionInput {
    /// A touchscreen motion event with the given pointers
    pub fn touch(action: TouchAction, pointers: Vec<TouchPointer>) -> Self {
        Self {
            event_type: InputEventType::Motion,
            source: InputSource::Touchscreen,
            action,
            action_index: 0,
            pointers,
        }
    }

    /// A motion event from a non-touch source
    pub fn motion(source: InputSource, action: TouchAction) -> Self {
        Self {
            event_type: InputEventType::Motion,
            source,
            action,
            action_index: 0,
            pointers: Vec::new(),
        }
    }

    /// A key event
    pub fn key(source: InputSource) -> Self {
        Self {
            event_type: InputEventType::Key,
            source,
            action: TouchAction::Other,
            action_index: 0,
            pointers: Vec::new(),
        }
    }

    /// Copy any [`InputEvent`] into an owned snapshot
    pub fn capture(event: &dyn InputEvent) -> Self {
        Self {
            event_type: event.event_type(),
            source: event.source(),
            action: event.action(),
            action_index: event.action_index(),
            pointers: event.pointers(),
        }
    }

    /// Set the index of the pointer that changed
    pub fn with_action_index(mut self, index: usize) -> Self {
        self.action_index = index;
        self
    }
}

impl InputEvent for MotionInput {
    fn event_type(&self) -> InputEventType {
        self.event_type
    }

    fn source(&self) -> InputSource {
        self.source
    }

    fn action(&self) -> TouchAction {
        self.action
    }

    fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    fn action_index(&self) -> usize {
        self.action_index
    }

    fn pointer(&self, index: usize) -> Option<TouchPointer> {
        self.pointers.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(id: i32, x: f32, y: f32) -> TouchPointer {
        TouchPointer {
            id,
            x,
            y,
            pressure: 1.0,
            size: 0.1,
        }
    }

    #[test]
    fn test_only_touchscreen_motion_is_touch() {
        assert!(MotionInput::touch(TouchAction::Down, vec![]).is_touch());
        assert!(!MotionInput::motion(InputSource::Mouse, TouchAction::Move).is_touch());
        assert!(!MotionInput::key(InputSource::Touchscreen).is_touch());
    }

    #[test]
    fn test_capture_copies_pointers() {
        let event = MotionInput::touch(
            TouchAction::PointerDown,
            vec![pointer(0, 1.0, 2.0), pointer(1, 3.0, 4.0)],
        )
        .with_action_index(1);

        let copy = MotionInput::capture(&event);
        assert_eq!(copy, event);
        assert_eq!(copy.pointer(copy.action_index()).map(|p| p.id), Some(1));
        assert_eq!(copy.pointer(5), None);
    }
}
