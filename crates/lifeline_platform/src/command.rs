//! Lifecycle commands delivered by the host
//!
//! Codes follow the native app glue numbering so bindings that receive raw
//! integers can convert with [`Command::from_raw`].

/// A host-delivered notification of an application state transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// The input queue attached to the activity changed
    InputChanged,
    /// A new window surface is ready for use
    InitWindow,
    /// The window surface is about to be destroyed
    TermWindow,
    /// The window surface was resized
    WindowResized,
    /// The window needs to be redrawn
    WindowRedrawNeeded,
    /// The visible content area changed
    ContentRectChanged,
    /// The activity gained input focus
    GainedFocus,
    /// The activity lost input focus
    LostFocus,
    /// The device configuration changed
    ConfigChanged,
    /// The system is running low on memory
    LowMemory,
    /// The activity was started
    Start,
    /// The activity was resumed
    Resume,
    /// The host wants the application to save its state
    SaveState,
    /// The activity was paused
    Pause,
    /// The activity was stopped
    Stop,
    /// The activity is being destroyed
    Destroy,
    /// A code this crate does not know about
    Unknown(i32),
}

impl Command {
    /// Convert a raw command code
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Command::InputChanged,
            1 => Command::InitWindow,
            2 => Command::TermWindow,
            3 => Command::WindowResized,
            4 => Command::WindowRedrawNeeded,
            5 => Command::ContentRectChanged,
            6 => Command::GainedFocus,
            7 => Command::LostFocus,
            8 => Command::ConfigChanged,
            9 => Command::LowMemory,
            10 => Command::Start,
            11 => Command::Resume,
            12 => Command::SaveState,
            13 => Command::Pause,
            14 => Command::Stop,
            15 => Command::Destroy,
            other => Command::Unknown(other),
        }
    }

    /// The raw command code
    pub fn code(self) -> i32 {
        match self {
            Command::InputChanged => 0,
            Command::InitWindow => 1,
            Command::TermWindow => 2,
            Command::WindowResized => 3,
            Command::WindowRedrawNeeded => 4,
            Command::ContentRectChanged => 5,
            Command::GainedFocus => 6,
            Command::LostFocus => 7,
            Command::ConfigChanged => 8,
            Command::LowMemory => 9,
            Command::Start => 10,
            Command::Resume => 11,
            Command::SaveState => 12,
            Command::Pause => 13,
            Command::Stop => 14,
            Command::Destroy => 15,
            Command::Unknown(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_codes_convert_both_ways() {
        for code in -2..20 {
            assert_eq!(Command::from_raw(code).code(), code);
        }
    }

    #[test]
    fn test_unknown_codes_are_preserved() {
        assert_eq!(Command::from_raw(42), Command::Unknown(42));
        assert_eq!(Command::from_raw(6), Command::GainedFocus);
        assert_eq!(Command::from_raw(15), Command::Destroy);
    }
}
