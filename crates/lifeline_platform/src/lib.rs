//! Lifeline Platform Abstraction Layer
//!
//! This crate provides the collaborator traits and value types the lifecycle
//! router is written against. Platform bindings implement them; applications
//! implement the handler traits.
//!
//! # Architecture
//!
//! - [`Host`] / [`HostContext`] - the host's poll primitive and application context
//! - [`Dispatcher`] - what the host delivers polled events to
//! - [`SensorSubsystem`] - sensor manager, event queues and sensors
//! - [`ActivityHandler`] / [`InputHandler`] - application callbacks
//!
//! # Platform Implementations
//!
//! - `lifeline_platform_android` - Android using android-activity and the NDK
//!
//! # Example
//!
//! ```ignore
//! use lifeline_platform::prelude::*;
//!
//! struct Game;
//!
//! impl ActivityHandler for Game {
//!     fn on_active(&mut self) -> HandlerResult {
//!         Ok(())
//!     }
//!
//!     fn on_deactivate(&mut self) {}
//!
//!     fn on_step(&mut self) -> HandlerResult {
//!         // Render frame
//!         Ok(())
//!     }
//! }
//! ```

mod command;
mod error;
mod handler;
mod host;
mod input;
mod sensor;

// Re-export all public types
pub use command::Command;
pub use error::{PlatformError, Result};
pub use handler::{ActivityHandler, HandlerError, HandlerResult, InputHandler};
pub use host::{Dispatcher, Host, HostContext, PollTimeout, Polled, SavedState};
pub use input::{
    InputEvent, InputEventType, InputSource, MotionInput, TouchAction, TouchPointer,
};
pub use sensor::{NoSensors, SensorKind, SensorPollSource, SensorSample, SensorSubsystem};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::command::Command;
    pub use crate::error::{PlatformError, Result};
    pub use crate::handler::{ActivityHandler, HandlerError, HandlerResult, InputHandler};
    pub use crate::host::{Dispatcher, Host, HostContext, PollTimeout, Polled, SavedState};
    pub use crate::input::{
        InputEvent, InputEventType, InputSource, MotionInput, TouchAction, TouchPointer,
    };
    pub use crate::sensor::{
        NoSensors, SensorKind, SensorPollSource, SensorSample, SensorSubsystem,
    };
}
