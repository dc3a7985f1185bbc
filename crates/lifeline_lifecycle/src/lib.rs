//! Lifeline Lifecycle Router
//!
//! Adapts a host-controlled activity lifecycle (window creation and
//! destruction, focus changes, sensor delivery, input events) into callbacks
//! on application handlers.
//!
//! # Example
//!
//! ```ignore
//! use lifeline_lifecycle::prelude::*;
//!
//! fn main_loop<H: Host>(host: &mut H, game: &mut Game, controls: &mut Controls) {
//!     let mut router = LifecycleRouter::without_sensors(game, controls);
//!
//!     // Blocks until the host delivers Destroy
//!     router.run(host);
//! }
//! ```
//!
//! The router is active while a window exists and the activity has focus.
//! While active it polls the host without blocking and calls
//! [`ActivityHandler::on_step`](lifeline_platform::ActivityHandler::on_step)
//! once per idle cycle; while inactive it blocks in the host's poll.

mod config;
mod error;
mod router;
mod sensors;


pub use config::{RouterConfig, LOOPER_ID_USER};
pub use error::ActivationError;
pub use router::LifecycleRouter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{RouterConfig, LOOPER_ID_USER};
    pub use crate::error::ActivationError;
    pub use crate::router::LifecycleRouter;
    pub use lifeline_platform::prelude::*;
}
