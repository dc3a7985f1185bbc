//! Error types for lifeline_lifecycle

use lifeline_platform::{HandlerError, PlatformError};
use thiserror::Error;

/// Reasons activation is abandoned
///
/// Any of these forces deactivation and a finish request.
#[derive(Error, Debug)]
pub enum ActivationError {
    /// The sensor event queue could not be created
    #[error("Sensor event queue creation failed: {0}")]
    EventQueue(#[source] PlatformError),

    /// The activity handler refused to become active
    #[error("Activity handler failed to activate: {0}")]
    Handler(#[from] HandlerError),
}
