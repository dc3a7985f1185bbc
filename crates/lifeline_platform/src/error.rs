//! Platform error types

use thiserror::Error;

/// Errors reported by host collaborators
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The host has no sensor manager
    #[error("Sensor subsystem unavailable: {0}")]
    SensorUnavailable(String),

    /// Creating or destroying a sensor event queue failed
    #[error("Sensor event queue error: {0}")]
    EventQueue(String),

    /// Enabling, disabling, or configuring a sensor failed
    #[error("Sensor error: {0}")]
    Sensor(String),

    /// A call into the Java side of the activity failed
    #[error("JNI error: {0}")]
    Jni(String),

    /// Platform not supported on this OS
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
