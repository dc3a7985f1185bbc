//! Router configuration
//!
//! Configuration can be built in code or read from a `lifeline.toml` file:
//!
//! ```toml
//! sensor_source_id = 3
//! accelerometer = true
//! accelerometer_interval_us = 20000
//! sensor_batch = 8
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Poller identifier of the first user-defined source in the native app glue
pub const LOOPER_ID_USER: i32 = 3;

/// Configuration of a [`crate::LifecycleRouter`]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouterConfig {
    /// Poller identifier the sensor event queue is registered under
    #[serde(default = "default_sensor_source_id")]
    pub sensor_source_id: i32,
    /// Subscribe to the default accelerometer while active
    #[serde(default = "default_accelerometer")]
    pub accelerometer: bool,
    /// Accelerometer sampling interval in microseconds (unset: the sensor's minimum delay)
    #[serde(default)]
    pub accelerometer_interval_us: Option<u64>,
    /// Samples fetched per sensor queue read
    #[serde(default = "default_sensor_batch")]
    pub sensor_batch: usize,
}

fn default_sensor_source_id() -> i32 {
    LOOPER_ID_USER
}

fn default_accelerometer() -> bool {
    true
}

fn default_sensor_batch() -> usize {
    1
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            sensor_source_id: default_sensor_source_id(),
            accelerometer: default_accelerometer(),
            accelerometer_interval_us: None,
            sensor_batch: default_sensor_batch(),
        }
    }
}

impl RouterConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the poller identifier for sensor data
    pub fn with_sensor_source_id(mut self, id: i32) -> Self {
        self.sensor_source_id = id;
        self
    }

    /// Enable or disable the accelerometer subscription
    pub fn with_accelerometer(mut self, enabled: bool) -> Self {
        self.accelerometer = enabled;
        self
    }

    /// Sample the accelerometer at a fixed interval instead of its minimum delay
    pub fn with_accelerometer_interval(mut self, interval: Duration) -> Self {
        let micros = u64::try_from(interval.as_micros()).unwrap_or(u64::MAX);
        self.accelerometer_interval_us = Some(micros);
        self
    }

    /// Set how many samples are fetched per queue read
    pub fn with_sensor_batch(mut self, batch: usize) -> Self {
        self.sensor_batch = batch;
        self
    }

    /// Configured accelerometer interval, if any
    pub fn accelerometer_interval(&self) -> Option<Duration> {
        self.accelerometer_interval_us.map(Duration::from_micros)
    }

    /// Samples per queue read, at least one
    pub fn batch_size(&self) -> usize {
        self.sensor_batch.max(1)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize router config")
    }
}
