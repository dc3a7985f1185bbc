//! Sensor subsystem abstraction

use std::time::Duration;

use crate::error::{PlatformError, Result};

/// Sensor type, numbered like the NDK sensor constants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Acceleration including gravity, m/s^2
    Accelerometer,
    /// Ambient magnetic field, uT
    MagneticField,
    /// Rate of rotation, rad/s
    Gyroscope,
    /// Ambient light, lux
    Light,
    /// Proximity, cm
    Proximity,
    /// Any other sensor type
    Other(i32),
}

impl SensorKind {
    /// Convert a raw sensor type
    pub fn from_raw(code: i32) -> Self {
        match code {
            1 => SensorKind::Accelerometer,
            2 => SensorKind::MagneticField,
            4 => SensorKind::Gyroscope,
            5 => SensorKind::Light,
            8 => SensorKind::Proximity,
            other => SensorKind::Other(other),
        }
    }

    /// The raw sensor type
    pub fn code(self) -> i32 {
        match self {
            SensorKind::Accelerometer => 1,
            SensorKind::MagneticField => 2,
            SensorKind::Gyroscope => 4,
            SensorKind::Light => 5,
            SensorKind::Proximity => 8,
            SensorKind::Other(code) => code,
        }
    }
}

/// One sample read from a sensor event queue
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorSample {
    /// Which sensor produced the sample
    pub kind: SensorKind,
    /// Event time in nanoseconds
    pub timestamp: i64,
    /// First three data values (x, y, z for vector sensors)
    pub values: [f32; 3],
}

impl SensorSample {
    /// Create a sample
    pub fn new(kind: SensorKind, timestamp: i64, values: [f32; 3]) -> Self {
        Self {
            kind,
            timestamp,
            values,
        }
    }

    /// X component
    pub fn x(&self) -> f32 {
        self.values[0]
    }

    /// Y component
    pub fn y(&self) -> f32 {
        self.values[1]
    }

    /// Z component
    pub fn z(&self) -> f32 {
        self.values[2]
    }
}

/// Descriptor the sensor queue is registered with on the host poller
///
/// The id is reported by the poller when the queue has data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorPollSource {
    /// Poller identifier reserved for sensor data
    pub id: i32,
}

impl SensorPollSource {
    /// Create a descriptor with the given identifier
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

/// Host sensor hardware abstraction
///
/// Implementations are bound to the polling thread's poller when they are
/// created, so queue creation only needs the source descriptor.
pub trait SensorSubsystem {
    /// Sensor manager handle
    type Manager;
    /// Event queue handle
    type Queue;
    /// Sensor handle
    type Sensor: Clone;

    /// Obtain the sensor manager, if the host has one
    fn manager(&mut self) -> Option<Self::Manager>;

    /// Create an event queue registered on the poller under `source`
    fn create_event_queue(
        &mut self,
        manager: &Self::Manager,
        source: &SensorPollSource,
    ) -> Result<Self::Queue>;

    /// Destroy an event queue
    fn destroy_event_queue(&mut self, manager: &Self::Manager, queue: Self::Queue);

    /// Default sensor of the given kind
    fn default_sensor(&mut self, manager: &Self::Manager, kind: SensorKind)
        -> Option<Self::Sensor>;

    /// Start delivering events for `sensor` on `queue`
    fn enable_sensor(&mut self, queue: &Self::Queue, sensor: &Self::Sensor) -> Result<()>;

    /// Stop delivering events for `sensor` on `queue`
    fn disable_sensor(&mut self, queue: &Self::Queue, sensor: &Self::Sensor) -> Result<()>;

    /// Set the sampling interval of `sensor` on `queue`
    fn set_event_rate(
        &mut self,
        queue: &Self::Queue,
        sensor: &Self::Sensor,
        interval: Duration,
    ) -> Result<()>;

    /// Minimum sampling interval the sensor supports
    fn min_delay(&self, sensor: &Self::Sensor) -> Duration;

    /// Append up to `max` queued samples to `out`, returning how many were read
    fn get_events(
        &mut self,
        queue: &Self::Queue,
        out: &mut Vec<SensorSample>,
        max: usize,
    ) -> Result<usize>;
}

/// Sensor subsystem for hosts without sensors
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSensors;

impl SensorSubsystem for NoSensors {
    type Manager = ();
    type Queue = ();
    type Sensor = ();

    fn manager(&mut self) -> Option<()> {
        None
    }

    fn create_event_queue(&mut self, _manager: &(), _source: &SensorPollSource) -> Result<()> {
        Err(PlatformError::SensorUnavailable(
            "no sensor subsystem".to_string(),
        ))
    }

    fn destroy_event_queue(&mut self, _manager: &(), _queue: ()) {}

    fn default_sensor(&mut self, _manager: &(), _kind: SensorKind) -> Option<()> {
        None
    }

    fn enable_sensor(&mut self, _queue: &(), _sensor: &()) -> Result<()> {
        Ok(())
    }

    fn disable_sensor(&mut self, _queue: &(), _sensor: &()) -> Result<()> {
        Ok(())
    }

    fn set_event_rate(&mut self, _queue: &(), _sensor: &(), _interval: Duration) -> Result<()> {
        Ok(())
    }

    fn min_delay(&self, _sensor: &()) -> Duration {
        Duration::ZERO
    }

    fn get_events(
        &mut self,
        _queue: &(),
        _out: &mut Vec<SensorSample>,
        _max: usize,
    ) -> Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_kind_codes() {
        assert_eq!(SensorKind::from_raw(1), SensorKind::Accelerometer);
        assert_eq!(SensorKind::from_raw(4), SensorKind::Gyroscope);
        assert_eq!(SensorKind::from_raw(99), SensorKind::Other(99));
        assert_eq!(SensorKind::Proximity.code(), 8);
    }

    #[test]
    fn test_no_sensors_has_no_manager() {
        let mut sensors = NoSensors;
        assert!(sensors.manager().is_none());
        assert!(sensors
            .create_event_queue(&(), &SensorPollSource::new(3))
            .is_err());
    }
}
