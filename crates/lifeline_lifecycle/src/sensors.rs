//! Sensor queue bookkeeping for the active state

use std::time::Duration;

use lifeline_platform::{
    PlatformError, SensorKind, SensorPollSource, SensorSample, SensorSubsystem,
};
use tracing::{debug, error, warn};

/// Sensor resources held while the router is active
pub(crate) struct SensorSession<S: SensorSubsystem> {
    manager: S::Manager,
    queue: S::Queue,
    accelerometer: Option<S::Sensor>,
}

impl<S: SensorSubsystem> SensorSession<S> {
    /// Create an event queue on the host's sensor manager
    ///
    /// Returns `Ok(None)` when the host has no sensor manager.
    pub(crate) fn open(
        sensors: &mut S,
        source: &SensorPollSource,
    ) -> Result<Option<Self>, PlatformError> {
        let Some(manager) = sensors.manager() else {
            debug!("No sensor manager, running without sensors");
            return Ok(None);
        };

        let queue = sensors.create_event_queue(&manager, source)?;
        debug!("Sensor event queue created (source id {})", source.id);

        Ok(Some(Self {
            manager,
            queue,
            accelerometer: None,
        }))
    }

    /// Whether the accelerometer is enabled on the queue
    pub(crate) fn accelerometer_active(&self) -> bool {
        self.accelerometer.is_some()
    }

    /// Enable the default accelerometer
    ///
    /// Failures leave the session without an accelerometer.
    pub(crate) fn enable_accelerometer(&mut self, sensors: &mut S, interval: Option<Duration>) {
        let Some(sensor) = sensors.default_sensor(&self.manager, SensorKind::Accelerometer)
        else {
            error!("Cannot activate accelerometer: no accelerometer sensor found");
            return;
        };

        if let Err(e) = sensors.enable_sensor(&self.queue, &sensor) {
            error!("Error while activating accelerometer: {}", e);
            return;
        }

        let interval = interval.unwrap_or_else(|| sensors.min_delay(&sensor));
        if let Err(e) = sensors.set_event_rate(&self.queue, &sensor, interval) {
            error!("Could not set accelerometer rate: {}", e);
        }

        debug!("Accelerometer enabled at {:?}", interval);
        self.accelerometer = Some(sensor);
    }

    /// Disable the accelerometer if it is enabled
    pub(crate) fn disable_accelerometer(&mut self, sensors: &mut S) {
        if let Some(sensor) = self.accelerometer.take() {
            if let Err(e) = sensors.disable_sensor(&self.queue, &sensor) {
                error!("Error while deactivating accelerometer: {}", e);
            }
        }
    }

    /// Read every queued sample, passing accelerometer samples to `on_sample`
    pub(crate) fn drain(
        &self,
        sensors: &mut S,
        buffer: &mut Vec<SensorSample>,
        batch: usize,
        mut on_sample: impl FnMut(&SensorSample),
    ) {
        loop {
            buffer.clear();
            let read = match sensors.get_events(&self.queue, buffer, batch) {
                Ok(read) => read,
                Err(e) => {
                    warn!("Failed to read sensor events: {}", e);
                    break;
                }
            };
            if read == 0 {
                break;
            }

            for sample in buffer.iter() {
                if sample.kind == SensorKind::Accelerometer {
                    on_sample(sample);
                }
            }
        }
        buffer.clear();
    }

    /// Disable sensors and destroy the queue
    pub(crate) fn close(mut self, sensors: &mut S) {
        self.disable_accelerometer(sensors);
        sensors.destroy_event_queue(&self.manager, self.queue);
        debug!("Sensor event queue destroyed");
    }
}
