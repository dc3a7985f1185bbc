//! NDK sensor subsystem
//!
//! Implements [`SensorSubsystem`](lifeline_platform::SensorSubsystem) over the
//! `ASensorManager` C API. Event queues are registered on the looper of the
//! thread that creates them, which must be the thread running the event loop.

#[cfg(target_os = "android")]
use std::ptr::NonNull;
#[cfg(target_os = "android")]
use std::time::Duration;

#[cfg(target_os = "android")]
use lifeline_platform::{
    PlatformError, Result, SensorKind, SensorPollSource, SensorSample, SensorSubsystem,
};

#[cfg(target_os = "android")]
use ndk::looper::ForeignLooper;

#[cfg(target_os = "android")]
use tracing::warn;

/// Upper bound on samples read per `ASensorEventQueue_getEvents` call
#[cfg(target_os = "android")]
const MAX_READ: usize = 16;

/// Sensor manager handle
#[cfg(target_os = "android")]
pub struct SensorManager(NonNull<ndk_sys::ASensorManager>);

/// Sensor event queue handle
#[cfg(target_os = "android")]
pub struct SensorQueue(NonNull<ndk_sys::ASensorEventQueue>);

/// Sensor handle
#[cfg(target_os = "android")]
#[derive(Clone, Copy)]
pub struct Sensor(NonNull<ndk_sys::ASensor>);

/// Sensor subsystem backed by the NDK sensor manager
#[cfg(target_os = "android")]
#[derive(Default)]
pub struct AndroidSensors {
    _private: (),
}

#[cfg(target_os = "android")]
impl AndroidSensors {
    /// Create the sensor subsystem
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(target_os = "android")]
impl SensorSubsystem for AndroidSensors {
    type Manager = SensorManager;
    type Queue = SensorQueue;
    type Sensor = Sensor;

    #[allow(deprecated)]
    fn manager(&mut self) -> Option<SensorManager> {
        NonNull::new(unsafe { ndk_sys::ASensorManager_getInstance() }).map(SensorManager)
    }

    fn create_event_queue(
        &mut self,
        manager: &SensorManager,
        source: &SensorPollSource,
    ) -> Result<SensorQueue> {
        let looper = ForeignLooper::for_thread().ok_or_else(|| {
            PlatformError::EventQueue("no looper on the current thread".to_string())
        })?;

        let queue = unsafe {
            ndk_sys::ASensorManager_createEventQueue(
                manager.0.as_ptr(),
                looper.ptr().as_ptr(),
                source.id,
                None,
                std::ptr::null_mut(),
            )
        };

        NonNull::new(queue).map(SensorQueue).ok_or_else(|| {
            PlatformError::EventQueue("ASensorManager_createEventQueue returned null".to_string())
        })
    }

    fn destroy_event_queue(&mut self, manager: &SensorManager, queue: SensorQueue) {
        let status =
            unsafe { ndk_sys::ASensorManager_destroyEventQueue(manager.0.as_ptr(), queue.0.as_ptr()) };
        if status < 0 {
            warn!("ASensorManager_destroyEventQueue failed: {}", status);
        }
    }

    fn default_sensor(&mut self, manager: &SensorManager, kind: SensorKind) -> Option<Sensor> {
        let sensor =
            unsafe { ndk_sys::ASensorManager_getDefaultSensor(manager.0.as_ptr(), kind.code()) };
        NonNull::new(sensor as *mut ndk_sys::ASensor).map(Sensor)
    }

    fn enable_sensor(&mut self, queue: &SensorQueue, sensor: &Sensor) -> Result<()> {
        let status =
            unsafe { ndk_sys::ASensorEventQueue_enableSensor(queue.0.as_ptr(), sensor.0.as_ptr()) };
        if status < 0 {
            return Err(PlatformError::Sensor(format!(
                "ASensorEventQueue_enableSensor failed: {}",
                status
            )));
        }
        Ok(())
    }

    fn disable_sensor(&mut self, queue: &SensorQueue, sensor: &Sensor) -> Result<()> {
        let status = unsafe {
            ndk_sys::ASensorEventQueue_disableSensor(queue.0.as_ptr(), sensor.0.as_ptr())
        };
        if status < 0 {
            return Err(PlatformError::Sensor(format!(
                "ASensorEventQueue_disableSensor failed: {}",
                status
            )));
        }
        Ok(())
    }

    fn set_event_rate(
        &mut self,
        queue: &SensorQueue,
        sensor: &Sensor,
        interval: Duration,
    ) -> Result<()> {
        let usec = i32::try_from(interval.as_micros()).unwrap_or(i32::MAX);
        let status = unsafe {
            ndk_sys::ASensorEventQueue_setEventRate(queue.0.as_ptr(), sensor.0.as_ptr(), usec)
        };
        if status < 0 {
            return Err(PlatformError::Sensor(format!(
                "ASensorEventQueue_setEventRate failed: {}",
                status
            )));
        }
        Ok(())
    }

    fn min_delay(&self, sensor: &Sensor) -> Duration {
        let usec = unsafe { ndk_sys::ASensor_getMinDelay(sensor.0.as_ptr()) };
        Duration::from_micros(usec.max(0) as u64)
    }

    fn get_events(
        &mut self,
        queue: &SensorQueue,
        out: &mut Vec<SensorSample>,
        max: usize,
    ) -> Result<usize> {
        let mut events: [ndk_sys::ASensorEvent; MAX_READ] = unsafe { std::mem::zeroed() };
        let count = max.clamp(1, MAX_READ);

        let read = unsafe {
            ndk_sys::ASensorEventQueue_getEvents(queue.0.as_ptr(), events.as_mut_ptr(), count)
        };
        if read < 0 {
            return Err(PlatformError::Sensor(format!(
                "ASensorEventQueue_getEvents failed: {}",
                read
            )));
        }

        let read = read as usize;
        out.extend(events[..read].iter().map(|event| {
            // SAFETY: every sensor event carries at least three data floats
            let data = unsafe { event.__bindgen_anon_1.__bindgen_anon_1.data };
            SensorSample::new(
                SensorKind::from_raw(event.type_),
                event.timestamp,
                [data[0], data[1], data[2]],
            )
        }));
        Ok(read)
    }
}
