//! Lifecycle router
//!
//! Turns host lifecycle commands, input events and sensor readiness into
//! handler callbacks, and runs the per-frame step while the application is
//! active (window present and focused).

use lifeline_platform::{
    ActivityHandler, Command, Dispatcher, Host, HostContext, InputEvent, InputEventType,
    InputHandler, InputSource, NoSensors, PollTimeout, Polled, SensorPollSource, SensorSample,
    SensorSubsystem,
};
use tracing::{debug, error, info, trace, warn};

use crate::config::RouterConfig;
use crate::error::ActivationError;
use crate::sensors::SensorSession;

/// Routes host events to an [`ActivityHandler`] and an [`InputHandler`]
///
/// Created once per activity instance. Only the active/inactive state
/// changes across pause and resume.
pub struct LifecycleRouter<A, I, S = NoSensors>
where
    S: SensorSubsystem,
{
    activity: A,
    input: I,
    sensors: S,
    session: Option<SensorSession<S>>,
    samples: Vec<SensorSample>,
    enabled: bool,
    quit_requested: bool,
    config: RouterConfig,
}

impl<A, I> LifecycleRouter<A, I, NoSensors>
where
    A: ActivityHandler,
    I: InputHandler,
{
    /// Create a router for a host without sensors
    pub fn without_sensors(activity: A, input: I) -> Self {
        Self::new(activity, input, NoSensors)
    }
}

impl<A, I, S> LifecycleRouter<A, I, S>
where
    A: ActivityHandler,
    I: InputHandler,
    S: SensorSubsystem,
{
    /// Create a router with the default configuration
    pub fn new(activity: A, input: I, sensors: S) -> Self {
        Self::with_config(activity, input, sensors, RouterConfig::default())
    }

    /// Create a router with the given configuration
    pub fn with_config(activity: A, input: I, sensors: S, config: RouterConfig) -> Self {
        Self {
            activity,
            input,
            sensors,
            session: None,
            samples: Vec::with_capacity(config.batch_size()),
            enabled: false,
            quit_requested: false,
            config,
        }
    }

    /// Run the event loop until the host delivers destruction
    ///
    /// Polls without blocking while active so [`ActivityHandler::on_step`]
    /// runs once per idle cycle, and blocks on the host while inactive. A
    /// failed step requests a finish; the loop keeps dispatching until the
    /// host's destroy arrives.
    pub fn run<H: Host>(&mut self, host: &mut H) {
        info!("Starting event loop");

        loop {
            loop {
                let timeout = if self.enabled {
                    PollTimeout::Immediate
                } else {
                    PollTimeout::Forever
                };

                match host.poll(timeout, self) {
                    Polled::Event => {
                        if host.destroy_requested() {
                            info!("Exiting event loop");
                            return;
                        }
                    }
                    Polled::Timeout => break,
                }
            }

            if self.enabled && !self.quit_requested {
                if let Err(e) = self.activity.on_step() {
                    error!("Step failed, finishing activity: {}", e);
                    self.quit_requested = true;
                    host.request_finish();
                }
            }
        }
    }

    /// Enter the active state
    ///
    /// No-op when already active or when the host has no window. Sensor
    /// queue creation failure or an [`ActivityHandler::on_active`] error
    /// deactivates again and asks the host to finish.
    pub fn activate(&mut self, host: &mut dyn HostContext) {
        if self.enabled || !host.has_window() {
            return;
        }

        if let Err(e) = self.try_activate() {
            error!("Activation failed: {}", e);
            self.quit_requested = true;
            self.deactivate();
            host.request_finish();
        }
    }

    fn try_activate(&mut self) -> Result<(), ActivationError> {
        let source = SensorPollSource::new(self.config.sensor_source_id);
        self.session =
            SensorSession::open(&mut self.sensors, &source).map_err(ActivationError::EventQueue)?;

        if self.config.accelerometer {
            match self.session.as_mut() {
                Some(session) => session
                    .enable_accelerometer(&mut self.sensors, self.config.accelerometer_interval()),
                None => warn!("No sensor manager, accelerometer unavailable"),
            }
        }

        self.quit_requested = false;
        self.enabled = true;
        info!("Activated");

        self.activity.on_active()?;
        Ok(())
    }

    /// Leave the active state
    ///
    /// No-op when inactive. Sensors are released before
    /// [`ActivityHandler::on_deactivate`] is called.
    pub fn deactivate(&mut self) {
        if !self.enabled {
            return;
        }

        if let Some(session) = self.session.take() {
            session.close(&mut self.sensors);
        }
        self.activity.on_deactivate();
        self.enabled = false;
        info!("Deactivated");
    }

    /// Whether window and focus are both present and stepping is on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a finish has been requested since the last activation
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Whether a sensor event queue is live
    pub fn has_sensor_queue(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the accelerometer subscription is live
    pub fn accelerometer_active(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(SensorSession::accelerometer_active)
    }

    /// The router configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The activity handler
    pub fn activity(&self) -> &A {
        &self.activity
    }

    /// The activity handler, mutably
    pub fn activity_mut(&mut self) -> &mut A {
        &mut self.activity
    }

    /// The input handler
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The input handler, mutably
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The sensor subsystem
    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    /// The sensor subsystem, mutably
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// Release sensors and return the handlers and sensor subsystem
    pub fn into_parts(mut self) -> (A, I, S) {
        if let Some(session) = self.session.take() {
            session.close(&mut self.sensors);
        }
        (self.activity, self.input, self.sensors)
    }
}

impl<A, I, S> Dispatcher for LifecycleRouter<A, I, S>
where
    A: ActivityHandler,
    I: InputHandler,
    S: SensorSubsystem,
{
    fn process_app_event(&mut self, host: &mut dyn HostContext, command: Command) {
        debug!("Lifecycle command: {:?}", command);

        match command {
            Command::ConfigChanged => self.activity.on_configuration_changed(),
            Command::InitWindow => self.activity.on_create_window(),
            Command::Destroy => self.activity.on_destroy(),
            Command::GainedFocus => {
                self.activate(host);
                self.activity.on_gain_focus();
            }
            Command::LostFocus => {
                self.activity.on_lost_focus();
                self.deactivate();
            }
            Command::LowMemory => {
                warn!("Low memory warning");
                self.activity.on_low_memory();
            }
            Command::Pause => {
                self.activity.on_pause();
                self.deactivate();
            }
            Command::Resume => self.activity.on_resume(),
            Command::SaveState => self.activity.on_save_state(host.saved_state()),
            Command::Start => self.activity.on_start(),
            Command::Stop => self.activity.on_stop(),
            Command::TermWindow => {
                self.activity.on_destroy_window();
                self.deactivate();
            }
            other => trace!("Ignoring lifecycle command {:?}", other),
        }
    }

    fn process_input_event(
        &mut self,
        _host: &mut dyn HostContext,
        event: &dyn InputEvent,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        match (event.event_type(), event.source()) {
            (InputEventType::Motion, InputSource::Touchscreen) => self.input.on_touch_event(event),
            (event_type, source) => {
                trace!("Ignoring {:?} input from {:?}", event_type, source);
                false
            }
        }
    }

    fn process_event_sensor(&mut self, _host: &mut dyn HostContext) {
        if !self.enabled {
            return;
        }

        let Some(session) = self.session.as_ref() else {
            return;
        };
        let input = &mut self.input;
        session.drain(
            &mut self.sensors,
            &mut self.samples,
            self.config.batch_size(),
            |sample| input.on_accelerometer_event(sample),
        );
    }
}
