//! Android Activity integration
//!
//! Provides the entry points that build a [`LifecycleRouter`] over the
//! Android host and NDK sensors and run it on the `android_main` thread.

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

#[cfg(target_os = "android")]
use lifeline_lifecycle::{LifecycleRouter, RouterConfig};

#[cfg(target_os = "android")]
use lifeline_platform::{ActivityHandler, InputHandler, PlatformError};

#[cfg(target_os = "android")]
use tracing::info;

#[cfg(target_os = "android")]
use crate::host::AndroidHost;

#[cfg(target_os = "android")]
use crate::sensors::AndroidSensors;

/// Initialize Android logging
///
/// `tracing` events reach logcat through the `log` facade. The glue's
/// native-activity poller reports the sensor queue's looper ident as an
/// unknown source on every wake, so that module is silenced.
#[cfg(target_os = "android")]
pub fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("Lifeline")
            .with_filter(
                android_logger::FilterBuilder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .filter_module("android_activity", log::LevelFilter::Warn)
                    .filter_module("android_activity::native_activity", log::LevelFilter::Off)
                    .build(),
            ),
    );
}

/// Run an activity with the default router configuration
///
/// Blocks until the activity is destroyed.
#[cfg(target_os = "android")]
pub fn run_activity<A, I>(app: AndroidApp, activity: A, input: I) -> Result<(), PlatformError>
where
    A: ActivityHandler,
    I: InputHandler,
{
    run_activity_with_config(app, activity, input, RouterConfig::default())
}

/// Run an activity with the given router configuration
#[cfg(target_os = "android")]
pub fn run_activity_with_config<A, I>(
    app: AndroidApp,
    activity: A,
    input: I,
    config: RouterConfig,
) -> Result<(), PlatformError>
where
    A: ActivityHandler,
    I: InputHandler,
{
    let mut host = AndroidHost::new(app)?;
    let mut router = LifecycleRouter::with_config(activity, input, AndroidSensors::new(), config);

    router.run(&mut host);

    // Destroy can arrive while active; the queue must not outlive this android_main
    let _parts = router.into_parts();

    info!("Lifeline Android activity finished");
    Ok(())
}

/// Handler used by the default entry point: logs lifecycle and input
#[cfg(all(target_os = "android", feature = "default-activity"))]
mod demo {
    use lifeline_platform::{
        ActivityHandler, HandlerResult, InputEvent, InputHandler, SavedState, SensorSample,
    };
    use tracing::{debug, info};

    /// Frames between step log lines
    const LOG_EVERY: u64 = 600;

    #[derive(Default)]
    pub(super) struct DemoActivity {
        frames: u64,
        activations: u32,
    }

    impl ActivityHandler for DemoActivity {
        fn on_start(&mut self) {
            info!("App started");
        }

        fn on_resume(&mut self) {
            info!("App resumed");
        }

        fn on_pause(&mut self) {
            info!("App paused");
        }

        fn on_stop(&mut self) {
            info!("App stopped");
        }

        fn on_destroy(&mut self) {
            info!("App destroyed after {} frames", self.frames);
        }

        fn on_low_memory(&mut self) {
            info!("Low memory warning");
        }

        fn on_save_state(&mut self, state: &mut SavedState) {
            state.store(&self.frames.to_le_bytes());
        }

        fn on_active(&mut self) -> HandlerResult {
            self.activations += 1;
            info!("Active (activation {})", self.activations);
            Ok(())
        }

        fn on_deactivate(&mut self) {
            info!("Inactive");
        }

        fn on_step(&mut self) -> HandlerResult {
            self.frames += 1;
            if self.frames % LOG_EVERY == 0 {
                debug!("Frame {}", self.frames);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    pub(super) struct DemoInput;

    impl InputHandler for DemoInput {
        fn on_touch_event(&mut self, event: &dyn InputEvent) -> bool {
            if let Some(p) = event.pointer(event.action_index()) {
                debug!("Touch {:?} at ({:.1}, {:.1})", event.action(), p.x, p.y);
            }
            true
        }

        fn on_accelerometer_event(&mut self, sample: &SensorSample) {
            debug!(
                "Accelerometer ({:.2}, {:.2}, {:.2})",
                sample.x(),
                sample.y(),
                sample.z()
            );
        }
    }
}

/// Android main entry point
///
/// This is called by the android-activity crate when the app starts.
/// This is only enabled when the "default-activity" feature is enabled.
/// Applications should typically provide their own android_main and call
/// [`run_activity`] with their handlers instead.
#[cfg(all(target_os = "android", feature = "default-activity"))]
#[no_mangle]
pub fn android_main(app: AndroidApp) {
    init_logging();

    info!("android_main called");

    if let Err(e) = run_activity(app, demo::DemoActivity::default(), demo::DemoInput) {
        tracing::error!("Lifeline activity failed: {}", e);
    }

    info!("Lifeline Android app shutting down");
}
