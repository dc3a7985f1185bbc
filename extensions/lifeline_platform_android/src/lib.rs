//! Lifeline Android Platform
//!
//! Android implementation of the `lifeline_platform` collaborator traits,
//! providing the native activity host, NDK sensors and touch input via
//! android-activity and the NDK.
//!
//! # Example
//!
//! ```ignore
//! use lifeline_platform_android::{init_logging, run_activity};
//!
//! #[no_mangle]
//! fn android_main(app: android_activity::AndroidApp) {
//!     init_logging();
//!
//!     // Blocks until the activity is destroyed
//!     run_activity(app, Game::default(), Controls::default()).unwrap();
//! }
//! ```
//!
//! Off-device builds compile placeholders so the workspace builds and tests
//! on the host.

pub mod activity;
pub mod host;
pub mod input;
pub mod jni_utils;
pub mod sensors;

pub use host::AndroidHost;

#[cfg(target_os = "android")]
pub use activity::{init_logging, run_activity, run_activity_with_config};

#[cfg(target_os = "android")]
pub use input::AndroidInput;

#[cfg(target_os = "android")]
pub use jni_utils::finish_activity;

#[cfg(target_os = "android")]
pub use sensors::AndroidSensors;

// Android-specific entry point
#[cfg(all(target_os = "android", feature = "default-activity"))]
pub use activity::android_main;
