//! JNI utilities for Android platform
//!
//! Provides helper functions for calling Activity methods via JNI.

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

#[cfg(target_os = "android")]
use jni::{objects::JObject, JNIEnv, JavaVM};

#[cfg(target_os = "android")]
use lifeline_platform::PlatformError;

#[cfg(target_os = "android")]
use tracing::debug;

/// Ask the activity to finish
///
/// Calls `Activity.finish()` via JNI. The activity is torn down
/// asynchronously; the event loop later receives pause, stop and destroy.
#[cfg(target_os = "android")]
pub fn finish_activity(app: &AndroidApp) -> Result<(), PlatformError> {
    // Get the JavaVM from the app
    let vm = unsafe { JavaVM::from_raw(app.vm_as_ptr() as *mut _) }
        .map_err(|e| PlatformError::Jni(format!("Failed to get JavaVM: {:?}", e)))?;

    // Attach to the current thread
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| PlatformError::Jni(format!("Failed to attach JNI thread: {:?}", e)))?;

    // Get the activity object
    let activity = match app.activity_as_ptr() {
        ptr if !ptr.is_null() => unsafe { JObject::from_raw(ptr as *mut _) },
        _ => return Err(PlatformError::Jni("Activity pointer is null".to_string())),
    };

    call_finish(&mut env, &activity)
        .map_err(|e| PlatformError::Jni(format!("Activity.finish() failed: {:?}", e)))?;

    debug!("Activity finish requested");
    Ok(())
}

/// Internal helper to call `activity.finish()`
#[cfg(target_os = "android")]
fn call_finish(env: &mut JNIEnv, activity: &JObject) -> Result<(), jni::errors::Error> {
    env.call_method(activity, "finish", "()V", &[])?.v()
}
