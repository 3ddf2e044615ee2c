use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use call_recorder_core::{
    CallRecording, CaptureDeviceFactory, RecorderConfig, RecorderError, RecorderPreferences,
    RecordingSession,
};

use crate::build_config::{self, BuildConfig};
use crate::preferences::SystemPreferences;
use crate::settings::SettingsStore;
use crate::system_properties::SystemProperties;

/// Operations offered to callers across the host's transport.
pub trait CallRecorderApi: Send + Sync {
    /// Start recording `phone_number`'s call. `Ok(false)` means the device
    /// refused; only an unexpected device fault is an `Err`.
    fn start_recording(
        &self,
        phone_number: &str,
        call_creation_time: DateTime<Utc>,
    ) -> Result<bool, RecorderError>;

    /// Stop and return the active recording, `None` when idle.
    fn stop_recording(&self) -> Option<CallRecording>;

    fn is_recording(&self) -> bool;

    /// Last requested recording; only current while `is_recording()`.
    fn active_recording(&self) -> Option<CallRecording>;
}

/// Where the host keeps recordings and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPaths {
    /// Storage root; recordings go to `<storage_root>/CallRecordings`.
    pub storage_root: PathBuf,
    /// `key=value` system property overrides.
    pub properties_file: PathBuf,
    /// JSON user settings.
    pub settings_file: PathBuf,
}

/// The call recorder as run by a host process.
///
/// Constructed once per process and shared through [`bind`].
pub struct CallRecorderService<F: CaptureDeviceFactory> {
    session: RecordingSession<F>,
    enabled: bool,
}

impl<F: CaptureDeviceFactory> CallRecorderService<F> {
    pub fn new(
        config: RecorderConfig,
        factory: F,
        preferences: Arc<dyn RecorderPreferences>,
    ) -> Result<Self, RecorderError> {
        log::debug!(
            "Creating CallRecorderService writing to {}",
            config.output_directory.display()
        );
        Ok(Self {
            session: RecordingSession::new(config, factory, preferences)?,
            enabled: build_config::is_enabled(),
        })
    }

    /// Build the service from the host's property and settings files.
    pub fn from_host(paths: &HostPaths, build: BuildConfig, factory: F) -> Result<Self, RecorderError> {
        let properties = Arc::new(SystemProperties::load(&paths.properties_file)?);
        let settings = Arc::new(SettingsStore::open(&paths.settings_file)?);
        let preferences = Arc::new(SystemPreferences::new(build, properties, settings));
        let mut service = Self::new(RecorderConfig::under(&paths.storage_root), factory, preferences)?;
        service.enabled = build.recording_enabled();
        Ok(service)
    }

    /// Whether callers may bind to this service.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Host teardown: finalize whatever is still recording.
    pub fn shutdown(&self) -> Option<CallRecording> {
        log::debug!("Destroying CallRecorderService");
        let finished = self.session.stop_recording();
        if let Some(ref recording) = finished {
            log::debug!(
                "Finalized {} during shutdown",
                recording.file_path().display()
            );
        }
        finished
    }
}

impl<F: CaptureDeviceFactory> CallRecorderApi for CallRecorderService<F> {
    fn start_recording(
        &self,
        phone_number: &str,
        call_creation_time: DateTime<Utc>,
    ) -> Result<bool, RecorderError> {
        self.session.start_recording(phone_number, call_creation_time)
    }

    fn stop_recording(&self) -> Option<CallRecording> {
        self.session.stop_recording()
    }

    fn is_recording(&self) -> bool {
        self.session.is_recording()
    }

    fn active_recording(&self) -> Option<CallRecording> {
        self.session.active_recording()
    }
}

/// Hand out a caller handle, or `None` when call recording is disabled.
pub fn bind<F>(service: &Arc<CallRecorderService<F>>) -> Option<Arc<dyn CallRecorderApi>>
where
    F: CaptureDeviceFactory + 'static,
{
    if !service.is_enabled() {
        log::warn!("Call recording is disabled in this build");
        return None;
    }
    let handle: Arc<dyn CallRecorderApi> = service.clone();
    Some(handle)
}
