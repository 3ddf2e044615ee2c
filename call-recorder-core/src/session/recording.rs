use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use parking_lot::Mutex;

use crate::models::audio_format::AudioFormat;
use crate::models::call_recording::CallRecording;
use crate::models::config::RecorderConfig;
use crate::models::error::{DeviceError, RecorderError, StartOutcome};
use crate::models::state::RecorderState;
use crate::naming::policy;
use crate::traits::capture_device::{CaptureDevice, CaptureDeviceFactory};
use crate::traits::preferences::RecorderPreferences;

/// Mutable session state, protected by one `parking_lot::Mutex`.
///
/// `device` is `Some` only while `state` is `Recording`; during a start
/// attempt the new handle lives on the stack until it is either installed
/// or released.
struct SessionInner<D> {
    state: RecorderState,
    device: Option<D>,
    active: Option<CallRecording>,
}

/// Supervises one call recording at a time.
///
/// All transitions run under a single lock, so a start racing a stop from
/// another thread observes a serialized sequence. Operations block for as
/// long as the device takes to configure, prepare and start.
///
/// Starting while a recording is active stops it first; the earlier file
/// stays on disk but is no longer tracked.
pub struct RecordingSession<F: CaptureDeviceFactory> {
    config: RecorderConfig,
    factory: F,
    preferences: Arc<dyn RecorderPreferences>,
    inner: Mutex<SessionInner<F::Device>>,
}

impl<F: CaptureDeviceFactory> RecordingSession<F> {
    pub fn new(
        config: RecorderConfig,
        factory: F,
        preferences: Arc<dyn RecorderPreferences>,
    ) -> Result<Self, RecorderError> {
        config.validate()?;
        Ok(Self {
            config,
            factory,
            preferences,
            inner: Mutex::new(SessionInner {
                state: RecorderState::Idle,
                device: None,
                active: None,
            }),
        })
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    pub fn state(&self) -> RecorderState {
        self.inner.lock().state
    }

    pub fn is_recording(&self) -> bool {
        self.state().is_recording()
    }

    /// The recording most recently requested.
    ///
    /// Not cleared by a stop or a failed start: while idle this is the last
    /// recording, so pair it with [`is_recording`](Self::is_recording).
    pub fn active_recording(&self) -> Option<CallRecording> {
        self.inner.lock().active.clone()
    }

    /// Start recording a call to a new file.
    ///
    /// Returns `Ok(true)` once the device is capturing and `Ok(false)` when
    /// the device refused configuration, preparation or start. A device
    /// fault that is not an expected refusal is returned as
    /// [`RecorderError::DeviceFault`]. In every failing case the device has
    /// been reset and released and the session is idle.
    pub fn start_recording(
        &self,
        phone_number: &str,
        call_creation_time: DateTime<Utc>,
    ) -> Result<bool, RecorderError> {
        let mut inner = self.inner.lock();

        if inner.device.is_some() {
            log::debug!("Start called with recording in progress, stopping current recording");
            Self::stop_internal(&mut inner);
        }

        let format = self.preferences.audio_format();
        let now = Local::now();
        let file_name = policy::generate_filename(phone_number, &now, format);
        let recording = CallRecording::new(
            phone_number,
            call_creation_time,
            policy::resolve_output_path(&self.config.output_directory, &file_name),
            now.with_timezone(&Utc),
        );
        let file_path = recording.file_path().to_path_buf();
        inner.active = Some(recording);

        match self.start_internal(&mut inner, &file_path, format) {
            StartOutcome::Started => Ok(true),
            StartOutcome::UnrecoverableFault(err) => {
                log::error!(
                    "Capture device fault while starting {}: {}",
                    file_path.display(),
                    err
                );
                Err(RecorderError::DeviceFault(err))
            }
            outcome => {
                log::warn!(
                    "Could not start recording for file {}: {:?}",
                    file_path.display(),
                    outcome
                );
                Ok(false)
            }
        }
    }

    /// Stop the active recording and return it.
    ///
    /// Returns `None` without side effects when idle, so stopping twice is
    /// harmless.
    pub fn stop_recording(&self) -> Option<CallRecording> {
        let mut inner = self.inner.lock();
        if !inner.state.is_recording() {
            return None;
        }
        Self::stop_internal(&mut inner);
        inner.active.clone()
    }

    // --- Internal helpers ---

    fn start_internal(
        &self,
        inner: &mut SessionInner<F::Device>,
        file_path: &Path,
        format: AudioFormat,
    ) -> StartOutcome {
        log::debug!("Starting recording");

        if let Some(parent) = file_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Could not create {}: {}", parent.display(), e);
                return StartOutcome::PrepareFailed(DeviceError::from(e));
            }
        }

        let mut device = self.factory.create_device();

        let source = self.preferences.audio_source();
        let profile = format.profile();
        log::debug!("Creating capture device with audio source {}", source);
        if let Err(e) = device.configure(source, profile.container, profile.encoder) {
            log::warn!("Error initializing capture device: {}", e);
            Self::release_device(&mut device);
            return StartOutcome::ConfigurationRejected(e);
        }

        log::debug!("Writing output to file {}", file_path.display());
        let started = device
            .set_output_file(file_path)
            .and_then(|()| device.prepare())
            .and_then(|()| device.start());

        match started {
            Ok(()) => {
                inner.device = Some(device);
                inner.state = RecorderState::Recording;
                StartOutcome::Started
            }
            Err(e) => {
                Self::release_device(&mut device);
                StartOutcome::classify(e)
            }
        }
    }

    /// Finalize and drop the held device. Faults are logged, never returned:
    /// the session always ends up idle.
    fn stop_internal(inner: &mut SessionInner<F::Device>) {
        log::debug!("Stopping current recording");
        let Some(mut device) = inner.device.take() else {
            return;
        };

        if inner.state.is_recording() {
            if let Err(e) = device.stop() {
                log::error!("Exception closing capture device: {}", e);
            }
        }
        Self::release_device(&mut device);
        inner.state = RecorderState::Idle;
    }

    fn release_device(device: &mut F::Device) {
        if let Err(e) = device.reset() {
            log::error!("Failed to reset capture device: {}", e);
        }
        if let Err(e) = device.release() {
            log::error!("Failed to release capture device: {}", e);
        }
    }
}

impl<F: CaptureDeviceFactory> Drop for RecordingSession<F> {
    fn drop(&mut self) {
        let inner = self.inner.get_mut();
        if inner.device.is_some() {
            log::debug!("Session dropped while recording, finalizing");
            Self::stop_internal(inner);
        }
    }
}
