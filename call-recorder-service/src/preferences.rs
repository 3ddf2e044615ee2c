use std::sync::Arc;

use call_recorder_core::{AudioFormat, RecorderPreferences};

use crate::build_config::BuildConfig;
use crate::settings::{SettingsStore, CALL_RECORDING_FORMAT};
use crate::system_properties::{SystemProperties, AUDIO_SOURCE_PROPERTY};

/// Recorder preferences resolved from the host's configuration layers.
///
/// - audio source: `persist.call_recording.src` property, else build default
/// - audio format: `call_recording_format` user setting, else build default
///
/// Both files are checked for changes on every read, so an edit made while
/// the host runs applies to the next recording.
pub struct SystemPreferences {
    build: BuildConfig,
    properties: Arc<SystemProperties>,
    settings: Arc<SettingsStore>,
}

impl SystemPreferences {
    pub fn new(
        build: BuildConfig,
        properties: Arc<SystemProperties>,
        settings: Arc<SettingsStore>,
    ) -> Self {
        Self {
            build,
            properties,
            settings,
        }
    }

    pub fn settings(&self) -> &Arc<SettingsStore> {
        &self.settings
    }
}

impl RecorderPreferences for SystemPreferences {
    fn audio_source(&self) -> i32 {
        if let Err(e) = self.properties.refresh() {
            log::warn!("Keeping previous system properties: {}", e);
        }
        self.properties
            .get_int(AUDIO_SOURCE_PROPERTY, self.build.default_audio_source)
    }

    fn audio_format(&self) -> AudioFormat {
        if let Err(e) = self.settings.refresh() {
            log::warn!("Keeping previous settings: {}", e);
        }
        let value = self
            .settings
            .get_int(CALL_RECORDING_FORMAT, self.build.default_audio_format);
        AudioFormat::from_preference(value)
    }
}
