//! Values fixed when the host is built.

use call_recorder_core::AudioFormat;

/// Platform id of the downlink + uplink voice call source.
pub const VOICE_CALL_AUDIO_SOURCE: i32 = 4;

/// Whether call recording was compiled in.
///
/// Callers check this before binding to the service; the service itself
/// assumes it is only reached when enabled.
pub fn is_enabled() -> bool {
    cfg!(feature = "call-recording")
}

/// Build-time defaults for the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Whether this host offers call recording. Defaults to [`is_enabled`];
    /// can switch recording off, never on when the feature is compiled out.
    pub call_recording_enabled: bool,

    /// Audio source used unless a system property overrides it.
    pub default_audio_source: i32,

    /// Format selector used when the user never picked one.
    pub default_audio_format: i64,
}

impl BuildConfig {
    /// The build flag combined with the compiled-in feature.
    pub fn recording_enabled(&self) -> bool {
        self.call_recording_enabled && is_enabled()
    }

    pub fn default_format(&self) -> AudioFormat {
        AudioFormat::from_preference(self.default_audio_format)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            call_recording_enabled: is_enabled(),
            default_audio_source: VOICE_CALL_AUDIO_SOURCE,
            default_audio_format: AudioFormat::AmrWb.to_preference(),
        }
    }
}
