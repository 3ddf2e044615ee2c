use crate::models::audio_format::AudioFormat;

/// Source of the recorder's tunable settings.
///
/// Read at every start so that a change applies to the next recording.
pub trait RecorderPreferences: Send + Sync {
    /// Platform audio source id handed to the capture device.
    fn audio_source(&self) -> i32;

    /// Format selected by the user.
    fn audio_format(&self) -> AudioFormat;
}

/// Preferences that never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPreferences {
    pub audio_source: i32,
    pub audio_format: AudioFormat,
}

impl RecorderPreferences for FixedPreferences {
    fn audio_source(&self) -> i32 {
        self.audio_source
    }

    fn audio_format(&self) -> AudioFormat {
        self.audio_format
    }
}
