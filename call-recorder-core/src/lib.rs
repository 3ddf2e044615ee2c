//! # call-recorder-core
//!
//! Platform-agnostic core of the call recorder.
//!
//! Owns the recording session state machine and its start/stop protocol
//! against a capture device, plus the naming policy for output files.
//! Platform backends implement `CaptureDevice`; hosts supply
//! `RecorderPreferences` and wrap the session in their own transport.
//!
//! ## Architecture
//!
//! ```text
//! call-recorder-core (this crate)
//! ├── traits/   ← CaptureDevice, CaptureDeviceFactory, RecorderPreferences
//! ├── models/   ← CallRecording, RecorderState, AudioFormat, errors, config
//! ├── naming/   ← output file naming policy
//! └── session/  ← RecordingSession (start/stop supervisor)
//! ```

pub mod models;
pub mod naming;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::audio_format::{AudioEncoder, AudioFormat, FormatProfile, OutputFormat};
pub use models::call_recording::CallRecording;
pub use models::config::{RecorderConfig, RECORDINGS_DIRECTORY_NAME};
pub use models::error::{DeviceError, RecorderError, StartOutcome};
pub use models::state::RecorderState;
pub use naming::policy::{generate_filename, generate_filename_now};
pub use session::recording::RecordingSession;
pub use traits::capture_device::{CaptureDevice, CaptureDeviceFactory};
pub use traits::preferences::{FixedPreferences, RecorderPreferences};
