pub mod audio_format;
pub mod call_recording;
pub mod config;
pub mod error;
pub mod state;
