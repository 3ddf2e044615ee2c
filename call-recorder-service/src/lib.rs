//! # call-recorder-service
//!
//! Host side of the call recorder.
//!
//! Provides:
//! - `CallRecorderService` — the per-process recorder behind `CallRecorderApi`
//! - `bind` / `is_enabled` — the build-time gate callers check before use
//! - `SystemPreferences` — audio source and format from property overrides,
//!   user settings and build defaults
//! - `SystemProperties`, `SettingsStore` — the persisted configuration layers,
//!   re-read when their files change
//!
//! ## Usage
//! ```ignore
//! use call_recorder_service::{bind, BuildConfig, CallRecorderService, HostPaths};
//!
//! let service = Arc::new(CallRecorderService::from_host(&paths, BuildConfig::default(), device_factory)?);
//! if let Some(api) = bind(&service) {
//!     api.start_recording("5551234", call_started_at)?;
//! }
//! ```

pub mod build_config;
mod file_stamp;
pub mod preferences;
pub mod service;
pub mod settings;
pub mod system_properties;

pub use build_config::{is_enabled, BuildConfig};
pub use preferences::SystemPreferences;
pub use service::{bind, CallRecorderApi, CallRecorderService, HostPaths};
pub use settings::SettingsStore;
pub use system_properties::SystemProperties;
