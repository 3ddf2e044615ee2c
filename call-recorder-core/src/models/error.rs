use thiserror::Error;

/// Failures reported by a capture device.
///
/// Devices distinguish misuse of their state machine, file/stream I/O
/// problems, and driver-level runtime faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("illegal device state: {0}")]
    IllegalState(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("runtime failure: {0}")]
    Runtime(String),
}

impl DeviceError {
    /// Signature drivers use when the hardware refuses to begin capture.
    pub const START_FAILED: &'static str = "start failed";

    /// Whether this is the expected "start failed" refusal rather than
    /// a driver bug.
    pub fn is_start_failure(&self) -> bool {
        matches!(self, Self::Runtime(message) if message.contains(Self::START_FAILED))
    }
}

impl From<std::io::Error> for DeviceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Outcome of a single attempt to bring a capture device up.
///
/// Only `UnrecoverableFault` escapes the session as an error; every other
/// non-`Started` outcome is reported to callers as a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    ConfigurationRejected(DeviceError),
    PrepareFailed(DeviceError),
    StartRefused(DeviceError),
    UnrecoverableFault(DeviceError),
}

impl StartOutcome {
    /// Sort an error raised while setting the output target, preparing or
    /// starting the device.
    pub fn classify(err: DeviceError) -> Self {
        match err {
            DeviceError::IllegalState(_) | DeviceError::Io(_) => Self::PrepareFailed(err),
            DeviceError::Runtime(_) if err.is_start_failure() => Self::StartRefused(err),
            DeviceError::Runtime(_) => Self::UnrecoverableFault(err),
        }
    }
}

/// Errors surfaced by the recorder crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("unrecoverable capture device fault: {0}")]
    DeviceFault(DeviceError),

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("settings error: {0}")]
    SettingsError(String),
}
