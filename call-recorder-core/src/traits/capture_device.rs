use std::path::Path;

use crate::models::audio_format::{AudioEncoder, OutputFormat};
use crate::models::error::DeviceError;

/// Interface for the platform audio recorder that writes a call to disk.
///
/// A handle is single-use: it is configured, pointed at a file, prepared and
/// started once, then stopped, reset and released. The session never reuses
/// a handle after `release`.
///
/// Implemented by platform backends and by the scripted devices in tests.
pub trait CaptureDevice: Send {
    /// Select the audio source and the container/encoder pair.
    fn configure(
        &mut self,
        source_id: i32,
        container: OutputFormat,
        encoder: AudioEncoder,
    ) -> Result<(), DeviceError>;

    /// Target file the device writes to. The parent directory exists.
    fn set_output_file(&mut self, path: &Path) -> Result<(), DeviceError>;

    /// Open the output and allocate encoder resources.
    fn prepare(&mut self) -> Result<(), DeviceError>;

    /// Begin capturing. Blocks until the driver accepts or refuses.
    fn start(&mut self) -> Result<(), DeviceError>;

    /// Stop capturing and finalize the output file.
    fn stop(&mut self) -> Result<(), DeviceError>;

    /// Return the device to its unconfigured state.
    fn reset(&mut self) -> Result<(), DeviceError>;

    /// Free the underlying driver resources.
    fn release(&mut self) -> Result<(), DeviceError>;
}

/// Creates a fresh device handle for every start attempt.
pub trait CaptureDeviceFactory: Send + Sync {
    type Device: CaptureDevice;

    fn create_device(&self) -> Self::Device;
}

impl<D, F> CaptureDeviceFactory for F
where
    D: CaptureDevice,
    F: Fn() -> D + Send + Sync,
{
    type Device = D;

    fn create_device(&self) -> D {
        self()
    }
}
