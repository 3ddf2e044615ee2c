use std::path::{Path, PathBuf};

use super::error::RecorderError;

/// Name of the folder recordings are collected in.
pub const RECORDINGS_DIRECTORY_NAME: &str = "CallRecordings";

/// Configuration for a recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Absolute directory where recording files are written. Created on
    /// demand before each start.
    pub output_directory: PathBuf,
}

impl RecorderConfig {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// Recordings folder under a storage root, e.g. shared external storage.
    pub fn under(base: &Path) -> Self {
        Self::new(base.join(RECORDINGS_DIRECTORY_NAME))
    }

    pub fn validate(&self) -> Result<(), RecorderError> {
        if self.output_directory.as_os_str().is_empty() {
            return Err(RecorderError::ConfigurationFailed(
                "output directory must not be empty".into(),
            ));
        }
        if !self.output_directory.is_absolute() {
            return Err(RecorderError::ConfigurationFailed(format!(
                "output directory must be absolute: {}",
                self.output_directory.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_directory_is_rejected() {
        let err = RecorderConfig::new("recordings").validate().unwrap_err();
        assert!(matches!(err, RecorderError::ConfigurationFailed(_)));
        assert!(RecorderConfig::new("").validate().is_err());
    }

    #[test]
    fn under_appends_recordings_folder() {
        let base = std::env::temp_dir();
        let config = RecorderConfig::under(&base);
        assert_eq!(config.output_directory, base.join("CallRecordings"));
        assert!(config.validate().is_ok());
    }
}
