//! Persisted user settings.
//!
//! A flat JSON object of integer values, e.g. `{"call_recording_format": 1}`.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use call_recorder_core::RecorderError;

use crate::file_stamp::FileStamp;

/// Recording format selector: `0` for AMR-WB, anything else for MPEG-4.
pub const CALL_RECORDING_FORMAT: &str = "call_recording_format";

pub struct SettingsStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, i64>>,
    stamp: Mutex<Option<FileStamp>>,
}

impl SettingsStore {
    /// Open the store at `path`. A missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RecorderError> {
        let path = path.into();
        let stamp = FileStamp::of(&path);
        let values = read_file(&path)?;
        Ok(Self {
            path,
            values: RwLock::new(values),
            stamp: Mutex::new(stamp),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file, picking up changes made by other processes.
    pub fn reload(&self) -> Result<(), RecorderError> {
        let stamp = FileStamp::of(&self.path);
        *self.values.write() = read_file(&self.path)?;
        *self.stamp.lock() = stamp;
        Ok(())
    }

    /// Reload only if the file changed since it was last read or written.
    /// Returns whether a reload happened.
    pub fn refresh(&self) -> Result<bool, RecorderError> {
        if FileStamp::of(&self.path) == *self.stamp.lock() {
            return Ok(false);
        }
        self.reload()?;
        Ok(true)
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values.read().get(key).copied().unwrap_or(default)
    }

    pub fn put_int(&self, key: &str, value: i64) -> Result<(), RecorderError> {
        let mut values = self.values.write();
        let mut updated = values.clone();
        updated.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| RecorderError::SettingsError(format!("failed to create directory: {}", e)))?;
        }
        let json = serde_json::to_string_pretty(&updated)
            .map_err(|e| RecorderError::SettingsError(format!("failed to serialize settings: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| RecorderError::SettingsError(format!("failed to write settings: {}", e)))?;

        *values = updated;
        *self.stamp.lock() = FileStamp::of(&self.path);
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<BTreeMap<String, i64>, RecorderError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => {
            return Err(RecorderError::SettingsError(format!(
                "failed to read settings: {}",
                e
            )))
        }
    };
    serde_json::from_str(&json)
        .map_err(|e| RecorderError::SettingsError(format!("failed to parse settings: {}", e)))
}
