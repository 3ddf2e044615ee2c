//! Persistent system property overrides.
//!
//! Stored as a `key=value` file. Blank lines and `#` comments are ignored.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use call_recorder_core::RecorderError;

use crate::file_stamp::FileStamp;

/// Overrides the build-time audio source.
pub const AUDIO_SOURCE_PROPERTY: &str = "persist.call_recording.src";

pub struct SystemProperties {
    path: Option<PathBuf>,
    values: RwLock<BTreeMap<String, String>>,
    stamp: Mutex<Option<FileStamp>>,
}

impl SystemProperties {
    /// In-memory properties, nothing persisted.
    pub fn empty() -> Self {
        Self {
            path: None,
            values: RwLock::new(BTreeMap::new()),
            stamp: Mutex::new(None),
        }
    }

    /// Load properties from `path`. A missing file is an empty set.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, RecorderError> {
        let path = path.into();
        let stamp = FileStamp::of(&path);
        let values = read_file(&path)?;
        Ok(Self {
            path: Some(path),
            values: RwLock::new(values),
            stamp: Mutex::new(stamp),
        })
    }

    pub fn reload(&self) -> Result<(), RecorderError> {
        if let Some(ref path) = self.path {
            let stamp = FileStamp::of(path);
            *self.values.write() = read_file(path)?;
            *self.stamp.lock() = stamp;
        }
        Ok(())
    }

    /// Reload only if the backing file changed since it was last read or
    /// written. Returns whether a reload happened.
    pub fn refresh(&self) -> Result<bool, RecorderError> {
        let Some(ref path) = self.path else {
            return Ok(false);
        };
        if FileStamp::of(path) == *self.stamp.lock() {
            return Ok(false);
        }
        self.reload()?;
        Ok(true)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    /// Integer value of `key`, or `default` when unset or not a number.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring non-numeric property {}={}", key, raw);
                default
            }),
            None => default,
        }
    }

    /// Set `key` and persist the whole set when file-backed.
    pub fn set(&self, key: &str, value: &str) -> Result<(), RecorderError> {
        let mut values = self.values.write();
        let mut updated = values.clone();
        updated.insert(key.to_string(), value.to_string());
        if let Some(ref path) = self.path {
            write_file(path, &updated)?;
            *self.stamp.lock() = FileStamp::of(path);
        }
        *values = updated;
        Ok(())
    }
}

fn parse(contents: &str) -> BTreeMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

fn read_file(path: &Path) -> Result<BTreeMap<String, String>, RecorderError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(parse(&contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(e) => Err(RecorderError::SettingsError(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

fn write_file(path: &Path, values: &BTreeMap<String, String>) -> Result<(), RecorderError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| RecorderError::SettingsError(format!("failed to create directory: {}", e)))?;
    }
    let contents: String = values
        .iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect();
    fs::write(path, contents)
        .map_err(|e| RecorderError::SettingsError(format!("failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_properties_skipping_comments() {
        let values = parse("# overrides\n\npersist.call_recording.src = 1\nro.build.type=user\nnot a property\n");
        assert_eq!(values.len(), 2);
        assert_eq!(values["persist.call_recording.src"], "1");
        assert_eq!(values["ro.build.type"], "user");
    }

    #[test]
    fn missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let props = SystemProperties::load(tmp.path().join("absent.prop")).unwrap();
        assert_eq!(props.get_int(AUDIO_SOURCE_PROPERTY, 4), 4);
    }

    #[test]
    fn non_numeric_value_falls_back_to_default() {
        let props = SystemProperties::empty();
        props.set(AUDIO_SOURCE_PROPERTY, "mic").unwrap();
        assert_eq!(props.get_int(AUDIO_SOURCE_PROPERTY, 4), 4);
    }

    #[test]
    fn refresh_sees_override_added_after_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("build.prop");
        let props = SystemProperties::load(&path).unwrap();
        assert!(!props.refresh().unwrap());

        fs::write(&path, "persist.call_recording.src=1\n").unwrap();
        assert!(props.refresh().unwrap());
        assert_eq!(props.get_int(AUDIO_SOURCE_PROPERTY, 4), 1);
    }

    #[test]
    fn failed_set_leaves_value_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("build.prop");
        let props = SystemProperties::load(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(props.set(AUDIO_SOURCE_PROPERTY, "7").is_err());
        assert_eq!(props.get(AUDIO_SOURCE_PROPERTY), None);
    }

    #[test]
    fn set_persists_and_reloads() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("system").join("build.prop");

        let props = SystemProperties::load(&path).unwrap();
        props.set(AUDIO_SOURCE_PROPERTY, "7").unwrap();

        let reopened = SystemProperties::load(&path).unwrap();
        assert_eq!(reopened.get_int(AUDIO_SOURCE_PROPERTY, 4), 7);

        fs::write(&path, "persist.call_recording.src=1\n").unwrap();
        reopened.reload().unwrap();
        assert_eq!(reopened.get_int(AUDIO_SOURCE_PROPERTY, 4), 1);
    }
}
