//! Change detection for the small files host configuration lives in.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Modification time and length of a file as last seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl FileStamp {
    /// `None` when the file does not exist or cannot be inspected.
    pub(crate) fn of(path: &Path) -> Option<Self> {
        let metadata = fs::metadata(path).ok()?;
        Some(Self {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_has_no_stamp() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(FileStamp::of(&tmp.path().join("absent")).is_none());
    }

    #[test]
    fn stamp_changes_when_contents_grow() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        let before = FileStamp::of(&path).unwrap();
        assert_eq!(FileStamp::of(&path), Some(before));

        fs::write(&path, r#"{"call_recording_format": 1}"#).unwrap();
        assert_ne!(FileStamp::of(&path), Some(before));
    }
}
