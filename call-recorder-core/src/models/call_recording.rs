use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one recorded call.
///
/// Created when a start is requested, before the device is confirmed
/// running, and handed back by value once the recording is stopped. The
/// file stays on disk after the value is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecording {
    phone_number: String,
    call_start_time: DateTime<Utc>,
    file_path: PathBuf,
    recording_start_time: DateTime<Utc>,
}

impl CallRecording {
    pub fn new(
        phone_number: impl Into<String>,
        call_start_time: DateTime<Utc>,
        file_path: PathBuf,
        recording_start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            call_start_time,
            file_path,
            recording_start_time,
        }
    }

    /// Number as given by the caller; may be empty when unknown.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn call_start_time(&self) -> DateTime<Utc> {
        self.call_start_time
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_path.file_name().and_then(|name| name.to_str())
    }

    pub fn recording_start_time(&self) -> DateTime<Utc> {
        self.recording_start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_for_transport() {
        let call_start = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let recording = CallRecording::new(
            "5551234",
            call_start,
            PathBuf::from("/data/CallRecordings/5551234_260314_092654000.amr"),
            call_start + chrono::Duration::seconds(1),
        );

        let json = serde_json::to_value(&recording).unwrap();
        assert_eq!(json["phoneNumber"], "5551234");
        assert_eq!(
            json["filePath"],
            "/data/CallRecordings/5551234_260314_092654000.amr"
        );

        let back: CallRecording = serde_json::from_value(json).unwrap();
        assert_eq!(back, recording);
        assert_eq!(back.file_name(), Some("5551234_260314_092654000.amr"));
    }
}
