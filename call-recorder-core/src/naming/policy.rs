//! Output file naming for call recordings.
//!
//! Names look like `<number>_<yyMMdd_HHmmssSSS>.<ext>`. The fixed-width
//! timestamp keeps a directory listing in chronological order and makes two
//! recordings of the same number collide only within the same millisecond.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::models::audio_format::AudioFormat;

/// chrono pattern for `yyMMdd_HHmmssSSS`.
pub const TIMESTAMP_FORMAT: &str = "%y%m%d_%H%M%S%3f";

/// Stand-in for a missing or blank phone number.
pub const UNKNOWN_NUMBER: &str = "unknown";

/// Replace characters that cannot appear in a single path component.
///
/// The number comes from the caller, so separators must never reach the
/// file name or the recording could land outside the recordings directory.
pub fn sanitize_number(phone_number: &str) -> String {
    phone_number
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Build the file name for a recording started at `now`.
pub fn generate_filename<Tz>(phone_number: &str, now: &DateTime<Tz>, format: AudioFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let number = if phone_number.trim().is_empty() {
        UNKNOWN_NUMBER.to_string()
    } else {
        sanitize_number(phone_number)
    };
    let timestamp = now.format(TIMESTAMP_FORMAT);
    format!("{}_{}.{}", number, timestamp, format.extension())
}

/// [`generate_filename`] against the local wall clock.
pub fn generate_filename_now(phone_number: &str, format: AudioFormat) -> String {
    generate_filename(phone_number, &Local::now(), format)
}

pub fn resolve_output_path(directory: &Path, file_name: &str) -> PathBuf {
    directory.join(file_name)
}
